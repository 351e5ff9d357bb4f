use crate::ast::Aggregator;

/// Errors produced while translating a filter expression.
///
/// Every stage of the pipeline reports through this type. Translation stops
/// at the first error and never returns a partial filter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The placeholder prefix already occurs in the text being escaped
    #[error("placeholder prefix `{prefix}` already occurs in the input: {input}")]
    PrefixCollision { prefix: String, input: String },

    /// Nested value markers, malformed bracket runs, stray markers or
    /// unbalanced parentheses
    #[error("invalid syntax: {0}")]
    InvalidSyntax(String),

    /// A bare token that is neither a comparison operator nor an aggregator
    #[error("invalid operator or aggregator `{0}`")]
    InvalidOperatorOrAggregator(String),

    /// `AND` and `OR` used side by side in one group
    #[error("group mixes aggregators {first} and {second}")]
    MixedAggregatorInGroup { first: Aggregator, second: Aggregator },

    /// More than one comparison operator in one group
    #[error("group contains more than one operator: {0}")]
    MultipleOperatorsInGroup(String),

    /// A group that is neither a comparison leaf nor a boolean branch
    #[error("invalid group syntax: {0}")]
    InvalidGroupSyntax(String),

    /// Resolution did not end in exactly one root group
    #[error("incomplete expression: {0}")]
    IncompleteExpression(String),
}

pub type Result<T> = std::result::Result<T, QueryError>;

/// Rejected [`TranslateOptions`](crate::TranslateOptions).
///
/// Placeholders and escape tokens are built from the prefix, so it may not
/// contain anything the extraction patterns or the lexer react to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("prefix seed `{seed}` contains reserved character `{ch}`")]
    PrefixSeed { seed: String, ch: char },

    #[error("prefix marker `{0}` is a reserved character")]
    PrefixMarker(char),
}
