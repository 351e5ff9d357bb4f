/// Tokens of the working string, after values and keys have been replaced
/// by placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Left parenthesis opening a group
    LParen,

    /// Right parenthesis closing a group
    RParen,

    /// Any whitespace-separated run of other characters
    ///
    /// Either a placeholder bound in the symbol table or a bare operator /
    /// aggregator spelling.
    ///
    /// # Examples
    /// ```text
    /// @@ELEM03
    /// ==
    /// AND
    /// ```
    Word(String),

    /// End of input
    Eof,
}
