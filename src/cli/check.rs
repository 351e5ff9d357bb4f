//! Translate a filter expression and report the compiled document

use super::CliError;
use crate::{TranslateOptions, Translator};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The filter expression to translate
    pub expression: String,
    /// Columns the filter may reference; empty means unchecked
    pub columns: Vec<String>,
    /// Only validate the expression, don't compile it
    pub syntax_only: bool,
    /// Translation settings
    pub translate: TranslateOptions,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Expression compiled to this query document
    Success(serde_json::Value),
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let expression = options.expression.trim();
    if expression.is_empty() {
        return Err(CliError::NoInput);
    }

    let translator = Translator::new(options.translate.clone())?;

    if options.syntax_only {
        translator.parse(expression)?;
        return Ok(CheckResult::SyntaxValid);
    }

    let filter = translator.translate(expression)?;
    if !options.columns.is_empty() {
        filter
            .check_columns(&options.columns)
            .map_err(CliError::ColumnNotFound)?;
    }

    Ok(CheckResult::Success(filter.to_document()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(expression: &str) -> CheckOptions {
        CheckOptions {
            expression: expression.to_string(),
            ..CheckOptions::default()
        }
    }

    #[test]
    fn test_unknown_column_is_reported() {
        let mut opts = options(r#"([[artist]] == {"Jeru"}) OR ([[price]] > {"60"})"#);
        opts.columns = vec!["artist".to_string(), "year".to_string()];
        assert!(matches!(
            execute_check(&opts),
            Err(CliError::ColumnNotFound(c)) if c == "price"
        ));
    }

    #[test]
    fn test_syntax_only_skips_compilation() {
        // Resolves fine but mixes a key into a branch, which only the
        // compiler rejects.
        let mut opts = options(r#"([[a]] == {"1"}) AND [[b]]"#);
        opts.syntax_only = true;
        assert!(matches!(execute_check(&opts), Ok(CheckResult::SyntaxValid)));

        opts.syntax_only = false;
        assert!(matches!(execute_check(&opts), Err(CliError::Query(_))));
    }

    #[test]
    fn test_reserved_prefix_is_rejected() {
        let mut opts = options(r#"[[a]] == {"1"}"#);
        opts.translate = TranslateOptions::default().with_prefix_seed("p");
        assert!(matches!(
            execute_check(&opts),
            Err(CliError::Options(crate::OptionsError::PrefixSeed { ch: 'p', .. }))
        ));
    }

    #[test]
    fn test_blank_expression_is_no_input() {
        assert!(matches!(execute_check(&options("   ")), Err(CliError::NoInput)));
    }
}
