use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::{
    ast::Composite,
    compiler::compile,
    error::{OptionsError, Result},
    escape::{Escaper, choose_prefix},
    extract::{check_value_markers, extract_keys, extract_values},
    filter::Filter,
    lexer::Lexer,
    parser::{DEFAULT_MAX_DEPTH, Parser},
    symbols::SymbolTable,
};

/// Characters a placeholder prefix may not contain.
static RESERVED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.\s(){}\[\]\\]").expect("reserved character pattern"));

fn is_reserved(ch: char) -> bool {
    RESERVED.is_match(ch.encode_utf8(&mut [0; 4]))
}

/// Settings for translating filter expressions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslateOptions {
    /// First candidate for the placeholder prefix
    pub prefix_seed: String,
    /// Appended to the prefix until it no longer occurs in the input
    pub prefix_marker: char,
    /// Maximum parenthesis nesting accepted
    pub max_depth: usize,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        TranslateOptions {
            prefix_seed: "@@".to_string(),
            prefix_marker: '@',
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TranslateOptions {
    pub fn with_prefix_seed(mut self, seed: impl Into<String>) -> Self {
        self.prefix_seed = seed.into();
        self
    }

    pub fn with_prefix_marker(mut self, marker: char) -> Self {
        self.prefix_marker = marker;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check that the prefix settings cannot produce a placeholder the
    /// extraction patterns or the lexer would split or match.
    pub fn validate(&self) -> std::result::Result<(), OptionsError> {
        if let Some(ch) = self.prefix_seed.chars().find(|&ch| is_reserved(ch)) {
            return Err(OptionsError::PrefixSeed {
                seed: self.prefix_seed.clone(),
                ch,
            });
        }
        if is_reserved(self.prefix_marker) {
            return Err(OptionsError::PrefixMarker(self.prefix_marker));
        }
        Ok(())
    }
}

/// Translates filter expressions with a fixed set of options.
///
/// Holds no per-expression state: each call runs in its own [`Session`], so
/// one translator can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    pub fn new(options: TranslateOptions) -> std::result::Result<Self, OptionsError> {
        options.validate()?;
        Ok(Translator { options })
    }

    /// Resolve `expression` into its element tree without compiling it.
    pub fn parse(&self, expression: &str) -> Result<Composite> {
        Session::start(expression, &self.options).parse(expression)
    }

    /// Translate `expression` into a compiled filter.
    pub fn translate(&self, expression: &str) -> Result<Filter> {
        let root = self.parse(expression)?;
        let filter = compile(&root)?;
        tracing::debug!(filter = %filter.to_document(), "compiled filter");
        Ok(filter)
    }
}

/// State of one translation: the placeholder prefix and the symbol table.
///
/// A session is built for a single expression, since the prefix is chosen
/// against that expression's text.
#[derive(Debug)]
pub struct Session {
    escaper: Escaper,
    symbols: SymbolTable,
    max_depth: usize,
}

impl Session {
    pub fn new(
        expression: &str,
        options: &TranslateOptions,
    ) -> std::result::Result<Self, OptionsError> {
        options.validate()?;
        Ok(Session::start(expression, options))
    }

    /// Build a session from options that already passed validation.
    fn start(expression: &str, options: &TranslateOptions) -> Self {
        let prefix = choose_prefix(expression, &options.prefix_seed, options.prefix_marker);
        tracing::debug!(%prefix, "chose placeholder prefix");
        Session {
            escaper: Escaper::new(prefix.clone()),
            symbols: SymbolTable::new(prefix),
            max_depth: options.max_depth,
        }
    }

    pub fn prefix(&self) -> &str {
        self.escaper.prefix()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Run escaping, extraction and group resolution over `expression`.
    ///
    /// The symbol table is cleared first, so a session may be run again.
    pub fn parse(&mut self, expression: &str) -> Result<Composite> {
        self.symbols.clear();

        let escaped = self.escaper.escape(expression)?;
        check_value_markers(&escaped)?;
        let working = extract_values(&escaped, &self.escaper, &mut self.symbols);
        let working = extract_keys(&working, &mut self.symbols)?;
        tracing::debug!(%working, bound = self.symbols.len(), "extracted values and keys");

        Parser::new(Lexer::new(&working), &mut self.symbols)?
            .with_max_depth(self.max_depth)
            .parse()
    }
}

/// Translate `expression` with default options.
///
/// # Examples
///
/// ```
/// use dbquery::translate;
///
/// let filter = translate(r#"[[year]] != {"2018"}"#).unwrap();
/// assert_eq!(filter.to_document().to_string(), r#"{"year":{"$ne":"2018"}}"#);
/// ```
pub fn translate(expression: &str) -> Result<Filter> {
    Translator::default().translate(expression)
}

/// Resolve `expression` into its element tree with default options.
pub fn parse(expression: &str) -> Result<Composite> {
    Translator::default().parse(expression)
}
