//! Extraction of `{value}` and `[[key]]` spans.
//!
//! Both passes cut matching spans out of the working string, bind the element
//! they describe in the symbol table, and splice the placeholder back in. All
//! text between spans is copied through untouched.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    ast::Element,
    error::{QueryError, Result},
    escape::Escaper,
    symbols::SymbolTable,
};

static NESTED_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\w*\{").expect("nested value pattern"));
static VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}]*\}").expect("value pattern"));
static KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*\[\s*([\w.]+)\s*\]\s*\]").expect("key pattern"));
static OPEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*\w+\s*\[").expect("open bracket run pattern"));
static CLOSE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\s*\w+\s*\]").expect("close bracket run pattern"));

/// Reject value markers opened inside another value, like `{a{`.
///
/// Runs on the escaped input, so `\{` inside a value is never mistaken for a
/// nested marker.
pub fn check_value_markers(escaped: &str) -> Result<()> {
    if let Some(m) = NESTED_VALUE.find(escaped) {
        return Err(QueryError::InvalidSyntax(format!("nested value marker `{}`", m.as_str())));
    }
    Ok(())
}

/// Replace every `{...}` span of the escaped input with a placeholder bound
/// to a [`Element::Value`].
///
/// The value text is unescaped before binding, so it matches what the user
/// wrote between the braces. Escaped markers outside any value are restored
/// too and later rejected as stray markers.
pub fn extract_values(escaped: &str, escaper: &Escaper, symbols: &mut SymbolTable) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut last = 0;

    for m in VALUE.find_iter(escaped) {
        out.push_str(&escaper.unescape(&escaped[last..m.start()]));
        let inner = &m.as_str()[1..m.as_str().len() - 1];
        let placeholder = symbols.bind(Element::Value(escaper.unescape(inner)));
        out.push_str(&placeholder);
        last = m.end();
    }
    out.push_str(&escaper.unescape(&escaped[last..]));
    out
}

/// Reject a word squeezed between two opening or two closing brackets,
/// like `[ x [` or `] x ]`.
pub fn check_key_markers(input: &str) -> Result<()> {
    if let Some(m) = OPEN_RUN.find(input) {
        return Err(QueryError::InvalidSyntax(format!(
            "text between two opening brackets `{}`",
            m.as_str()
        )));
    }
    if let Some(m) = CLOSE_RUN.find(input) {
        return Err(QueryError::InvalidSyntax(format!(
            "text between two closing brackets `{}`",
            m.as_str()
        )));
    }
    Ok(())
}

/// Replace every `[[name]]` span with a placeholder bound to a
/// [`Element::Key`].
pub fn extract_keys(input: &str, symbols: &mut SymbolTable) -> Result<String> {
    check_key_markers(input)?;

    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for caps in KEY.captures_iter(input) {
        let (Some(span), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&input[last..span.start()]);
        let placeholder = symbols.bind(Element::Key(name.as_str().to_string()));
        out.push_str(&placeholder);
        last = span.end();
    }
    out.push_str(&input[last..]);
    Ok(out)
}
