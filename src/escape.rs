//! Protection of escaped markers inside values.
//!
//! Values may contain `\{`, `\}`, `\[` and `\]`. Before the bracket and brace
//! matching runs, each of these is replaced by a prefix-qualified token so
//! the patterns never see them; [`Escaper::unescape`] puts them back once a
//! value has been cut out.

use crate::error::{QueryError, Result};

/// Escaped sequences and the suffix of the token that stands in for them.
const ESCAPES: [(&str, &str); 4] = [("\\{", "S1"), ("\\}", "S2"), ("\\[", "S3"), ("\\]", "S4")];

/// Pick a placeholder prefix that does not occur anywhere in `input`.
///
/// Starts from `seed` and appends `marker` until the prefix is absent. Each
/// step makes the prefix longer, so the loop ends once it outgrows the input.
pub fn choose_prefix(input: &str, seed: &str, marker: char) -> String {
    let mut prefix = if seed.is_empty() {
        marker.to_string()
    } else {
        seed.to_string()
    };
    while input.contains(prefix.as_str()) {
        prefix.push(marker);
    }
    prefix
}

#[derive(Debug, Clone)]
pub struct Escaper {
    prefix: String,
}

impl Escaper {
    pub fn new(prefix: impl Into<String>) -> Self {
        Escaper {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Replace every escaped marker with its prefixed token.
    ///
    /// Fails if the prefix is already present in `input`, since the inverse
    /// would then rewrite text the user wrote.
    pub fn escape(&self, input: &str) -> Result<String> {
        if input.contains(self.prefix.as_str()) {
            return Err(QueryError::PrefixCollision {
                prefix: self.prefix.clone(),
                input: input.to_string(),
            });
        }

        let mut out = input.to_string();
        for (escaped, suffix) in ESCAPES {
            out = out.replace(escaped, &self.token(suffix));
        }
        Ok(out)
    }

    /// Exact inverse of [`Escaper::escape`].
    pub fn unescape(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (escaped, suffix) in ESCAPES {
            out = out.replace(&self.token(suffix), escaped);
        }
        out
    }

    fn token(&self, suffix: &str) -> String {
        format!("{}{}", self.prefix, suffix)
    }
}

#[test]
fn test_choose_prefix_grows_past_collisions() {
    assert_eq!(choose_prefix("plain", "@@", '@'), "@@");
    assert_eq!(choose_prefix("a@@b", "@@", '@'), "@@@");
    assert_eq!(choose_prefix("@@@ and @@", "@@", '@'), "@@@@");
}

#[test]
fn test_escape_hides_markers() {
    let escaper = Escaper::new("@@");
    let escaped = escaper.escape(r"{a\{b\}c\[d\]}").unwrap();
    assert_eq!(escaped, "{a@@S1b@@S2c@@S3d@@S4}");
}
