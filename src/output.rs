//! JSON output for compiled filters.
//!
//! # Examples
//!
//! ```
//! use dbquery::translate;
//! use dbquery::output::{to_json, to_json_pretty};
//!
//! let filter = translate(r#"[[year]] IN {"2018", "2020"}"#).unwrap();
//!
//! assert_eq!(to_json(&filter), r#"{"year":{"$in":["2018","2020"]}}"#);
//! assert!(to_json_pretty(&filter).contains("\n"));
//! ```

use crate::filter::Filter;

/// Compact JSON, no whitespace.
pub fn to_json(filter: &Filter) -> String {
    filter.to_document().to_string()
}

/// Pretty-printed JSON with 2-space indentation.
pub fn to_json_pretty(filter: &Filter) -> String {
    format!("{:#}", filter.to_document())
}
