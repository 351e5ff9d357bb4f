//! # Filter Expression Language - Element Tree
//!
//! This module defines the tree a filter expression is resolved into before
//! it is compiled to a query document.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Tokens of the working string produced by the lexer
//! - **[element]** - Elements (keys, values, operators, aggregators, groups)
//! - **[operators]** - Comparison operators and boolean aggregators
//!
//! ## Quick Start
//!
//! ```text
//! ([[artist]] == {"John Coltrane"}) AND ([[year]] IN {"2018", "2019"})
//! ```
//!
//! Resolves to one root group holding two leaf groups and an `AND`.
//!
//! ## Core Concepts
//!
//! ### Leaves and Branches
//!
//! A **leaf** group holds exactly one key, one operator and one value:
//!
//! ```text
//! [[year]] != {"2018"}
//! ```
//!
//! A **branch** group holds only groups joined by one kind of aggregator:
//!
//! ```text
//! (leaf) OR (leaf) OR (leaf)
//! ```
//!
//! Mixing `AND` and `OR` inside one group is rejected; use parentheses.
//!
//! ### Escaping
//!
//! Values may contain `\{`, `\}`, `\[` and `\]`. They are kept verbatim in the
//! value text and never confuse the bracket matching.
pub mod element;
pub mod operators;
pub mod tokens;

pub use element::{Composite, Element};
pub use operators::{Aggregator, Operator};
pub use tokens::Token;
