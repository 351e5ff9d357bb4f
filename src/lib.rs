pub mod ast;
pub mod cli;
pub mod compiler;
pub mod error;
pub mod escape;
pub mod extract;
pub mod filter;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod symbols;
pub mod translator;

pub use ast::{Aggregator, Composite, Element, Operator, Token};
pub use compiler::compile;
pub use error::{OptionsError, QueryError, Result};
pub use escape::Escaper;
pub use filter::{Condition, Filter};
pub use lexer::Lexer;
pub use output::{to_json, to_json_pretty};
pub use parser::Parser;
pub use symbols::SymbolTable;
pub use translator::{Session, TranslateOptions, Translator, parse, translate};
