//! S-expression parser
//!
//! Builds nested [`Expression`] lists from a token stream.

mod ast;
mod sexpr_parser;

pub use ast::Expression;
pub use sexpr_parser::{SExprParser, TokenIter};
