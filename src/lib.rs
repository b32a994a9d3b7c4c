//! # sexpr-read - A streaming S-expression reader
//!
//! Reads the surface syntax of a Lisp-family language into nested lists.
//! The lexer produces tokens with row and column information, optionally on a
//! background thread, and a recursive-descent parser consumes them as they
//! arrive.
//!
//! ## Quick Start
//!
//! ```rust
//! use sexpr_read::read;
//!
//! # fn main() -> sexpr_read::Result<()> {
//! let expr = read("example", "(define (square x) (* x x))")?;
//!
//! assert_eq!(expr.len(), 3);
//! assert_eq!(expr.to_string(), "(define (square x) (* x x))");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Expression
//! ```
//!
//! - [`Lexer`] - Lazy tokenizer over borrowed source
//! - [`lex`] - Runs the lexer on its own thread and returns a [`TokenStream`]
//! - [`Parser`] - Pulls tokens from either and builds [`Expression`] trees
//!
//! ## Grammar
//!
//! A top-level form must be a list. Lists hold atoms and lists. Atoms are
//! runs of any characters other than whitespace, parentheses and `'`. The
//! quote is recognised by the lexer but rejected by the parser.
//!
//! ## Error Handling
//!
//! Malformed input is reported as an [`Error`] carrying the row, column,
//! expected and found token:
//!
//! ```rust
//! use sexpr_read::{read, Error};
//!
//! match read("example", "(a (b c)") {
//!     Err(Error::UnexpectedEof { expected, .. }) => assert_eq!(expected, "`)` to close list"),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

/// Version of the reader
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, Result};
#[cfg(feature = "stream")]
pub use lexer::{lex, lex_bytes, lex_with_config, LexerConfig, TokenStream};
pub use lexer::{tokenize, SExprLexer, Token, TokenKind};
pub use parser::{Expression, SExprParser};

/// Type alias for the lazy S-expression lexer.
pub type Lexer<'a> = SExprLexer<'a>;

/// Type alias for the S-expression parser.
pub type Parser<I> = SExprParser<I>;

/// Lexes and parses one top-level form from `input`
///
/// `name` labels the source in logs. With the `stream` feature the lexer runs
/// on its own thread while the parser consumes its output.
pub fn read(name: &str, input: &str) -> Result<Expression> {
    tracing::debug!(name, "reading top-level form");
    SExprParser::new(token_source(name, input)).parse_top_level()
}

/// Lexes and parses every top-level form in `input`
pub fn read_all(name: &str, input: &str) -> Result<Vec<Expression>> {
    tracing::debug!(name, "reading all top-level forms");
    SExprParser::new(token_source(name, input)).parse_all()
}

#[cfg(feature = "stream")]
fn token_source(name: &str, input: &str) -> TokenStream {
    lex(name, input)
}

#[cfg(not(feature = "stream"))]
fn token_source<'a>(name: &str, input: &'a str) -> SExprLexer<'a> {
    SExprLexer::new(name, input)
}
