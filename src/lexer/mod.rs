//! Lexical analysis for S-expression source
//!
//! Converts source text into tokens, either lazily with [`SExprLexer`] or on a
//! background thread with [`lex`].

mod sexpr_lexer;
#[cfg(feature = "stream")]
mod stream;
mod token;

pub use sexpr_lexer::{is_atom_char, is_atom_rune, is_space, SExprLexer};
#[cfg(feature = "stream")]
pub use stream::{lex, lex_bytes, lex_with_config, LexerConfig, TokenStream};
pub use token::{Token, TokenKind};

/// Lexes `source` into a vector of tokens without spawning a thread
pub fn tokenize(source: &str) -> crate::Result<Vec<Token>> {
    SExprLexer::new("<input>", source).scan_tokens()
}
