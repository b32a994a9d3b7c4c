use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Exact source text the token covers
    pub text: String,
    /// Line of the token's first character (0-indexed)
    pub row: usize,
    /// Column of the token's first character (1-indexed, counted in chars)
    pub col: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, text: impl Into<String>, row: usize, col: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            row,
            col,
        }
    }

    /// Human-readable description used in syntax errors
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Atom => format!("atom `{}`", self.text),
            _ => self.kind.to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// All token types the reader produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Quote (')
    Quote,
    /// Run of atom characters
    Atom,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::LeftParen => f.write_str("`(`"),
            TokenKind::RightParen => f.write_str("`)`"),
            TokenKind::Quote => f.write_str("`'`"),
            TokenKind::Atom => f.write_str("atom"),
        }
    }
}
