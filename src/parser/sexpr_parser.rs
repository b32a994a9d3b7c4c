use super::ast::Expression;
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Token iterator over an already materialized token vector
pub type TokenIter = std::iter::Map<std::vec::IntoIter<Token>, fn(Token) -> Result<Token>>;

/// Recursive-descent parser for S-expressions
///
/// Pulls tokens one at a time from any iterator of `Result<Token>`: the lazy
/// [`SExprLexer`](crate::lexer::SExprLexer), a concurrent token stream, or a
/// vector of tokens. Lexer errors coming through the iterator are returned
/// unchanged.
pub struct SExprParser<I> {
    tokens: I,
    /// Position of the last token consumed, reported on unexpected end of input
    last_row: usize,
    last_col: usize,
}

impl SExprParser<TokenIter> {
    /// Creates a parser over a vector of tokens
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        SExprParser::new(tokens.into_iter().map(Ok as fn(Token) -> Result<Token>))
    }
}

impl<I> SExprParser<I>
where
    I: Iterator<Item = Result<Token>>,
{
    /// Creates a new S-expression parser
    pub fn new(tokens: I) -> Self {
        SExprParser {
            tokens,
            last_row: 0,
            last_col: 0,
        }
    }

    /// Parses exactly one top-level form, which must be a list
    ///
    /// Tokens after the closing paren are left in the stream.
    pub fn parse_top_level(&mut self) -> Result<Expression> {
        match self.advance()? {
            Some(token) => self.parse_form(token),
            None => Err(self.unexpected_eof("`(` at top level")),
        }
    }

    /// Parses top-level forms until the token stream closes
    pub fn parse_all(&mut self) -> Result<Vec<Expression>> {
        let mut forms = Vec::new();
        while let Some(token) = self.advance()? {
            forms.push(self.parse_form(token)?);
        }
        Ok(forms)
    }

    /// Parses a top-level form whose first token has been consumed
    fn parse_form(&mut self, first: Token) -> Result<Expression> {
        match first.kind {
            TokenKind::LeftParen => Ok(Expression::List(self.parse_list()?)),
            _ => Err(Self::unexpected(&first, "`(` at top level")),
        }
    }

    /// Parses list items up to and including the closing paren
    ///
    /// Open lists are kept on an explicit stack, so nesting depth is bounded
    /// by memory rather than by the call stack.
    fn parse_list(&mut self) -> Result<Vec<Expression>> {
        let mut open: Vec<Vec<Expression>> = Vec::new();
        let mut items = Vec::new();

        loop {
            let token = match self.advance()? {
                Some(token) => token,
                None => return Err(self.unexpected_eof("`)` to close list")),
            };

            match token.kind {
                TokenKind::RightParen => {
                    tracing::trace!(depth = open.len(), items = items.len(), "list closed");
                    match open.pop() {
                        Some(mut parent) => {
                            parent.push(Expression::List(items));
                            items = parent;
                        }
                        None => return Ok(items),
                    }
                }
                TokenKind::LeftParen => {
                    tracing::trace!(row = token.row, col = token.col, "list opened");
                    open.push(std::mem::take(&mut items));
                }
                TokenKind::Atom => items.push(Expression::Atom(token)),
                // Quote is lexed but no production accepts it yet
                TokenKind::Quote => return Err(Self::unexpected(&token, "atom, `(` or `)`")),
            }
        }
    }

    fn advance(&mut self) -> Result<Option<Token>> {
        match self.tokens.next() {
            None => Ok(None),
            Some(Err(err)) => Err(err),
            Some(Ok(token)) => {
                self.last_row = token.row;
                self.last_col = token.col;
                Ok(Some(token))
            }
        }
    }

    fn unexpected(token: &Token, expected: &str) -> Error {
        Error::UnexpectedToken {
            row: token.row,
            col: token.col,
            expected: expected.to_string(),
            found: token.describe(),
        }
    }

    fn unexpected_eof(&self, expected: &str) -> Error {
        Error::UnexpectedEof {
            row: self.last_row,
            col: self.last_col,
            expected: expected.to_string(),
        }
    }
}
