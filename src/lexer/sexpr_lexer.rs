use super::token::{Token, TokenKind};
use crate::error::{Error, Result};
use std::iter::Peekable;
use std::str::CharIndices;

/// Returns true for characters the lexer discards between tokens
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Returns true if `c` may appear inside an atom
///
/// Almost every character is an atom character. The exceptions are
/// whitespace, parentheses and the quote.
pub fn is_atom_char(c: char) -> bool {
    !is_space(c) && !matches!(c, '(' | ')' | '\'')
}

/// Like [`is_atom_char`], with end of input represented as `None`
pub fn is_atom_rune(r: Option<char>) -> bool {
    r.map_or(false, is_atom_char)
}

/// Lazy lexer for S-expression source
///
/// Produces tokens on demand as an iterator of `Result<Token>`. The iterator
/// ends at end of input and is fused after the first error.
pub struct SExprLexer<'a> {
    /// Name of the source, for diagnostics
    name: String,
    /// Source text
    source: &'a str,
    /// Cursor over `(byte offset, char)` pairs
    chars: Peekable<CharIndices<'a>>,
    /// Current row (0-indexed)
    row: usize,
    /// Chars consumed since the last newline
    column: usize,
    /// Set once the lexer has reported a fault
    failed: bool,
}

impl<'a> SExprLexer<'a> {
    /// Creates a new lexer over `source`
    pub fn new(name: impl Into<String>, source: &'a str) -> Self {
        SExprLexer {
            name: name.into(),
            source,
            chars: source.char_indices().peekable(),
            row: 0,
            column: 0,
            failed: false,
        }
    }

    /// Name the lexer was created with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lexes the remaining input into a vector, stopping at the first error
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        self.collect()
    }

    fn scan_token(&mut self) -> Option<Result<Token>> {
        loop {
            let (start, c) = self.advance()?;

            match c {
                '\n' => {
                    self.row += 1;
                    self.column = 0;
                }
                c if is_space(c) => {}

                '(' => return Some(Ok(self.single(TokenKind::LeftParen, start))),
                ')' => return Some(Ok(self.single(TokenKind::RightParen, start))),
                '\'' => return Some(Ok(self.single(TokenKind::Quote, start))),

                c if is_atom_char(c) => return Some(Ok(self.scan_atom(start, c))),

                c => {
                    return Some(Err(Error::LexFault {
                        row: self.row,
                        col: self.column,
                        found: c,
                    }))
                }
            }
        }
    }

    /// Scans an atom whose first char `first` sits at byte offset `start`
    fn scan_atom(&mut self, start: usize, first: char) -> Token {
        let col = self.column;
        let mut end = start + first.len_utf8();

        while is_atom_rune(self.peek()) {
            if let Some((offset, c)) = self.advance() {
                end = offset + c.len_utf8();
            }
        }

        Token::new(TokenKind::Atom, &self.source[start..end], self.row, col)
    }

    fn single(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, &self.source[start..start + 1], self.row, self.column)
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next()?;
        self.column += 1;
        Some(next)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }
}

impl Iterator for SExprLexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = self.scan_token()?;
        match &item {
            Ok(token) => tracing::trace!(
                kind = ?token.kind,
                row = token.row,
                col = token.col,
                "token"
            ),
            Err(_) => self.failed = true,
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        SExprLexer::new("test", source).scan_tokens().unwrap()
    }

    #[test]
    fn test_quoted_list_positions() {
        let tokens = lex_all("'(hello world)");

        let expected = vec![
            Token::new(TokenKind::Quote, "'", 0, 1),
            Token::new(TokenKind::LeftParen, "(", 0, 2),
            Token::new(TokenKind::Atom, "hello", 0, 3),
            Token::new(TokenKind::Atom, "world", 0, 9),
            Token::new(TokenKind::RightParen, ")", 0, 14),
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_rows_reset_columns() {
        let tokens = lex_all("(a\n(b))");

        assert_eq!(tokens.len(), 6);
        assert_eq!((tokens[0].row, tokens[0].col), (0, 1));
        assert_eq!((tokens[1].row, tokens[1].col), (0, 2));
        assert_eq!((tokens[2].row, tokens[2].col), (1, 1));
        assert_eq!((tokens[3].text.as_str(), tokens[3].row, tokens[3].col), ("b", 1, 2));
        assert_eq!((tokens[4].row, tokens[4].col), (1, 3));
        assert_eq!((tokens[5].row, tokens[5].col), (1, 4));
    }

    #[test]
    fn test_whitespace_is_discarded() {
        let tokens = lex_all(" \t(a\r\n  bc )");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["(", "a", "bc", ")"]);
        assert_eq!(tokens[2].row, 1);
        assert_eq!(tokens[2].col, 3);
    }

    #[test]
    fn test_atom_stops_at_delimiters() {
        let tokens = lex_all("foo'bar(baz)qux");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Atom,
                TokenKind::Quote,
                TokenKind::Atom,
                TokenKind::LeftParen,
                TokenKind::Atom,
                TokenKind::RightParen,
                TokenKind::Atom,
            ]
        );
        assert_eq!(tokens[6].text, "qux");
        assert_eq!(tokens[6].col, 13);
    }

    #[test]
    fn test_multibyte_chars_count_once() {
        let tokens = lex_all("(λx → y)");
        assert_eq!(tokens[1].text, "λx");
        assert_eq!(tokens[1].col, 2);
        assert_eq!(tokens[2].text, "→");
        assert_eq!(tokens[2].col, 5);
        assert_eq!(tokens[3].col, 7);
    }

    #[test]
    fn test_empty_input() {
        assert!(lex_all("").is_empty());
        assert!(lex_all(" \n\t ").is_empty());
    }

    #[test]
    fn test_atom_char_classification() {
        for c in [' ', '\t', '\r', '\n', '(', ')', '\''] {
            assert!(!is_atom_char(c), "{:?} should not be an atom char", c);
        }
        for c in ['a', 'Z', '0', '-', '+', '"', ';', '[', '.', 'λ', '\u{0}'] {
            assert!(is_atom_char(c), "{:?} should be an atom char", c);
        }
        assert!(!is_atom_rune(None));
        assert!(is_atom_rune(Some('a')));
    }

    #[test]
    fn test_name() {
        let lexer = SExprLexer::new("init.lisp", "()");
        assert_eq!(lexer.name(), "init.lisp");
    }
}
