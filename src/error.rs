//! Error types for the S-expression reader

use thiserror::Error;

/// Reader errors
///
/// Every fault aborts the lex or parse that raised it; nothing is recovered
/// and no partial result is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Lex errors
    /// A character fell outside the lexer's character classification
    ///
    /// **Triggered by:** a classification bug; every `char` is whitespace,
    /// a paren, a quote or an atom character, so well-formed input never
    /// reaches this.
    #[error("Lex fault at row {row}, column {col}: unclassifiable character {found:?}")]
    LexFault {
        /// Row of the offending character (0-indexed)
        row: usize,
        /// Column of the offending character (1-indexed)
        col: usize,
        /// The character itself
        found: char,
    },

    /// Source bytes are not valid UTF-8
    #[error("Invalid UTF-8 in source at byte offset {offset}")]
    InvalidEncoding {
        /// Offset of the first byte of the invalid sequence
        offset: usize,
    },

    /// The lexer thread died before closing its stream
    #[error("Lexer for `{name}` terminated abnormally")]
    ProducerFailed {
        /// Source name given to `lex`
        name: String,
    },

    // Parse errors
    /// A token that no production accepts at this point
    ///
    /// **Triggered by:** a top level that does not start with `(`, a stray
    /// `)`, or a quote anywhere.
    /// **Example:** `)`, `atom`, `(a 'b)`
    #[error("Syntax error at row {row}, column {col}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// Row of the offending token (0-indexed)
        row: usize,
        /// Column of the offending token (1-indexed)
        col: usize,
        /// What the parser would have accepted
        expected: String,
        /// Description of the token it got
        found: String,
    },

    /// The token stream closed where a token was required
    ///
    /// **Triggered by:** empty input, or an unterminated list.
    /// **Example:** `(a (b c)`
    #[error("Unexpected end of input after row {row}, column {col}: expected {expected}")]
    UnexpectedEof {
        /// Row of the last token consumed (0 for empty input)
        row: usize,
        /// Column of the last token consumed (0 for empty input)
        col: usize,
        /// What the parser would have accepted
        expected: String,
    },
}

impl Error {
    /// Row and column the error points at, when it has one
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::LexFault { row, col, .. }
            | Error::UnexpectedToken { row, col, .. }
            | Error::UnexpectedEof { row, col, .. } => Some((*row, *col)),
            Error::InvalidEncoding { .. } | Error::ProducerFailed { .. } => None,
        }
    }

    /// True for errors raised by the lexer
    pub fn is_lex_fault(&self) -> bool {
        matches!(
            self,
            Error::LexFault { .. } | Error::InvalidEncoding { .. } | Error::ProducerFailed { .. }
        )
    }

    /// True for errors raised by the parser
    pub fn is_parse_fault(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedToken { .. } | Error::UnexpectedEof { .. }
        )
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        let err = Error::UnexpectedToken {
            row: 2,
            col: 7,
            expected: "`(`".to_string(),
            found: "`)`".to_string(),
        };
        assert_eq!(err.position(), Some((2, 7)));
        assert_eq!(Error::InvalidEncoding { offset: 3 }.position(), None);
    }

    #[test]
    fn test_classification() {
        let eof = Error::UnexpectedEof {
            row: 0,
            col: 0,
            expected: "`(`".to_string(),
        };
        assert!(eof.is_parse_fault());
        assert!(!eof.is_lex_fault());

        let fault = Error::LexFault {
            row: 0,
            col: 1,
            found: '\u{0}',
        };
        assert!(fault.is_lex_fault());
        assert!(!fault.is_parse_fault());
    }

    #[test]
    fn test_display() {
        let err = Error::UnexpectedToken {
            row: 0,
            col: 1,
            expected: "`(` at top level".to_string(),
            found: "`)`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Syntax error at row 0, column 1: expected `(` at top level, found `)`"
        );
    }
}
