use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a program.
///
/// The parser does not stop at the first problem; it records an error and
/// continues best-effort, so callers receive the full list via
/// [`Parser::errors`](crate::interpreter::parser::Parser::errors).
pub enum ParseError {
    /// The token after the current one was not the kind the grammar
    /// requires at this point.
    UnexpectedToken {
        /// The kind the parser required.
        want: TokenKind,
        /// The kind it found instead.
        got: TokenKind,
    },
    /// No expression can start with the current token.
    NoPrefixFn {
        /// The kind that has no prefix parse rule.
        found: TokenKind,
    },
    /// An integer literal did not fit in a signed 64-bit integer.
    BadIntLiteral,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { want, got } => {
                write!(f, "expected next token to be {want}, got {got}")
            }
            Self::NoPrefixFn { found } => {
                write!(f, "no prefix parse function for {found} found")
            }
            Self::BadIntLiteral => write!(f, "could not parse Int as integer"),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::ParseError;
    use crate::interpreter::lexer::TokenKind;

    #[test]
    fn messages() {
        let err = ParseError::UnexpectedToken { want: TokenKind::RParen, got: TokenKind::Eof };
        assert_eq!(err.to_string(), "expected next token to be RParen, got EOF");

        let err = ParseError::NoPrefixFn { found: TokenKind::Illegal };
        assert_eq!(err.to_string(), "no prefix parse function for Illegal found");

        assert_eq!(ParseError::BadIntLiteral.to_string(), "could not parse Int as integer");
    }
}
