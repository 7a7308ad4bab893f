use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Represents all errors that can occur while parsing the token stream.
pub enum ParseError {
    /// A specific token was required but another one was found.
    #[error("Unexpected token at position {position}: expected {expected}, found {found}.")]
    UnexpectedToken {
        /// The token the grammar required.
        expected: Token,
        /// The token actually present.
        found:    Token,
        /// Byte offset of the found token.
        position: usize,
    },
    /// The current token cannot start a factor.
    #[error("Invalid factor at position {position}: found {found}.")]
    InvalidFactor {
        /// The token that was found instead of a number, `(` or `-`.
        found:    Token,
        /// Byte offset of the found token.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Extra input after expression at position {position}: found {found}.")]
    UnexpectedTrailingToken {
        /// The first token left over.
        found:    Token,
        /// Byte offset of that token.
        position: usize,
    },
    /// Parentheses nest deeper than the parser accepts.
    #[error("Parentheses nested deeper than {limit} levels at position {position}.")]
    NestingTooDeep {
        /// The deepest accepted nesting.
        limit:    usize,
        /// Byte offset of the `(` that went past the limit.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset of the token that caused the error.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::InvalidFactor { position, .. }
            | Self::UnexpectedTrailingToken { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}
