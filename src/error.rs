/// Lexical errors.
///
/// Raised by the tokenizer when a character cannot start any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors raised when the token stream does not fit the grammar:
/// an unexpected token where a specific one was required, a token that cannot
/// start a factor, or input left over after a complete expression.
pub mod parse_error;
/// Evaluation errors.
///
/// Errors raised while computing a value, such as division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// The single failure signal surfaced by the evaluator.
///
/// Every parsing and evaluation routine returns this type so that the first
/// error of any kind short-circuits the whole evaluation through `?`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalFailure {
    /// The tokenizer met a character it does not recognize.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream does not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression is well formed but cannot be computed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl EvalFailure {
    /// Byte offset into the source at which the failure was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position,
            Self::Parse(e) => e.position(),
            Self::Eval(e) => e.position(),
        }
    }
}
