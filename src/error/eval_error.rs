#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while computing a value.
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    #[error("Division by zero at position {position}.")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
}

impl EvalError {
    /// Byte offset of the operator that failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } => *position,
        }
    }
}
