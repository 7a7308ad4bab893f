/// An input character that does not start whitespace, a digit, or one of the
/// recognized operators and parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid character '{character}' at position {position}.")]
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// Byte offset of the character in the source.
    pub position:  usize,
}
