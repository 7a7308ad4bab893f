use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the
/// [`Tokenizer`]. Only [`Token::Number`] carries a payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Integer literal tokens, such as `42`, held as a 64-bit float.
    Number(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input. Produced again on every request once the source is
    /// exhausted.
    End,
}

impl Token {
    /// Returns `true` if both tokens are of the same kind, ignoring payloads.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::lexer::Token;
    ///
    /// assert!(Token::Number(1.0).same_kind(&Token::Number(7.0)));
    /// assert!(!Token::Plus.same_kind(&Token::Minus));
    /// ```
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Character classes recognized by the tokenizer.
///
/// Whitespace is skipped; anything not listed here is a lexical error.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
enum RawToken {
    #[regex(r"[0-9]+", accumulate_digits)]
    Number(f64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Number(value) => Self::Number(value),
            RawToken::Plus => Self::Plus,
            RawToken::Minus => Self::Minus,
            RawToken::Star => Self::Star,
            RawToken::Slash => Self::Slash,
            RawToken::LParen => Self::LParen,
            RawToken::RParen => Self::RParen,
        }
    }
}

/// Folds a run of decimal digits into a float, one digit at a time.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The accumulated value. Runs too long for `f64` saturate to infinity.
fn accumulate_digits(lex: &logos::Lexer<RawToken>) -> f64 {
    lex.slice()
       .bytes()
       .fold(0.0, |value, digit| value * 10.0 + f64::from(digit - b'0'))
}

/// Pull-based tokenizer over a single line of input.
///
/// Each call to [`Tokenizer::next_token`] produces exactly one token and moves
/// the cursor past it. The cursor never moves backwards and never passes the
/// end of the source.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new(" 12 *(3)");
/// assert_eq!(tokenizer.next_token(), Ok(Token::Number(12.0)));
/// assert_eq!(tokenizer.next_token(), Ok(Token::Star));
/// assert_eq!(tokenizer.next_token(), Ok(Token::LParen));
/// assert_eq!(tokenizer.next_token(), Ok(Token::Number(3.0)));
/// assert_eq!(tokenizer.next_token(), Ok(Token::RParen));
/// assert_eq!(tokenizer.next_token(), Ok(Token::End));
/// assert_eq!(tokenizer.next_token(), Ok(Token::End));
/// ```
pub struct Tokenizer<'src> {
    lexer:       logos::Lexer<'src, RawToken>,
    token_start: usize,
    exhausted:   bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer with its cursor at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:       RawToken::lexer(source),
               token_start: 0,
               exhausted:   false, }
    }

    /// The text being tokenized.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.lexer.source()
    }

    /// Current cursor: the byte offset just past the last consumed character.
    #[must_use]
    pub fn position(&self) -> usize {
        if self.exhausted {
            self.source().len()
        } else {
            self.lexer.span().end
        }
    }

    /// Byte offset at which the most recently produced token starts.
    ///
    /// For [`Token::End`] this is the length of the source.
    #[must_use]
    pub const fn token_start(&self) -> usize {
        self.token_start
    }

    /// Produces the next token and advances the cursor past it.
    ///
    /// Whitespace before the token is skipped. Once the input is exhausted,
    /// every further call returns [`Token::End`].
    ///
    /// # Errors
    /// Returns a [`LexError`] if the next non-whitespace character is not a
    /// digit, an operator, or a parenthesis.
    ///
    /// # Example
    /// ```
    /// use reckon::{error::LexError, interpreter::lexer::Tokenizer};
    ///
    /// let mut tokenizer = Tokenizer::new("2 @");
    /// assert!(tokenizer.next_token().is_ok());
    /// assert_eq!(tokenizer.next_token(),
    ///            Err(LexError { character: '@',
    ///                           position:  2, }));
    /// ```
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.exhausted {
            return Ok(Token::End);
        }

        match self.lexer.next() {
            Some(Ok(raw)) => {
                self.token_start = self.lexer.span().start;
                let token = Token::from(raw);
                trace!(?token, position = self.token_start, "produced token");
                Ok(token)
            },
            Some(Err(())) => {
                let position = self.lexer.span().start;
                let character = self.source()
                                    .get(position..)
                                    .and_then(|rest| rest.chars().next())
                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                trace!(%character, position, "unrecognized character");
                Err(LexError { character, position })
            },
            None => {
                self.exhausted = true;
                self.token_start = self.source().len();
                trace!(position = self.token_start, "reached end of input");
                Ok(Token::End)
            },
        }
    }
}
