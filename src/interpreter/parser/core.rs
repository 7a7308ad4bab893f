use tracing::debug;

use crate::{
    error::{EvalFailure, ParseError},
    interpreter::lexer::{Token, Tokenizer},
};

pub type EvalResult<T> = Result<T, EvalFailure>;

/// Deepest parenthesized nesting accepted before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive-descent evaluator with one token of lookahead.
///
/// The parser owns its [`Tokenizer`] and pulls tokens on demand. Every grammar
/// rule returns the value it evaluates to; no tree is built.
pub struct Parser<'src> {
    pub(in crate::interpreter::parser) tokenizer: Tokenizer<'src>,
    pub(in crate::interpreter::parser) current:   Token,
    pub(in crate::interpreter::parser) position:  usize,
    pub(in crate::interpreter::parser) depth:     usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and primes the lookahead with its first
    /// token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token is invalid.
    pub fn new(source: &'src str) -> EvalResult<Self> {
        let mut tokenizer = Tokenizer::new(source);
        let current = tokenizer.next_token()?;
        let position = tokenizer.token_start();

        Ok(Self { tokenizer,
                  current,
                  position,
                  depth: 0 })
    }

    /// Consumes the lookahead token if it has the same kind as `expected` and
    /// fetches the next one.
    ///
    /// This is the only place parser state changes.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the lookahead is of a different kind.
    /// - Propagates lexical errors from fetching the next token.
    pub(in crate::interpreter::parser) fn consume(&mut self, expected: Token) -> EvalResult<()> {
        if !self.current.same_kind(&expected) {
            return Err(ParseError::UnexpectedToken { expected,
                                                     found: self.current,
                                                     position: self.position }.into());
        }

        self.current = self.tokenizer.next_token()?;
        self.position = self.tokenizer.token_start();
        Ok(())
    }

    /// Parses and evaluates a complete expression.
    ///
    /// Grammar: `expression := add_sub End`
    ///
    /// # Errors
    /// - `UnexpectedTrailingToken` if input remains after the expression.
    /// - Propagates any error from the precedence levels below.
    pub fn parse_expression(&mut self) -> EvalResult<f64> {
        let value = self.parse_additive()?;

        if self.current != Token::End {
            return Err(ParseError::UnexpectedTrailingToken { found:    self.current,
                                                             position: self.position, }.into());
        }

        Ok(value)
    }
}

/// Evaluates an arithmetic expression.
///
/// A fresh tokenizer and parser are built for every call, so evaluating the
/// same text twice always gives the same outcome.
///
/// Grammar:
/// ```text
///     expression := add_sub End
///     add_sub    := mul_div (("+" | "-") mul_div)*
///     mul_div    := factor (("*" | "/") factor)*
///     factor     := Number | "(" add_sub ")" | "-" factor
/// ```
///
/// # Errors
/// Returns the first lexical, parse, or evaluation error met. No partial
/// result is produced.
///
/// # Example
/// ```
/// use reckon::interpreter::parser::core::parse_expression;
///
/// assert_eq!(parse_expression("2 + 3 * (4 - 1)").unwrap(), 11.0);
/// assert!(parse_expression("(2 + 3").is_err());
/// ```
pub fn parse_expression(source: &str) -> EvalResult<f64> {
    let outcome = Parser::new(source).and_then(|mut parser| parser.parse_expression());

    match &outcome {
        Ok(value) => debug!(source, value, "evaluated expression"),
        Err(error) => debug!(source, %error, "evaluation failed"),
    }

    outcome
}
