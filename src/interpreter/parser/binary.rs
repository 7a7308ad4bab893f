use crate::{
    error::EvalError,
    interpreter::{
        lexer::Token,
        parser::core::{EvalResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// # Returns
    /// The accumulated value of all terms.
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> EvalResult<f64> {
        let mut result = self.parse_multiplicative()?;
        loop {
            match self.current {
                Token::Plus => {
                    self.consume(Token::Plus)?;
                    result += self.parse_multiplicative()?;
                },
                Token::Minus => {
                    self.consume(Token::Minus)?;
                    result -= self.parse_multiplicative()?;
                },
                _ => break,
            }
        }
        Ok(result)
    }

    /// Parses multiplication and division.
    ///
    /// Handles left-associative binary operators: `*` and `/`.
    ///
    /// The rule is: `multiplicative := factor (("*" | "/") factor)*`
    ///
    /// # Errors
    /// - `DivisionByZero` if a divisor evaluates to zero. The divisor is fully
    ///   evaluated before the check.
    pub(in crate::interpreter::parser) fn parse_multiplicative(&mut self) -> EvalResult<f64> {
        let mut result = self.parse_factor()?;
        loop {
            match self.current {
                Token::Star => {
                    self.consume(Token::Star)?;
                    result *= self.parse_factor()?;
                },
                Token::Slash => {
                    let position = self.position;
                    self.consume(Token::Slash)?;
                    let divisor = self.parse_factor()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero { position }.into());
                    }
                    result /= divisor;
                },
                _ => break,
            }
        }
        Ok(result)
    }
}
