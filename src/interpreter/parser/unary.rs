use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{EvalResult, MAX_NESTING_DEPTH, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor, the tightest-binding level of the grammar.
    ///
    /// Negation is right-associative, so `--5` parses as `-(-5)`. A run of
    /// leading `-` is counted rather than recursed into, and the operand is
    /// negated once if the run has odd length.
    ///
    /// Grammar:
    /// ```text
    ///     factor := Number
    ///             | "(" additive ")"
    ///             | "-" factor
    /// ```
    ///
    /// # Errors
    /// - `InvalidFactor` if the lookahead is an operator, `)`, or the end of
    ///   input.
    /// - `UnexpectedToken` if a group is not closed by `)`.
    /// - `NestingTooDeep` if groups nest past [`MAX_NESTING_DEPTH`].
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> EvalResult<f64> {
        let mut negations = 0usize;
        while self.current == Token::Minus {
            self.consume(Token::Minus)?;
            negations += 1;
        }

        let value = match self.current {
            Token::Number(value) => {
                self.consume(Token::Number(value))?;
                value
            },
            Token::LParen => self.parse_grouping()?,
            found => {
                return Err(ParseError::InvalidFactor { found,
                                                       position: self.position }.into());
            },
        };

        Ok(if negations % 2 == 1 { -value } else { value })
    }

    /// Parses a parenthesized sub-expression.
    ///
    /// Grammar: `grouping := "(" additive ")"`
    fn parse_grouping(&mut self) -> EvalResult<f64> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                    position: self.position, }.into());
        }

        self.consume(Token::LParen)?;
        self.depth += 1;
        let value = self.parse_additive();
        self.depth -= 1;
        let value = value?;
        self.consume(Token::RParen)?;
        Ok(value)
    }
}
