use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::{
    interpreter::parser::core::parse_expression,
    util::num::{DEFAULT_PRECISION, format_general},
};

/// Greeting printed once at the start of an interactive session.
pub const BANNER: &str = concat!("Simple Arithmetic Expression Evaluator\n",
                                 "Enter an expression (e.g., 2 + 3 * (4 - 1)) or 'exit' to quit:");

/// Line that ends a session.
pub const EXIT_COMMAND: &str = "exit";

/// Settings for a read loop session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplOptions {
    /// Printed once before the first prompt.
    pub banner:       Option<String>,
    /// Printed on a fresh line before each input line is read.
    pub prompt:       Option<String>,
    /// A line equal to this (exactly, no trimming) ends the session.
    pub exit_command: String,
    /// Significant digits used when printing results.
    pub precision:    usize,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self { banner:       Some(BANNER.to_string()),
               prompt:       Some("> ".to_string()),
               exit_command: EXIT_COMMAND.to_string(),
               precision:    DEFAULT_PRECISION, }
    }
}

impl ReplOptions {
    /// Options for evaluating a file: no banner and no prompt.
    #[must_use]
    pub fn script() -> Self {
        Self { banner: None,
               prompt: None,
               ..Self::default() }
    }

    /// Replaces the number of significant digits printed for results.
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// Counts of what happened during a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines handed to the evaluator.
    pub evaluated: usize,
    /// Lines whose evaluation failed.
    pub failed:    usize,
}

/// Read-evaluate-print loop over arbitrary input and output streams.
///
/// Results go to `output` as `Result: <value>`; failures go to `errors` as
/// `Error: <message>` and the loop carries on with the next line.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use reckon::repl::{Repl, ReplOptions};
///
/// let mut output = Vec::new();
/// let mut errors = Vec::new();
/// let summary = Repl::new(Cursor::new("1 + 2\n4 / 0\nexit\n5\n"),
///                         &mut output,
///                         &mut errors,
///                         ReplOptions::script()).run()
///                                               .unwrap();
///
/// assert_eq!(summary.evaluated, 2);
/// assert_eq!(summary.failed, 1);
/// assert_eq!(String::from_utf8(output).unwrap(), "Result: 3\n");
/// assert!(String::from_utf8(errors).unwrap().starts_with("Error: Division by zero"));
/// ```
pub struct Repl<R, W, E> {
    input:   R,
    output:  W,
    errors:  E,
    options: ReplOptions,
}

impl<R: BufRead, W: Write, E: Write> Repl<R, W, E> {
    /// Creates a session reading from `input`.
    pub const fn new(input: R, output: W, errors: E, options: ReplOptions) -> Self {
        Self { input,
               output,
               errors,
               options }
    }

    /// Runs the loop until the exit command or the end of input.
    ///
    /// # Errors
    /// Returns any I/O error raised while reading input or writing output.
    /// Evaluation failures are reported to the error stream, not returned.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        if let Some(banner) = &self.options.banner {
            writeln!(self.output, "{banner}")?;
        }

        let mut summary = SessionSummary::default();
        let mut line = String::new();

        loop {
            if let Some(prompt) = &self.options.prompt {
                write!(self.output, "\n{prompt}")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }

            let text = strip_line_terminator(&line);
            if text == self.options.exit_command {
                debug!("exit command received");
                break;
            }

            summary.evaluated += 1;
            match parse_expression(text) {
                Ok(value) => {
                    writeln!(self.output,
                             "Result: {}",
                             format_general(value, self.options.precision))?;
                },
                Err(error) => {
                    summary.failed += 1;
                    debug!(position = error.position(), %error, "line failed");
                    writeln!(self.errors, "Error: {error}")?;
                },
            }
            self.output.flush()?;
        }

        info!(evaluated = summary.evaluated,
              failed = summary.failed,
              "session finished");
        Ok(summary)
    }
}

/// Removes a single trailing `\n` or `\r\n` from a line read from input.
fn strip_line_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}
