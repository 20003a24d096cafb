//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use crate::boundary::BoundaryWarning;
use crate::domain::BumpKind;
use crate::error::Result;

pub mod formatter;

pub use formatter::{display_error, usage};

/// The operator's terminal: a line-oriented input and an output.
///
/// Generic so the workflow can be driven by scripted input in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Give back the output, e.g. to inspect what a test run printed
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of plain text
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn status(&mut self, message: &str) -> Result<()> {
        self.line(&formatter::status_line(message))
    }

    pub fn success(&mut self, message: &str) -> Result<()> {
        self.line(&formatter::success_line(message))
    }

    pub fn warning(&mut self, warning: &BoundaryWarning) -> Result<()> {
        self.line(&formatter::warning_line(warning))
    }

    /// Write a prompt without a newline and flush it
    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line and return it trimmed.
    ///
    /// End of input is an error: a closed stdin would otherwise spin the
    /// re-prompt loops forever.
    fn read_token(&mut self) -> Result<String> {
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            )
            .into());
        }
        Ok(input.trim().to_string())
    }

    /// Prompts until the operator enters one of the option tokens.
    ///
    /// # Returns
    /// * `Ok(BumpKind)` - The first recognized token
    /// * `Err` - If input closes or cannot be read
    pub fn select_bump_kind(&mut self) -> Result<BumpKind> {
        loop {
            self.prompt("Option: ")?;
            let token = self.read_token()?;

            if let Some(kind) = BumpKind::from_token(&token) {
                return Ok(kind);
            }

            tracing::debug!(token = %token, "rejected option token");
            self.line("Invalid option, please try again")?;
        }
    }

    /// Asks the operator to confirm the proposed tag with `y` or `n`.
    ///
    /// Any other answer repeats the question.
    ///
    /// # Returns
    /// * `Ok(true)` - On `y`
    /// * `Ok(false)` - On `n`
    /// * `Err` - If input closes or cannot be read
    pub fn confirm_tag(
        &mut self,
        current: &str,
        next: &str,
        remote: &str,
        description: &str,
    ) -> Result<bool> {
        self.prompt(&formatter::confirmation_prompt(
            current,
            next,
            remote,
            description,
        ))?;

        loop {
            match self.read_token()?.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.prompt("Invalid input. Please enter y or n: ")?,
            }
        }
    }
}
