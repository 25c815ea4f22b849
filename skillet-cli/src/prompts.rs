//! Retry-until-valid prompt helpers.
//!
//! Every helper loops until the response passes validation, reporting the
//! problem and asking again; no input error ever aborts the session.
//! Generic over the reader/writer pair so tests drive the prompts with
//! in-memory buffers instead of a terminal.

use std::io::{self, BufRead, Write};

use skillet_core::{compatible, convert, ParseError, Quantity};
use tracing::debug;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Print the question without a trailing newline and read one line.
    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Re-ask until the response is non-empty.
    pub fn not_blank(&mut self, question: &str) -> io::Result<String> {
        loop {
            let response = self.ask(question)?;
            if !response.is_empty() {
                return Ok(response);
            }
            self.say("Sorry, this can't be blank.")?;
        }
    }

    /// Accepts yes / no / y / n, case-insensitively.
    pub fn yes_no(&mut self, question: &str) -> io::Result<bool> {
        loop {
            let response = self.ask(question)?.to_lowercase();
            match response.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer yes / no (y / n).")?,
            }
        }
    }

    /// Whole number greater than zero (servings).
    pub fn positive_int(&mut self, question: &str) -> io::Result<u32> {
        loop {
            let response = self.ask(question)?;
            match response.parse::<u32>() {
                Ok(n) if n > 0 => return Ok(n),
                _ => {
                    debug!(%response, "rejected servings input");
                    self.say("Please enter an integer more than 0.")?;
                }
            }
        }
    }

    /// Positive price. A leading dollar sign is accepted and stripped.
    pub fn price(&mut self, question: &str) -> io::Result<f64> {
        loop {
            let response = self.ask(question)?;
            let bare = response.strip_prefix('$').unwrap_or(&response).trim();
            match bare.parse::<f64>() {
                Ok(price) if price > 0.0 => return Ok(price),
                _ => {
                    debug!(%response, "rejected price input");
                    self.say("Please enter a number more than 0.")?;
                }
            }
        }
    }

    /// An amount with optional unit, e.g. "250g", "2.5 cups" or "4".
    pub fn quantity(&mut self, question: &str) -> io::Result<Quantity> {
        loop {
            let response = self.ask(question)?;
            match Quantity::parse(&response) {
                Ok(quantity) => return Ok(quantity),
                Err(error) => {
                    debug!(%response, %error, "rejected amount input");
                    self.say(&parse_error_message(&error))?;
                }
            }
        }
    }

    /// The bought amount: must be unit-compatible with `used` and, once
    /// converted into the used unit, at least as large.
    pub fn bought_quantity(&mut self, question: &str, used: &Quantity) -> io::Result<Quantity> {
        loop {
            let bought = self.quantity(question)?;

            if !compatible(used.unit, bought.unit) {
                self.say(&format!(
                    "The units are not compatible, please use units with the base unit [ {} ].",
                    used.unit.dimension()
                ))?;
                continue;
            }

            if convert(bought.magnitude, bought.unit, used.unit) < used.magnitude {
                self.say("The amount bought can not be less than the amount used!")?;
                continue;
            }

            return Ok(bought);
        }
    }
}

fn parse_error_message(error: &ParseError) -> String {
    match error {
        ParseError::Blank | ParseError::Malformed => {
            "Please enter a valid amount (e.g. 100kg, 20 millilitres or just 4).".to_string()
        }
        ParseError::ZeroOrNegative => "Please enter a number higher than 0.".to_string(),
        ParseError::UnrecognizedUnit(token) => format!(
            "Invalid unit \"{token}\"! Valid units are \
             mass (kg, g) and volume (l, ml, tsp, tbsp, cups)."
        ),
    }
}
