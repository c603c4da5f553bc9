// src/cli.rs

//! Command-line front end over the comparison protocol.
//!
//! ```text
//! ntuple equals <a> <b> [--tolerance T | --approx] [--index I]
//! ntuple finite <a> [--index I]
//! ntuple zero   <a> [--tolerance T | --approx] [--index I]
//! ```
//!
//! Tuples are JSON arrays of numbers, or `null` for an absent operand.

use anyhow::{bail, ensure, Context, Result};
use log::debug;

use crate::compare::{
    equals, equals_at, equals_at_within, equals_within, is_finite, is_finite_at, is_zero,
    is_zero_at, is_zero_at_within, is_zero_within,
};
use crate::config::Config;

pub const USAGE: &str = "usage: ntuple <equals A B | finite A | zero A> \
                         [--tolerance T | --approx] [--index I]";

/// How approximate a comparison should be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precision {
    Exact,
    /// Explicit tolerance from the command line.
    Within(f64),
    /// The configured tolerance.
    Configured,
}

/// Which operation to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Equals {
        a: Option<Vec<f64>>,
        b: Option<Vec<f64>>,
    },
    Finite {
        a: Vec<f64>,
    },
    Zero {
        a: Vec<f64>,
    },
}

/// A fully parsed invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub operation: Operation,
    pub precision: Precision,
    pub index: Option<usize>,
}

fn parse_tuple(arg: &str) -> Result<Option<Vec<f64>>> {
    serde_json::from_str(arg)
        .with_context(|| format!("Expected a JSON array of numbers or null, got '{}'", arg))
}

fn parse_present(arg: &str) -> Result<Vec<f64>> {
    match parse_tuple(arg)? {
        Some(tuple) => Ok(tuple),
        None => bail!("This operation needs a tuple, got null"),
    }
}

impl Command {
    /// Parses the arguments that follow the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positional = Vec::new();
        let mut precision = Precision::Exact;
        let mut index = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--tolerance" | "-t" => {
                    ensure!(precision == Precision::Exact, "Tolerance given more than once");
                    let value = args.next().context("--tolerance needs a value")?;
                    let value: f64 = value
                        .as_ref()
                        .parse()
                        .with_context(|| format!("Invalid tolerance '{}'", value.as_ref()))?;
                    ensure!(value >= 0.0, "Tolerance must be non-negative (got {})", value);
                    precision = Precision::Within(value);
                }
                "--approx" => {
                    ensure!(precision == Precision::Exact, "Tolerance given more than once");
                    precision = Precision::Configured;
                }
                "--index" | "-i" => {
                    ensure!(index.is_none(), "Index given more than once");
                    let value = args.next().context("--index needs a value")?;
                    index = Some(
                        value
                            .as_ref()
                            .parse()
                            .with_context(|| format!("Invalid index '{}'", value.as_ref()))?,
                    );
                }
                other => positional.push(other.to_string()),
            }
        }

        let operation = match positional.as_slice() {
            [op, a, b] if op == "equals" => Operation::Equals {
                a: parse_tuple(a)?,
                b: parse_tuple(b)?,
            },
            [op, a] if op == "finite" => {
                ensure!(
                    precision == Precision::Exact,
                    "finite does not take a tolerance"
                );
                Operation::Finite {
                    a: parse_present(a)?,
                }
            }
            [op, a] if op == "zero" => Operation::Zero {
                a: parse_present(a)?,
            },
            _ => bail!("{}", USAGE),
        };

        Ok(Command {
            operation,
            precision,
            index,
        })
    }

    /// Runs the command. Index errors propagate.
    pub fn run(&self, config: &Config) -> Result<bool> {
        debug!("Running {:?}", self);
        let result = match &self.operation {
            Operation::Equals { a, b } => {
                let (a, b) = (a.as_ref(), b.as_ref());
                let tolerance = match self.precision {
                    Precision::Exact => None,
                    Precision::Within(t) => Some(t),
                    Precision::Configured => Some(config.tolerance.default),
                };
                match (self.index, tolerance) {
                    (None, None) => equals(a, b),
                    (None, Some(t)) => equals_within(t, a, b),
                    (Some(i), None) => equals_at(i, a, b)?,
                    (Some(i), Some(t)) => equals_at_within(t, i, a, b)?,
                }
            }
            Operation::Finite { a } => match self.index {
                None => is_finite(a),
                Some(i) => is_finite_at(i, a)?,
            },
            Operation::Zero { a } => {
                let tolerance = match self.precision {
                    Precision::Exact => None,
                    Precision::Within(t) => Some(t),
                    Precision::Configured => Some(config.tolerance.zero),
                };
                match (self.index, tolerance) {
                    (None, None) => is_zero(a),
                    (None, Some(t)) => is_zero_within(t, a),
                    (Some(i), None) => is_zero_at(i, a)?,
                    (Some(i), Some(t)) => is_zero_at_within(t, i, a)?,
                }
            }
        };
        Ok(result)
    }
}
