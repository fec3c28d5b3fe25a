//! Line-oriented command driver
//!
//! ```text
//! # comment
//! values 1 3 5 7 9 11
//! sum 0 6
//! update 2 100
//! get 2
//! total
//! ```
//!
//! `values` must come first and appears exactly once. Queries produce an
//! [`Outcome`]; updates produce nothing.

use std::fmt;
use std::io::BufRead;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::config::TreeConfig;
use crate::tree::IntervalSumTree;
use crate::IntervalSumError;

/// Errors raised while parsing or executing a script
#[derive(Debug, Error)]
pub enum ScriptError {
    /// A command ran before the tree was built
    #[error("line {line}: `values` must precede any other command")]
    MissingValues {
        /// 1-based line number
        line: usize,
    },

    /// `values` appeared a second time
    #[error("line {line}: tree already built; `values` may appear only once")]
    DuplicateValues {
        /// 1-based line number
        line: usize,
    },

    /// Unrecognised keyword
    #[error("line {line}: unknown command `{keyword}`")]
    UnknownCommand {
        /// 1-based line number
        line: usize,
        /// Keyword as written
        keyword: String,
    },

    /// Wrong number of arguments
    #[error("line {line}: `{command}` takes {expected} argument(s), found {found}")]
    Arity {
        /// 1-based line number
        line: usize,
        /// Command keyword
        command: &'static str,
        /// Arguments required
        expected: usize,
        /// Arguments given
        found: usize,
    },

    /// Argument is not an integer of the required kind
    #[error("line {line}: invalid number `{token}`: {source}")]
    InvalidNumber {
        /// 1-based line number
        line: usize,
        /// Offending token
        token: String,
        /// Underlying parse failure
        source: ParseIntError,
    },

    /// Tree rejected the operation
    #[error("tree error: {0}")]
    Tree(#[from] IntervalSumError),

    /// Reading the script failed
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build the tree over these values
    Values(Vec<i64>),
    /// Query `[left, right)`
    Sum {
        /// Inclusive left bound
        left: usize,
        /// Exclusive right bound
        right: usize,
    },
    /// Point update
    Update {
        /// Element index
        index: usize,
        /// New value
        value: i64,
    },
    /// Read one element
    Get {
        /// Element index
        index: usize,
    },
    /// Sum of every element
    Total,
}

impl Command {
    /// Parse a single line; blank lines and `#` comments yield `None`.
    pub fn parse(line: usize, text: &str) -> Result<Option<Self>, ScriptError> {
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(None);
        }

        let mut tokens = text.split_whitespace();
        let keyword = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        let command = match keyword {
            "values" => Command::Values(
                args.iter()
                    .map(|token| parse_number(line, token))
                    .collect::<Result<Vec<i64>, _>>()?,
            ),
            "sum" => {
                expect_args(line, "sum", &args, 2)?;
                Command::Sum {
                    left: parse_number(line, args[0])?,
                    right: parse_number(line, args[1])?,
                }
            }
            "update" => {
                expect_args(line, "update", &args, 2)?;
                Command::Update {
                    index: parse_number(line, args[0])?,
                    value: parse_number(line, args[1])?,
                }
            }
            "get" => {
                expect_args(line, "get", &args, 1)?;
                Command::Get {
                    index: parse_number(line, args[0])?,
                }
            }
            "total" => {
                expect_args(line, "total", &args, 0)?;
                Command::Total
            }
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    keyword: other.to_string(),
                })
            }
        };

        Ok(Some(command))
    }
}

fn expect_args(
    line: usize,
    command: &'static str,
    args: &[&str],
    expected: usize,
) -> Result<(), ScriptError> {
    if args.len() != expected {
        return Err(ScriptError::Arity {
            line,
            command,
            expected,
            found: args.len(),
        });
    }
    Ok(())
}

fn parse_number<T>(line: usize, token: &str) -> Result<T, ScriptError>
where
    T: FromStr<Err = ParseIntError>,
{
    token
        .parse()
        .map_err(|source| ScriptError::InvalidNumber {
            line,
            token: token.to_string(),
            source,
        })
}

/// Result of a query command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Answer to `sum`
    Sum {
        /// Inclusive left bound
        left: usize,
        /// Exclusive right bound
        right: usize,
        /// Interval sum
        value: i128,
    },
    /// Answer to `get`
    Get {
        /// Element index
        index: usize,
        /// Element value
        value: i64,
    },
    /// Answer to `total`
    Total(i128),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sum { left, right, value } => write!(f, "sum [{}, {}) = {}", left, right, value),
            Outcome::Get { index, value } => write!(f, "get {} = {}", index, value),
            Outcome::Total(value) => write!(f, "total = {}", value),
        }
    }
}

/// Script state: the tree once `values` has run
#[derive(Debug, Default)]
pub struct Session {
    config: TreeConfig,
    tree: Option<IntervalSumTree>,
}

impl Session {
    /// Session whose tree will be built with `config`
    pub fn new(config: TreeConfig) -> Self {
        Self { config, tree: None }
    }

    /// Tree built by `values`, if any
    pub fn tree(&self) -> Option<&IntervalSumTree> {
        self.tree.as_ref()
    }

    /// Execute one command parsed from `line`.
    pub fn execute(&mut self, line: usize, command: Command) -> Result<Option<Outcome>, ScriptError> {
        debug!(line, ?command, "executing");

        let outcome = match command {
            Command::Values(values) => {
                if self.tree.is_some() {
                    return Err(ScriptError::DuplicateValues { line });
                }
                self.tree = Some(IntervalSumTree::with_config(values, self.config)?);
                None
            }
            Command::Sum { left, right } => Some(Outcome::Sum {
                left,
                right,
                value: self.built(line)?.sum(left, right),
            }),
            Command::Update { index, value } => {
                self.built(line)?.update(index, value)?;
                None
            }
            Command::Get { index } => {
                let tree = self.built(line)?;
                let value = tree.get(index).ok_or(IntervalSumError::IndexOutOfRange {
                    index,
                    len: tree.len(),
                })?;
                Some(Outcome::Get { index, value })
            }
            Command::Total => Some(Outcome::Total(self.built(line)?.total())),
        };

        Ok(outcome)
    }

    fn built(&mut self, line: usize) -> Result<&mut IntervalSumTree, ScriptError> {
        self.tree.as_mut().ok_or(ScriptError::MissingValues { line })
    }
}

/// Run every line of `reader`, collecting query outcomes in order.
pub fn run_script<R: BufRead>(reader: R, config: TreeConfig) -> Result<Vec<Outcome>, ScriptError> {
    let mut session = Session::new(config);
    let mut outcomes = Vec::new();

    for (idx, text) in reader.lines().enumerate() {
        let text = text?;
        let line = idx + 1;
        if let Some(command) = Command::parse(line, &text)? {
            if let Some(outcome) = session.execute(line, command)? {
                outcomes.push(outcome);
            }
        }
    }

    Ok(outcomes)
}
