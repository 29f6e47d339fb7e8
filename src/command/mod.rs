//! Line-oriented command language.
//!
//! Each input line holds one command:
//!
//! ```text
//! @addPages myPage UofA csDept
//! @addLinks myPage UofA csDept
//! @isConnected myPage csDept
//! ```
//!
//! The keyword ends at the first space, tab or newline. Arguments after
//! it are separated by spaces; any other whitespace inside an argument
//! is removed, and empty arguments are dropped.

pub mod interpreter;

pub use interpreter::{Interpreter, RunReport};

use std::fmt;

use crate::error::{LinkerError, Result};

pub const ADD_PAGES: &str = "@addPages";
pub const ADD_LINKS: &str = "@addLinks";
pub const IS_CONNECTED: &str = "@isConnected";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add each page in order. May be empty.
    AddPages(Vec<String>),
    /// Link `source` to every destination in order.
    AddLinks { source: String, dests: Vec<String> },
    /// Ask whether `to` is reachable from `from`.
    IsConnected { from: String, to: String },
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::AddPages(_) => ADD_PAGES,
            Command::AddLinks { .. } => ADD_LINKS,
            Command::IsConnected { .. } => IS_CONNECTED,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AddPages(names) => write!(f, "{} {}", ADD_PAGES, names.join(" ")),
            Command::AddLinks { source, dests } => {
                write!(f, "{} {} {}", ADD_LINKS, source, dests.join(" "))
            }
            Command::IsConnected { from, to } => write!(f, "{} {} {}", IS_CONNECTED, from, to),
        }
    }
}

/// Parse one input line.
///
/// Returns `Ok(None)` for a blank line and `MalformedCommand` for an
/// unknown keyword or a wrong argument count.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim_start();
    if line.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match line.find([' ', '\t', '\n']) {
        Some(pos) => (&line[..pos], &line[pos + 1..]),
        None => (line, ""),
    };
    let keyword = strip_whitespace(keyword);
    let mut args = tokenize_args(rest);

    let command = match keyword.as_str() {
        ADD_PAGES => Command::AddPages(args),
        ADD_LINKS => {
            if args.len() < 2 {
                return Err(LinkerError::malformed(format!(
                    "{} needs a source page and at least one destination, got {} argument(s)",
                    ADD_LINKS,
                    args.len()
                )));
            }
            let source = args.remove(0);
            Command::AddLinks {
                source,
                dests: args,
            }
        }
        IS_CONNECTED => {
            if args.len() != 2 {
                return Err(LinkerError::malformed(format!(
                    "{} takes exactly 2 pages, got {}",
                    IS_CONNECTED,
                    args.len()
                )));
            }
            let to = args.pop().unwrap_or_default();
            let from = args.pop().unwrap_or_default();
            Command::IsConnected { from, to }
        }
        other => {
            return Err(LinkerError::malformed(format!(
                "invalid input: unknown keyword '{}'",
                other
            )))
        }
    };

    Ok(Some(command))
}

fn tokenize_args(rest: &str) -> Vec<String> {
    rest.split(' ')
        .map(strip_whitespace)
        .filter(|token| !token.is_empty())
        .collect()
}

fn strip_whitespace(token: &str) -> String {
    token.chars().filter(|c| !c.is_whitespace()).collect()
}
