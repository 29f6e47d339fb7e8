//! Command interpreter — reads command lines, applies them to a page
//! graph, and writes results and diagnostics.
//!
//! `@isConnected` results go to the output stream as `1` or `0`; every
//! recovered error goes to the diagnostic stream as one line. Errors are
//! counted and processing moves on to the next line.

use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use super::{parse_line, Command};
use crate::config::LinkerConfig;
use crate::error::{LinkerError, Result};
use crate::graph::PageGraph;

/// Summary of a command run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Input lines read.
    pub lines: usize,
    /// Commands recognized and dispatched.
    pub commands: usize,
    /// Errors reported to the diagnostic stream.
    pub errors: usize,
    /// Whether reading stopped at the first error.
    pub stopped_early: bool,
}

impl RunReport {
    /// Process exit code for this run: 0 when no error was reported.
    pub fn exit_code(&self) -> i32 {
        if self.errors == 0 {
            0
        } else {
            1
        }
    }

    /// Fold in errors found outside the command stream (e.g. extra
    /// command-line arguments).
    pub fn add_errors(&mut self, count: usize) {
        self.errors += count;
    }
}

/// Owns the page graph and dispatches commands to it.
pub struct Interpreter {
    graph: PageGraph,
    stop_on_error: bool,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_graph(PageGraph::new())
    }

    pub fn with_graph(graph: PageGraph) -> Self {
        Self {
            graph,
            stop_on_error: false,
        }
    }

    pub fn from_config(config: &LinkerConfig) -> Self {
        Self::new().stop_on_error(config.stop_on_error)
    }

    /// Stop reading input after the first reported error.
    pub fn stop_on_error(mut self, stop: bool) -> Self {
        self.stop_on_error = stop;
        self
    }

    pub fn graph(&self) -> &PageGraph {
        &self.graph
    }

    pub fn into_graph(self) -> PageGraph {
        self.graph
    }

    /// Apply one command. Returns the recoverable errors it produced;
    /// batch commands report one error per failed name.
    ///
    /// Only a failed write to `out` is returned as `Err`.
    pub fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> Result<Vec<LinkerError>> {
        debug!(command = %command, "dispatch");

        let errors: Vec<LinkerError> = match command {
            Command::AddPages(names) => self
                .graph
                .add_pages(names.iter().map(String::as_str))
                .into_iter()
                .filter_map(|r| r.err().map(LinkerError::from))
                .collect(),
            Command::AddLinks { source, dests } => self
                .graph
                .add_links(source, dests.iter().map(String::as_str))
                .into_iter()
                .filter_map(|r| r.err().map(LinkerError::from))
                .collect(),
            Command::IsConnected { from, to } => match self.graph.is_connected(from, to) {
                Ok(connected) => {
                    writeln!(out, "{}", u8::from(connected))?;
                    Vec::new()
                }
                Err(e) => vec![e.into()],
            },
        };

        Ok(errors)
    }

    /// Run every line of `input`, writing results to `out` and one line
    /// per error to `diag`.
    ///
    /// Lines are read as bytes; invalid UTF-8 is replaced with U+FFFD
    /// rather than ending the run. Returns `Err` only for I/O failures on
    /// the streams.
    pub fn run<R, W, D>(&mut self, mut input: R, out: &mut W, diag: &mut D) -> Result<RunReport>
    where
        R: BufRead,
        W: Write,
        D: Write,
    {
        let mut report = RunReport::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            report.lines += 1;
            let line = String::from_utf8_lossy(&buf);

            let errors = match parse_line(&line) {
                Ok(Some(command)) => {
                    report.commands += 1;
                    self.execute(&command, out)?
                }
                Ok(None) => continue,
                Err(e) => vec![e],
            };

            for error in &errors {
                debug!(line = report.lines, error = %error, "command failed");
                writeln!(diag, "{}", error)?;
            }
            report.errors += errors.len();

            if self.stop_on_error && !errors.is_empty() {
                report.stopped_early = true;
                break;
            }
        }

        out.flush()?;
        info!(
            lines = report.lines,
            commands = report.commands,
            errors = report.errors,
            pages = self.graph.page_count(),
            links = self.graph.link_count(),
            "run complete"
        );
        Ok(report)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
