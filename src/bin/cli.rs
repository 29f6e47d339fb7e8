//! pagelink CLI - page link graph with reachability queries.
//!
//! Usage:
//!   pagelink commands.txt        # Run commands from a file
//!   pagelink < commands.txt      # Run commands from stdin
//!   pagelink -c cfg.toml --stats # With config and run summary

use anyhow::{Context, Result};
use clap::Parser;
use pagelink::cli::{Cli, RunSummary};
use pagelink::{Interpreter, LinkerConfig};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::{debug, info};

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match LinkerConfig::try_load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))
        {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        },
        None => LinkerConfig::default(),
    };

    // Logs go to stderr; stdout carries only query results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();

    match run(&cli, &config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, config: &LinkerConfig) -> Result<i32> {
    let mut interpreter = Interpreter::from_config(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut diag = stderr.lock();

    // Only the first input is run; the rest count as one error
    let extra_inputs = cli.inputs.len() > 1;
    if extra_inputs {
        writeln!(
            diag,
            "too many arguments: expected at most one input file, got {}",
            cli.inputs.len()
        )?;
    }

    let mut report = match cli.inputs.first() {
        Some(path) => {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    writeln!(diag, "couldn't open '{}': {}", path.display(), e)?;
                    return Ok(1);
                }
            };
            info!(input = %path.display(), "reading commands");
            interpreter.run(BufReader::new(file), &mut out, &mut diag)?
        }
        None => {
            debug!("reading commands from stdin");
            interpreter.run(io::stdin().lock(), &mut out, &mut diag)?
        }
    };

    if extra_inputs {
        report.add_errors(1);
    }

    if cli.stats {
        let summary = RunSummary::new(report, interpreter.graph().stats());
        writeln!(diag, "{}", summary.to_json()?)?;
    }

    Ok(report.exit_code())
}
