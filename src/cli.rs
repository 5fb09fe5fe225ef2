//! Scenario-evaluation CLI: reads a placement scenario, runs one pass, and
//! prints the result record as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::scenario::parse_scenario;

#[derive(Parser, Debug)]
#[command(name = "layerpos", version, about = "Evaluate layer placement scenarios")]
pub struct Args {
    /// Scenario file (.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Pretty-print the result JSON
    #[arg(long = "pretty")]
    pub pretty: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let source = read_input(args.input.as_deref())?;
    let scenario = parse_scenario(&source).context("invalid scenario")?;
    let result = scenario.evaluate();

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    match &args.output {
        Some(path) => std::fs::write(path, json.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        None => Ok(read_stdin()?),
        Some(path) if path.as_os_str() == "-" => Ok(read_stdin()?),
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

fn read_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
