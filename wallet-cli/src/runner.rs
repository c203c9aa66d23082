//! Feeds command lines into a session and writes one JSON line per result.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::Context;

use wallet_hex::inbound::{Session, render};
use wallet_types::IdGenerator;

/// Totals for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Opens the script at `path`, or stdin when no path is given.
pub fn open_script(path: Option<&Path>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Runs every command in `input` against `session`.
///
/// With `fail_fast`, stops after the first failing command.
pub fn run<G: IdGenerator>(
    session: &mut Session<G>,
    input: impl BufRead,
    out: &mut impl Write,
    fail_fast: bool,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read command")?;
        let Some(result) = session.execute_line(&line) else {
            continue;
        };

        writeln!(out, "{}", render(&result))?;

        match result {
            Ok(_) => summary.succeeded += 1,
            Err(err) => {
                summary.failed += 1;
                tracing::warn!(line = index + 1, error = %err, "command failed");
                if fail_fast {
                    break;
                }
            }
        }
    }

    Ok(summary)
}
