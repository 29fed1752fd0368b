//! The read-eval-print loop driving a `Table`.

use crate::command::{Command, HELP};
use crate::table::Table;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop reading.
    Quit,
}

/// Applies one input line to the table and returns the text to print.
#[instrument(skip(table))]
pub fn handle(table: &mut Table, input: &str, json: bool) -> Result<(String, Flow)> {
    let command = match input.parse::<Command>() {
        Ok(command) => command,
        Err(e) => {
            debug!(error = %e, "Unparseable input");
            return Ok((e.to_string(), Flow::Continue));
        }
    };

    let view = match command {
        Command::Play { line, column } => table.play(line, column),
        Command::Reset => table.reset(),
        Command::Resize(size) => match table.resize(size) {
            Ok(view) => view,
            Err(e) => {
                warn!(error = %e, "Resize refused");
                return Ok((e.to_string(), Flow::Continue));
            }
        },
        Command::Show => table.view(),
        Command::Help => return Ok((HELP.to_string(), Flow::Continue)),
        Command::Quit => return Ok((String::new(), Flow::Quit)),
    };

    let text = if json {
        table.snapshot_json().context("Failed to serialize game state")?
    } else {
        view.to_string()
    };
    Ok((text, Flow::Continue))
}

/// Runs the loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(table: &mut Table, input: R, mut out: W, json: bool) -> Result<()> {
    writeln!(out, "{}\n", table.view())?;
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        let (text, flow) = handle(table, &line, json)?;
        if flow == Flow::Quit {
            break;
        }
        writeln!(out, "{text}\n")?;
        out.flush()?;
    }
    Ok(())
}
