use std::io::{BufRead, Write};

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use inn_ledger::InMemoryLedger;
use tracing::debug;

use crate::cli::{split_line, DeskLine, OutputFormat};
use crate::commands::{execute, render_text, Outcome};

/// Interactive front desk over a single ledger.
///
/// Every failure on a line (bad syntax or a refused ledger operation) is
/// reported and the session moves on to the next line.
pub struct Session<'a> {
    ledger: &'a InMemoryLedger,
    format: OutputFormat,
    prompt: bool,
}

/// Counters reported when the session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub executed: usize,
    pub failed: usize,
}

impl<'a> Session<'a> {
    pub fn new(ledger: &'a InMemoryLedger, format: OutputFormat) -> Self {
        Self {
            ledger,
            format,
            prompt: false,
        }
    }

    /// Print a prompt before each line (interactive terminals only).
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        output: &mut W,
    ) -> anyhow::Result<SessionStats> {
        let mut stats = SessionStats::default();

        if self.prompt {
            self.write_prompt(output)?;
        }
        for line in input.lines() {
            let line = line.context("failed to read desk input")?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                if self.prompt {
                    self.write_prompt(output)?;
                }
                continue;
            }

            match self.handle_line(trimmed, output)? {
                LineResult::Done(Outcome::Closed) => {
                    stats.executed += 1;
                    break;
                }
                LineResult::Done(_) => stats.executed += 1,
                LineResult::Help => {}
                LineResult::Failed => stats.failed += 1,
            }
            if self.prompt {
                self.write_prompt(output)?;
            }
        }

        debug!(executed = stats.executed, failed = stats.failed, "desk session ended");
        Ok(stats)
    }

    fn handle_line<W: Write>(&self, line: &str, output: &mut W) -> anyhow::Result<LineResult> {
        let words = match split_line(line) {
            Ok(words) => words,
            Err(reason) => {
                self.write_error(output, &reason)?;
                return Ok(LineResult::Failed);
            }
        };

        let desk = match DeskLine::try_parse_from(words) {
            Ok(desk) => desk,
            Err(e) if is_help(e.kind()) => {
                writeln!(output, "{}", e.to_string().trim_end())?;
                return Ok(LineResult::Help);
            }
            Err(e) => {
                let rendered = e.to_string();
                let message = rendered
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .trim_start_matches("error: ");
                self.write_error(output, message)?;
                return Ok(LineResult::Failed);
            }
        };

        match execute(self.ledger, desk.command) {
            Ok(outcome) => {
                match self.format {
                    OutputFormat::Text => writeln!(output, "{}", render_text(&outcome))?,
                    OutputFormat::Json => writeln!(output, "{}", serde_json::to_string(&outcome)?)?,
                }
                Ok(LineResult::Done(outcome))
            }
            Err(e) => {
                debug!(error = %e, line, "desk command refused");
                self.write_error(output, &e.to_string())?;
                Ok(LineResult::Failed)
            }
        }
    }

    fn write_error<W: Write>(&self, output: &mut W, message: &str) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(output, "{} {}", "error:".red().bold(), message)?,
            OutputFormat::Json => {
                let body = serde_json::json!({ "error": message });
                writeln!(output, "{body}")?;
            }
        }
        Ok(())
    }

    fn write_prompt<W: Write>(&self, output: &mut W) -> anyhow::Result<()> {
        write!(output, "{} ", "inn>".cyan())?;
        output.flush()?;
        Ok(())
    }
}

fn is_help(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

enum LineResult {
    Done(Outcome),
    Help,
    Failed,
}
