use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use anyhow::Context;
use clap::Parser;
use inn_ledger::InMemoryLedger;
use tracing::Level;

mod cli;
mod commands;
mod config;
mod session;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = config::load_config(cli.config.as_deref())?;
    let ledger = InMemoryLedger::new(config);
    tracing::debug!(tax_rate = ledger.config().tax_rate, "ledger opened");

    let mut stdout = io::stdout().lock();
    let stats = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            session::Session::new(&ledger, cli.format).run(BufReader::new(file), &mut stdout)?
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            session::Session::new(&ledger, cli.format)
                .with_prompt(interactive)
                .run(stdin.lock(), &mut stdout)?
        }
    };

    if stats.failed > 0 {
        tracing::info!(failed = stats.failed, "some desk commands were refused");
    }
    Ok(())
}
