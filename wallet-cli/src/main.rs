//! Wallet CLI
//!
//! Runs a script of ledger commands against a fresh in-memory ledger:
//! - Parse flags, falling back to `WALLET_*` environment variables
//! - Initialize tracing (stderr)
//! - Build the ledger service with the configured id generator
//! - Execute commands from a file or stdin, printing JSON results to stdout

mod config;
mod runner;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use wallet_hex::inbound::Session;
use wallet_hex::{SequentialIdGenerator, UuidIdGenerator, WalletService};
use wallet_types::IdGenerator;

use config::{Config, IdStrategy};

#[derive(Parser)]
#[command(name = "wallet")]
#[command(author, version, about = "In-memory wallet ledger", long_about = None)]
struct Cli {
    /// Script with one command per line (defaults to stdin)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Stop at the first failing command and exit non-zero
    #[arg(long)]
    fail_fast: bool,

    #[command(flatten)]
    config: Config,
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    // stdout carries command results; logs go to stderr.
    let fmt = if config.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .boxed()
    };

    tracing_subscriber::registry().with(filter).with(fmt).init();
}

fn id_generator(config: &Config) -> Box<dyn IdGenerator> {
    match config.id_strategy {
        IdStrategy::Uuid => Box::new(UuidIdGenerator),
        IdStrategy::Sequential => Box::new(SequentialIdGenerator::new(config.id_prefix.clone())),
    }
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = &cli.config;

    init_tracing(config);
    tracing::debug!(?config, "configuration loaded");

    let mut session = Session::from(WalletService::with_id_generator(id_generator(config)));

    let input = runner::open_script(cli.script.as_deref())?;
    let mut stdout = io::stdout().lock();
    let summary = runner::run(&mut session, input, &mut stdout, cli.fail_fast)?;

    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        accounts = session.service().account_count(),
        payments = session.service().payment_count(),
        favorites = session.service().favorite_count(),
        "script finished"
    );

    if cli.fail_fast && summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
