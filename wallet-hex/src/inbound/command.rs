//! Command grammar.

use clap::{Parser, Subcommand};

use wallet_types::{AccountId, WalletError};

/// Errors surfaced by the command adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("invalid command: {0}")]
    Parse(String),

    #[error(transparent)]
    Wallet(#[from] WalletError),
}

impl From<clap::Error> for CommandError {
    fn from(err: clap::Error) -> Self {
        // Clap renders usage help after the first line; keep only the message.
        let rendered = err.to_string();
        let message = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        CommandError::Parse(message)
    }
}

#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

/// A single ledger command.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Register a new account
    Register {
        #[arg(allow_hyphen_values = true)]
        phone: String,
    },
    /// Deposit funds into an account
    Deposit {
        account: AccountId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Pay from an account
    Pay {
        account: AccountId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        #[arg(allow_hyphen_values = true)]
        category: String,
    },
    /// Show an account
    Account { id: AccountId },
    /// Show a payment
    Payment { id: String },
    /// Show a favorite
    Favorite { id: String },
    /// Reject a payment and refund the account
    Reject { payment: String },
    /// Pay again with the same account, amount and category
    Repeat { payment: String },
    /// Save a payment as a named favorite
    SaveFavorite {
        payment: String,
        #[arg(
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        name: Vec<String>,
    },
    /// Pay using a favorite
    PayFavorite { favorite: String },
}

impl Command {
    /// Parses one command line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let parsed = CommandLine::try_parse_from(line.split_whitespace())?;
        Ok(Some(parsed.command))
    }
}
