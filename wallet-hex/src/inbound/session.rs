//! Executes parsed commands against a ledger.

use serde::Serialize;

use wallet_types::{Account, Favorite, FavoriteId, IdGenerator, Money, Payment, PaymentId};

use super::command::{Command, CommandError};
use crate::WalletService;

/// Successful result of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Account(Account),
    Payment(Payment),
    Favorite(Favorite),
    /// The command changed state but returns no record.
    Done,
}

/// A ledger plus the command interpreter in front of it.
pub struct Session<G: IdGenerator> {
    service: WalletService<G>,
}

impl<G: IdGenerator> Session<G> {
    pub fn new(service: WalletService<G>) -> Self {
        Self { service }
    }

    /// Returns a reference to the underlying service.
    pub fn service(&self) -> &WalletService<G> {
        &self.service
    }

    /// Runs one command.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, CommandError> {
        let service = &mut self.service;
        let outcome = match command {
            Command::Register { phone } => Outcome::Account(service.register_account(phone)?),
            Command::Deposit { account, amount } => {
                service.deposit(account, Money::new(amount))?;
                Outcome::Done
            }
            Command::Pay {
                account,
                amount,
                category,
            } => Outcome::Payment(service.pay(account, Money::new(amount), category)?),
            Command::Account { id } => Outcome::Account(service.find_account_by_id(id)?),
            Command::Payment { id } => {
                Outcome::Payment(service.find_payment_by_id(&PaymentId::from(id))?)
            }
            Command::Favorite { id } => {
                Outcome::Favorite(service.find_favorite_by_id(&FavoriteId::from(id))?)
            }
            Command::Reject { payment } => {
                service.reject(&PaymentId::from(payment))?;
                Outcome::Done
            }
            Command::Repeat { payment } => {
                Outcome::Payment(service.repeat(&PaymentId::from(payment))?)
            }
            Command::SaveFavorite { payment, name } => Outcome::Favorite(
                service.favorite_payment(&PaymentId::from(payment), name.join(" "))?,
            ),
            Command::PayFavorite { favorite } => {
                Outcome::Payment(service.pay_from_favorite(&FavoriteId::from(favorite))?)
            }
        };
        Ok(outcome)
    }

    /// Parses and runs one line. Blank lines and comments yield `None`.
    pub fn execute_line(&mut self, line: &str) -> Option<Result<Outcome, CommandError>> {
        match Command::parse_line(line) {
            Ok(Some(command)) => Some(self.execute(command)),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl<G: IdGenerator> From<WalletService<G>> for Session<G> {
    fn from(service: WalletService<G>) -> Self {
        Self::new(service)
    }
}

/// Renders a command result as a single JSON line.
pub fn render(result: &Result<Outcome, CommandError>) -> String {
    let rendered = match result {
        Ok(outcome) => serde_json::to_string(outcome),
        Err(err) => serde_json::to_string(&serde_json::json!({ "error": err.to_string() })),
    };
    rendered.unwrap_or_else(|err| serde_json::json!({ "error": err.to_string() }).to_string())
}
