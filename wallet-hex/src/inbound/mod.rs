//! Command Inbound Adapter
//!
//! Line-oriented command interpreter that drives the ledger service.
//! One command per line, one JSON result per command.

mod command;
mod session;

pub use command::{Command, CommandError};
pub use session::{Outcome, Session, render};
