//! # Wallet Hex
//!
//! Application service and adapters for the wallet ledger.
//!
//! ## Architecture
//!
//! - `service/` - The ledger service (owns accounts, payments, favorites)
//! - `ids/` - `IdGenerator` adapters (UUID, sequential)
//! - `inbound/` - Line-oriented command adapter that drives the service
//!
//! The service is generic over `G: IdGenerator`, so tests can inject
//! deterministic ids.

pub mod ids;
pub mod inbound;
pub mod service;


pub use ids::{SequentialIdGenerator, UuidIdGenerator};
pub use service::WalletService;
