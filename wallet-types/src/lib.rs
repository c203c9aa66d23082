//! # Wallet Types
//!
//! Domain types and port traits for the wallet ledger.
//! This crate has no IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal layout:
//! - `domain/` - Pure domain types (Money, Account, Payment, Favorite)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - The closed set of ledger errors

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Account, AccountId, Favorite, FavoriteId, Money, Payment, PaymentCategory, PaymentId,
    PaymentStatus, Phone,
};
pub use error::{WalletError, WalletResult};
pub use ports::IdGenerator;
