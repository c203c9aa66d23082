//! Error types for the wallet ledger.

/// Result type used across the ledger.
pub type WalletResult<T> = Result<T, WalletError>;

/// Business rule violations reported by the ledger.
///
/// The set is closed: every failing operation maps to exactly one of these,
/// and errors from nested operations are passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("phone already registered")]
    PhoneRegistered,

    #[error("amount must be greater than zero")]
    AmountMustBePositive,

    #[error("account not found")]
    AccountNotFound,

    #[error("not enough balance")]
    NotEnoughBalance,

    #[error("payment not found")]
    PaymentNotFound,

    #[error("favorite not found")]
    FavoriteNotFound,
}
