//! Payment domain model.

use serde::{Deserialize, Serialize};

use super::account::AccountId;
use super::money::Money;

/// Unique identifier for a Payment, produced by an `IdGenerator`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PaymentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PaymentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form payment category label ("food", "auto", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentCategory(String);

impl PaymentCategory {
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PaymentCategory {
    fn from(category: &str) -> Self {
        Self(category.to_string())
    }
}

impl From<String> for PaymentCategory {
    fn from(category: String) -> Self {
        Self(category)
    }
}

impl std::fmt::Display for PaymentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of a payment.
///
/// Payments start `InProgress` and can only move to `Fail` (by rejection).
/// `Ok` is part of the vocabulary but no ledger operation assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Ok,
    Fail,
    InProgress,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Ok => write!(f, "OK"),
            PaymentStatus::Fail => write!(f, "FAIL"),
            PaymentStatus::InProgress => write!(f, "INPROGRESS"),
        }
    }
}

/// A debit made from an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Account the money was taken from
    pub account_id: AccountId,
    /// Debited amount, always positive
    pub amount: Money,
    /// Caller-supplied category
    pub category: PaymentCategory,
    /// Current status
    pub status: PaymentStatus,
}

impl Payment {
    /// Creates a new in-progress payment.
    pub fn new(
        id: PaymentId,
        account_id: AccountId,
        amount: Money,
        category: PaymentCategory,
    ) -> Self {
        Self {
            id,
            account_id,
            amount,
            category,
            status: PaymentStatus::InProgress,
        }
    }

    /// Marks the payment as failed. Calling it on an already failed payment
    /// leaves it failed.
    pub fn reject(&mut self) {
        self.status = PaymentStatus::Fail;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_starts_in_progress() {
        let payment = Payment::new(
            PaymentId::from("p-1"),
            AccountId::new(1),
            Money::new(100),
            PaymentCategory::from("food"),
        );
        assert_eq!(payment.status, PaymentStatus::InProgress);
        assert_eq!(payment.amount.amount(), 100);
    }

    #[test]
    fn test_reject_sets_fail() {
        let mut payment = Payment::new(
            PaymentId::from("p-1"),
            AccountId::new(1),
            Money::new(100),
            PaymentCategory::from("food"),
        );
        payment.reject();
        assert_eq!(payment.status, PaymentStatus::Fail);
        payment.reject();
        assert_eq!(payment.status, PaymentStatus::Fail);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::InProgress).unwrap(),
            "\"INPROGRESS\""
        );
        assert_eq!(serde_json::to_string(&PaymentStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(serde_json::to_string(&PaymentStatus::Fail).unwrap(), "\"FAIL\"");
        assert_eq!(PaymentStatus::InProgress.to_string(), "INPROGRESS");
    }
}
