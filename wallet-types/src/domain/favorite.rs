//! Favorite payment template.

use serde::{Deserialize, Serialize};

use super::account::AccountId;
use super::money::Money;
use super::payment::{Payment, PaymentCategory};

/// Unique identifier for a Favorite, produced by an `IdGenerator`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteId(String);

impl FavoriteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FavoriteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for FavoriteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named template for repeating a past payment.
///
/// Amount and category are copied out of the source payment when the
/// favorite is created; later changes to that payment do not reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub account_id: AccountId,
    pub name: String,
    pub amount: Money,
    pub category: PaymentCategory,
}

impl Favorite {
    /// Snapshots `payment` into a new favorite.
    pub fn from_payment(id: FavoriteId, payment: &Payment, name: String) -> Self {
        Self {
            id,
            account_id: payment.account_id,
            name,
            amount: payment.amount,
            category: payment.category.clone(),
        }
    }
}
