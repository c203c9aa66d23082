//! Account domain model.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::WalletError;

/// Sequential identifier for an Account. The ledger hands these out starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an AccountId from a raw value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Returns the id that follows this one.
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Phone number identifying the account holder.
///
/// No format validation is performed; phones only need to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Phone {
    fn from(phone: &str) -> Self {
        Self(phone.to_string())
    }
}

impl From<String> for Phone {
    fn from(phone: String) -> Self {
        Self(phone)
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A wallet account holding a balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Sequential identifier
    pub id: AccountId,
    /// Holder's phone, unique across the ledger
    pub phone: Phone,
    /// Current balance in minor units
    pub balance: Money,
}

impl Account {
    /// Creates a new account with zero balance.
    pub fn new(id: AccountId, phone: Phone) -> Self {
        Self {
            id,
            phone,
            balance: Money::zero(),
        }
    }

    /// Credits (adds) money to the account.
    ///
    /// Wraps on overflow, so a credit is always the exact inverse of a debit.
    pub fn credit(&mut self, amount: Money) {
        self.balance = self.balance.wrapping_add(amount);
    }

    /// Debits (subtracts) money from the account.
    ///
    /// Leaves the balance untouched when it is lower than `amount`.
    pub fn debit(&mut self, amount: Money) -> Result<(), WalletError> {
        if !self.has_sufficient_funds(amount) {
            return Err(WalletError::NotEnoughBalance);
        }
        self.balance = self.balance.wrapping_sub(amount);
        Ok(())
    }

    /// Checks if the account has sufficient funds for a debit.
    pub fn has_sufficient_funds(&self, amount: Money) -> bool {
        self.balance >= amount
    }
}
