//! Wallet Ledger Service
//!
//! Owns every account, payment and favorite and enforces the bookkeeping
//! rules between them. Contains NO infrastructure logic.

use std::collections::HashMap;

use wallet_types::{
    Account, AccountId, Favorite, FavoriteId, IdGenerator, Money, Payment, PaymentCategory,
    PaymentId, Phone, WalletError, WalletResult,
};

use crate::ids::UuidIdGenerator;

/// The ledger service.
///
/// Generic over `G: IdGenerator` - the id source is injected at construction.
/// Mutating operations take `&mut self`; callers that share the service
/// across threads must wrap it in a lock.
///
/// Every operation validates before it mutates, so a returned error means
/// nothing changed. Records are handed back as owned snapshots.
#[derive(Debug)]
pub struct WalletService<G: IdGenerator = UuidIdGenerator> {
    ids: G,
    last_account_id: AccountId,
    accounts: HashMap<AccountId, Account>,
    phones: HashMap<Phone, AccountId>,
    payments: HashMap<PaymentId, Payment>,
    favorites: HashMap<FavoriteId, Favorite>,
}

impl Default for WalletService<UuidIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletService<UuidIdGenerator> {
    /// Creates an empty ledger that assigns random UUIDs.
    pub fn new() -> Self {
        Self::with_id_generator(UuidIdGenerator)
    }
}

impl<G: IdGenerator> WalletService<G> {
    /// Creates an empty ledger using the given id generator.
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            ids,
            last_account_id: AccountId::new(0),
            accounts: HashMap::new(),
            phones: HashMap::new(),
            payments: HashMap::new(),
            favorites: HashMap::new(),
        }
    }

    /// Number of registered accounts.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Number of payments ever made, rejected ones included.
    pub fn payment_count(&self) -> usize {
        self.payments.len()
    }

    /// Number of saved favorites.
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Account Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Registers a new account with zero balance.
    ///
    /// Ids are handed out sequentially starting at 1.
    #[tracing::instrument(skip_all, fields(phone = tracing::field::Empty))]
    pub fn register_account(&mut self, phone: impl Into<Phone>) -> WalletResult<Account> {
        let phone = phone.into();
        tracing::Span::current().record("phone", tracing::field::display(&phone));
        if self.phones.contains_key(&phone) {
            tracing::warn!("phone already registered");
            return Err(WalletError::PhoneRegistered);
        }

        self.last_account_id = self.last_account_id.next();
        let account = Account::new(self.last_account_id, phone.clone());
        self.phones.insert(phone, account.id);
        self.accounts.insert(account.id, account.clone());

        tracing::info!(account_id = %account.id, "account registered");
        Ok(account)
    }

    /// Adds `amount` to the account's balance. No payment record is created.
    #[tracing::instrument(skip_all, fields(account_id = %account_id, amount = %amount))]
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> WalletResult<()> {
        if !amount.is_positive() {
            tracing::warn!("rejected non-positive deposit");
            return Err(WalletError::AmountMustBePositive);
        }

        let account = self.account_mut(account_id)?;
        account.credit(amount);

        tracing::info!(balance = %account.balance, "deposit applied");
        Ok(())
    }

    /// Gets an account by ID.
    pub fn find_account_by_id(&self, account_id: AccountId) -> WalletResult<Account> {
        self.accounts
            .get(&account_id)
            .cloned()
            .ok_or(WalletError::AccountNotFound)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Debits the account and records an in-progress payment.
    ///
    /// Nothing is debited or recorded unless the balance covers `amount`.
    #[tracing::instrument(
        skip_all,
        fields(account_id = %account_id, amount = %amount, category = tracing::field::Empty)
    )]
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: impl Into<PaymentCategory>,
    ) -> WalletResult<Payment> {
        let category = category.into();
        tracing::Span::current().record("category", tracing::field::display(&category));

        if !amount.is_positive() {
            tracing::warn!("rejected non-positive payment");
            return Err(WalletError::AmountMustBePositive);
        }

        let account = self
            .accounts
            .get_mut(&account_id)
            .ok_or(WalletError::AccountNotFound)?;
        if let Err(err) = account.debit(amount) {
            tracing::warn!(balance = %account.balance, "payment exceeds balance");
            return Err(err);
        }

        let payment = Payment::new(
            PaymentId::from(self.ids.next_id()),
            account_id,
            amount,
            category,
        );
        self.payments.insert(payment.id.clone(), payment.clone());

        tracing::info!(payment_id = %payment.id, "payment created");
        Ok(payment)
    }

    /// Gets a payment by ID.
    pub fn find_payment_by_id(&self, payment_id: &PaymentId) -> WalletResult<Payment> {
        self.payments
            .get(payment_id)
            .cloned()
            .ok_or(WalletError::PaymentNotFound)
    }

    /// Fails a payment and returns its amount to the owning account.
    ///
    /// There is no status check: rejecting the same payment twice credits
    /// the account twice.
    #[tracing::instrument(skip_all, fields(payment_id = %payment_id))]
    pub fn reject(&mut self, payment_id: &PaymentId) -> WalletResult<()> {
        let (account_id, amount) = {
            let payment = self
                .payments
                .get(payment_id)
                .ok_or(WalletError::PaymentNotFound)?;
            (payment.account_id, payment.amount)
        };
        let account = self
            .accounts
            .get_mut(&account_id)
            .ok_or(WalletError::AccountNotFound)?;
        account.credit(amount);
        let balance = account.balance;

        if let Some(payment) = self.payments.get_mut(payment_id) {
            payment.reject();
        }

        tracing::info!(account_id = %account_id, %balance, "payment rejected");
        Ok(())
    }

    /// Makes a new payment with the same account, amount and category as an
    /// existing one.
    #[tracing::instrument(skip_all, fields(payment_id = %payment_id))]
    pub fn repeat(&mut self, payment_id: &PaymentId) -> WalletResult<Payment> {
        let target = self.find_payment_by_id(payment_id)?;
        self.pay(target.account_id, target.amount, target.category)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Favorites
    // ─────────────────────────────────────────────────────────────────────────────

    /// Saves a payment as a named favorite.
    #[tracing::instrument(skip_all, fields(payment_id = %payment_id))]
    pub fn favorite_payment(
        &mut self,
        payment_id: &PaymentId,
        name: impl Into<String>,
    ) -> WalletResult<Favorite> {
        let payment = self
            .payments
            .get(payment_id)
            .ok_or(WalletError::PaymentNotFound)?;

        let favorite = Favorite::from_payment(
            FavoriteId::from(self.ids.next_id()),
            payment,
            name.into(),
        );
        self.favorites.insert(favorite.id.clone(), favorite.clone());

        tracing::info!(favorite_id = %favorite.id, name = %favorite.name, "favorite saved");
        Ok(favorite)
    }

    /// Gets a favorite by ID.
    pub fn find_favorite_by_id(&self, favorite_id: &FavoriteId) -> WalletResult<Favorite> {
        self.favorites
            .get(favorite_id)
            .cloned()
            .ok_or(WalletError::FavoriteNotFound)
    }

    /// Pays using a favorite as the template.
    #[tracing::instrument(skip_all, fields(favorite_id = %favorite_id))]
    pub fn pay_from_favorite(&mut self, favorite_id: &FavoriteId) -> WalletResult<Payment> {
        let favorite = self.find_favorite_by_id(favorite_id)?;
        self.pay(favorite.account_id, favorite.amount, favorite.category)
    }

    fn account_mut(&mut self, account_id: AccountId) -> WalletResult<&mut Account> {
        self.accounts
            .get_mut(&account_id)
            .ok_or(WalletError::AccountNotFound)
    }
}
