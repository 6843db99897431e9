//! Per-user analysis credits.
//!
//! Credits live in an external store reached through [`CreditStore`]. The
//! [`CreditLedger`] wraps a store together with the last credit value it
//! observed, so callers hold the "current credit" explicitly instead of
//! reading it from shared global state.
//!
//! # Example
//!
//! ```
//! use contract_review::credit::{CreditLedger, InMemoryCreditStore};
//!
//! let store = InMemoryCreditStore::new();
//! store.insert("user-1", 2);
//!
//! let mut ledger = CreditLedger::new(store);
//! assert_eq!(ledger.fetch(Some("user-1")), Some(2));
//! assert_eq!(ledger.decrement(Some("user-1")).unwrap(), 1);
//! assert_eq!(ledger.current(), Some(1));
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::validate_user_id;
use crate::error::{ReviewError, Result};

/// Backing store for user credits.
///
/// Implementations wrap whatever database holds the credit table. A missing
/// row is `Ok(None)`, not an error.
pub trait CreditStore: Send + Sync {
    /// Read the credit for a user.
    fn get(&self, user_id: &str) -> Result<Option<i64>>;

    /// Overwrite the credit for a user.
    fn set(&self, user_id: &str, credit: i64) -> Result<()>;
}

/// In-memory credit store.
#[derive(Debug, Default)]
pub struct InMemoryCreditStore {
    credits: Mutex<HashMap<String, i64>>,
}

impl InMemoryCreditStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a credit row.
    pub fn insert(&self, user_id: impl Into<String>, credit: i64) {
        if let Ok(mut credits) = self.credits.lock() {
            credits.insert(user_id.into(), credit);
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, i64>>> {
        self.credits
            .lock()
            .map_err(|_| ReviewError::CreditStore("credit map lock poisoned".to_string()))
    }
}

impl CreditStore for InMemoryCreditStore {
    fn get(&self, user_id: &str) -> Result<Option<i64>> {
        Ok(self.lock()?.get(user_id).copied())
    }

    /// Updates existing rows only, like an `UPDATE ... WHERE user_id = ?`.
    fn set(&self, user_id: &str, credit: i64) -> Result<()> {
        match self.lock()?.get_mut(user_id) {
            Some(slot) => {
                *slot = credit;
                Ok(())
            }
            None => Err(ReviewError::NoCreditRecord(user_id.to_string())),
        }
    }
}

/// Credit operations for one session, with the last observed value.
#[derive(Debug)]
pub struct CreditLedger<S> {
    store: S,
    current: Option<i64>,
}

impl<S: CreditStore> CreditLedger<S> {
    /// Create a ledger with no known credit.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Last credit value fetched or written.
    #[must_use]
    pub fn current(&self) -> Option<i64> {
        self.current
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Refresh the current credit for a user.
    ///
    /// Without a user, or when the store fails or has no row, the current
    /// credit is cleared and `None` returned.
    pub fn fetch(&mut self, user_id: Option<&str>) -> Option<i64> {
        self.current = match user_id.map(validate_user_id) {
            None | Some(Err(_)) => None,
            Some(Ok(id)) => match self.store.get(id) {
                Ok(credit) => credit,
                Err(e) => {
                    tracing::warn!(user_id = id, error = %e, "Failed to fetch credit");
                    None
                }
            },
        };
        self.current
    }

    /// Use up one credit after a successful analysis.
    ///
    /// The stored value never drops below zero. The current credit is only
    /// updated once the store accepted the new value.
    pub fn decrement(&mut self, user_id: Option<&str>) -> Result<i64> {
        let id = validate_user_id(user_id.ok_or(ReviewError::MissingUserId)?)?;
        let credit = self
            .store
            .get(id)?
            .ok_or_else(|| ReviewError::NoCreditRecord(id.to_string()))?;

        let new_credit = (credit - 1).max(0);
        self.store.set(id, new_credit)?;
        self.current = Some(new_credit);

        tracing::info!(user_id = id, credit = new_credit, "Credit decremented");
        Ok(new_credit)
    }

    /// Check that a user may start an analysis.
    ///
    /// Returns the available credit, or an error when there is no row or
    /// the credit is zero or negative.
    pub fn ensure_available(&mut self, user_id: &str) -> Result<i64> {
        let user_id = validate_user_id(user_id)?;
        let credit = self
            .store
            .get(user_id)?
            .ok_or_else(|| ReviewError::NoCreditRecord(user_id.to_string()))?;
        self.current = Some(credit);

        if credit <= 0 {
            return Err(ReviewError::NoCreditsRemaining(user_id.to_string()));
        }
        Ok(credit)
    }
}
