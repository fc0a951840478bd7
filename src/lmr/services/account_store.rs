use super::{Reconciled, RecordStore, StoreError};

use crate::backend::Backend;
use crate::ids::AccountId;
use crate::logging::Journal;
use crate::{money, Account, Record};

use rust_decimal::Decimal;

/// Account mirror plus the running total across all accounts.
///
/// The total is rounded to cents (half away from zero) and recomputed after
/// every fetch and every successful mutation.
#[derive(Debug)]
pub struct AccountStore<B: Backend<Account>> {
    store: RecordStore<Account, B>,
    total: Decimal,
}

impl<B: Backend<Account>> AccountStore<B> {
    pub async fn load(backend: B, log: Journal) -> Result<Self, StoreError> {
        let store = RecordStore::load(backend, log).await?;

        let mut accounts = Self {
            store,
            total: Decimal::ZERO,
        };
        accounts.determine_total()?;

        return Ok(accounts);
    }

    pub async fn refresh(&mut self) -> Result<usize, StoreError> {
        let count = self.store.refresh().await?;
        self.determine_total()?;

        return Ok(count);
    }

    pub async fn save(&mut self, account: Account) -> Result<Reconciled<Account>, StoreError> {
        let saved = self.store.save(account).await?;
        self.determine_total()?;

        return Ok(saved);
    }

    pub async fn delete(&mut self, id: &AccountId) -> Result<Reconciled<Account>, StoreError> {
        let deleted = self.store.delete(id).await?;
        self.determine_total()?;

        return Ok(deleted);
    }

    pub fn accounts(&self) -> &[Account] {
        return self.store.records();
    }

    pub fn find(&self, id: &AccountId) -> Option<&Account> {
        return self.store.find(id);
    }

    pub fn len(&self) -> usize {
        return self.store.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.store.is_empty();
    }

    pub fn total(&self) -> Decimal {
        return self.total;
    }

    /// Total as shown to users, e.g. `"12.01"`
    pub fn total_display(&self) -> String {
        return self.total.to_string();
    }

    fn determine_total(&mut self) -> Result<(), StoreError> {
        self.total = money::total(self.accounts().iter().map(|account| account.amount))
            .map_err(|e| StoreError::Derive(Account::RESOURCE, e))?;

        return Ok(());
    }
}
