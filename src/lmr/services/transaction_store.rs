use super::RecordStore;

use crate::backend::Backend;
use crate::Transaction;

use rust_decimal::Decimal;

/// Transaction mirror, kept in date order with running balances.
pub type TransactionStore<B> = RecordStore<Transaction, B>;

impl<B: Backend<Transaction>> RecordStore<Transaction, B> {
    pub fn transactions(&self) -> &[Transaction] {
        return self.records();
    }

    /// Balance after the latest transaction, zero when there are none.
    pub fn closing_balance(&self) -> Decimal {
        return self
            .records()
            .last()
            .map(|transaction| transaction.balance)
            .unwrap_or(Decimal::ZERO);
    }
}
