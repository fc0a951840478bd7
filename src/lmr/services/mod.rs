mod account_store;
mod record_store;
mod store_error;
mod transaction_store;

pub use account_store::AccountStore;
pub use record_store::{Reconciled, RecordStore};
pub use store_error::StoreError;
pub use transaction_store::TransactionStore;
