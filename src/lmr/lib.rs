pub mod backend;
pub mod dates;
pub mod ids;
pub mod logging;
pub mod massage;
pub mod mirror;
pub mod models;
pub mod money;
mod result;
pub mod services;

pub use backend::{Backend, BackendError, HttpBackend};
pub use logging::{Journal, MemoryLog};
pub use models::{Account, Record, Transaction};
pub use result::Result;
pub use services::{AccountStore, Reconciled, RecordStore, StoreError, TransactionStore};
