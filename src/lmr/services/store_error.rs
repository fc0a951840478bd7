use crate::backend::BackendError;
use crate::money::MoneyError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Derived fields (balances, totals) couldn't be computed for the records
    /// the backend handed over. The mirror keeps its previous contents.
    #[error("Couldn't derive {0}: {1}")]
    Derive(&'static str, MoneyError),
}
