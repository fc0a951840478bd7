use crate::money::MoneyError;

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

/// A domain object mirrored from the backend, identified by an optional
/// backend-assigned identifier. No identifier, or an empty one, means "not
/// yet created".
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: Clone + PartialEq + fmt::Display + fmt::Debug + AsRef<str> + From<String> + Send + Sync;

    /// Path segment of the backend collection, e.g. `accounts` for `/accounts/`
    const RESOURCE: &'static str;

    fn id(&self) -> Option<&Self::Id>;

    fn set_id(&mut self, id: Self::Id);

    /// Recomputes derived fields after the collection changed.
    ///
    /// Runs after every fetch and every successful mutation, on a candidate
    /// collection that only replaces the mirror when this returns `Ok`.
    fn derive(_records: &mut Vec<Self>) -> Result<(), MoneyError> {
        return Ok(());
    }
}
