mod account_id;
mod transaction_id;

pub use account_id::AccountId;
pub use transaction_id::TransactionId;

/// An empty identifier is the same as none at all.
pub(crate) fn is_blank<T: AsRef<str>>(id: &T) -> bool {
    return id.as_ref().is_empty();
}

pub(crate) fn is_absent<T: AsRef<str>>(id: &Option<T>) -> bool {
    return id.as_ref().map_or(true, is_blank);
}
