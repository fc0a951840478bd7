//! Keeps the local mirror in step with the backend after a successful write.
//!
//! Both operations only ever touch the first element carrying the identifier.
//! A miss leaves the collection untouched; the caller decides how loudly to
//! report it, since the remote write has already happened by then.

use crate::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    /// The element at this position was replaced
    Replaced(usize),
    NotFound,
}

impl Merge {
    pub fn is_replaced(&self) -> bool {
        return matches!(self, Merge::Replaced(_));
    }
}

/// Position of the first record whose identifier is `id`.
pub fn position<R: Record>(id: &R::Id, records: &[R]) -> Option<usize> {
    return records.iter().position(|record| record.id() == Some(id));
}

/// Replaces the record sharing `record`'s identifier, in place.
///
/// A record without an identifier can never match.
pub fn merge<R: Record>(record: R, records: &mut [R]) -> Merge {
    let index = match record.id().and_then(|id| position(id, records)) {
        Some(index) => index,
        None => return Merge::NotFound,
    };

    records[index] = record;

    return Merge::Replaced(index);
}

/// Removes and returns the first record with identifier `id`.
pub fn remove<R: Record>(id: &R::Id, records: &mut Vec<R>) -> Option<R> {
    let index = position(id, records)?;

    return Some(records.remove(index));
}
