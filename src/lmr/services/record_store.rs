use super::StoreError;

use crate::backend::Backend;
use crate::logging::Journal;
use crate::mirror::{self, Merge};
use crate::Record;

/// What happened to the local mirror after a remote write went through.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciled<T> {
    /// The mirror reflects the write
    Applied(T),

    /// The backend accepted the write but the mirror couldn't take it in (no
    /// matching entry, or a create answered with an identifier already held),
    /// so the two now disagree until the next refresh
    Diverged,
}

impl<T> Reconciled<T> {
    pub fn is_applied(&self) -> bool {
        return matches!(self, Reconciled::Applied(_));
    }

    pub fn applied(self) -> Option<T> {
        return match self {
            Reconciled::Applied(value) => Some(value),
            Reconciled::Diverged => None,
        };
    }
}

/// In-memory mirror of one backend collection.
///
/// Only built through [`RecordStore::load`], which returns once the initial
/// fetch has landed, so a store in hand is always ready. Writes go to the
/// backend first; the mirror changes only after the backend accepted them and
/// the derived fields of the resulting collection could be computed.
#[derive(Debug)]
pub struct RecordStore<R: Record, B: Backend<R>> {
    backend: B,
    records: Vec<R>,
    log: Journal,
}

impl<R: Record, B: Backend<R>> RecordStore<R, B> {
    pub async fn load(backend: B, log: Journal) -> Result<Self, StoreError> {
        let mut store = Self {
            backend,
            records: Vec::new(),
            log: log.with_target(R::RESOURCE),
        };

        store.log.debug(format_args!("standing up the {} store", R::RESOURCE));
        store.refresh().await?;

        return Ok(store);
    }

    /// Replaces the mirror with a full fetch. Returns the number of records.
    pub async fn refresh(&mut self) -> Result<usize, StoreError> {
        let records = self.backend.fetch_all().await.map_err(|e| {
            self.log.error(format_args!("failed to fetch {}: {e}", R::RESOURCE));
            e
        })?;

        self.commit(records)?;

        self.log.debug(format_args!("got {} {}", self.records.len(), R::RESOURCE));

        return Ok(self.records.len());
    }

    pub fn records(&self) -> &[R] {
        return &self.records;
    }

    pub fn find(&self, id: &R::Id) -> Option<&R> {
        return mirror::position(id, &self.records).map(|idx| &self.records[idx]);
    }

    pub fn len(&self) -> usize {
        return self.records.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.records.is_empty();
    }

    /// Persists `record`: an update when it carries a non-empty identifier, a
    /// create otherwise.
    ///
    /// On success the stored copy is returned, with its identifier and derived
    /// fields filled in. On failure the mirror is untouched.
    pub async fn save(&mut self, record: R) -> Result<Reconciled<R>, StoreError> {
        match record.id().cloned() {
            Some(id) => self.update(id, record).await,
            None => self.create(record).await,
        }
    }

    /// Deletes the record with identifier `id`, returning the removed local copy.
    pub async fn delete(&mut self, id: &R::Id) -> Result<Reconciled<R>, StoreError> {
        self.log.debug(format_args!("deleting {id}"));

        self.backend.delete(id).await.map_err(|e| {
            self.log.error(format_args!("failed to delete {id}: {e}"));
            e
        })?;

        let mut records = self.records.clone();
        let removed = match mirror::remove(id, &mut records) {
            Some(removed) => removed,
            None => {
                self.log.warn(format_args!(
                    "deleted {id} remotely but it was not in the local {}",
                    R::RESOURCE
                ));
                return Ok(Reconciled::Diverged);
            }
        };

        self.commit(records)?;

        return Ok(Reconciled::Applied(removed));
    }

    async fn update(&mut self, id: R::Id, record: R) -> Result<Reconciled<R>, StoreError> {
        self.log.debug(format_args!("saving edited record {id}: {record:?}"));

        self.backend.update(&id, &record).await.map_err(|e| {
            self.log.error(format_args!("failed to update {id}: {e}"));
            e
        })?;

        let mut records = self.records.clone();
        match mirror::merge(record, &mut records) {
            Merge::Replaced(idx) => self.log.debug(format_args!("merged {id} at index {idx}")),
            Merge::NotFound => {
                self.log.warn(format_args!(
                    "updated {id} remotely but it was not in the local {}",
                    R::RESOURCE
                ));
                return Ok(Reconciled::Diverged);
            }
        }

        self.commit(records)?;

        return Ok(self.stored(&id));
    }

    async fn create(&mut self, mut record: R) -> Result<Reconciled<R>, StoreError> {
        self.log.debug(format_args!("adding new record: {record:?}"));

        let id = self.backend.create(&record).await.map_err(|e| {
            self.log.error(format_args!("failed to create {record:?}: {e}"));
            e
        })?;

        self.log.debug(format_args!("backend assigned id {id}"));

        // Identifiers are unique within the mirror
        if mirror::position(&id, &self.records).is_some() {
            self.log.warn(format_args!(
                "backend assigned {id} to a new record but the local {} already has it",
                R::RESOURCE
            ));
            return Ok(Reconciled::Diverged);
        }

        record.set_id(id.clone());

        let mut records = self.records.clone();
        records.push(record);

        self.commit(records)?;

        return Ok(self.stored(&id));
    }

    /// Derives `records` and, only if that succeeds, makes them the mirror.
    fn commit(&mut self, mut records: Vec<R>) -> Result<(), StoreError> {
        R::derive(&mut records).map_err(|e| {
            self.log.error(format_args!("failed to derive {}: {e}", R::RESOURCE));
            StoreError::Derive(R::RESOURCE, e)
        })?;

        self.records = records;

        return Ok(());
    }

    fn stored(&self, id: &R::Id) -> Reconciled<R> {
        return match self.find(id) {
            Some(record) => Reconciled::Applied(record.clone()),
            None => Reconciled::Diverged,
        };
    }
}
