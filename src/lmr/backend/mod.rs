mod http;

pub use http::HttpBackend;

use crate::Record;

use std::sync::Arc;

use async_trait::async_trait;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Transport failure calling {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Unexpected response body from {url}: {body:?}")]
    Body { url: String, body: String },

    #[error("Failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// The remote side of a record store.
///
/// Every call is a single best-effort attempt: no retries, no idempotency key.
#[async_trait]
pub trait Backend<R: Record>: Send + Sync {
    /// Full collection
    async fn fetch_all(&self) -> Result<Vec<R>, BackendError>;

    /// Creates `record` and returns the identifier the backend assigned.
    async fn create(&self, record: &R) -> Result<R::Id, BackendError>;

    async fn update(&self, id: &R::Id, record: &R) -> Result<(), BackendError>;

    async fn delete(&self, id: &R::Id) -> Result<(), BackendError>;
}

#[async_trait]
impl<R, B> Backend<R> for Arc<B>
where
    R: Record,
    B: Backend<R> + ?Sized,
{
    async fn fetch_all(&self) -> Result<Vec<R>, BackendError> {
        (**self).fetch_all().await
    }

    async fn create(&self, record: &R) -> Result<R::Id, BackendError> {
        (**self).create(record).await
    }

    async fn update(&self, id: &R::Id, record: &R) -> Result<(), BackendError> {
        (**self).update(id, record).await
    }

    async fn delete(&self, id: &R::Id) -> Result<(), BackendError> {
        (**self).delete(id).await
    }
}
