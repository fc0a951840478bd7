use super::{Backend, BackendError};

use crate::Record;

use std::fmt;

use async_trait::async_trait;

use reqwest::StatusCode;

use serde_json::Value;

/// JSON-over-HTTP backend. Each resource lives under `/<resource>/`:
///
/// - `GET /<resource>/` lists the collection
/// - `PUT /<resource>/` creates, answering with the new identifier
/// - `POST /<resource>/<id>` updates, answering `200`
/// - `DELETE /<resource>/<id>` deletes, answering `1`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        return Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        };
    }

    /// Accepts either a full base URL or a bare `host[:port]`, which is served over plain http.
    pub fn from_host(host: &str) -> Self {
        if host.contains("://") {
            return Self::new(host);
        }

        return Self::new(format!("http://{host}"));
    }

    pub fn base_url(&self) -> &str {
        return &self.base_url;
    }

    fn collection_url(&self, resource: &str) -> String {
        return format!("{}/{}/", self.base_url, resource);
    }

    fn item_url(&self, resource: &str, id: &dyn fmt::Display) -> String {
        return format!("{}{}", self.collection_url(resource), id);
    }

    async fn read_body(url: &str, response: reqwest::Response) -> Result<String, BackendError> {
        let status = response.status();

        if !status.is_success() {
            return Err(BackendError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        return response.text().await.map_err(|e| transport(url, e));
    }
}

fn transport(url: &str, err: reqwest::Error) -> BackendError {
    return BackendError::Transport {
        url: url.to_string(),
        reason: err.to_string(),
    };
}

/// The create endpoint answers with a bare identifier, either as JSON or as plain text.
pub(crate) fn parse_identifier(body: &str) -> Option<String> {
    let body = body.trim();

    if body.is_empty() {
        return None;
    }

    let id = match serde_json::from_str::<Value>(body) {
        Ok(Value::String(id)) => id,
        Ok(Value::Number(id)) => id.to_string(),
        Ok(_) => return None,
        Err(_) => body.to_string(),
    };

    if id.is_empty() {
        return None;
    }

    return Some(id);
}

/// The delete endpoint acknowledges with the number of removed rows, which must be exactly 1.
pub(crate) fn is_delete_ack(body: &str) -> bool {
    return matches!(serde_json::from_str::<Value>(body.trim()), Ok(Value::Number(n)) if n.as_u64() == Some(1));
}

#[async_trait]
impl<R: Record> Backend<R> for HttpBackend {
    async fn fetch_all(&self) -> Result<Vec<R>, BackendError> {
        let url = self.collection_url(R::RESOURCE);

        let response = self.http.get(&url).send().await.map_err(|e| transport(&url, e))?;
        let body = Self::read_body(&url, response).await?;

        return serde_json::from_str(&body).map_err(|e| BackendError::Decode {
            url,
            reason: e.to_string(),
        });
    }

    async fn create(&self, record: &R) -> Result<R::Id, BackendError> {
        let url = self.collection_url(R::RESOURCE);

        let response = self
            .http
            .put(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        let body = Self::read_body(&url, response).await?;

        return parse_identifier(&body)
            .map(R::Id::from)
            .ok_or(BackendError::Body { url, body });
    }

    async fn update(&self, id: &R::Id, record: &R) -> Result<(), BackendError> {
        let url = self.item_url(R::RESOURCE, id);

        let response = self
            .http
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;

        if response.status() != StatusCode::OK {
            return Err(BackendError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        return Ok(());
    }

    async fn delete(&self, id: &R::Id) -> Result<(), BackendError> {
        let url = self.item_url(R::RESOURCE, id);

        let response = self.http.delete(&url).send().await.map_err(|e| transport(&url, e))?;
        let body = Self::read_body(&url, response).await?;

        if !is_delete_ack(&body) {
            return Err(BackendError::Body { url, body });
        }

        return Ok(());
    }
}
