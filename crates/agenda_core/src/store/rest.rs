//! HTTP store adapter.
//!
//! # Responsibility
//! - Issue the REST calls for any [`Resource`] collection and map responses
//!   into records or typed errors.
//! - Own URL construction from the injected base address.
//!
//! # Invariants
//! - Writes always send `Content-Type: application/json`.
//! - No retries and no timeouts are configured; callers treat every call as
//!   non-idempotent best-effort I/O.

use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;

use crate::model::resource::{RecordId, Resource};
use crate::store::{RecordStore, StoreError, StoreResult};

/// Fixed local backend used when no address is injected.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Backend address injected at store construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestConfig {
    pub base_url: String,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Blocking HTTP client over one backend address.
///
/// A single instance serves every resource type; the collection path comes
/// from [`Resource::PATH`].
pub struct RestStore {
    client: Client,
    base_url: String,
}

impl RestStore {
    pub fn new(config: RestConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn record_url(&self, path: &str, id: RecordId) -> String {
        format!("{}/{path}/{id}", self.base_url)
    }
}

impl<R: Resource> RecordStore<R> for RestStore {
    fn list(&mut self) -> StoreResult<Vec<R>> {
        debug!("event=store_request module=store method=GET path={}", R::PATH);
        let response = self.client.get(self.collection_url(R::PATH)).send()?;
        let body = require_success(response)?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn create(&mut self, draft: &R::Draft) -> StoreResult<R> {
        debug!("event=store_request module=store method=POST path={}", R::PATH);
        let response = self
            .client
            .post(self.collection_url(R::PATH))
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(draft)?)
            .send()?;
        let body = require_success(response)?.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn update(&mut self, id: RecordId, draft: &R::Draft) -> StoreResult<()> {
        debug!(
            "event=store_request module=store method=PUT path={} id={id}",
            R::PATH
        );
        // PUT carries the full record, id included.
        let record = R::from_draft(draft, id);
        let response = self
            .client
            .put(self.record_url(R::PATH, id))
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(&record)?)
            .send()?;
        require_success(response)?;
        Ok(())
    }

    fn delete(&mut self, id: RecordId) -> StoreResult<()> {
        debug!(
            "event=store_request module=store method=DELETE path={} id={id}",
            R::PATH
        );
        let response = self.client.delete(self.record_url(R::PATH, id)).send()?;
        require_success(response)?;
        Ok(())
    }
}

fn require_success(response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{RestConfig, RestStore, DEFAULT_BASE_URL};

    #[test]
    fn default_config_points_at_fixed_local_backend() {
        assert_eq!(RestConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let store = RestStore::new(RestConfig {
            base_url: "http://localhost:5000/".to_string(),
        });
        assert_eq!(store.collection_url("contacts"), "http://localhost:5000/contacts");
        assert_eq!(store.record_url("notes", 7), "http://localhost:5000/notes/7");
    }
}
