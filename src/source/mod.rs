//! Upstream record source
//!
//! `allPersons` reads from a remote dataset rather than the local store.
//! The two are not kept in sync.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{PhonebookError, Result};
use crate::schema::Person;

#[async_trait]
pub trait PersonSource: Send + Sync {
    /// Fetch the full record list
    async fn fetch_all(&self) -> Result<Vec<Person>>;
}

/// Fetches a JSON array of records with one HTTP GET.
///
/// A single attempt is made; timeouts, transport errors, non-success
/// statuses and undecodable bodies all fail with
/// [`PhonebookError::UpstreamFetchFailure`].
#[derive(Debug, Clone)]
pub struct HttpPersonSource {
    client: reqwest::Client,
    url: String,
}

impl HttpPersonSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PhonebookError::UpstreamFetchFailure(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl PersonSource for HttpPersonSource {
    async fn fetch_all(&self) -> Result<Vec<Person>> {
        debug!(url = %self.url, "fetching upstream records");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!(url = %self.url, error = %e, "upstream request failed");
                PhonebookError::UpstreamFetchFailure(e.to_string())
            })?;

        let people: Vec<Person> = response.json().await.map_err(|e| {
            warn!(url = %self.url, error = %e, "upstream body is not a record list");
            PhonebookError::UpstreamFetchFailure(format!("malformed response: {}", e))
        })?;

        debug!(url = %self.url, count = people.len(), "fetched upstream records");
        Ok(people)
    }
}

/// A fixed record list standing in for the remote dataset when the schema
/// is embedded in-process (tests, local tooling)
#[derive(Debug, Clone, Default)]
pub struct StaticPersonSource {
    people: Vec<Person>,
}

impl StaticPersonSource {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }
}

#[async_trait]
impl PersonSource for StaticPersonSource {
    async fn fetch_all(&self) -> Result<Vec<Person>> {
        Ok(self.people.clone())
    }
}
