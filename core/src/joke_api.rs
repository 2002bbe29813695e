//! HTTP client for the public joke API.
//!
//! The API answers a GET with a JSON array of jokes; only the first one is
//! used. There is no retry and no timeout.

use async_trait::async_trait;
use folio_common::joke::Joke;
use reqwest::Client;
use tracing::{debug, trace};

use crate::error::JokeError;
use crate::ports::JokeSource;

pub struct JokeClient {
    client: Client,
    endpoint: String,
}

impl JokeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl JokeSource for JokeClient {
    async fn fetch_joke(&self) -> Result<Joke, JokeError> {
        debug!(endpoint = %self.endpoint, "requesting joke");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(JokeError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(JokeError::Status(status));
        }

        let batch: Vec<Joke> = response.json().await.map_err(JokeError::Decode)?;
        trace!(jokes = batch.len(), "joke batch received");

        batch.into_iter().next().ok_or(JokeError::Empty)
    }
}
