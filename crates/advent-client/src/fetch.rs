//! Fetching JSON documents over HTTP.

use crate::error::AdventError;
use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Longest error body kept from a failed response.
const MAX_ERROR_BODY: usize = 200;

/// Something that can fetch a JSON document from a URL.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, AdventError>;
}

/// [`JsonFetcher`] backed by reqwest.
///
/// Private leaderboards are only visible to logged-in users, so requests
/// carry the adventofcode.com session cookie when one is configured. The
/// token is kept in a `SecretString` so it never shows up in debug output.
#[derive(Clone)]
pub struct HttpJsonFetcher {
    client: Client,
    session_token: Option<SecretString>,
}

impl HttpJsonFetcher {
    /// Create a new fetcher.
    pub fn new(session_token: Option<String>, timeout: Duration) -> Result<Self, AdventError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            session_token: session_token
                .filter(|token| !token.is_empty())
                .map(SecretString::new),
        })
    }
}

#[async_trait]
impl JsonFetcher for HttpJsonFetcher {
    #[instrument(skip(self))]
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, AdventError> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.session_token {
            request = request.header(COOKIE, format!("session={}", token.expose_secret()));
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message: String = body.chars().take(MAX_ERROR_BODY).collect();
            warn!("GET {} failed with {}: {}", url, status, message);
            return Err(AdventError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        debug!("Response body: {}", body.chars().take(200).collect::<String>());
        Ok(serde_json::from_str(&body)?)
    }
}
