//! reqwest-backed Jackett client.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::{ClientSettings, ConnectionSettings};
use crate::torznab::{
    build_url, parse_indexers, parse_results, ApiEndpoint, Indexer, SearchResult, ALL_INDEXERS,
    INDEXER_ID_PLACEHOLDER, INDEXER_RSS, QUERY_PLACEHOLDER, SEARCH_ALL,
};
use crate::xml::parse_document;
use crate::JackettError;

use super::download::{torrent_path, write_body};
use super::Jackett;

/// Characters of an error body kept in `HttpStatus` errors.
const ERROR_BODY_LIMIT: usize = 200;

/// Client for a single Jackett server.
///
/// Holds one HTTP client for its whole lifetime; TLS verification is fixed
/// at construction from [`ClientSettings::allow_self_signed_certificates`].
#[derive(Debug, Clone)]
pub struct JackettClient {
    client: Client,
    connection: ConnectionSettings,
}

impl JackettClient {
    /// Create a new client with the given settings.
    pub fn new(settings: ClientSettings) -> Result<Self, JackettError> {
        if settings.allow_self_signed_certificates {
            warn!(
                base_url = %settings.connection.base_url,
                "TLS certificate verification disabled for Jackett"
            );
        }

        let mut builder =
            Client::builder().danger_accept_invalid_certs(settings.allow_self_signed_certificates);
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs as u64));
        }
        let client = builder
            .build()
            .map_err(|e| JackettError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            connection: settings.connection,
        })
    }

    /// Connection settings this client talks to.
    pub fn connection(&self) -> &ConnectionSettings {
        &self.connection
    }

    /// GET an endpoint and return the response body.
    async fn fetch(
        &self,
        endpoint: &ApiEndpoint,
        placeholders: Option<&[(&str, &str)]>,
    ) -> Result<String, JackettError> {
        // The URL embeds the API key, so only the endpoint is logged
        let url = build_url(endpoint, &self.connection, placeholders);
        debug!(endpoint = endpoint.prefix, "Requesting Jackett");

        let response = self.send(&url).await?;
        let body = response.text().await?;

        debug!(
            endpoint = endpoint.prefix,
            bytes = body.len(),
            "Jackett response received"
        );
        Ok(body)
    }

    /// Send a GET and fail on non-2xx statuses.
    async fn send(&self, url: &str) -> Result<Response, JackettError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }

        Ok(response)
    }
}

/// Error for a non-2xx response, preferring Jackett's own Torznab error.
fn status_error(status: u16, body: &str) -> JackettError {
    if let Ok(root) = parse_document(body) {
        if let Err(e) = crate::torznab::check_error(&root) {
            return e;
        }
    }
    JackettError::HttpStatus {
        status,
        body: body.chars().take(ERROR_BODY_LIMIT).collect(),
    }
}

#[async_trait]
impl Jackett for JackettClient {
    async fn list_all_indexers(&self) -> Result<Vec<Indexer>, JackettError> {
        let body = self.fetch(&ALL_INDEXERS, None).await?;
        let indexers = parse_indexers(&body)?;
        debug!(indexers = indexers.len(), "Listed Jackett indexers");
        Ok(indexers)
    }

    async fn search_all(&self, query: &str) -> Result<Vec<SearchResult>, JackettError> {
        let encoded = urlencoding::encode(query).into_owned();
        let body = self
            .fetch(&SEARCH_ALL, Some(&[(QUERY_PLACEHOLDER, encoded.as_str())]))
            .await?;
        let results = parse_results(&body)?;
        debug!(query = query, results = results.len(), "Jackett search complete");
        Ok(results)
    }

    async fn indexer_rss(&self, indexer_id: &str) -> Result<Vec<SearchResult>, JackettError> {
        let encoded = urlencoding::encode(indexer_id).into_owned();
        let body = self
            .fetch(&INDEXER_RSS, Some(&[(INDEXER_ID_PLACEHOLDER, encoded.as_str())]))
            .await?;
        let results = parse_results(&body)?;
        debug!(
            indexer = indexer_id,
            results = results.len(),
            "Jackett RSS fetched"
        );
        Ok(results)
    }

    async fn download_torrent(
        &self,
        result: &SearchResult,
        destination: &Path,
    ) -> Result<PathBuf, JackettError> {
        let path = torrent_path(destination, &result.download_link)?;

        debug!(
            indexer = %result.indexer_id,
            title = %result.title,
            path = %path.display(),
            "Downloading torrent"
        );
        let response = self.send(&result.download_link).await?;
        let bytes = write_body(response, &path).await?;

        debug!(path = %path.display(), bytes = bytes, "Torrent downloaded");
        Ok(path)
    }
}
