//! The `Jackett` trait.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::torznab::{Indexer, SearchResult, VALIDATION_QUERY};
use crate::JackettError;

/// Operations offered by a Jackett server.
///
/// Implementors provide the four single-request operations. The composite
/// operations are built on top of them and never issue requests of their own.
#[async_trait]
pub trait Jackett: Send + Sync {
    /// Every indexer known to the server, configured or not.
    async fn list_all_indexers(&self) -> Result<Vec<Indexer>, JackettError>;

    /// Search all configured indexers.
    async fn search_all(&self, query: &str) -> Result<Vec<SearchResult>, JackettError>;

    /// Latest releases of a single indexer.
    async fn indexer_rss(&self, indexer_id: &str) -> Result<Vec<SearchResult>, JackettError>;

    /// Download the .torrent file of `result` into `destination`.
    ///
    /// Returns the path of the written file.
    async fn download_torrent(
        &self,
        result: &SearchResult,
        destination: &Path,
    ) -> Result<PathBuf, JackettError>;

    /// Indexers that have been set up on the server.
    async fn list_configured_indexers(&self) -> Result<Vec<Indexer>, JackettError> {
        let indexers = self.list_all_indexers().await?;
        Ok(indexers.into_iter().filter(|i| i.configured).collect())
    }

    /// Search all indexers and keep only results from `indexer_ids`.
    async fn search_indexers(
        &self,
        query: &str,
        indexer_ids: &[&str],
    ) -> Result<Vec<SearchResult>, JackettError> {
        let results = self.search_all(query).await?;
        Ok(results
            .into_iter()
            .filter(|r| indexer_ids.iter().any(|id| *id == r.indexer_id))
            .collect())
    }

    /// Whether a search round trip against the server succeeds.
    async fn is_valid_server(&self) -> bool {
        match self.search_all(VALIDATION_QUERY).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Jackett server validation failed");
                false
            }
        }
    }
}
