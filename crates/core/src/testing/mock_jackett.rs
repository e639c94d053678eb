//! Mock Jackett server for testing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::client::{torrent_path, Jackett};
use crate::torznab::{Indexer, SearchResult};
use crate::JackettError;

/// Mock implementation of the Jackett trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable indexers and results
/// - Track search queries and downloads for assertions
/// - Simulate failures
///
/// Downloads are recorded, not written; the returned path is the one a real
/// client would have written to.
///
/// # Example
///
/// ```rust,ignore
/// use jackett_core::testing::{MockJackett, fixtures};
///
/// let jackett = MockJackett::new();
/// jackett.set_results(vec![fixtures::search_result("1337x", "Debian 12")]).await;
///
/// let results = jackett.search_indexers("debian", &["1337x"]).await?;
/// assert_eq!(results.len(), 1);
/// assert_eq!(jackett.recorded_searches().await, vec!["debian"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MockJackett {
    indexers: Arc<RwLock<Vec<Indexer>>>,
    results: Arc<RwLock<Vec<SearchResult>>>,
    searches: Arc<RwLock<Vec<String>>>,
    rss_requests: Arc<RwLock<Vec<String>>>,
    downloads: Arc<RwLock<Vec<PathBuf>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<JackettError>>>,
    list_calls: Arc<AtomicUsize>,
}

impl MockJackett {
    /// Create a mock with no indexers and no results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexers returned by `list_all_indexers`.
    pub async fn set_indexers(&self, indexers: Vec<Indexer>) {
        *self.indexers.write().await = indexers;
    }

    /// Results returned by `search_all` and `indexer_rss`.
    ///
    /// `indexer_rss` only returns the results of the requested indexer.
    pub async fn set_results(&self, results: Vec<SearchResult>) {
        *self.results.write().await = results;
    }

    /// Make the next operation fail with `error`.
    pub async fn fail_next(&self, error: JackettError) {
        *self.next_error.write().await = Some(error);
    }

    /// Queries passed to `search_all`, in call order.
    pub async fn recorded_searches(&self) -> Vec<String> {
        self.searches.read().await.clone()
    }

    /// Indexer ids passed to `indexer_rss`, in call order.
    pub async fn recorded_rss_requests(&self) -> Vec<String> {
        self.rss_requests.read().await.clone()
    }

    /// Paths of downloads requested so far.
    pub async fn recorded_downloads(&self) -> Vec<PathBuf> {
        self.downloads.read().await.clone()
    }

    /// Number of `list_all_indexers` calls.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    async fn take_error(&self) -> Result<(), JackettError> {
        match self.next_error.write().await.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Jackett for MockJackett {
    async fn list_all_indexers(&self) -> Result<Vec<Indexer>, JackettError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.take_error().await?;
        Ok(self.indexers.read().await.clone())
    }

    async fn search_all(&self, query: &str) -> Result<Vec<SearchResult>, JackettError> {
        self.searches.write().await.push(query.to_string());
        self.take_error().await?;
        Ok(self.results.read().await.clone())
    }

    async fn indexer_rss(&self, indexer_id: &str) -> Result<Vec<SearchResult>, JackettError> {
        self.rss_requests.write().await.push(indexer_id.to_string());
        self.take_error().await?;
        Ok(self
            .results
            .read()
            .await
            .iter()
            .filter(|r| r.indexer_id == indexer_id)
            .cloned()
            .collect())
    }

    async fn download_torrent(
        &self,
        result: &SearchResult,
        destination: &Path,
    ) -> Result<PathBuf, JackettError> {
        let path = torrent_path(destination, &result.download_link)?;
        self.take_error().await?;
        self.downloads.write().await.push(path.clone());
        Ok(path)
    }
}
