//! Testing utilities and a mock implementation of the [`Jackett`] trait.
//!
//! Lets code built on top of the client be tested without a Jackett server.
//!
//! # Example
//!
//! ```rust,ignore
//! use jackett_core::testing::{fixtures, MockJackett};
//!
//! let jackett = MockJackett::new();
//! jackett.set_indexers(vec![fixtures::indexer("1337x", true)]).await;
//! jackett.set_results(vec![fixtures::search_result("1337x", "Debian 12")]).await;
//! ```
//!
//! [`Jackett`]: crate::Jackett

mod mock_jackett;

pub use mock_jackett::MockJackett;

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::torznab::{Indexer, IndexerKind, SearchResult};

    /// Create a public indexer with reasonable defaults.
    pub fn indexer(id: &str, configured: bool) -> Indexer {
        Indexer {
            id: id.to_string(),
            configured,
            title: id.to_uppercase(),
            description: format!("Description of {}", id),
            link: format!("https://{}.example", id),
            language: "en-US".to_string(),
            kind: IndexerKind::Public,
        }
    }

    /// Create a search result from `indexer_id` with reasonable defaults.
    ///
    /// The download link ends in `file=<title with spaces as dots>`.
    pub fn search_result(indexer_id: &str, title: &str) -> SearchResult {
        SearchResult {
            indexer_id: indexer_id.to_string(),
            indexer_name: indexer_id.to_uppercase(),
            title: title.to_string(),
            publish_date: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            categories: vec!["2000".to_string()],
            download_link: format!(
                "http://localhost:9117/dl/{}/?jackett_apikey=key&path=abc&file={}",
                indexer_id,
                title.replace(' ', ".")
            ),
            size_bytes: 1024 * 1024 * 700, // 700 MB
            file_count: 1,
            grabs: 10,
            seeders: 50,
            peers: 60,
            guid: None,
            details_url: None,
            info_hash: None,
            magnet_uri: None,
        }
    }
}
