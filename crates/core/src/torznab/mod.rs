//! Torznab API surface of Jackett.
//!
//! This module holds the constant endpoint table with the URL builder, and
//! the mappers turning Jackett's XML documents into [`Indexer`] and
//! [`SearchResult`] values.
//!
//! # Example
//!
//! ```ignore
//! use jackett_core::torznab::{build_url, parse_results, SEARCH_ALL, QUERY_PLACEHOLDER};
//!
//! let url = build_url(&SEARCH_ALL, &connection, Some(&[(QUERY_PLACEHOLDER, "ubuntu")]));
//! let body = reqwest::get(&url).await?.text().await?;
//! for result in parse_results(&body)? {
//!     println!("{} ({} seeders)", result.title, result.seeders);
//! }
//! ```

mod endpoint;
mod indexer;
mod release;

pub use endpoint::{
    build_url, replace_placeholders, ApiEndpoint, ALL_INDEXERS, API_KEY_PARAM,
    DOWNLOAD_NAME_MARKER, DOWNLOAD_NAME_SUFFIX, INDEXER_ID_PLACEHOLDER, INDEXER_RSS,
    QUERY_PLACEHOLDER, SEARCH_ALL, VALIDATION_QUERY,
};
pub use indexer::{parse_indexers, Indexer, IndexerKind};
pub use release::{parse_results, SearchResult};

use crate::xml::XmlNode;
use crate::JackettError;

/// Fail if `root` is a Torznab `<error code=".." description=".."/>` document.
pub(crate) fn check_error(root: &XmlNode) -> Result<(), JackettError> {
    if root.name() != "error" {
        return Ok(());
    }
    let code = root
        .attr("code")
        .and_then(|c| c.trim().parse().ok())
        .unwrap_or(0);
    let description = root.attr("description").unwrap_or_default().to_string();
    Err(JackettError::Torznab { code, description })
}

/// Parse the text of a numeric field, naming the field on failure.
pub(crate) fn parse_number<T: std::str::FromStr>(field: &str, text: &str) -> Result<T, JackettError> {
    text.trim()
        .parse()
        .map_err(|_| JackettError::parse(format!("invalid {}: '{}'", field, text)))
}
