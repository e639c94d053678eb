//! RSS search results (`t=search`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::xml::{parse_document, XmlNode};
use crate::JackettError;

use super::{check_error, parse_number};

/// One release from a search or RSS feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    /// Id of the indexer that returned this release.
    pub indexer_id: String,
    /// Display name of that indexer.
    pub indexer_name: String,
    pub title: String,
    pub publish_date: DateTime<Utc>,
    /// Torznab category ids in document order.
    pub categories: Vec<String>,
    /// Jackett proxy link to the .torrent file.
    pub download_link: String,
    /// Size of the torrent content in bytes.
    pub size_bytes: u64,
    pub file_count: u32,
    pub grabs: u32,
    pub seeders: u32,
    /// Seeders plus leechers.
    pub peers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    /// Release page on the tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnet_uri: Option<String>,
}

impl SearchResult {
    /// Map one RSS `<item>` element.
    pub fn from_xml_item(item: &XmlNode) -> Result<Self, JackettError> {
        let indexer = item.require_child("jackettindexer")?;
        let enclosure = item.require_child("enclosure")?;

        // Later duplicates win, e.g. a repeated "seeders" attr
        let torznab: HashMap<&str, &str> = item
            .children("torznab:attr")
            .filter_map(|attr| Some((attr.attr("name")?, attr.attr("value")?)))
            .collect();
        let torznab_attr = |name: &str| {
            torznab.get(name).copied().ok_or_else(|| {
                JackettError::parse(format!("item is missing torznab attribute '{}'", name))
            })
        };

        let (file_count, grabs) = match item.child_text("files") {
            Some(files) => (
                parse_number("files", files)?,
                parse_number("grabs", item.require_child_text("grabs")?)?,
            ),
            None => (0, 0),
        };

        Ok(Self {
            indexer_id: indexer.require_attr("id")?.to_string(),
            indexer_name: indexer.text().to_string(),
            title: item.require_child_text("title")?.to_string(),
            publish_date: parse_pub_date(item.require_child_text("pubDate")?)?,
            categories: item
                .children("category")
                .map(|c| c.text().to_string())
                .collect(),
            download_link: enclosure.require_attr("url")?.to_string(),
            size_bytes: parse_number("size", enclosure.require_attr("length")?)?,
            file_count,
            grabs,
            seeders: parse_number("seeders", torznab_attr("seeders")?)?,
            peers: parse_number("peers", torznab_attr("peers")?)?,
            guid: non_empty(item.child_text("guid")),
            details_url: non_empty(item.child_text("comments")),
            info_hash: non_empty(torznab.get("infohash").copied()).map(|h| h.to_lowercase()),
            magnet_uri: non_empty(torznab.get("magneturl").copied()),
        })
    }

    /// Peers that are not seeding.
    pub fn leechers(&self) -> u32 {
        self.peers.saturating_sub(self.seeders)
    }
}

/// Parse an RSS document. A channel without items yields no results.
pub fn parse_results(xml: &str) -> Result<Vec<SearchResult>, JackettError> {
    let root = parse_document(xml)?;
    check_error(&root)?;

    if root.name() != "rss" {
        return Err(JackettError::parse(format!(
            "expected <rss> document, got <{}>",
            root.name()
        )));
    }

    root.require_child("channel")?
        .children("item")
        .map(SearchResult::from_xml_item)
        .collect()
}

fn parse_pub_date(text: &str) -> Result<DateTime<Utc>, JackettError> {
    DateTime::parse_from_rfc2822(text.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| JackettError::parse(format!("invalid pubDate '{}': {}", text, e)))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
