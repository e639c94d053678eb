//! Indexer listing (`t=indexers`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::xml::{parse_document, XmlNode};
use crate::JackettError;

use super::check_error;

/// Whether an indexer needs an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IndexerKind {
    Private,
    Public,
}

impl FromStr for IndexerKind {
    type Err = JackettError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(IndexerKind::Private),
            "public" => Ok(IndexerKind::Public),
            other => Err(JackettError::parse(format!(
                "unknown indexer type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for IndexerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexerKind::Private => write!(f, "private"),
            IndexerKind::Public => write!(f, "public"),
        }
    }
}

/// A tracker integration known to the Jackett server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Indexer {
    /// Jackett's identifier, used in per-indexer URLs.
    pub id: String,
    /// Whether the indexer has been set up on the server.
    pub configured: bool,
    pub title: String,
    pub description: String,
    /// Site URL.
    pub link: String,
    pub language: String,
    pub kind: IndexerKind,
}

impl Indexer {
    /// Map one `<indexer>` element.
    pub fn from_xml_node(node: &XmlNode) -> Result<Self, JackettError> {
        let id = node.require_attr("id")?.to_string();
        let configured = match node.require_attr("configured")? {
            "true" => true,
            "false" => false,
            other => {
                return Err(JackettError::parse(format!(
                    "indexer '{}' has invalid configured flag '{}'",
                    id, other
                )))
            }
        };

        let kind = node
            .require_child_text("type")?
            .parse::<IndexerKind>()
            .map_err(|e| JackettError::parse(format!("indexer '{}': {}", id, e)))?;

        Ok(Self {
            configured,
            title: node.require_child_text("title")?.to_string(),
            description: node.require_child_text("description")?.to_string(),
            link: node.require_child_text("link")?.to_string(),
            language: node.require_child_text("language")?.to_string(),
            kind,
            id,
        })
    }
}

/// Parse an `<indexers>` document.
pub fn parse_indexers(xml: &str) -> Result<Vec<Indexer>, JackettError> {
    let root = parse_document(xml)?;
    check_error(&root)?;

    if root.name() != "indexers" {
        return Err(JackettError::parse(format!(
            "expected <indexers> document, got <{}>",
            root.name()
        )));
    }

    root.children("indexer").map(Indexer::from_xml_node).collect()
}
