pub mod client;
pub mod config;
pub mod error;
pub mod testing;
pub mod torznab;
pub mod xml;

pub use client::{torrent_file_name, Jackett, JackettClient};
pub use config::{
    load_config, load_config_from_str, validate_config, ClientSettings, Config, ConfigError,
    ConnectionSettings, DownloadConfig, SanitizedConfig,
};
pub use error::JackettError;
pub use torznab::{Indexer, IndexerKind, SearchResult};
