//! Jackett client.
//!
//! The [`Jackett`] trait describes what a Jackett server offers;
//! [`JackettClient`] implements it over HTTP. Every operation is one request
//! and one response, except the composite operations on the trait which
//! reuse another operation's result.
//!
//! # Example
//!
//! ```ignore
//! use jackett_core::{ClientSettings, Jackett, JackettClient};
//!
//! let client = JackettClient::new(ClientSettings::new(
//!     "http://localhost:9117/api/v2.0",
//!     "my-api-key",
//! ))?;
//!
//! for indexer in client.list_configured_indexers().await? {
//!     println!("{} ({})", indexer.title, indexer.kind);
//! }
//!
//! let results = client.search_indexers("debian", &["1337x"]).await?;
//! if let Some(first) = results.first() {
//!     let path = client.download_torrent(first, Path::new("/tmp")).await?;
//!     println!("saved {}", path.display());
//! }
//! ```

mod download;
mod http;
mod traits;

pub use download::{torrent_file_name, torrent_path};
pub use http::JackettClient;
pub use traits::Jackett;
