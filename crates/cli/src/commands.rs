//! Command-line interface and command execution.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use jackett_core::{Indexer, Jackett, SearchResult};

/// Query a Jackett server from the command line.
#[derive(Debug, Parser)]
#[command(name = "jackett", version, about)]
pub struct Cli {
    /// Configuration file
    #[arg(long, env = "JACKETT_CONFIG", default_value = "jackett.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List indexers known to the server
    Indexers {
        /// Only indexers that are set up on the server
        #[arg(long)]
        configured: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Search all indexers, or only the given ones
    Search {
        query: String,
        /// Keep results from this indexer (repeatable)
        #[arg(long = "indexer")]
        indexers: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Latest releases of one indexer
    Rss {
        indexer_id: String,
        #[arg(long)]
        json: bool,
    },
    /// Search and download the .torrent files of the first results
    Download {
        query: String,
        #[arg(long = "indexer")]
        indexers: Vec<String>,
        /// Number of results to download
        #[arg(long, default_value_t = 1)]
        limit: usize,
        /// Target directory (defaults to download.directory from the config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Check that the server answers a test search
    Check,
    /// Print the configuration with secrets redacted
    Config,
}

/// Run a command that talks to the server and return its output.
pub async fn execute(
    jackett: &dyn Jackett,
    command: &Command,
    download_dir: &Path,
) -> Result<String> {
    match command {
        Command::Indexers { configured, json } => {
            let indexers = if *configured {
                jackett.list_configured_indexers().await
            } else {
                jackett.list_all_indexers().await
            }
            .context("Failed to list indexers")?;
            render(&indexers, *json, render_indexers)
        }
        Command::Search {
            query,
            indexers,
            json,
        } => {
            let results = search(jackett, query, indexers).await?;
            render(&results, *json, render_results)
        }
        Command::Rss { indexer_id, json } => {
            let results = jackett
                .indexer_rss(indexer_id)
                .await
                .with_context(|| format!("Failed to fetch RSS of indexer '{}'", indexer_id))?;
            render(&results, *json, render_results)
        }
        Command::Download {
            query,
            indexers,
            limit,
            dir,
        } => {
            let results = search(jackett, query, indexers).await?;
            if results.is_empty() {
                bail!("No results for '{}'", query);
            }

            let target = dir.as_deref().unwrap_or(download_dir);
            let mut lines = Vec::new();
            for result in results.iter().take(*limit) {
                let path = jackett
                    .download_torrent(result, target)
                    .await
                    .with_context(|| format!("Failed to download '{}'", result.title))?;
                info!(path = %path.display(), "Saved torrent");
                lines.push(format!("Saved {}", path.display()));
            }
            Ok(lines.join("\n"))
        }
        Command::Check => {
            if jackett.is_valid_server().await {
                Ok("Jackett server is reachable".to_string())
            } else {
                bail!("Jackett server did not answer a test search")
            }
        }
        Command::Config => bail!("the config command does not talk to the server"),
    }
}

async fn search(
    jackett: &dyn Jackett,
    query: &str,
    indexers: &[String],
) -> Result<Vec<SearchResult>> {
    let results = if indexers.is_empty() {
        jackett.search_all(query).await
    } else {
        let ids: Vec<&str> = indexers.iter().map(String::as_str).collect();
        jackett.search_indexers(query, &ids).await
    };
    results.with_context(|| format!("Search for '{}' failed", query))
}

fn render<T: Serialize>(items: &[T], json: bool, table: fn(&[T]) -> String) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(items)?)
    } else {
        Ok(table(items))
    }
}

fn render_indexers(indexers: &[Indexer]) -> String {
    if indexers.is_empty() {
        return "No indexers".to_string();
    }
    indexers
        .iter()
        .map(|i| {
            format!(
                "{:<24} {:<8} {:<12} {}",
                i.id,
                i.kind,
                if i.configured { "configured" } else { "-" },
                i.title
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No results".to_string();
    }
    results
        .iter()
        .map(|r| {
            format!(
                "{:<16} {:>5}/{:<5} {:>10}  {}",
                r.indexer_id,
                r.seeders,
                r.leechers(),
                format_size(r.size_bytes),
                r.title
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}
