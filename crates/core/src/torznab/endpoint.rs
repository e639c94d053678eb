//! Torznab endpoint table and URL building.

use once_cell::sync::Lazy;
use regex_lite::{Captures, Regex};

use crate::config::ConnectionSettings;

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "apikey";

/// Query used by the connectivity probe.
pub const VALIDATION_QUERY: &str = "jackett";

/// The downloaded file name is whatever follows this token in the download link.
pub const DOWNLOAD_NAME_MARKER: &str = "file=";

/// Appended to every downloaded file name.
pub const DOWNLOAD_NAME_SUFFIX: &str = ".torrent";

/// Placeholder replaced by the percent-encoded search query.
pub const QUERY_PLACEHOLDER: &str = "%query%";

/// Placeholder replaced by the indexer id.
pub const INDEXER_ID_PLACEHOLDER: &str = "%indexerId%";

/// A Jackett API path with its fixed query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiEndpoint {
    /// Path appended to the base URL.
    pub prefix: &'static str,
    /// Query string appended after the API key, without the leading `&`.
    pub suffix: Option<&'static str>,
}

/// Every indexer known to the server.
pub const ALL_INDEXERS: ApiEndpoint = ApiEndpoint {
    prefix: "/indexers/all/results/torznab",
    suffix: Some("t=indexers"),
};

/// Search across all configured indexers.
pub const SEARCH_ALL: ApiEndpoint = ApiEndpoint {
    prefix: "/indexers/all/results/torznab",
    suffix: Some("t=search&q=%query%"),
};

/// Latest releases of a single indexer.
pub const INDEXER_RSS: ApiEndpoint = ApiEndpoint {
    prefix: "/indexers/%indexerId%/results/torznab",
    suffix: Some("t=search"),
};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"%\w+%").unwrap());

/// Build the request URL for `endpoint`.
///
/// Placeholders are `(marker, value)` pairs such as `("%query%", "foo")`.
/// Markers without a matching pair are left untouched. Values are inserted
/// as-is, so callers must percent-encode them first.
pub fn build_url(
    endpoint: &ApiEndpoint,
    connection: &ConnectionSettings,
    placeholders: Option<&[(&str, &str)]>,
) -> String {
    let mut url = format!(
        "{}/{}?{}={}",
        connection.base_url.trim_end_matches('/'),
        endpoint.prefix.trim_start_matches('/'),
        API_KEY_PARAM,
        connection.api_key
    );

    if let Some(suffix) = endpoint.suffix {
        url.push('&');
        url.push_str(suffix);
    }

    match placeholders {
        Some(values) => replace_placeholders(&url, values),
        None => url,
    }
}

/// Replace every `%name%` marker that has a value in `values`.
pub fn replace_placeholders(input: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(input, |caps: &Captures<'_>| {
            let marker = &caps[0];
            values
                .iter()
                .find(|(key, _)| *key == marker)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| marker.to_string())
        })
        .into_owned()
}
