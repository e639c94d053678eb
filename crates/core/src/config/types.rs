use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the Jackett server lives and how to authenticate against it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Jackett API root (e.g., "http://localhost:9117/api/v2.0")
    pub base_url: String,
    /// Jackett API key
    pub api_key: String,
}

/// Everything needed to construct a client.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClientSettings {
    pub connection: ConnectionSettings,
    /// Skip TLS certificate verification (self-signed Jackett installs)
    #[serde(default)]
    pub allow_self_signed_certificates: bool,
    /// Whole-request timeout handed to the HTTP client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
}

impl ClientSettings {
    /// Settings with certificate verification on and no timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            connection: ConnectionSettings {
                base_url: base_url.into(),
                api_key: api_key.into(),
            },
            allow_self_signed_certificates: false,
            timeout_secs: None,
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub connection: ConnectionSettings,
    #[serde(default)]
    pub allow_self_signed_certificates: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
    #[serde(default)]
    pub download: DownloadConfig,
}

impl Config {
    /// Client settings described by this configuration.
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            connection: self.connection.clone(),
            allow_self_signed_certificates: self.allow_self_signed_certificates,
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Download configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadConfig {
    /// Directory .torrent files are written to
    #[serde(default = "default_download_dir")]
    pub directory: PathBuf,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            directory: default_download_dir(),
        }
    }
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Sanitized config for display (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub connection: SanitizedConnectionSettings,
    pub allow_self_signed_certificates: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
    pub download: DownloadConfig,
}

/// Sanitized connection settings (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConnectionSettings {
    pub base_url: String,
    pub api_key_configured: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            connection: SanitizedConnectionSettings {
                base_url: config.connection.base_url.clone(),
                api_key_configured: !config.connection.api_key.is_empty(),
            },
            allow_self_signed_certificates: config.allow_self_signed_certificates,
            timeout_secs: config.timeout_secs,
            download: config.download.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let toml = r#"
[connection]
base_url = "http://localhost:9117/api/v2.0"
api_key = "secret"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.connection.base_url, "http://localhost:9117/api/v2.0");
        assert_eq!(config.connection.api_key, "secret");
        assert!(!config.allow_self_signed_certificates);
        assert!(config.timeout_secs.is_none());
        assert_eq!(config.download.directory.to_str().unwrap(), ".");
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
allow_self_signed_certificates = true
timeout_secs = 15

[connection]
base_url = "https://jackett.lan/api/v2.0"
api_key = "secret"

[download]
directory = "/data/torrents"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.allow_self_signed_certificates);
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.download.directory.to_str().unwrap(), "/data/torrents");
    }

    #[test]
    fn test_deserialize_missing_connection_fails() {
        let toml = r#"
allow_self_signed_certificates = true
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_client_settings_from_config() {
        let toml = r#"
allow_self_signed_certificates = true
timeout_secs = 5

[connection]
base_url = "https://jackett.lan"
api_key = "secret"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let settings = config.client_settings();
        assert!(settings.allow_self_signed_certificates);
        assert_eq!(settings.timeout_secs, Some(5));
        assert_eq!(settings.connection, config.connection);
    }

    #[test]
    fn test_client_settings_new_defaults() {
        let settings = ClientSettings::new("http://jackett", "key");
        assert_eq!(settings.connection.base_url, "http://jackett");
        assert!(!settings.allow_self_signed_certificates);
        assert!(settings.timeout_secs.is_none());
    }

    #[test]
    fn test_sanitized_config_hides_api_key() {
        let toml = r#"
[connection]
base_url = "http://localhost:9117/api/v2.0"
api_key = "super-secret"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let sanitized = SanitizedConfig::from(&config);
        assert!(sanitized.connection.api_key_configured);

        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(!json.contains("timeout_secs"));
    }
}
