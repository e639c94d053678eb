use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - connection.base_url is an http(s) URL
/// - connection.api_key is not empty
/// - timeout_secs is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let base_url = config.connection.base_url.trim();
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "connection.base_url cannot be empty".to_string(),
        ));
    }
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "connection.base_url must start with http:// or https://, got '{}'",
            base_url
        )));
    }

    if config.connection.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "connection.api_key cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
