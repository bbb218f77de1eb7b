use crate::config::types::{Config, HarvestConfig, HttpConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_harvest_config(&config.harvest)?;
    validate_http_config(&config.http)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates the harvest target and output settings
fn validate_harvest_config(config: &HarvestConfig) -> Result<(), ConfigError> {
    if config.scheme != "http" && config.scheme != "https" {
        return Err(ConfigError::Validation(format!(
            "scheme must be http or https, got '{}'",
            config.scheme
        )));
    }

    let domain = config.domain.as_deref().ok_or(ConfigError::MissingDomain)?;
    validate_domain(domain, &config.scheme)?;

    if config.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output_dir cannot be empty".to_string(),
        ));
    }

    if config.max_concurrent_pages == Some(0) {
        return Err(ConfigError::Validation(
            "max_concurrent_pages must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates a bare domain: no scheme, no path, must form a URL with a host
fn validate_domain(domain: &str, scheme: &str) -> Result<(), ConfigError> {
    if domain.trim().is_empty() {
        return Err(ConfigError::InvalidDomain("domain cannot be empty".to_string()));
    }

    if domain.contains("://") {
        return Err(ConfigError::InvalidDomain(format!(
            "'{}' must be a bare hostname without a scheme",
            domain
        )));
    }

    if domain.contains('/') || domain.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidDomain(format!(
            "'{}' must not contain a path or whitespace",
            domain
        )));
    }

    let url = Url::parse(&format!("{}://{}", scheme, domain))
        .map_err(|e| ConfigError::InvalidDomain(format!("'{}': {}", domain, e)))?;

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidDomain(format!(
            "'{}' has no host component",
            domain
        )));
    }

    Ok(())
}

/// Validates HTTP timeouts
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if let Some(contact) = &config.contact_url {
        Url::parse(contact)
            .map_err(|e| ConfigError::Validation(format!("Invalid contact_url: {}", e)))?;
    }

    Ok(())
}
