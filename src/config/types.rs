use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for Site-Harvester
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub harvest: HarvestConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

impl Config {
    /// Builds a default configuration targeting `domain`
    pub fn for_domain(domain: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.harvest.domain = Some(domain.into());
        config
    }
}

/// What to harvest and where to put it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HarvestConfig {
    /// Bare hostname of the site, without scheme or path
    #[serde(default)]
    pub domain: Option<String>,

    /// Scheme used to build the root page URL
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Flat directory that receives every saved image
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Upper bound on concurrently scraped pages; unbounded when absent
    #[serde(default)]
    pub max_concurrent_pages: Option<usize>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            domain: None,
            scheme: default_scheme(),
            output_dir: default_output_dir(),
            max_concurrent_pages: None,
        }
    }
}

/// HTTP client behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HttpConfig {
    /// Whole-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TCP/TLS connect timeout (seconds)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(default)]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the header value: `Name/Version` or `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

fn default_scheme() -> String {
    "https".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_crawler_name() -> String {
    "SiteHarvester".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_domain_uses_defaults() {
        let config = Config::for_domain("example.com");
        assert_eq!(config.harvest.domain.as_deref(), Some("example.com"));
        assert_eq!(config.harvest.scheme, "https");
        assert_eq!(config.harvest.output_dir, PathBuf::from("./output"));
        assert!(config.harvest.max_concurrent_pages.is_none());
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_user_agent_header_without_contact() {
        let ua = UserAgentConfig {
            crawler_name: "Bot".to_string(),
            crawler_version: "2.1".to_string(),
            contact_url: None,
        };
        assert_eq!(ua.header_value(), "Bot/2.1");
    }

    #[test]
    fn test_user_agent_header_with_contact() {
        let ua = UserAgentConfig {
            crawler_name: "Bot".to_string(),
            crawler_version: "2.1".to_string(),
            contact_url: Some("https://example.com/bot".to_string()),
        };
        assert_eq!(ua.header_value(), "Bot/2.1 (+https://example.com/bot)");
    }
}
