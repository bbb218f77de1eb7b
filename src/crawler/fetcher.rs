//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester, including:
//! - Building the shared HTTP client with a proper user agent string
//! - GET requests for page HTML and image bytes
//! - Error classification
//!
//! Nothing in here returns `Err` or panics on a network problem. Every
//! failure is logged once and handed back as a [`FetchFailure`].

use crate::config::Config;
use reqwest::{Client, StatusCode};
use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;

/// Substrings that identify TLS failures in transport error messages
const TLS_MARKERS: &[&str] = &["certificate", "handshake"];

/// Why a fetch produced no content
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// 4xx response
    #[error("HTTP {status} (not found)")]
    NotFound { status: u16 },

    /// 5xx or any other non-200 response
    #[error("HTTP {status} (server error)")]
    ServerError { status: u16 },

    /// TLS handshake or certificate validation failed
    #[error("TLS error: {message}")]
    Tls { message: String },

    /// DNS failure, refused or reset connection, broken body
    #[error("Network error: {message}")]
    Network { message: String },

    /// The client timeout elapsed
    #[error("Request timeout")]
    Timeout,
}

/// Result of a fetch operation
///
/// `Failure` means "skip this item"; it never aborts sibling work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult<T = String> {
    /// Response was 200 and the body was read
    Success(T),

    /// Nothing usable came back
    Failure(FetchFailure),
}

impl<T> FetchResult<T> {
    /// Returns true for `Success`
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Converts into the payload, discarding the failure kind
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure kind, if any
    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Maps the success payload
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchResult<U> {
        match self {
            Self::Success(value) => FetchResult::Success(f(value)),
            Self::Failure(failure) => FetchResult::Failure(failure),
        }
    }
}

impl<T> From<Result<T, FetchFailure>> for FetchResult<T> {
    fn from(result: Result<T, FetchFailure>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

/// A downloaded image, alive only until it is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// Normalized URL the bytes came from
    pub source: String,

    /// Raw response body
    pub bytes: Vec<u8>,
}

/// Builds the HTTP client shared by every fetcher in a harvest
///
/// # Arguments
///
/// * `config` - The harvester configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use site_harvester::config::Config;
/// use site_harvester::crawler::build_http_client;
///
/// let config = Config::for_domain("example.com");
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .connect_timeout(Duration::from_secs(config.http.connect_timeout_secs))
        .use_rustls_tls()
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches HTML pages as text
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a fetcher over a shared client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// GETs `url` and returns its body text
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | HTTP 200 | `Success(body)` |
    /// | HTTP 4xx | `NotFound` |
    /// | Other non-200 | `ServerError` |
    /// | TLS/certificate error | `Tls` |
    /// | Client timeout | `Timeout` |
    /// | Anything else | `Network` |
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let result = match get(&self.client, url).await {
            Ok(response) => response.text().await.map_err(|e| classify_error(&e)),
            Err(failure) => Err(failure),
        };

        if let Err(failure) = &result {
            tracing::error!("Failed to fetch page {}: {}", url, failure);
        }

        result.into()
    }
}

/// Fetches image bytes
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    /// Creates a fetcher over a shared client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// GETs `url` and returns the raw body, keeping the failure kind
    pub async fn fetch_bytes(&self, url: &str) -> FetchResult<Vec<u8>> {
        let result = match get(&self.client, url).await {
            Ok(response) => response
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|e| classify_error(&e)),
            Err(failure) => Err(failure),
        };

        if let Err(failure) = &result {
            tracing::error!("Failed to fetch image {}: {}", url, failure);
        }

        result.into()
    }

    /// GETs `url` and wraps the bytes as an [`ImageAsset`]
    ///
    /// Every failure collapses to `None`; the cause is only in the log.
    pub async fn fetch(&self, url: &str) -> Option<ImageAsset> {
        self.fetch_bytes(url)
            .await
            .map(|bytes| ImageAsset {
                source: url.to_string(),
                bytes,
            })
            .success()
    }
}

/// Sends a GET and accepts only a 200 response
async fn get(client: &Client, url: &str) -> Result<reqwest::Response, FetchFailure> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(&e))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(classify_status(status));
    }

    Ok(response)
}

/// Maps a non-200 status onto a failure kind
pub fn classify_status(status: StatusCode) -> FetchFailure {
    if status.is_client_error() {
        FetchFailure::NotFound {
            status: status.as_u16(),
        }
    } else {
        FetchFailure::ServerError {
            status: status.as_u16(),
        }
    }
}

/// Maps a transport error onto a failure kind
fn classify_error(error: &reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        return FetchFailure::Timeout;
    }

    let message = error_chain(error);

    // Body and decode errors can carry InvalidData io errors too
    if !error.is_body() && !error.is_decode() {
        if let Some(cause) = error.source() {
            if is_tls_failure(cause) {
                return FetchFailure::Tls { message };
            }
        }
    }

    FetchFailure::Network { message }
}

/// Returns true if any error in the chain looks like a TLS failure
///
/// The TLS layer surfaces handshake and certificate problems as
/// `io::ErrorKind::InvalidData`; messages are checked as a fallback. The
/// outermost reqwest error is skipped by callers because its message
/// embeds the URL.
pub(crate) fn is_tls_failure(error: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::InvalidData {
                return true;
            }
        }

        let message = err.to_string().to_ascii_lowercase();
        if TLS_MARKERS.iter().any(|marker| message.contains(marker)) {
            return true;
        }

        current = err.source();
    }
    false
}

/// Joins an error and its sources into one line
fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut current = error.source();
    while let Some(err) = current {
        let text = err.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        current = err.source();
    }
    message
}
