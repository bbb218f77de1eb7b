use crate::{UrlError, UrlResult};
use url::Url;

/// Builds the root page URL for a bare domain
///
/// The result is `{scheme}://{domain}` with no trailing slash, exactly the
/// string that is fetched and placed first in the work list.
///
/// # Examples
///
/// ```
/// use site_harvester::url::root_url;
///
/// assert_eq!(root_url("https", "example.com").unwrap(), "https://example.com");
/// assert!(root_url("https", "").is_err());
/// ```
pub fn root_url(scheme: &str, domain: &str) -> UrlResult<String> {
    if scheme != "http" && scheme != "https" {
        return Err(UrlError::InvalidScheme(scheme.to_string()));
    }

    let root = format!("{}://{}", scheme, domain);
    let parsed = Url::parse(&root)?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost(root));
    }

    Ok(root)
}

/// Returns true if `url` belongs to the harvested site
///
/// This is a plain substring test over the whole URL text, not a host
/// comparison: `https://other.com/?ref=example.com` matches `example.com`.
/// Existing harvests depend on that looseness, so keep it.
pub fn matches_domain_filter(url: &str, domain_filter: &str) -> bool {
    url.contains(domain_filter)
}
