use url::Url;

/// Scheme prefixed onto image references that lack one
const DEFAULT_IMAGE_SCHEME: &str = "https:";

/// Normalizes an image `src` value into an absolute URL string
///
/// References without an explicit scheme (protocol-relative `//host/path`
/// being the common case) get `https:` prepended. Anything that already
/// starts with a scheme is returned unchanged, even if it is not a valid
/// URL, so the function is idempotent.
///
/// Returns `None` for blank sources.
///
/// # Examples
///
/// ```
/// use site_harvester::url::normalize_image_src;
///
/// assert_eq!(
///     normalize_image_src("//cdn.example.com/a.png").as_deref(),
///     Some("https://cdn.example.com/a.png")
/// );
/// assert_eq!(
///     normalize_image_src("https://cdn.example.com/b.jpg").as_deref(),
///     Some("https://cdn.example.com/b.jpg")
/// );
/// assert_eq!(normalize_image_src("   "), None);
/// ```
pub fn normalize_image_src(src: &str) -> Option<String> {
    let src = src.trim();
    if src.is_empty() {
        return None;
    }

    if has_scheme(src) {
        Some(src.to_string())
    } else {
        Some(format!("{}{}", DEFAULT_IMAGE_SCHEME, src))
    }
}

/// Returns true if `s` starts with a URI scheme followed by `:`
///
/// Purely syntactic (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`), so a
/// reference like `https://host:99999/x` still counts as having one.
pub fn has_scheme(s: &str) -> bool {
    let Some((scheme, _)) = s.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Returns true if `s` is an absolute `http`/`https` URL
pub fn is_absolute_http(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
