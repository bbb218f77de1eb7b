/// Derives the output filename for an image URL
///
/// The name is the text after the last `/`, taken verbatim (a query string,
/// if any, stays part of the name). Returns `None` when that text cannot name
/// a file in a flat directory: empty, `.` or `..`.
///
/// # Examples
///
/// ```
/// use site_harvester::url::file_name_from_url;
///
/// assert_eq!(file_name_from_url("https://cdn.example.com/img/a.png"), Some("a.png"));
/// assert_eq!(file_name_from_url("https://cdn.example.com/img/"), None);
/// ```
pub fn file_name_from_url(url: &str) -> Option<&str> {
    let name = match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    };

    match name {
        "" | "." | ".." => None,
        _ => Some(name),
    }
}
