//! URL processing utilities.

/// Join a base URL and path segments with single `/` separators.
///
/// Empty segments are skipped, so an empty output directory does not
/// produce `//` in the URL.
///
/// # Examples
/// ```ignore
/// assert_eq!(join_url("https://example.com/", &["assets", "x.css"]), "https://example.com/assets/x.css");
/// assert_eq!(join_url("", &["", "x.css"]), "/x.css");
/// ```
pub fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(segment);
    }
    url
}

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
