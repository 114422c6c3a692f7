//! URL handling module for Magpie-Harvest
//!
//! Provides the two primitives every link-gathering site uses: the validity
//! gate (`is_valid`) and relative-href resolution against a base URL
//! (`resolve`). No network access, no side effects.

use url::Url;

/// Returns true iff the string parses into a URL with both a scheme and a
/// host.
///
/// This is the sole validity gate used everywhere links are gathered: seed
/// URLs, hrefs found in pages, and document links all pass through it before
/// any fetch is attempted.
///
/// # Examples
///
/// ```
/// use magpie_harvest::url::is_valid;
///
/// assert!(is_valid("https://example.com/report.pdf"));
/// assert!(!is_valid("/relative/path"));
/// assert!(!is_valid("not a url"));
/// ```
pub fn is_valid(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

/// Resolves a candidate href to an absolute URL.
///
/// If `candidate` is already a valid absolute URL it is returned unchanged.
/// Otherwise it is joined against `base` per standard relative-URL
/// resolution. Returns `None` when the candidate can be resolved neither way.
///
/// # Arguments
///
/// * `base` - The URL of the page the candidate was found on
/// * `candidate` - The raw href value
pub fn resolve(base: &Url, candidate: &str) -> Option<Url> {
    if is_valid(candidate) {
        // Already absolute; parse cannot fail after is_valid
        return Url::parse(candidate).ok();
    }

    base.join(candidate).ok().filter(|url| url.has_host())
}

/// Parses a seed URL, requiring it to be absolute.
pub fn parse_absolute(candidate: &str) -> crate::UrlResult<Url> {
    let url =
        Url::parse(candidate).map_err(|_| crate::UrlError::Parse(candidate.to_string()))?;
    if !url.has_host() {
        return Err(crate::UrlError::NotAbsolute(candidate.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/reports/index.html").unwrap()
    }

    #[test]
    fn test_is_valid_absolute_http() {
        assert!(is_valid("http://example.com/"));
        assert!(is_valid("https://example.com/a/b.pdf?x=1"));
    }

    #[test]
    fn test_is_valid_rejects_relative() {
        assert!(!is_valid("/path/to/file.pdf"));
        assert!(!is_valid("file.pdf"));
        assert!(!is_valid("../up/file.pdf"));
    }

    #[test]
    fn test_is_valid_rejects_scheme_without_host() {
        // Parses as a URL, but has no network location
        assert!(!is_valid("mailto:someone@example.com"));
        assert!(!is_valid("data:text/plain,hello"));
    }

    #[test]
    fn test_is_valid_rejects_garbage() {
        assert!(!is_valid(""));
        assert!(!is_valid("not a url"));
        assert!(!is_valid("://missing-scheme.com"));
    }

    #[test]
    fn test_resolve_returns_valid_candidate_unchanged() {
        let resolved = resolve(&base(), "https://other.org/doc.pdf").unwrap();
        assert_eq!(resolved.as_str(), "https://other.org/doc.pdf");
    }

    #[test]
    fn test_resolve_joins_root_relative() {
        let resolved = resolve(&base(), "/files/annual.pdf").unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/files/annual.pdf");
        assert_eq!(resolved.scheme(), base().scheme());
        assert_eq!(resolved.host_str(), base().host_str());
    }

    #[test]
    fn test_resolve_joins_path_relative() {
        let resolved = resolve(&base(), "annual.pdf").unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/reports/annual.pdf");
    }

    #[test]
    fn test_resolve_unresolvable_returns_none() {
        // A base that cannot be a base URL plus a relative candidate
        let mailto = Url::parse("mailto:x@example.com").unwrap();
        assert!(resolve(&mailto, "file.pdf").is_none());
    }

    #[test]
    fn test_parse_absolute_accepts_seed() {
        assert!(parse_absolute("https://a.gov/page").is_ok());
    }

    #[test]
    fn test_parse_absolute_rejects_relative() {
        assert!(parse_absolute("/page").is_err());
        assert!(parse_absolute("mailto:x@y.com").is_err());
    }
}
