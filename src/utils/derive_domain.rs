//! Domain derivation from published article URLs.
//!
//! Used to denormalize a hostname into persisted badge snapshots and to key
//! the best-effort logo inference in the catalog listing.

use url::Url;

/// Derives a hostname from a published URL.
///
/// # Rules
///
/// 1. Only HTTP and HTTPS URLs produce a domain
/// 2. Hostname is lowercased
/// 3. A leading `www.` label is stripped
/// 4. Ports and paths are discarded
///
/// Absent or unparsable URLs yield `None`, never an error: a report row
/// without a usable link is an expected state, not a fault.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     derive_domain(Some("https://WWW.Forbes.com/sites/article")),
///     Some("forbes.com".to_string())
/// );
/// assert_eq!(derive_domain(None), None);
/// assert_eq!(derive_domain(Some("not a url")), None);
/// ```
pub fn derive_domain(published_url: Option<&str>) -> Option<String> {
    let raw = published_url?;
    let url = Url::parse(raw).ok()?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return None,
    }

    let host = url.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_domain_simple() {
        assert_eq!(
            derive_domain(Some("https://example.com/article")),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_derive_domain_strips_www() {
        assert_eq!(
            derive_domain(Some("https://www.forbes.com/sites/article")),
            Some("forbes.com".to_string())
        );
    }

    #[test]
    fn test_derive_domain_lowercases_host() {
        assert_eq!(
            derive_domain(Some("https://WWW.Example.COM/Path")),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_derive_domain_keeps_subdomain() {
        assert_eq!(
            derive_domain(Some("https://markets.businessinsider.com/news")),
            Some("markets.businessinsider.com".to_string())
        );
    }

    #[test]
    fn test_derive_domain_discards_port_and_query() {
        assert_eq!(
            derive_domain(Some("http://example.com:8080/a?b=c#frag")),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_derive_domain_absent_url() {
        assert_eq!(derive_domain(None), None);
    }

    #[test]
    fn test_derive_domain_unparsable_url() {
        assert_eq!(derive_domain(Some("not a url")), None);
        assert_eq!(derive_domain(Some("")), None);
    }

    #[test]
    fn test_derive_domain_rejects_non_http_scheme() {
        assert_eq!(derive_domain(Some("ftp://example.com/file")), None);
        assert_eq!(derive_domain(Some("javascript:alert(1)")), None);
    }
}
