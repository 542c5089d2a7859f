//! Proxy URL validation.
//!
//! Stored proxy URLs come from an external registration system, so they are
//! checked before being handed to clients as a redirect target.

use url::Url;

/// Reasons a stored proxy URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProxyUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must be written as scheme://host")]
    NotAbsolute,
}

/// Checks that `input` is an absolute HTTP(S) URL.
///
/// The URL itself is not rewritten: callers redirect to the stored string
/// verbatim so clients see exactly what was registered. The parser repairs
/// forms like `http:host` or `https:\\host`, which a browser would read as
/// relative, so the stored text must literally start with `scheme://`.
///
/// # Errors
///
/// Returns [`ProxyUrlError::InvalidFormat`] for unparseable input.
/// Returns [`ProxyUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes
/// (`javascript:`, `ftp:`, `file:` ...).
/// Returns [`ProxyUrlError::NotAbsolute`] when `://` does not follow the scheme.
///
/// # Examples
///
/// ```ignore
/// assert!(check_proxy_url("https://demo.tunnel.example.com").is_ok());
/// assert!(check_proxy_url("ftp://demo.tunnel.example.com").is_err());
/// ```
pub fn check_proxy_url(input: &str) -> Result<(), ProxyUrlError> {
    let url = Url::parse(input).map_err(|e| ProxyUrlError::InvalidFormat(e.to_string()))?;

    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ProxyUrlError::UnsupportedProtocol);
    }

    match input.get(scheme.len()..) {
        Some(rest) if rest.starts_with("://") => Ok(()),
        _ => Err(ProxyUrlError::NotAbsolute),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        assert!(check_proxy_url("https://demo.tunnel.example.com").is_ok());
    }

    #[test]
    fn test_accepts_http_with_port_and_path() {
        assert!(check_proxy_url("http://127.0.0.1:8080/app?x=1").is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            check_proxy_url("not a url"),
            Err(ProxyUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            check_proxy_url("/just/a/path"),
            Err(ProxyUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert_eq!(
            check_proxy_url("ftp://files.example.com"),
            Err(ProxyUrlError::UnsupportedProtocol)
        );
        assert_eq!(
            check_proxy_url("javascript:alert(1)"),
            Err(ProxyUrlError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_rejects_forms_browsers_read_as_relative() {
        assert_eq!(
            check_proxy_url("http:example.com"),
            Err(ProxyUrlError::NotAbsolute)
        );
        assert_eq!(
            check_proxy_url("https:\\\\demo.example.com"),
            Err(ProxyUrlError::NotAbsolute)
        );
        assert_eq!(
            check_proxy_url("https:/demo.example.com"),
            Err(ProxyUrlError::NotAbsolute)
        );
        assert_eq!(
            check_proxy_url(" https://demo.example.com"),
            Err(ProxyUrlError::NotAbsolute)
        );
    }

    #[test]
    fn test_accepts_uppercase_scheme() {
        assert!(check_proxy_url("HTTPS://demo.example.com").is_ok());
    }

    #[test]
    fn test_rejects_empty_host() {
        assert!(check_proxy_url("http://").is_err());
    }
}
