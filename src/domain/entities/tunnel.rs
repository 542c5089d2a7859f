//! Tunnel entity: a registered name and the public URL it proxies to.

/// A tunnel record as stored by the registration system.
///
/// The `proxy_url` is `None` or empty while the tunnel is under maintenance.
/// Names are not guaranteed to be unique; lookups take the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunnelRecord {
    pub name: String,
    pub proxy_url: Option<String>,
}

impl TunnelRecord {
    /// Creates a new TunnelRecord instance.
    pub fn new(name: impl Into<String>, proxy_url: Option<String>) -> Self {
        Self {
            name: name.into(),
            proxy_url,
        }
    }

    /// Returns the proxy URL if the tunnel is active, `None` while it is
    /// under maintenance.
    ///
    /// Empty strings count as missing.
    pub fn active_url(&self) -> Option<&str> {
        self.proxy_url.as_deref().filter(|url| !url.is_empty())
    }
}
