use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Default host of a locally started `gaiacli rest-server`.
pub const DEFAULT_HOST: &str = "localhost";
/// Default port of a locally started `gaiacli rest-server`.
pub const DEFAULT_PORT: u16 = 1317;

/// URL scheme used to reach the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            other => Err(format!("unknown scheme: {other}")),
        }
    }
}

/// Immutable description of the node every request is sent to.
///
/// The base URL is derived once at construction. Construction never fails:
/// a host that cannot form a valid URL is reported by the dispatcher when
/// the first request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    scheme: Scheme,
    host: String,
    port: u16,
    base_url: String,
}

impl Connection {
    pub fn new(scheme: Scheme, host: impl Into<String>, port: u16) -> Self {
        let host = host.into();
        let base_url = format_base_url(scheme, &host, port);
        Self {
            scheme,
            host,
            port,
            base_url,
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `scheme://host:port`, without a trailing slash so a path starting
    /// with `/` can be appended as is.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for Connection {
    fn default() -> Self {
        Connection::new(Scheme::default(), DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url)
    }
}

fn format_base_url(scheme: Scheme, host: &str, port: u16) -> String {
    let host = host.trim().trim_end_matches('/');
    // Bare IPv6 literals need brackets inside an authority.
    if host.contains(':') && !host.starts_with('[') {
        format!("{scheme}://[{host}]:{port}")
    } else {
        format!("{scheme}://{host}:{port}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_rest_server() {
        let connection = Connection::default();
        assert_eq!(connection.scheme(), Scheme::Https);
        assert_eq!(connection.host(), "localhost");
        assert_eq!(connection.port(), 1317);
        assert_eq!(connection.base_url(), "https://localhost:1317");
    }

    #[test]
    fn base_url_is_scheme_host_port() {
        let connection = Connection::new(Scheme::Http, "10.0.0.7", 8080);
        assert_eq!(connection.base_url(), "http://10.0.0.7:8080");
        assert_eq!(connection.to_string(), "http://10.0.0.7:8080");
    }

    #[test]
    fn base_url_parses_as_url_authority() {
        for (scheme, host, port) in [
            (Scheme::Http, "localhost", 0),
            (Scheme::Https, "node.example.org", 65535),
            (Scheme::Http, "127.0.0.1", 1317),
            (Scheme::Https, "::1", 443),
        ] {
            let connection = Connection::new(scheme, host, port);
            let url = url::Url::parse(connection.base_url()).unwrap();
            assert_eq!(url.scheme(), scheme.as_str());
            assert_eq!(url.port_or_known_default(), Some(port));
        }
    }

    #[test]
    fn trailing_slash_on_host_is_dropped() {
        let connection = Connection::new(Scheme::Http, "localhost/", 1317);
        assert_eq!(connection.base_url(), "http://localhost:1317");
    }

    #[test]
    fn ipv6_host_is_bracketed() {
        let connection = Connection::new(Scheme::Http, "::1", 1317);
        assert_eq!(connection.base_url(), "http://[::1]:1317");
    }

    #[test]
    fn scheme_from_str() {
        assert_eq!("HTTP".parse::<Scheme>().unwrap(), Scheme::Http);
        assert_eq!("https".parse::<Scheme>().unwrap(), Scheme::Https);
        assert!("ftp".parse::<Scheme>().is_err());
    }
}
