use http::Uri;
use std::fmt;
use std::net::Ipv6Addr;
use thiserror::Error;

/// Port the DebtSimplifier RPC service listens on.
pub const RPC_PORT: u16 = 3001;

const SCHEME: &str = "http";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("hostname cannot be empty")]
    EmptyHostname,

    #[error("invalid endpoint '{address}': {reason}")]
    InvalidUri { address: String, reason: String },
}

/// Address of the remote service, fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
    uri: Uri,
}

impl Endpoint {
    /// Endpoint for the service running next to the given host on [`RPC_PORT`].
    pub fn for_hostname(hostname: &str) -> Result<Self, EndpointError> {
        Self::new(hostname, RPC_PORT)
    }

    pub fn new(hostname: &str, port: u16) -> Result<Self, EndpointError> {
        let host = hostname.trim();
        if host.is_empty() {
            return Err(EndpointError::EmptyHostname);
        }

        let address = format_address(host, port);

        // A hostname carries no port, path or credentials; colons only appear in IPv6 literals
        let bare = host.trim_start_matches('[').trim_end_matches(']');
        let has_foreign_parts = host
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '@' | '?' | '#'));
        if has_foreign_parts || (host.contains(':') && bare.parse::<Ipv6Addr>().is_err()) {
            return Err(EndpointError::InvalidUri {
                address,
                reason: "not a bare hostname or IP address".to_string(),
            });
        }

        let uri = address
            .parse::<Uri>()
            .map_err(|e| EndpointError::InvalidUri {
                address: address.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            host: host.to_string(),
            port,
            uri,
        })
    }

    pub fn scheme(&self) -> &str {
        SCHEME
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_address(&self.host, self.port))
    }
}

fn format_address(host: &str, port: u16) -> String {
    // Bare IPv6 literals need brackets inside an authority
    if host.contains(':') && !host.starts_with('[') {
        format!("{}://[{}]:{}", SCHEME, host, port)
    } else {
        format!("{}://{}:{}", SCHEME, host, port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname_and_fixed_port() {
        let endpoint = Endpoint::for_hostname("cknittel.com").unwrap();
        assert_eq!(endpoint.host(), "cknittel.com");
        assert_eq!(endpoint.port(), RPC_PORT);
        assert_eq!(endpoint.scheme(), "http");
        assert_eq!(endpoint.to_string(), "http://cknittel.com:3001");
    }

    #[test]
    fn test_ipv6_host_is_bracketed() {
        let endpoint = Endpoint::for_hostname("::1").unwrap();
        assert_eq!(endpoint.host(), "::1");
        assert_eq!(endpoint.to_string(), "http://[::1]:3001");
        assert_eq!(endpoint.uri().port_u16(), Some(3001));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let endpoint = Endpoint::for_hostname("  localhost ").unwrap();
        assert_eq!(endpoint.host(), "localhost");
    }

    #[test]
    fn test_empty_hostname_rejected() {
        assert_eq!(
            Endpoint::for_hostname("   "),
            Err(EndpointError::EmptyHostname)
        );
    }

    #[test]
    fn test_hostname_with_port_or_path_rejected() {
        assert!(Endpoint::for_hostname("localhost:8080").is_err());
        assert!(Endpoint::for_hostname("localhost/api").is_err());
        assert!(Endpoint::for_hostname("user@localhost").is_err());
        assert!(Endpoint::for_hostname("bad host").is_err());
    }
}
