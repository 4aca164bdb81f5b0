//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub addr: IpAddr,

    /// Port to bind.
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from `SUBWAY_ADDR` and `SUBWAY_PORT`, falling
    /// back to the defaults for unset or unparsable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let addr = std::env::var("SUBWAY_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.addr);
        let port = std::env::var("SUBWAY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        Self { addr, port }
    }

    /// The socket address to serve on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_localhost_3000() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn socket_addr_combines_fields() {
        let config = ServerConfig {
            addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        };
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }
}
