use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Unset or
    /// unparsable values fall back to the defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("PORT value {:?} is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => {
                warn!("PORT not set, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse::<IpAddr>().unwrap_or_else(|_| {
                warn!("HOST value {:?} is not a valid address, using {}", raw, DEFAULT_HOST);
                DEFAULT_HOST
            }),
            None => DEFAULT_HOST,
        };

        Self { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
