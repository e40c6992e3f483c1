//! Process configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use chrono_tz::Tz;

use crate::upstream::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, MrtConfig};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default zone that decides what "today" means.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Jakarta;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to listen on
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Upstream client settings
    pub upstream: MrtConfig,
    /// Zone schedules are anchored in
    pub timezone: Tz,
    /// Serve a local snapshot instead of the live API
    pub fixture_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            upstream: MrtConfig::default(),
            timezone: DEFAULT_TIMEZONE,
            fixture_dir: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment, loading `.env`
    /// first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Unset and blank values take
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match get("SERVER_HOST") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_HOST",
                value: v,
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match get("SERVER_PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: v,
            })?,
            None => DEFAULT_PORT,
        };

        let timezone = match get("MRT_TIMEZONE") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "MRT_TIMEZONE",
                value: v,
            })?,
            None => DEFAULT_TIMEZONE,
        };

        let api_url = get("MRT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut upstream = MrtConfig::new(api_url)
            .with_timeout(parse_timeout(get("HTTP_TIMEOUT").as_deref()));
        if let Some(url) = get("MRT_SCHEDULES_URL") {
            upstream = upstream.with_schedules_url(url);
        }
        if let Some(url) = get("MRT_FARES_URL") {
            upstream = upstream.with_fares_url(url);
        }

        Ok(Self {
            host,
            port,
            upstream,
            timezone,
            fixture_dir: get("MRT_FIXTURE_DIR").map(PathBuf::from),
        })
    }

    /// The socket address to bind.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Timeout in seconds; zero or unparsable falls back to the default.
fn parse_timeout(value: Option<&str>) -> u64 {
    match value.and_then(|v| v.trim().parse::<u64>().ok()) {
        Some(secs) if secs > 0 => secs,
        _ => DEFAULT_TIMEOUT_SECS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.timezone, chrono_tz::Asia::Jakarta);
        assert_eq!(config.upstream.stations_url, DEFAULT_API_URL);
        assert_eq!(config.upstream.fares_url, DEFAULT_API_URL);
        assert_eq!(config.upstream.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.fixture_dir.is_none());
    }

    #[test]
    fn overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "3000"),
            ("HTTP_TIMEOUT", "30"),
            ("MRT_API_URL", "http://localhost:9000/stations"),
            ("MRT_FARES_URL", "http://localhost:9000/fares"),
            ("MRT_TIMEZONE", "Asia/Singapore"),
            ("MRT_FIXTURE_DIR", "fixtures"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.upstream.timeout_secs, 30);
        assert_eq!(config.upstream.stations_url, "http://localhost:9000/stations");
        assert_eq!(config.upstream.schedules_url, "http://localhost:9000/stations");
        assert_eq!(config.upstream.fares_url, "http://localhost:9000/fares");
        assert_eq!(config.timezone, chrono_tz::Asia::Singapore);
        assert_eq!(config.fixture_dir, Some(PathBuf::from("fixtures")));
    }

    #[test]
    fn blank_values_take_defaults() {
        let config =
            AppConfig::from_lookup(lookup(&[("SERVER_PORT", "  "), ("MRT_API_URL", "")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.upstream.stations_url, DEFAULT_API_URL);
    }

    #[test]
    fn timeout_fallback() {
        assert_eq!(parse_timeout(None), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout(Some("0")), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout(Some("soon")), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout(Some("-5")), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout(Some(" 25 ")), 25);
    }

    #[test]
    fn invalid_values() {
        let err = AppConfig::from_lookup(lookup(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: "eighty".into()
            }
        );

        let err = AppConfig::from_lookup(lookup(&[("MRT_TIMEZONE", "Mars/Olympus")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid MRT_TIMEZONE: \"Mars/Olympus\"");

        assert!(AppConfig::from_lookup(lookup(&[("SERVER_HOST", "localhost")])).is_err());
    }
}
