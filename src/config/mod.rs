use std::env;

use reqwest::Url;

const DEFAULT_SERVER_ENDPOINT: &str = "http://localhost:8000";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Configuration errors surfaced at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PUBLIC_SERVER_URL is not a valid URL ({value}): {reason}")]
    InvalidEndpoint { value: String, reason: String },

    #[error("PUBLIC_SERVER_URL must use http or https, got {0}")]
    UnsupportedScheme(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_endpoint: Url,
    pub host: String,
    pub port: u16,
    pub login_path: String,
    pub frontend_url: String,
    pub upstream_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_endpoint = lookup("PUBLIC_SERVER_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_ENDPOINT.to_string());
        let server_endpoint = parse_endpoint(raw_endpoint.trim())?;

        Ok(Self {
            server_endpoint,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            login_path: lookup("LOGIN_PATH")
                .filter(|v| v.starts_with('/'))
                .unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string()),
            frontend_url: lookup("FRONTEND_URL")
                .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            upstream_timeout_secs: lookup("UPSTREAM_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        })
    }

    /// Host and port to listen on. The host may be an IP literal or a
    /// hostname; it is resolved when binding.
    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn parse_endpoint(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidEndpoint {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::{SocketAddr, ToSocketAddrs};

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_endpoint.as_str(), "http://localhost:8000/");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.upstream_timeout_secs, 10);
    }

    #[test]
    fn empty_endpoint_falls_back_to_default() {
        let config = config_from(&[("PUBLIC_SERVER_URL", "  ")]).unwrap();
        assert_eq!(config.server_endpoint.host_str(), Some("localhost"));
        assert_eq!(config.server_endpoint.port(), Some(8000));
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("PUBLIC_SERVER_URL", "https://api.example.test"),
            ("PORT", "8080"),
            ("LOGIN_PATH", "/auth/login"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(config.server_endpoint.scheme(), "https");
        assert_eq!(config.server_endpoint.host_str(), Some("api.example.test"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.login_path, "/auth/login");
        assert_eq!(config.upstream_timeout_secs, 3);
    }

    #[test]
    fn invalid_numbers_use_defaults() {
        let config = config_from(&[("PORT", "not-a-port"), ("UPSTREAM_TIMEOUT_SECS", "0")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.upstream_timeout_secs, 10);
    }

    #[test]
    fn hostname_and_ipv6_hosts_are_accepted() {
        let config = config_from(&[("HOST", "localhost"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.bind_address(), ("localhost", 8080));

        let config = config_from(&[("HOST", "::")]).unwrap();
        let addrs: Vec<_> = config.bind_address().to_socket_addrs().unwrap().collect();
        assert_eq!(addrs, vec!["[::]:3000".parse::<SocketAddr>().unwrap()]);
    }

    #[test]
    fn relative_login_path_is_rejected() {
        let config = config_from(&[("LOGIN_PATH", "login")]).unwrap();
        assert_eq!(config.login_path, "/login");
    }

    #[test]
    fn invalid_endpoint_is_an_error() {
        let err = config_from(&[("PUBLIC_SERVER_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }

    #[test]
    fn non_http_endpoint_is_an_error() {
        let err = config_from(&[("PUBLIC_SERVER_URL", "ftp://files.example.test")]).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(ref s) if s == "ftp"));
    }
}
