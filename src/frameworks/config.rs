use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use url::Url;

pub const HOST_ENV_VAR: &str = "QUERY_API_HOST";
pub const PORT_ENV_VAR: &str = "QUERY_API_PORT";
pub const SEARCH_URL_ENV_VAR: &str = "SEARCH_URL";
pub const SEARCH_TIMEOUT_ENV_VAR: &str = "SEARCH_TIMEOUT_MS";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_millis(1500);

// Process configuration, loaded once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub search: Option<SearchConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSearchUrl { value: String, source: url::ParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSearchUrl { value, source } => {
                write!(f, "{SEARCH_URL_ENV_VAR} '{value}' is not a valid url: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidSearchUrl { source, .. } => Some(source),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or_default(&lookup, HOST_ENV_VAR, DEFAULT_HOST);
        let port = parse_or_default(&lookup, PORT_ENV_VAR, DEFAULT_PORT);

        let search = match lookup(SEARCH_URL_ENV_VAR).filter(|value| !value.trim().is_empty()) {
            Some(value) => {
                let base_url = Url::parse(value.trim())
                    .map_err(|source| ConfigError::InvalidSearchUrl { value, source })?;
                let millis = parse_or_default(
                    &lookup,
                    SEARCH_TIMEOUT_ENV_VAR,
                    DEFAULT_SEARCH_TIMEOUT.as_millis() as u64,
                );
                Some(SearchConfig {
                    base_url,
                    timeout: Duration::from_millis(millis),
                })
            }
            None => None,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            search,
        })
    }
}

// Unset falls back silently; unparsable falls back with a warning.
fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, %default, "invalid config value, using default");
            default
        }
    }
}
