use std::time::Duration;

/// Default upstream base URL.
pub const DEFAULT_API_BASE: &str = "https://codeforces.com/api";

/// Default timeout for upstream requests (30 seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 8000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CODEFORCES_TIMEOUT_SECS must be a positive integer")]
    InvalidTimeout,
    #[error("MCP_TRANSPORT must be `stdio` or `http`, got `{0}`")]
    InvalidTransport(String),
    #[error("MCP_PORT must be a valid TCP port, got `{0}`")]
    InvalidPort(String),
}

/// Which transport the MCP server speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TransportKind {
    /// Newline-delimited JSON-RPC on stdin/stdout.
    Stdio,
    /// JSON-RPC over `POST /mcp`.
    Http,
}

impl std::str::FromStr for TransportKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http),
            _ => Err(ConfigError::InvalidTransport(s.to_string())),
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_base: String,
    pub request_timeout: Duration,
    pub transport: TransportKind,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            transport: TransportKind::Stdio,
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `CODEFORCES_API_BASE` (optional): upstream base URL
    /// - `CODEFORCES_TIMEOUT_SECS` (optional, default 30): max seconds per upstream request
    /// - `MCP_TRANSPORT` (optional, default `stdio`): `stdio` or `http`
    /// - `MCP_HOST` / `MCP_PORT` (optional, default `0.0.0.0:8000`): HTTP bind address
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base = lookup("CODEFORCES_API_BASE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_base);

        let request_timeout = match lookup("CODEFORCES_TIMEOUT_SECS") {
            Some(val) => match val.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout),
            },
            None => defaults.request_timeout,
        };

        let transport = match lookup("MCP_TRANSPORT") {
            Some(val) => val.parse()?,
            None => defaults.transport,
        };

        let host = lookup("MCP_HOST").unwrap_or(defaults.host);

        let port = match lookup("MCP_PORT") {
            Some(val) => val
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(val))?,
            None => defaults.port,
        };

        Ok(Self {
            api_base,
            request_timeout,
            transport,
            host,
            port,
        })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        transport: Option<TransportKind>,
        host: Option<String>,
        port: Option<u16>,
    ) -> Self {
        if let Some(transport) = transport {
            self.transport = transport;
        }
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}
