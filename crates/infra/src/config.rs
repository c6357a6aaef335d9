//! Configuration loading and representation.
//!
//! Values come from the process environment, after an optional `.env` file
//! has been loaded. [`AppConfig::from_lookup`] takes any key lookup so tests
//! never have to touch the real environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable '{0}'")]
    Missing(&'static str),

    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            message: message.into(),
        }
    }
}

/// Which product store backs the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Backend {
    Memory,
    Postgres,
    MySql,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Memory => "memory",
            Backend::Postgres => "postgres",
            Backend::MySql => "mysql",
        }
    }

    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_lowercase().as_str() {
            "memory" | "in-memory" => Ok(Backend::Memory),
            "postgres" | "postgresql" | "pg" => Ok(Backend::Postgres),
            "mysql" => Ok(Backend::MySql),
            other => Err(ConfigError::invalid(
                "CATALOG_BACKEND",
                format!("'{other}' (expected memory, postgres or mysql)"),
            )),
        }
    }

    fn infer_from_url(url: &str) -> Option<Self> {
        let scheme = url.split_once("://")?.0.to_lowercase();
        match scheme.as_str() {
            "postgres" | "postgresql" => Some(Backend::Postgres),
            "mysql" | "mariadb" => Some(Backend::MySql),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub backend: Backend,
    /// Connection URL; `None` only for [`Backend::Memory`].
    pub url: Option<String>,
    pub max_connections: u32,
    /// Create the `Products` table at start-up if it is missing.
    pub init_schema: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            url: None,
            max_connections: 5,
            init_schema: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load from the process environment (reads `.env` first if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut server = ServerConfig::default();
        if let Some(port) = get("PORT") {
            server.port = port
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("PORT", format!("{e}")))?;
        }
        if let Some(host) = get("HOST") {
            server.host = host
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("HOST", format!("{e}")))?;
        }

        let url = get("DATABASE_URL").map(|u| u.trim().to_string());
        let backend = match get("CATALOG_BACKEND") {
            Some(raw) => Backend::parse(&raw)?,
            None => match url.as_deref() {
                None => Backend::Memory,
                Some(u) => Backend::infer_from_url(u).ok_or_else(|| {
                    ConfigError::invalid("DATABASE_URL", "unrecognised scheme; set CATALOG_BACKEND")
                })?,
            },
        };
        if backend != Backend::Memory && url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let mut database = DatabaseConfig {
            backend,
            url,
            ..DatabaseConfig::default()
        };
        if let Some(max) = get("DATABASE_MAX_CONNECTIONS") {
            database.max_connections = match max.trim().parse::<u32>() {
                Ok(0) => return Err(ConfigError::invalid("DATABASE_MAX_CONNECTIONS", "must be at least 1")),
                Ok(n) => n,
                Err(e) => return Err(ConfigError::invalid("DATABASE_MAX_CONNECTIONS", format!("{e}"))),
            };
        }
        if let Some(init) = get("CATALOG_INIT_SCHEMA") {
            database.init_schema = init
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("CATALOG_INIT_SCHEMA", format!("{e}")))?;
        }

        Ok(Self { server, database })
    }
}
