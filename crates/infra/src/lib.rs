//! Infrastructure layer: product storage backends and configuration.

pub mod config;
pub mod store;

pub use config::{AppConfig, Backend, ConfigError, DatabaseConfig, ServerConfig};
pub use store::{connect, InMemoryProductStore, ProductStore, StoreError};
