//! Product storage boundary.
//!
//! Every route issues exactly one of the read shapes in [`CatalogQuery`] or a
//! single insert. Backends translate those into parameterized statements;
//! user input is never spliced into SQL text.
//!
//! ## Error Mapping
//!
//! SQLx errors are mapped to `StoreError` as follows:
//!
//! | SQLx Error | Database code | StoreError |
//! |------------|---------------|------------|
//! | Database (unique violation) | PG `23505`, MySQL `1062` | `Constraint` |
//! | Database (value too long) | PG `22001`, MySQL `1406` | `Constraint` |
//! | Database (not-null violation) | PG `23502`, MySQL `1048` | `Constraint` |
//! | Database (other) | any | `Query` |
//! | PoolTimedOut / PoolClosed / Io / Tls | n/a | `Unavailable` |
//! | Other | n/a | `Query` |

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use discover_core::{DomainError, ProductId};
use discover_products::{CatalogQuery, NewProduct, Product};

use crate::config::{Backend, DatabaseConfig};

pub mod in_memory;
pub mod mysql;
pub mod postgres;

pub use in_memory::InMemoryProductStore;
pub use mysql::MySqlProductStore;
pub use postgres::PostgresProductStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The database could not be reached (pool exhausted/closed, network).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A row was rejected by a table constraint.
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// Any other statement failure.
    #[error("query failed: {0}")]
    Query(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Persistent home of catalog products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Run one of the catalog read shapes.
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Product>, StoreError>;

    /// Insert a validated submission and return the id the store assigned.
    async fn insert(&self, product: &NewProduct) -> Result<ProductId, StoreError>;

    /// Create the `Products` table if it does not exist.
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Backend label for logs.
    fn backend(&self) -> Backend;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Product>, StoreError> {
        (**self).fetch(query).await
    }

    async fn insert(&self, product: &NewProduct) -> Result<ProductId, StoreError> {
        (**self).insert(product).await
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        (**self).ensure_schema().await
    }

    fn backend(&self) -> Backend {
        (**self).backend()
    }
}

/// Open the store described by `config`, bootstrapping the schema if asked to.
pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn ProductStore>, StoreError> {
    let store: Arc<dyn ProductStore> = match (config.backend, config.url.as_deref()) {
        (Backend::Memory, _) => Arc::new(InMemoryProductStore::new()),
        (Backend::Postgres, Some(url)) => {
            Arc::new(PostgresProductStore::connect(url, config.max_connections).await?)
        }
        (Backend::MySql, Some(url)) => {
            Arc::new(MySqlProductStore::connect(url, config.max_connections).await?)
        }
        (backend, None) => {
            return Err(StoreError::Unavailable(format!(
                "no DATABASE_URL configured for {} backend",
                backend.as_str()
            )));
        }
    };

    if config.init_schema {
        store.ensure_schema().await?;
    }

    tracing::info!(backend = store.backend().as_str(), "product store ready");
    Ok(store)
}

/// Map a sqlx error from `operation` onto the store's error model.
pub(crate) fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = format!("database error in {}: {}", operation, db_err.message());
            match db_err.code().as_deref() {
                Some("23505" | "22001" | "23502" | "1062" | "1406" | "1048") => {
                    StoreError::Constraint(msg)
                }
                _ => StoreError::Query(msg),
            }
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StoreError::Unavailable(format!("connection pool unavailable in {}", operation))
        }
        sqlx::Error::Io(e) => StoreError::Unavailable(format!("io error in {}: {}", operation, e)),
        sqlx::Error::Tls(e) => StoreError::Unavailable(format!("tls error in {}: {}", operation, e)),
        _ => StoreError::Query(format!("sqlx error in {}: {}", operation, err)),
    }
}

/// Column list shared by every backend's `SELECT`.
///
/// Aliases are lowercase so Postgres identifier folding and MySQL agree.
pub(crate) const SELECT_COLUMNS: &str = "Id AS id, ProductName AS name, ProductURL AS url, \
     ProductDesc AS description, ProductImage AS image";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProductRow {
    id: i32,
    name: String,
    url: String,
    description: String,
    image: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::new(ProductId::new(row.id), row.name, row.url, row.description, row.image)
    }
}
