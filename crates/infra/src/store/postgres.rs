//! Postgres-backed product store.
//!
//! Unquoted identifiers fold to lowercase in Postgres, so the table created
//! here is addressable as `Products` from any client using the same spelling.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::instrument;

use discover_core::ProductId;
use discover_products::{CatalogQuery, NewProduct, Product};

use super::{map_sqlx_error, ProductRow, ProductStore, StoreError, SELECT_COLUMNS};
use crate::config::Backend;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Products (
    Id SERIAL PRIMARY KEY,
    ProductName VARCHAR(100) NOT NULL,
    ProductURL VARCHAR(150) NOT NULL,
    ProductDesc VARCHAR(300) NOT NULL,
    ProductImage VARCHAR(250)
)
"#;

/// Postgres-backed product store.
///
/// ## Thread Safety
///
/// Uses the SQLx connection pool, which is `Send + Sync` and cheap to clone.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `url`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self), fields(backend = "postgres", kind = query.kind()), err)]
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> = match query {
            CatalogQuery::All => {
                sqlx::query_as::<_, ProductRow>(&format!("SELECT {SELECT_COLUMNS} FROM Products ORDER BY Id ASC"))
                    .fetch_all(&self.pool)
                    .await
            }
            CatalogQuery::Search(term) => {
                sqlx::query_as::<_, ProductRow>(&format!(
                    "SELECT {SELECT_COLUMNS} FROM Products \
                     WHERE ProductName ILIKE $1 ESCAPE '\\' ORDER BY Id ASC"
                ))
                .bind(term.like_pattern())
                .fetch_all(&self.pool)
                .await
            }
            CatalogQuery::SortedByName => {
                sqlx::query_as::<_, ProductRow>(&format!(
                    "SELECT {SELECT_COLUMNS} FROM Products \
                     ORDER BY LOWER(ProductName) COLLATE \"C\" ASC, \
                     ProductName COLLATE \"C\" ASC, Id ASC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| map_sqlx_error(query.kind(), e))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self, product), fields(backend = "postgres"), err)]
    async fn insert(&self, product: &NewProduct) -> Result<ProductId, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO Products (ProductName, ProductURL, ProductDesc, ProductImage)
            VALUES ($1, $2, $3, $4)
            RETURNING Id
            "#,
        )
        .bind(product.name())
        .bind(product.url())
        .bind(product.description())
        .bind(product.image())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert", e))?;

        let id: i32 = row.try_get(0).map_err(|e| map_sqlx_error("insert", e))?;
        Ok(ProductId::new(id))
    }

    #[instrument(skip(self), fields(backend = "postgres"), err)]
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }

    fn backend(&self) -> Backend {
        Backend::Postgres
    }
}
