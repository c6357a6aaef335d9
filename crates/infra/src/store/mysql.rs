//! MySQL-backed product store.

use async_trait::async_trait;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::instrument;

use discover_core::ProductId;
use discover_products::{CatalogQuery, NewProduct, Product};

use super::{map_sqlx_error, ProductRow, ProductStore, StoreError, SELECT_COLUMNS};
use crate::config::Backend;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Products (
    Id INT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    ProductName VARCHAR(100) NOT NULL,
    ProductURL VARCHAR(150) NOT NULL,
    ProductDesc VARCHAR(300) NOT NULL,
    ProductImage VARCHAR(250)
) DEFAULT CHARSET = utf8mb4
"#;

/// MySQL-backed product store.
///
/// Search lowercases both sides so the match is case-insensitive regardless
/// of the column collation. `\` is MySQL's default `LIKE` escape character.
/// The sort compares bytes, since the default `_ci` collations treat
/// `Apple` and `apple` as equal.
#[derive(Debug, Clone)]
pub struct MySqlProductStore {
    pool: MySqlPool,
}

impl MySqlProductStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl ProductStore for MySqlProductStore {
    #[instrument(skip(self), fields(backend = "mysql", kind = query.kind()), err)]
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Product>, StoreError> {
        let rows = match query {
            CatalogQuery::All => {
                sqlx::query_as::<_, ProductRow>(&format!(
                    "SELECT {SELECT_COLUMNS} FROM Products ORDER BY Id ASC"
                ))
                .fetch_all(&self.pool)
                .await
            }
            CatalogQuery::Search(term) => {
                sqlx::query_as::<_, ProductRow>(&format!(
                    "SELECT {SELECT_COLUMNS} FROM Products \
                     WHERE LOWER(ProductName) LIKE LOWER(?) ORDER BY Id ASC"
                ))
                .bind(term.like_pattern())
                .fetch_all(&self.pool)
                .await
            }
            CatalogQuery::SortedByName => {
                sqlx::query_as::<_, ProductRow>(&format!(
                    "SELECT {SELECT_COLUMNS} FROM Products \
                     ORDER BY CAST(LOWER(ProductName) AS BINARY) ASC, \
                     CAST(ProductName AS BINARY) ASC, Id ASC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| map_sqlx_error(query.kind(), e))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self, product), fields(backend = "mysql"), err)]
    async fn insert(&self, product: &NewProduct) -> Result<ProductId, StoreError> {
        let done = sqlx::query(
            r#"
            INSERT INTO Products (ProductName, ProductURL, ProductDesc, ProductImage)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(product.name())
        .bind(product.url())
        .bind(product.description())
        .bind(product.image())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert", e))?;

        Ok(ProductId::try_from(done.last_insert_id())?)
    }

    #[instrument(skip(self), fields(backend = "mysql"), err)]
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }

    fn backend(&self) -> Backend {
        Backend::MySql
    }
}
