use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use discover_core::ProductId;
use discover_products::{CatalogQuery, NewProduct, Product};

use super::{ProductStore, StoreError};
use crate::config::Backend;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Product>,
    last_id: i32,
}

/// In-memory product table.
///
/// Intended for tests/dev. Ids auto-increment from 1 like a `SERIAL` column.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    table: RwLock<Table>,
    unavailable: AtomicBool,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the database going away (`true`) or coming back (`false`).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self, operation: &str) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!(
                "in-memory store offline during {operation}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Product>, StoreError> {
        self.check_available(query.kind())?;
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::Unavailable("in-memory table lock poisoned".into()))?;
        Ok(query.apply(&table.rows))
    }

    async fn insert(&self, product: &NewProduct) -> Result<ProductId, StoreError> {
        self.check_available("insert")?;
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::Unavailable("in-memory table lock poisoned".into()))?;

        let next = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Constraint("Products.Id sequence exhausted".into()))?;
        let id = ProductId::new(next);
        table.last_id = next;
        table.rows.push(Product::from_new(id, product));
        Ok(id)
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.check_available("ensure_schema")
    }

    fn backend(&self) -> Backend {
        Backend::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_products::SearchTerm;

    fn new_product(name: &str) -> NewProduct {
        NewProduct::new(name, "https://example.com", "a thing", None).unwrap()
    }

    #[tokio::test]
    async fn inserted_rows_appear_in_listing() {
        let store = InMemoryProductStore::new();
        let a = store.insert(&new_product("Zebra")).await.unwrap();
        let b = store.insert(&new_product("apple")).await.unwrap();
        assert_eq!(a, ProductId::new(1));
        assert_eq!(b, ProductId::new(2));

        let all = store.fetch(&CatalogQuery::All).await.unwrap();
        let names: Vec<_> = all.iter().map(Product::name).collect();
        assert_eq!(names, vec!["Zebra", "apple"]);
    }

    #[tokio::test]
    async fn search_and_sort_follow_query_semantics() {
        let store = InMemoryProductStore::new();
        for name in ["Rust in Action", "Go Programming", "the rust book"] {
            store.insert(&new_product(name)).await.unwrap();
        }

        let hits = store
            .fetch(&CatalogQuery::Search(SearchTerm::new("RUST")))
            .await
            .unwrap();
        assert_eq!(hits.len(), 2);

        let sorted = store.fetch(&CatalogQuery::SortedByName).await.unwrap();
        let names: Vec<_> = sorted.iter().map(Product::name).collect();
        assert_eq!(names, vec!["Go Programming", "Rust in Action", "the rust book"]);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let store = InMemoryProductStore::new();
        store.set_unavailable(true);
        assert!(matches!(
            store.fetch(&CatalogQuery::All).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.insert(&new_product("x")).await.is_err());

        store.set_unavailable(false);
        assert!(store.insert(&new_product("x")).await.is_ok());
    }
}
