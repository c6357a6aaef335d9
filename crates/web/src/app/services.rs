use std::sync::Arc;

use discover_core::{DomainError, ProductId};
use discover_infra::{ProductStore, StoreError};
use discover_products::{CatalogQuery, Listing, NewProduct};

use crate::app::dto::AddProductForm;

/// Why a submission was not stored.
#[derive(Debug)]
pub enum AddProductError {
    Invalid(DomainError),
    Store(StoreError),
}

/// Shared request-time services (one store, reused by every handler).
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Run a catalog query and collapse it into a three-way listing.
    pub async fn listing(&self, query: &CatalogQuery) -> Listing {
        let result = self.store.fetch(query).await;
        match &result {
            Ok(rows) => tracing::debug!(kind = query.kind(), rows = rows.len(), "catalog query"),
            Err(e) => tracing::warn!(kind = query.kind(), "catalog query failed: {e}"),
        }
        Listing::from_result(result)
    }

    /// Validate and insert a submitted product.
    pub async fn add_product(&self, form: AddProductForm) -> Result<ProductId, AddProductError> {
        let new = NewProduct::new(&form.name, &form.url, &form.description, form.img_url.as_deref())
            .map_err(|e| {
                tracing::info!("product submission rejected: {e}");
                AddProductError::Invalid(e)
            })?;

        let id = self.store.insert(&new).await.map_err(|e| {
            tracing::warn!("product insert failed: {e}");
            AddProductError::Store(e)
        })?;

        tracing::info!(product_id = %id, "product added");
        Ok(id)
    }
}
