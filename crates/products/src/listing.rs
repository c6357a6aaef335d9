//! Three-way outcome of a catalog read.

use crate::product::Product;

/// What a listing page shows: a failure banner, an empty-state banner, or rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Failed,
    Empty,
    Products(Vec<Product>),
}

impl Listing {
    /// Collapse a store result. The error itself is dropped; callers log it first.
    pub fn from_result<E>(result: Result<Vec<Product>, E>) -> Self {
        match result {
            Err(_) => Listing::Failed,
            Ok(rows) if rows.is_empty() => Listing::Empty,
            Ok(rows) => Listing::Products(rows),
        }
    }

    pub fn products(&self) -> &[Product] {
        match self {
            Listing::Products(rows) => rows,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discover_core::ProductId;

    #[test]
    fn maps_error_empty_and_rows() {
        let failed: Result<Vec<Product>, &str> = Err("boom");
        assert_eq!(Listing::from_result(failed), Listing::Failed);

        let empty: Result<Vec<Product>, &str> = Ok(vec![]);
        assert_eq!(Listing::from_result(empty), Listing::Empty);

        let p = Product::new(ProductId::new(1), "n", "u", "d", None);
        let listing = Listing::from_result::<&str>(Ok(vec![p.clone()]));
        assert_eq!(listing.products(), &[p][..]);
    }
}
