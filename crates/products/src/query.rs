//! Catalog query shapes and their reference semantics.
//!
//! SQL stores translate each [`CatalogQuery`] into one parameterized
//! statement; [`CatalogQuery::apply`] is the same behaviour over a slice and
//! backs the in-memory store.

use crate::product::Product;

/// Trimmed search text entered by a user.
///
/// Matching is a case-insensitive substring test on the product name. An
/// empty term matches every product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// `LIKE` pattern for the term, with `\`, `%` and `_` escaped by `\`.
    ///
    /// The pattern must always be bound as a parameter.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

/// The read shapes the catalog supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    /// Every product, in insertion (id) order.
    All,
    /// Products whose name contains the term, in id order.
    Search(SearchTerm),
    /// Every product, alphabetically by name.
    SortedByName,
}

impl CatalogQuery {
    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogQuery::All => "list",
            CatalogQuery::Search(_) => "search",
            CatalogQuery::SortedByName => "sort",
        }
    }

    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut out: Vec<Product> = match self {
            CatalogQuery::All | CatalogQuery::SortedByName => products.to_vec(),
            CatalogQuery::Search(term) => products
                .iter()
                .filter(|p| term.matches(p.name()))
                .cloned()
                .collect(),
        };

        match self {
            CatalogQuery::SortedByName => sort_by_name(&mut out),
            _ => out.sort_by_key(Product::id),
        }
        out
    }
}

/// Alphabetical order ignoring case; ties fall back to exact name, then id.
pub fn sort_by_name(products: &mut [Product]) {
    products.sort_by(|a, b| {
        a.name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.name().cmp(b.name()))
            .then_with(|| a.id().cmp(&b.id()))
    });
}
