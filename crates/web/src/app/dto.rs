//! Form bodies posted by the catalog pages.
//!
//! Every field defaults to empty so a missing field becomes a validation
//! failure (and an error banner) instead of an extractor rejection.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_query: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub img_url: Option<String>,
}
