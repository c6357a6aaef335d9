use serde::Serialize;

use discover_core::{BoundedText, DomainResult, ProductId};

/// Column limits of the `Products` table.
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_URL_LEN: usize = 150;
pub const MAX_DESCRIPTION_LEN: usize = 300;
pub const MAX_IMAGE_LEN: usize = 250;

/// A stored catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    url: String,
    description: String,
    image: Option<String>,
}

impl Product {
    /// Rebuild a product from a stored row. Rows are trusted as written.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            url: url.into(),
            description: description.into(),
            image: image.filter(|i| !i.trim().is_empty()),
        }
    }

    /// Materialize a validated submission under the id the store assigned.
    pub fn from_new(id: ProductId, new: &NewProduct) -> Self {
        Self {
            id,
            name: new.name().to_string(),
            url: new.url().to_string(),
            description: new.description().to_string(),
            image: new.image().map(str::to_string),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

/// A user submission that passed validation and can be inserted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    name: BoundedText,
    url: BoundedText,
    description: BoundedText,
    image: Option<BoundedText>,
}

impl NewProduct {
    /// Validate raw form input against the column limits.
    ///
    /// Required fields must be non-blank; a blank image URL means "no image".
    pub fn new(
        name: &str,
        url: &str,
        description: &str,
        image: Option<&str>,
    ) -> DomainResult<Self> {
        Ok(Self {
            name: BoundedText::new("name", name, MAX_NAME_LEN)?,
            url: BoundedText::new("url", url, MAX_URL_LEN)?,
            description: BoundedText::new("description", description, MAX_DESCRIPTION_LEN)?,
            image: BoundedText::optional("image url", image, MAX_IMAGE_LEN)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_ref().map(BoundedText::as_str)
    }
}
