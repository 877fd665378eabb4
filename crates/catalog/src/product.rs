use serde::Serialize;

use skinmatch_core::{DomainError, Entity, ProductId};

/// Category assigned to products that declare no tags.
pub const DEFAULT_CATEGORY: &str = "General";

/// Canonical catalog entry.
///
/// `excludes` entries are either exact product names or tag names; `tags`
/// describe the product and double as match targets for other products'
/// exclusion lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    excludes: Vec<String>,
    tags: Vec<String>,
}

impl Product {
    /// Create a product with no tags and no exclusions.
    pub fn new(id: ProductId, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            category: DEFAULT_CATEGORY.to_string(),
            target: None,
            format: None,
            excludes: Vec::new(),
            tags: Vec::new(),
        })
    }

    /// Replace the tag list. The category follows the first tag.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self.category = self
            .tags
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        self
    }

    pub fn with_excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes = excludes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Names or tags this product's guidance says not to combine with.
    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
