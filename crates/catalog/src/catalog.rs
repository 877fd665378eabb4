use serde_json::Value;
use tracing::{debug, warn};

use skinmatch_core::{Entity, ProductId};

use crate::error::CatalogLoadError;
use crate::product::Product;
use crate::raw::RawSource;

/// A loaded, name-sorted catalog.
///
/// Built once from a static snapshot and passed explicitly to whatever needs
/// it; there is no process-wide catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already-normalized products.
    ///
    /// Products are sorted ascending by name (case-insensitive, ties broken
    /// by the exact name). Duplicate names are rejected because pair lookup
    /// and conflict reasons key on the name.
    pub fn new(mut products: Vec<Product>) -> Result<Self, CatalogLoadError> {
        products.sort_by(|a, b| compare_names(a.name(), b.name()));

        if let Some(pair) = products.windows(2).find(|w| w[0].name() == w[1].name()) {
            return Err(CatalogLoadError::DuplicateName {
                name: pair[0].name().to_string(),
            });
        }

        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    /// Suggest products matching `term` for a selection picker.
    ///
    /// Matches the name or category case-insensitively, skips products whose
    /// id is already in `selected`, and keeps catalog order. An empty term
    /// suggests nothing.
    pub fn search(&self, term: &str, selected: &[ProductId], limit: usize) -> Vec<&Product> {
        if term.is_empty() {
            return Vec::new();
        }
        let needle = term.to_lowercase();

        self.products
            .iter()
            .filter(|p| !selected.contains(p.id()))
            .filter(|p| {
                p.name().to_lowercase().contains(&needle)
                    || p.category().to_lowercase().contains(&needle)
            })
            .take(limit)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// Load a catalog from a parsed snapshot.
pub fn load_catalog(raw: Value) -> Result<Catalog, CatalogLoadError> {
    let result = RawSource::resolve(raw)
        .into_products()
        .and_then(Catalog::new);

    match &result {
        Ok(catalog) => debug!(products = catalog.len(), "catalog loaded"),
        Err(err) => warn!(error = %err, "catalog load failed"),
    }
    result
}

/// Load a catalog from JSON text.
pub fn load_catalog_str(json: &str) -> Result<Catalog, CatalogLoadError> {
    let raw: Value =
        serde_json::from_str(json).map_err(|e| CatalogLoadError::Parse(e.to_string()))?;
    load_catalog(raw)
}

fn compare_names(a: &str, b: &str) -> core::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
