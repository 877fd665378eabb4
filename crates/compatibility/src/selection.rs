use skinmatch_catalog::Product;
use skinmatch_core::{Entity, ProductId};

use crate::analysis::AnalysisResult;
use crate::engine::analyze;

/// Products the user picked, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    products: Vec<Product>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product unless one with the same id is already selected.
    ///
    /// Returns `true` when the selection changed.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(product.id()) {
            return false;
        }
        self.products.push(product);
        true
    }

    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id() == id)?;
        Some(self.products.remove(index))
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|p| p.id() == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Analysis of the current selection, or `None` below two products.
    pub fn analysis(&self) -> Option<AnalysisResult> {
        if self.products.len() < 2 {
            return None;
        }
        Some(analyze(&self.products))
    }
}
