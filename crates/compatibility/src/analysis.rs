use serde::Serialize;

use skinmatch_core::ValueObject;

use crate::status::CompatibilityStatus;

/// Summary used when no pair conflicts.
pub const NO_CONFLICTS_SUMMARY: &str = "Great news! No direct conflicts were found in your selection based on The Ordinary's guidelines.";

/// Result of evaluating one unordered pair `{A, B}`.
///
/// `product_a` precedes `product_b` in the analyzed selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityPair {
    pub product_a: String,
    pub product_b: String,
    pub status: CompatibilityStatus,
    pub reason: String,
}

impl ValueObject for CompatibilityPair {}

impl CompatibilityPair {
    /// Whether this pair is about `a` and `b`, in either order.
    pub fn involves(&self, a: &str, b: &str) -> bool {
        (self.product_a == a && self.product_b == b) || (self.product_a == b && self.product_b == a)
    }
}

/// Routine-level analysis over a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub pairs: Vec<CompatibilityPair>,
    pub summary: String,
}

impl ValueObject for AnalysisResult {}

impl AnalysisResult {
    /// Assemble a result, deriving the summary from the pairs.
    pub fn from_pairs(pairs: Vec<CompatibilityPair>) -> Self {
        let conflicts = pairs.iter().filter(|p| p.status.is_conflict()).count();
        Self {
            pairs,
            summary: summarize(conflicts),
        }
    }

    pub fn conflict_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.status.is_conflict()).count()
    }

    pub fn has_conflicts(&self) -> bool {
        self.pairs.iter().any(|p| p.status.is_conflict())
    }

    pub fn conflicting_pairs(&self) -> impl Iterator<Item = &CompatibilityPair> + '_ {
        self.pairs.iter().filter(|p| p.status.is_conflict())
    }

    /// First pair naming `a` and `b`, in either order.
    pub fn pair_between(&self, a: &str, b: &str) -> Option<&CompatibilityPair> {
        self.pairs.iter().find(|p| p.involves(a, b))
    }

    /// Status for a matrix cell; `Unknown` when the pair was not evaluated.
    pub fn status_between(&self, a: &str, b: &str) -> CompatibilityStatus {
        self.pair_between(a, b)
            .map(|p| p.status)
            .unwrap_or(CompatibilityStatus::Unknown)
    }
}

/// One-sentence summary for a conflict count.
pub fn summarize(conflicts: usize) -> String {
    if conflicts == 0 {
        return NO_CONFLICTS_SUMMARY.to_string();
    }
    let plural = if conflicts == 1 { "" } else { "s" };
    format!(
        "Found {conflicts} potential conflict{plural}. It is recommended to use conflicting products in separate routines (e.g., one in the AM and one in the PM, or on alternate days)."
    )
}
