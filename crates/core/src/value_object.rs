//! Value object trait: equality by value, not identity.
//!
//! Analysis results are value objects: they are recomputed from the current
//! selection on every call, never mutated, and carry no identity of their own.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two compatibility
/// pairs naming the same products with the same status and reason are equal,
/// regardless of which analysis run produced them.
///
/// ## Entity vs Value Object
///
/// - **Entity**: a catalog `Product` (identified by its `ProductId`)
/// - **Value Object**: a `CompatibilityPair` or an `AnalysisResult`
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Summary(String);
///
/// impl ValueObject for Summary {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
