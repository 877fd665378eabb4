use skinmatch_core::DomainError;
use thiserror::Error;

/// Failure to turn a raw snapshot into a catalog.
///
/// Loads are all-or-nothing: a single bad record fails the whole catalog,
/// since product names are the join key for conflict matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogLoadError {
    #[error("catalog source is not valid JSON: {0}")]
    Parse(String),

    #[error("catalog source is not a product mapping (found {found})")]
    MalformedSource { found: &'static str },

    #[error("record `{key}` is not an object")]
    MalformedRecord { key: String },

    #[error("record `{key}` has no name")]
    MissingName { key: String },

    #[error("record `{key}` has an invalid `{field}` field")]
    InvalidField { key: String, field: &'static str },

    #[error("duplicate product name `{name}`")]
    DuplicateName { name: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
