//! Raw snapshot shapes.
//!
//! Upstream snapshots are loosely typed: field names vary in casing
//! (`Name`, `name`, `NAME`) and the product mapping may be nested under
//! `products`, `default.products` or `default`. The shape is resolved once
//! into a [`RawSource`] and each record is normalized once into a
//! [`Product`].

use serde_json::{Map, Value};

use skinmatch_core::ProductId;

use crate::error::CatalogLoadError;
use crate::product::Product;

/// A raw snapshot, classified once at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSource {
    /// Mapping from key to raw product record.
    Products(Map<String, Value>),
    /// Anything that does not look like a product mapping.
    Unexpected(Value),
}

impl RawSource {
    /// Locate the product mapping inside a snapshot.
    ///
    /// Lookup order: `products`, `default.products`, `default`, then the
    /// top-level object itself.
    pub fn resolve(value: Value) -> Self {
        let mut root = match value {
            Value::Object(root) => root,
            other => return Self::Unexpected(other),
        };

        if matches!(root.get("products"), Some(Value::Object(_))) {
            if let Some(Value::Object(products)) = root.remove("products") {
                return Self::Products(products);
            }
        }

        if let Some(Value::Object(default)) = root.get_mut("default") {
            if matches!(default.get("products"), Some(Value::Object(_))) {
                if let Some(Value::Object(products)) = default.remove("products") {
                    return Self::Products(products);
                }
            }
        }

        match root.remove("default") {
            Some(Value::Object(default)) => Self::Products(default),
            Some(other) => {
                root.insert("default".to_string(), other);
                Self::Products(root)
            }
            None => Self::Products(root),
        }
    }

    /// Normalize every record, failing on the first bad one.
    pub fn into_products(self) -> Result<Vec<Product>, CatalogLoadError> {
        match self {
            Self::Products(records) => records
                .iter()
                .map(|(key, record)| normalize_record(key, record))
                .collect(),
            Self::Unexpected(value) => Err(CatalogLoadError::MalformedSource {
                found: json_kind(&value),
            }),
        }
    }
}

/// Map one raw record onto the canonical product shape.
pub fn normalize_record(key: &str, record: &Value) -> Result<Product, CatalogLoadError> {
    let Value::Object(fields) = record else {
        return Err(CatalogLoadError::MalformedRecord { key: key.to_string() });
    };

    let name = match field(fields, "name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        None | Some(Value::Null) | Some(Value::String(_)) => {
            return Err(CatalogLoadError::MissingName { key: key.to_string() });
        }
        Some(_) => return Err(invalid(key, "name")),
    };

    let id = match optional_string(fields, key, "id")?.or(optional_string(fields, key, "slug")?) {
        Some(id) if !id.trim().is_empty() => ProductId::new(id)?,
        _ => ProductId::new(key)?,
    };

    let mut product = Product::new(id, name)?
        .with_tags(string_list(fields, key, "tags")?)
        .with_excludes(string_list(fields, key, "excludes")?);

    match field(fields, "targets") {
        None | Some(Value::Null) => {}
        Some(Value::String(target)) => product = product.with_target(target.clone()),
        Some(Value::Array(_)) => {
            product = product.with_target(string_list(fields, key, "targets")?.join(", "));
        }
        Some(_) => return Err(invalid(key, "targets")),
    }

    if let Some(format) = optional_string(fields, key, "format")? {
        product = product.with_format(format);
    }

    Ok(product)
}

/// Case-insensitive field lookup; an exact key match wins.
fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).or_else(|| {
        fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    })
}

fn optional_string(
    fields: &Map<String, Value>,
    key: &str,
    name: &'static str,
) -> Result<Option<String>, CatalogLoadError> {
    match field(fields, name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid(key, name)),
    }
}

fn string_list(
    fields: &Map<String, Value>,
    key: &str,
    name: &'static str,
) -> Result<Vec<String>, CatalogLoadError> {
    match field(fields, name) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(invalid(key, name)),
            })
            .collect(),
        Some(_) => Err(invalid(key, name)),
    }
}

fn invalid(key: &str, field: &'static str) -> CatalogLoadError {
    CatalogLoadError::InvalidField {
        key: key.to_string(),
        field,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
