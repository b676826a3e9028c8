//! Deep merge of a base document with an environment override.
//!
//! Precedence rules, evaluated in order:
//!
//! - Two mappings merge key by key. Keys only present in the base are kept,
//!   keys present in the override are merged recursively.
//! - Two sequences are reconciled by record `id`; see
//!   [`reconcile_sequences`].
//! - Any other pairing resolves to the override value verbatim. This covers
//!   scalars, nulls and mismatched container shapes.
//!
//! Both inputs are taken by value, so the caller can never observe a partially
//! merged input. Callers that need to keep their documents clone them first.

mod sequence;

use serde_json::{Map, Value};

pub use sequence::{ID_FIELD, reconcile_sequences};

/// Merge `overlay` onto `base`, returning the combined document.
///
/// The function is total: every pair of values has a defined result.
///
/// # Examples
///
/// ```rust
/// use env_overlay::merge::merge;
/// use serde_json::json;
///
/// let base = json!({"a": {"x": 1, "y": 2}, "keep": true});
/// let overlay = json!({"a": {"y": 3, "z": 4}});
/// assert_eq!(
///     merge(base, overlay),
///     json!({"a": {"x": 1, "y": 3, "z": 4}, "keep": true})
/// );
///
/// // Mismatched shapes resolve to the override.
/// assert_eq!(merge(json!({"a": [1, 2]}), json!({"a": "replaced"})), json!({"a": "replaced"}));
/// ```
#[must_use]
pub fn merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            Value::Object(merge_mappings(base_map, overlay_map))
        }
        (Value::Array(base_items), Value::Array(overlay_items)) => {
            Value::Array(reconcile_sequences(base_items, overlay_items))
        }
        (_, incoming) => incoming,
    }
}

/// Fold each layer of `overlays` over `base`, left to right.
///
/// Later layers take precedence over earlier ones. An empty iterator returns
/// `base` unchanged.
///
/// # Examples
///
/// ```rust
/// use env_overlay::merge::merge_all;
/// use serde_json::json;
///
/// let merged = merge_all(
///     json!({"replicas": 1, "image": "app:1"}),
///     [json!({"replicas": 2}), json!({"image": "app:2"})],
/// );
/// assert_eq!(merged, json!({"replicas": 2, "image": "app:2"}));
/// ```
#[must_use]
pub fn merge_all<I>(base: Value, overlays: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    overlays.into_iter().fold(base, merge)
}

/// Overlay every entry of `overlay` onto `base`.
///
/// Entries are merged in place so that base keys keep their original position;
/// keys new to the base are appended in override order.
fn merge_mappings(mut base: Map<String, Value>, overlay: Map<String, Value>) -> Map<String, Value> {
    for (key, incoming) in overlay {
        if let Some(existing) = base.get_mut(&key) {
            let current = std::mem::take(existing);
            *existing = merge(current, incoming);
            continue;
        }
        base.insert(key, incoming);
    }
    base
}

#[cfg(test)]
mod tests;
