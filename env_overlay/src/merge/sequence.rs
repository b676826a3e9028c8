//! Reconciliation of two sequences by record identity.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use super::merge;

/// Field that identifies a record inside a sequence.
pub const ID_FIELD: &str = "id";

/// Merge `overlay` into `base` element by element.
///
/// `base` becomes the working list. Each override element is matched against
/// the first working element whose `id` equals its own. Numbers compare by
/// value, so `1` matches `1.0`; values of different types never match:
///
/// - a match is replaced in place by `merge(current, incoming)`;
/// - anything else, including elements without an `id`, is appended.
///
/// Matching runs against the working list, so an override record may merge
/// into a record appended earlier in the same pass. The result keeps base
/// order with matched slots updated, followed by unmatched override elements.
///
/// # Examples
///
/// ```rust
/// use env_overlay::merge::reconcile_sequences;
/// use serde_json::json;
///
/// let base = vec![json!({"id": 1, "name": "a"}), json!({"id": 2, "name": "b"})];
/// let overlay = vec![json!({"id": 2, "name": "B"}), json!({"id": 3, "name": "c"})];
/// assert_eq!(
///     reconcile_sequences(base, overlay),
///     vec![
///         json!({"id": 1, "name": "a"}),
///         json!({"id": 2, "name": "B"}),
///         json!({"id": 3, "name": "c"}),
///     ]
/// );
/// ```
#[must_use]
pub fn reconcile_sequences(base: Vec<Value>, overlay: Vec<Value>) -> Vec<Value> {
    let mut working = base;
    for incoming in overlay {
        let position = record_id(&incoming).and_then(|id| {
            working
                .iter()
                .position(|item| record_id(item).is_some_and(|other| same_id(other, id)))
        });
        if let Some(slot) = position.and_then(|index| working.get_mut(index)) {
            let current = std::mem::take(slot);
            *slot = merge(current, incoming);
            continue;
        }
        working.push(incoming);
    }
    working
}

/// Returns the `id` of a record, or `None` when `value` is not a mapping or
/// has no `id` entry.
fn record_id(value: &Value) -> Option<&Value> {
    value.as_object()?.get(ID_FIELD)
}

/// Value equality for record ids, comparing numbers numerically.
fn same_id(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => same_number(l, r),
        _ => left == right,
    }
}

fn same_number(left: &Number, right: &Number) -> bool {
    if left.is_f64() || right.is_f64() {
        left.as_f64()
            .zip(right.as_f64())
            .is_some_and(|(l, r)| l.partial_cmp(&r) == Some(Ordering::Equal))
    } else {
        left == right
    }
}
