//! Unit tests for the merge engine's precedence and reconciliation rules.

use rstest::rstest;
use serde_json::{Value, json};

use super::{merge, merge_all, reconcile_sequences};

#[rstest]
#[case::scalar_over_mapping(json!({"a": 1}), json!(7))]
#[case::null_over_mapping(json!({"a": 1}), Value::Null)]
#[case::text_over_sequence(json!([1, 2]), json!("text"))]
#[case::false_over_scalar(json!(true), json!(false))]
#[case::sequence_over_mapping(json!({"a": 1}), json!([1]))]
#[case::mapping_over_scalar(json!("plain"), json!({"a": 1}))]
#[case::mapping_over_sequence(json!([{"id": 1}]), json!({"id": 1}))]
#[case::mapping_over_null(Value::Null, json!({"a": {"b": 1}}))]
fn non_matching_shapes_resolve_to_override(#[case] base: Value, #[case] overlay: Value) {
    assert_eq!(merge(base, overlay.clone()), overlay);
}

#[rstest]
fn nested_mappings_merge_recursively() {
    let merged = merge(
        json!({"a": {"x": 1, "y": 2}}),
        json!({"a": {"y": 3, "z": 4}}),
    );
    assert_eq!(merged, json!({"a": {"x": 1, "y": 3, "z": 4}}));
}

#[rstest]
fn base_only_keys_are_retained() {
    let merged = merge(
        json!({"keep": {"deep": [1, 2]}, "shared": 1}),
        json!({"shared": 2, "added": null}),
    );
    assert_eq!(
        merged,
        json!({"keep": {"deep": [1, 2]}, "shared": 2, "added": null})
    );
}

#[rstest]
fn sequence_is_replaced_by_non_sequence_value() {
    let merged = merge(json!({"a": [1, 2]}), json!({"a": "replaced"}));
    assert_eq!(merged, json!({"a": "replaced"}));
}

#[rstest]
fn mapping_value_is_replaced_by_sequence_value() {
    let merged = merge(json!({"a": {"x": 1}}), json!({"a": [{"x": 2}]}));
    assert_eq!(merged, json!({"a": [{"x": 2}]}));
}

#[rstest]
#[case::empty_string(json!(""))]
#[case::zero(json!(0))]
#[case::false_flag(json!(false))]
#[case::null(Value::Null)]
fn falsy_override_values_still_win(#[case] incoming: Value) {
    let merged = merge(json!({"value": "base"}), json!({"value": incoming.clone()}));
    assert_eq!(merged, json!({"value": incoming}));
}

#[rstest]
fn records_are_reconciled_by_id() {
    let merged = merge(
        json!({"items": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]}),
        json!({"items": [{"id": 2, "name": "B"}, {"id": 3, "name": "c"}]}),
    );
    assert_eq!(
        merged,
        json!({"items": [
            {"id": 1, "name": "a"},
            {"id": 2, "name": "B"},
            {"id": 3, "name": "c"},
        ]})
    );
}

#[rstest]
fn matched_records_merge_their_fields() {
    let merged = reconcile_sequences(
        vec![json!({"id": "api", "port": 80, "env": {"A": "1"}})],
        vec![json!({"id": "api", "env": {"B": "2"}})],
    );
    assert_eq!(
        merged,
        vec![json!({"id": "api", "port": 80, "env": {"A": "1", "B": "2"}})]
    );
}

#[rstest]
fn elements_without_id_are_appended() {
    let merged = merge(json!({"list": [{"x": 1}]}), json!({"list": [{"x": 2}]}));
    assert_eq!(merged, json!({"list": [{"x": 1}, {"x": 2}]}));
}

#[rstest]
fn several_elements_without_id_never_match_each_other() {
    let merged = reconcile_sequences(
        vec![json!({"x": 1}), json!("plain")],
        vec![json!({"x": 1}), json!({"y": 2}), json!("plain")],
    );
    assert_eq!(merged.len(), 5);
    assert_eq!(
        merged,
        vec![
            json!({"x": 1}),
            json!("plain"),
            json!({"x": 1}),
            json!({"y": 2}),
            json!("plain"),
        ]
    );
}

#[rstest]
#[case::text_versus_number(json!("1"))]
#[case::bool_versus_number(json!(true))]
fn id_matching_is_strict(#[case] other_id: Value) {
    let merged = reconcile_sequences(
        vec![json!({"id": 1, "v": "base"})],
        vec![json!({"id": other_id.clone(), "v": "override"})],
    );
    assert_eq!(
        merged,
        vec![
            json!({"id": 1, "v": "base"}),
            json!({"id": other_id, "v": "override"}),
        ]
    );
}

#[rstest]
#[case::integer_and_float(json!(1), json!(1.0))]
#[case::float_and_integer(json!(2.0), json!(2))]
#[case::negative(json!(-3), json!(-3.0))]
fn numeric_ids_match_by_value(#[case] base_id: Value, #[case] other_id: Value) {
    let merged = reconcile_sequences(
        vec![json!({"id": base_id, "v": "base", "keep": true})],
        vec![json!({"id": other_id.clone(), "v": "override"})],
    );
    assert_eq!(merged, vec![json!({"id": other_id, "v": "override", "keep": true})]);
}

#[rstest]
fn distinct_numeric_ids_do_not_match() {
    let merged = reconcile_sequences(
        vec![json!({"id": 1, "v": "base"})],
        vec![json!({"id": 1.5, "v": "override"})],
    );
    assert_eq!(merged.len(), 2);
}

#[rstest]
fn explicit_null_ids_match() {
    let merged = reconcile_sequences(
        vec![json!({"id": null, "v": 1})],
        vec![json!({"id": null, "v": 2})],
    );
    assert_eq!(merged, vec![json!({"id": null, "v": 2})]);
}

#[rstest]
fn first_matching_base_record_wins() {
    let merged = reconcile_sequences(
        vec![json!({"id": 1, "n": "first"}), json!({"id": 1, "n": "second"})],
        vec![json!({"id": 1, "n": "updated"})],
    );
    assert_eq!(
        merged,
        vec![json!({"id": 1, "n": "updated"}), json!({"id": 1, "n": "second"})]
    );
}

#[rstest]
fn repeated_new_ids_collapse_into_the_appended_record() {
    let merged = reconcile_sequences(
        vec![json!({"id": 1})],
        vec![json!({"id": 9, "a": 1}), json!({"id": 9, "b": 2})],
    );
    assert_eq!(merged, vec![json!({"id": 1}), json!({"id": 9, "a": 1, "b": 2})]);
}

#[rstest]
fn scalar_sequences_append_override_items() {
    let merged = merge(json!({"ports": [80, 443]}), json!({"ports": [443, 8080]}));
    assert_eq!(merged, json!({"ports": [80, 443, 443, 8080]}));
}

#[rstest]
fn top_level_sequences_are_reconciled() {
    let merged = merge(
        json!([{"id": 1, "v": "a"}]),
        json!([{"id": 1, "v": "b"}, {"id": 2}]),
    );
    assert_eq!(merged, json!([{"id": 1, "v": "b"}, {"id": 2}]));
}

#[rstest]
fn base_key_order_is_preserved_and_new_keys_follow() {
    let merged = merge(
        json!({"zeta": 1, "alpha": 2, "mid": 3}),
        json!({"new": 0, "alpha": 20}),
    );
    let keys: Vec<&str> = merged
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(keys, ["zeta", "alpha", "mid", "new"]);
}

#[rstest]
#[case(json!({"a": {"b": [{"id": 1, "c": 2}], "d": null}, "e": ""}))]
#[case(json!([{"id": "x", "nested": {"k": "v"}}, {"id": "y"}]))]
#[case(json!("scalar"))]
#[case(Value::Null)]
fn merging_a_document_with_itself_is_identity(#[case] document: Value) {
    assert_eq!(merge(document.clone(), document.clone()), document);
}

#[rstest]
fn merge_all_applies_layers_in_order() {
    let merged = merge_all(
        json!({"name": "base", "items": [{"id": 1, "v": 0}]}),
        [
            json!({"name": "first", "items": [{"id": 1, "v": 1}]}),
            json!({"items": [{"id": 2, "v": 2}]}),
        ],
    );
    assert_eq!(
        merged,
        json!({"name": "first", "items": [{"id": 1, "v": 1}, {"id": 2, "v": 2}]})
    );
}

#[rstest]
fn merge_all_without_layers_returns_base() {
    let base = json!({"a": 1});
    assert_eq!(merge_all(base.clone(), Vec::new()), base);
}

fn nested(depth: usize, leaf: Value) -> Value {
    (0..depth).fold(leaf, |inner, _| json!({ "level": inner }))
}

#[rstest]
fn deeply_nested_documents_merge() {
    let merged = merge(
        nested(1000, json!({"x": 1})),
        nested(1000, json!({"y": 2})),
    );
    assert_eq!(merged, nested(1000, json!({"x": 1, "y": 2})));
}
