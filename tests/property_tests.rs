mod common;

use std::collections::HashSet;

use proptest::prelude::*;
use valscope::inspector::ExpansionStore;
use valscope::{Heap, NodePath, PathKey, RowKind, Value, classify, summarize};

fn arb_json() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::Bool),
        any::<i64>().prop_map(|n| serde_json::json!(n)),
        (-1.0e9..1.0e9f64).prop_map(|n| serde_json::json!(n)),
        "[a-z\"\\\\ ]{0,12}".prop_map(serde_json::Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(serde_json::Value::Array),
            prop::collection::vec(("[a-z-]{0,6}", inner), 0..6).prop_map(|entries| {
                serde_json::Value::Object(entries.into_iter().collect())
            }),
        ]
    })
}

fn arb_path() -> impl Strategy<Value = NodePath> {
    let key = prop_oneof![
        (0usize..50).prop_map(PathKey::Index),
        (0usize..50).prop_map(PathKey::Entry),
        ".{0,8}".prop_map(PathKey::Name),
    ];
    prop::collection::vec(key, 0..5)
        .prop_map(|keys| keys.into_iter().fold(NodePath::root(), |p, k| p.child(k)))
}

proptest! {
    #[test]
    fn classify_is_deterministic(json in arb_json()) {
        let mut heap = Heap::new();
        let value = heap.import_json(&json);
        let tag = classify(&heap, &value);
        prop_assert_eq!(classify(&heap, &value), tag);
        prop_assert_eq!(summarize(&heap, &value, tag), summarize(&heap, &value, tag));
        prop_assert!(!summarize(&heap, &value, tag).contains('\n'));
    }

    #[test]
    fn toggle_twice_is_identity(depth in 0usize..4, path in arb_path(), other in arb_path()) {
        let mut store = ExpansionStore::new(depth);
        let before = (store.peek(&path), store.peek(&other));
        store.toggle(&path);
        store.toggle(&path);
        prop_assert_eq!((store.peek(&path), store.peek(&other)), before);
    }

    #[test]
    fn path_display_parses_back(path in arb_path()) {
        let parsed: NodePath = path.to_string().parse().unwrap();
        prop_assert_eq!(parsed, path);
    }

    #[test]
    fn full_expansion_visits_each_path_once(json in arb_json()) {
        let mut heap = Heap::new();
        let root = heap.import_json(&json);
        let mut session = common::session(root, usize::MAX);
        let rows = session.rows(&heap);

        let mut seen = HashSet::new();
        for row in &rows {
            let is_marker = matches!(row.kind, RowKind::Truncated { .. } | RowKind::Circular { .. });
            prop_assert!(!is_marker);
            prop_assert!(seen.insert(row.path.clone()), "duplicate path {}", row.path);
            prop_assert_eq!(row.depth, row.path.depth());
        }
        prop_assert_eq!(rows.len(), count_nodes(&json));
    }
}

fn count_nodes(json: &serde_json::Value) -> usize {
    1 + match json {
        serde_json::Value::Array(items) => items.iter().map(count_nodes).sum(),
        serde_json::Value::Object(map) => map.values().map(count_nodes).sum(),
        _ => 0,
    }
}

#[test]
fn test_classify_total_over_dangling_refs() {
    let heap = Heap::new();
    for index in 0..16 {
        let value = Value::Ref(valscope::ObjectId::from_index(index));
        assert_eq!(classify(&heap, &value), valscope::Tag::Absent);
    }
}
