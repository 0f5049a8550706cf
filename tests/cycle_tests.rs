mod common;

use common::{paths, row, session};
use valscope::{Heap, NodeState, RowKind, Tag, ThemeColors, Value};

#[test]
fn test_self_reference_renders_marker() {
    let mut heap = Heap::new();
    let o = heap.new_object();
    heap.set_property(o, "self", o);

    let mut s = session(Value::Ref(o), 1);
    let rows = s.rows(&heap);

    assert_eq!(paths(&rows), vec!["$", "$.self"]);
    match &row(&rows, "$.self").kind {
        RowKind::Circular { tag, target } => {
            assert_eq!(*tag, Tag::Object);
            assert_eq!(target.to_string(), "$");
        }
        other => panic!("expected circular marker, got {other:?}"),
    }
    assert_eq!(row(&rows, "$.self").state(), NodeState::Leaf);

    let lines = s.render_lines(&heap, &ThemeColors::default());
    assert_eq!(lines[1].plain_text(), "│    self: [Circular *$]");
}

#[test]
fn test_self_reference_terminates_when_fully_expanded() {
    let mut heap = Heap::new();
    let o = heap.new_object();
    heap.set_property(o, "self", o);
    heap.set_property(o, "n", 1);

    let mut s = session(Value::Ref(o), usize::MAX);
    assert_eq!(s.rows(&heap).len(), 3);
}

#[test]
fn test_toggling_circular_marker_does_not_descend() {
    let mut heap = Heap::new();
    let o = heap.new_object();
    heap.set_property(o, "self", o);

    let mut s = session(Value::Ref(o), 1);
    s.toggle_str("$.self").unwrap();
    assert_eq!(s.rows(&heap).len(), 2);
}

#[test]
fn test_deep_cycle_names_ancestor_path() {
    let mut heap = Heap::new();
    let root = heap.new_object();
    let mid = heap.new_array(vec![]);
    let leaf = heap.new_map();
    heap.set_property(root, "list", mid);
    heap.push(mid, leaf);
    heap.map_insert(leaf, "back", mid);

    let mut s = session(Value::Ref(root), usize::MAX);
    let rows = s.rows(&heap);

    assert_eq!(paths(&rows), vec!["$", "$.list", "$.list[0]", "$.list[0][#0]"]);
    match &row(&rows, "$.list[0][#0]").kind {
        RowKind::Circular { tag, target } => {
            assert_eq!(*tag, Tag::List);
            assert_eq!(target.to_string(), "$.list");
        }
        other => panic!("expected circular marker, got {other:?}"),
    }
}

#[test]
fn test_diamond_is_not_a_cycle() {
    let mut heap = Heap::new();
    let shared = heap.new_array(vec![Value::from(1)]);
    let root = heap.new_object();
    heap.set_property(root, "left", shared);
    heap.set_property(root, "right", shared);

    let mut s = session(Value::Ref(root), usize::MAX);
    let rows = s.rows(&heap);

    assert!(!rows.iter().any(|r| matches!(r.kind, RowKind::Circular { .. })));
    assert_eq!(
        paths(&rows),
        vec!["$", "$.left", "$.left[0]", "$.right", "$.right[0]"]
    );
}

#[test]
fn test_cycle_through_callable_namespace() {
    let mut heap = Heap::new();
    let ns = heap.new_function(Some("api"));
    let registry = heap.new_object();
    heap.set_property(ns, "registry", registry);
    heap.set_property(registry, "owner", ns);

    let mut s = session(Value::Ref(ns), usize::MAX);
    let rows = s.rows(&heap);

    assert_eq!(rows[0].summary(), Some("ƒ api()"));
    assert!(matches!(
        &row(&rows, "$.registry.owner").kind,
        RowKind::Circular { tag: Tag::Callable, target } if target.is_root()
    ));
}
