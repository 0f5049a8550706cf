mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{json_session, label_summaries, options, paths, row, session};
use serde_json::json;
use valscope::{
    AccessError, Heap, NodePath, NodeState, Property, RowKind, Tag, ThemeColors, Value, inspect,
};

#[test]
fn test_number_root_is_leaf() {
    let heap = Heap::new();
    let mut s = session(Value::from(42), 1);
    let rows = s.rows(&heap);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tag(), Some(Tag::Number));
    assert_eq!(rows[0].summary(), Some("42"));
    assert_eq!(rows[0].state(), NodeState::Leaf);

    // Toggling a leaf changes nothing visible.
    s.toggle(&NodePath::root());
    assert_eq!(s.rows(&heap), rows);
}

#[test]
fn test_list_root_expanded() {
    let (heap, mut s) = json_session(json!(["a", "b", "c"]), 1);
    let rows = s.rows(&heap);

    assert_eq!(rows[0].state(), NodeState::Expanded);
    assert_eq!(rows[0].summary(), Some("Array(3)"));
    assert_eq!(
        label_summaries(&rows[1..]),
        vec!["0: \"a\"", "1: \"b\"", "2: \"c\""]
    );

    s.toggle(&NodePath::root());
    let collapsed = s.rows(&heap);
    assert_eq!(collapsed.len(), 1);
    assert_eq!(collapsed[0].summary(), Some("Array(3)"));
    assert_eq!(collapsed[0].state(), NodeState::Collapsed);
}

#[test]
fn test_nested_object_toggle() {
    let (heap, mut s) = json_session(json!({"a": 1, "b": {"c": 2}}), 1);
    let rows = s.rows(&heap);

    assert_eq!(paths(&rows), vec!["$", "$.a", "$.b"]);
    assert_eq!(row(&rows, "$.a").state(), NodeState::Leaf);
    assert_eq!(row(&rows, "$.a").summary(), Some("1"));
    assert_eq!(row(&rows, "$.b").state(), NodeState::Collapsed);
    assert_eq!(row(&rows, "$.b").summary(), Some("{…}"));

    assert!(s.toggle_str("$.b").unwrap());
    let rows = s.rows(&heap);
    assert_eq!(paths(&rows), vec!["$", "$.a", "$.b", "$.b.c"]);
    assert_eq!(label_summaries(&rows[3..]), vec!["c: 2"]);
    assert_eq!(row(&rows, "$.b.c").depth, 2);
}

#[test]
fn test_map_entries_in_insertion_order() {
    let mut heap = Heap::new();
    let map = heap.new_map();
    heap.map_insert(map, "x", 1);
    heap.map_insert(map, "y", 2);
    let mut s = session(Value::Ref(map), 1);
    let rows = s.rows(&heap);

    assert_eq!(rows[0].tag(), Some(Tag::Map));
    assert_eq!(rows[0].summary(), Some("Map(2)"));
    assert_eq!(label_summaries(&rows[1..]), vec!["\"x\": 1", "\"y\": 2"]);
    assert_eq!(paths(&rows[1..]), vec!["$[#0]", "$[#1]"]);
}

#[test]
fn test_set_members() {
    let mut heap = Heap::new();
    let set = heap.new_set();
    heap.set_add(set, "read");
    heap.set_add(set, "write");
    heap.set_add(set, "read");
    let mut s = session(Value::Ref(set), 1);
    let rows = s.rows(&heap);

    assert_eq!(rows[0].summary(), Some("Set(2)"));
    assert_eq!(label_summaries(&rows[1..]), vec!["0: \"read\"", "1: \"write\""]);
}

#[test]
fn test_failing_getter_keeps_siblings() {
    let mut heap = Heap::new();
    let obj = heap.new_object();
    heap.set_property(obj, "before", 1);
    heap.define_property(
        obj,
        "p",
        Property::getter(|_| Err(AccessError::thrown("denied"))),
    );
    heap.set_property(obj, "after", 2);

    let mut s = session(Value::Ref(obj), 1);
    let rows = s.rows(&heap);

    assert_eq!(paths(&rows), vec!["$", "$.before", "$.p", "$.after"]);
    assert_eq!(
        row(&rows, "$.p").kind,
        RowKind::AccessFailed {
            message: "denied".into()
        }
    );
    assert_eq!(row(&rows, "$.after").summary(), Some("2"));

    let lines = s.render_lines(&heap, &ThemeColors::default());
    assert_eq!(lines[2].plain_text(), "│    p: <access failed: denied>");
}

#[test]
fn test_panicking_getter_keeps_siblings() {
    let mut heap = Heap::new();
    let obj = heap.new_object();
    heap.define_property(obj, "p", Property::getter(|_| panic!("getter exploded")));
    heap.set_property(obj, "q", true);

    let mut s = session(Value::Ref(obj), 1);
    let rows = s.rows(&heap);
    assert!(matches!(
        &row(&rows, "$.p").kind,
        RowKind::AccessFailed { message } if message.contains("getter exploded")
    ));
    assert_eq!(row(&rows, "$.q").summary(), Some("true"));
}

#[test]
fn test_size_guard_and_show_more() {
    let items: Vec<_> = (0..250).collect();
    let (heap, mut s) = json_session(json!({ "items": items }), 2);
    let rows = s.rows(&heap);

    // root, items, 100 children, truncation marker
    assert_eq!(rows.len(), 103);
    let marker = rows.last().unwrap();
    assert_eq!(marker.kind, RowKind::Truncated { remaining: 150 });
    assert_eq!(marker.path.to_string(), "$.items");

    s.show_more(&"$.items".parse().unwrap());
    let rows = s.rows(&heap);
    assert_eq!(rows.last().unwrap().kind, RowKind::Truncated { remaining: 50 });

    s.show_more(&"$.items".parse().unwrap());
    let rows = s.rows(&heap);
    assert_eq!(rows.len(), 252);
    assert!(!rows.iter().any(|r| matches!(r.kind, RowKind::Truncated { .. })));
}

#[test]
fn test_replace_root_resets_state() {
    let mut heap = Heap::new();
    let first = heap.import_json(&json!({"a": {"b": 1}}));
    let second = heap.import_json(&json!({"a": {"b": 1}}));
    let mut s = session(first, 1);

    s.toggle_str("$.a").unwrap();
    assert_eq!(s.rows(&heap).len(), 3);

    assert!(s.replace_root(second));
    assert_eq!(s.rows(&heap).len(), 2);
}

#[test]
fn test_sessions_do_not_share_state() {
    let mut heap = Heap::new();
    let root = heap.import_json(&json!({"a": {"b": 1}}));
    let mut left = session(root.clone(), 1);
    let mut right = session(root, 1);

    left.toggle_str("$.a").unwrap();
    assert_eq!(left.rows(&heap).len(), 3);
    assert_eq!(right.rows(&heap).len(), 2);
}

#[test]
fn test_rendered_tree_text() {
    let (heap, mut s) = json_session(json!({"name": "ada", "tags": ["x"], "meta": {}}), 2);
    let lines: Vec<String> = s
        .render_lines(&heap, &ThemeColors::default())
        .iter()
        .map(|l| l.plain_text())
        .collect();

    assert_eq!(
        lines,
        vec![
            "▼ {…}",
            "│    name: \"ada\"",
            "│  ▼ tags: Array(1)",
            "│  │    0: \"x\"",
            "│  ▼ meta: {…}",
        ]
    );
}

#[test]
fn test_rows_never_mutate_value() {
    let (heap, mut s) = json_session(json!({"a": [1, 2], "b": {"c": null}}), 8);
    let before = s.rows(&heap);
    s.toggle_str("$.a").unwrap();
    s.toggle_str("$.a").unwrap();
    assert_eq!(s.rows(&heap), before);
}

fn counting_getter(calls: &Rc<Cell<usize>>) -> Property {
    let calls = Rc::clone(calls);
    Property::getter(move |_| {
        calls.set(calls.get() + 1);
        Ok(Value::from(1))
    })
}

#[test]
fn test_collapsed_subtree_is_never_read() {
    let calls = Rc::new(Cell::new(0));
    let mut heap = Heap::new();
    let inner = heap.new_object();
    heap.define_property(inner, "lazy", counting_getter(&calls));
    let root = heap.new_object();
    heap.set_property(root, "inner", inner);

    let mut s = session(Value::Ref(root), 1);
    let rows = s.rows(&heap);
    assert_eq!(row(&rows, "$.inner").state(), NodeState::Collapsed);
    assert_eq!(calls.get(), 0);

    s.toggle_str("$.inner").unwrap();
    let rows = s.rows(&heap);
    assert_eq!(row(&rows, "$.inner.lazy").summary(), Some("1"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_children_past_the_window_are_never_read() {
    let counters: Vec<Rc<Cell<usize>>> = (0..5).map(|_| Rc::new(Cell::new(0))).collect();
    let mut heap = Heap::new();
    let obj = heap.new_object();
    for (i, calls) in counters.iter().enumerate() {
        heap.define_property(obj, format!("p{i}"), counting_getter(calls));
    }

    let mut s = inspect(Value::Ref(obj), options(1).with_max_children_per_node(2));
    let rows = s.rows(&heap);
    assert_eq!(rows.last().map(|r| &r.kind), Some(&RowKind::Truncated { remaining: 3 }));
    let counts: Vec<usize> = counters.iter().map(|c| c.get()).collect();
    assert_eq!(counts, vec![1, 1, 0, 0, 0]);

    s.show_more(&NodePath::root());
    s.rows(&heap);
    let counts: Vec<usize> = counters.iter().map(|c| c.get()).collect();
    assert_eq!(counts, vec![2, 2, 1, 1, 0]);
}
