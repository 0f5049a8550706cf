//! One level of child enumeration.
//!
//! Each expandable tag has a fixed enumeration order: lists by index, maps
//! and sets by insertion order, objects (and callables, exceptions) by own
//! property declaration order including non-enumerable properties. Reading a
//! property can fail; a failure becomes a [`ChildContent::AccessFailed`]
//! entry and enumeration carries on with the next key.

use super::classify::{classify, single_line, summarize_with_limit, truncate};
use super::error::AccessError;
use super::path::PathKey;
use super::types::Tag;
use super::value::{Heap, HeapObject, PropertyKey, Value};

/// What enumeration produced for one key.
#[derive(Debug, Clone)]
pub enum ChildContent {
    Value(Value),
    AccessFailed(AccessError),
}

/// One enumerated child.
#[derive(Debug, Clone)]
pub struct Child {
    pub key: PathKey,
    /// Text shown before the child's summary.
    pub label: String,
    pub content: ChildContent,
}

/// At most `limit` children plus a count of what was left out.
#[derive(Debug, Clone, Default)]
pub struct ChildBatch {
    pub children: Vec<Child>,
    pub remaining: usize,
}

/// Whether a value with this tag can show children.
///
/// Containers, plain objects and exceptions always can, even when empty.
/// Callables only when they carry own properties.
pub fn is_expandable(heap: &Heap, value: &Value, tag: Tag) -> bool {
    match tag {
        Tag::Callable => value
            .identity()
            .is_some_and(|id| heap.child_count(id) > 0),
        tag => !tag.is_closed(),
    }
}

/// Enumerate up to `limit` children of `value`.
///
/// `max_label_chars` bounds every label. Map-key labels are rendered through
/// the summarizer; property names and symbol descriptions are cut and folded
/// onto one line the same way summaries are.
pub fn enumerate_children(
    heap: &Heap,
    value: &Value,
    limit: usize,
    max_label_chars: usize,
) -> ChildBatch {
    let Some(id) = value.identity() else {
        return ChildBatch::default();
    };
    let total = heap.child_count(id);
    let taken = total.min(limit);

    let children = match heap.get(id) {
        Some(HeapObject::Array { elements }) => elements
            .iter()
            .take(taken)
            .enumerate()
            .map(|(i, v)| Child {
                key: PathKey::Index(i),
                label: i.to_string(),
                content: ChildContent::Value(v.clone()),
            })
            .collect(),
        Some(HeapObject::Map { entries }) => entries
            .iter()
            .take(taken)
            .enumerate()
            .map(|(i, (k, v))| Child {
                key: PathKey::Entry(i),
                label: summarize_with_limit(heap, k, classify(heap, k), max_label_chars),
                content: ChildContent::Value(v.clone()),
            })
            .collect(),
        Some(HeapObject::Set { values }) => values
            .iter()
            .take(taken)
            .enumerate()
            .map(|(i, v)| Child {
                key: PathKey::Entry(i),
                label: i.to_string(),
                content: ChildContent::Value(v.clone()),
            })
            .collect(),
        Some(_) => match heap.own_properties(id) {
            Some(properties) => properties
                .iter()
                .take(taken)
                .map(|(key, property)| {
                    let (key, label) = property_path_key(heap, key, max_label_chars);
                    let content = match heap.read(property) {
                        Ok(v) => ChildContent::Value(v),
                        Err(e) => {
                            log::debug!("accessor for {label} failed: {e}");
                            ChildContent::AccessFailed(e)
                        }
                    };
                    Child {
                        key,
                        label,
                        content,
                    }
                })
                .collect(),
            None => Vec::new(),
        },
        None => Vec::new(),
    };

    log::trace!(
        "enumerated {} of {} children of slot {}",
        taken,
        total,
        id.index()
    );
    ChildBatch {
        children,
        remaining: total - taken,
    }
}

fn property_path_key(heap: &Heap, key: &PropertyKey, max_chars: usize) -> (PathKey, String) {
    match key {
        PropertyKey::Name(name) => (
            PathKey::Name(name.clone()),
            single_line(&truncate(name, max_chars)),
        ),
        PropertyKey::Symbol(id) => {
            let description = heap.symbol_description(*id).flatten().unwrap_or("");
            let description = single_line(&truncate(description, max_chars));
            (PathKey::Symbol(*id), format!("[Symbol({description})]"))
        }
    }
}
