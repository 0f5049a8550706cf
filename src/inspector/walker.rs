//! Pre-order traversal producing the visible rows of a value tree.
//!
//! Only nodes whose expansion flag is set have their children enumerated, so
//! the work done is proportional to what is on screen, not to the size of
//! the value. The identities of the nodes between the root and the current
//! node are tracked in an ancestor map; a child that is one of its own
//! ancestors is emitted as a circular row and never descended into.

use std::collections::HashMap;

use super::children::{Child, ChildContent, enumerate_children, is_expandable};
use super::classify::{classify, single_line, summarize_with_limit, truncate};
use super::expansion::ExpansionStore;
use super::path::NodePath;
use super::types::{InspectorRow, NodeState, RowKind};
use super::value::{Heap, ObjectId, Value};

/// Per-walk bounds.
#[derive(Debug, Clone, Copy)]
pub struct WalkLimits {
    /// Children shown per batch; `show more` adds another batch.
    pub max_children_per_node: usize,
    pub max_summary_chars: usize,
}

struct Walker<'a> {
    heap: &'a Heap,
    store: &'a mut ExpansionStore,
    limits: WalkLimits,
    ancestors: HashMap<ObjectId, NodePath>,
    stack: Vec<Frame>,
    rows: Vec<InspectorRow>,
}

/// An expanded node whose children are still being emitted.
struct Frame {
    id: ObjectId,
    path: NodePath,
    children: std::vec::IntoIter<Child>,
    remaining: usize,
}

/// Walk `root` and return its visible rows in display order.
///
/// The walk keeps its own stack of expanded nodes, so the depth of the value
/// is bounded by memory, not by the native call stack.
pub fn walk(
    heap: &Heap,
    root: &Value,
    store: &mut ExpansionStore,
    limits: WalkLimits,
) -> Vec<InspectorRow> {
    let mut walker = Walker {
        heap,
        store,
        limits,
        ancestors: HashMap::new(),
        stack: Vec::new(),
        rows: Vec::new(),
    };
    walker.enter(root, NodePath::root(), None);
    walker.run();
    walker.rows
}

impl Walker<'_> {
    fn run(&mut self) {
        while let Some(frame) = self.stack.last_mut() {
            let Some(child) = frame.children.next() else {
                if let Some(frame) = self.stack.pop() {
                    self.leave(frame);
                }
                continue;
            };
            let path = frame.path.child(child.key);
            let depth = path.depth();

            match child.content {
                ChildContent::AccessFailed(err) => self.rows.push(InspectorRow {
                    path,
                    depth,
                    label: Some(child.label),
                    kind: RowKind::AccessFailed {
                        message: single_line(&truncate(
                            &err.to_string(),
                            self.limits.max_summary_chars,
                        )),
                    },
                }),
                ChildContent::Value(value) => {
                    let target = value
                        .identity()
                        .and_then(|id| self.ancestors.get(&id).cloned());
                    match target {
                        Some(target) => self.rows.push(InspectorRow {
                            path,
                            depth,
                            label: Some(child.label),
                            kind: RowKind::Circular {
                                tag: classify(self.heap, &value),
                                target,
                            },
                        }),
                        None => self.enter(&value, path, Some(child.label)),
                    }
                }
            }
        }
    }

    /// Emit the row for one node and, if it is open, push a frame for its
    /// children.
    fn enter(&mut self, value: &Value, path: NodePath, label: Option<String>) {
        let tag = classify(self.heap, value);
        let summary = summarize_with_limit(self.heap, value, tag, self.limits.max_summary_chars);
        let depth = path.depth();

        let (path, state) = if is_expandable(self.heap, value, tag) {
            match self.store.observe(path) {
                (path, true) => (path, NodeState::Expanded),
                (path, false) => (path, NodeState::Collapsed),
            }
        } else {
            (path, NodeState::Leaf)
        };

        self.rows.push(InspectorRow {
            path: path.clone(),
            depth,
            label,
            kind: RowKind::Node {
                tag,
                summary,
                state,
            },
        });

        if state != NodeState::Expanded {
            return;
        }
        let Some(id) = value.identity() else {
            return;
        };

        let limit = self
            .limits
            .max_children_per_node
            .saturating_mul(self.store.window_batches(&path));
        let batch = enumerate_children(self.heap, value, limit, self.limits.max_summary_chars);

        self.ancestors.insert(id, path.clone());
        self.stack.push(Frame {
            id,
            path,
            children: batch.children.into_iter(),
            remaining: batch.remaining,
        });
    }

    /// Close a frame once all of its shown children have been emitted.
    fn leave(&mut self, frame: Frame) {
        self.ancestors.remove(&frame.id);
        if frame.remaining > 0 {
            let depth = frame.path.depth() + 1;
            self.rows.push(InspectorRow {
                path: frame.path,
                depth,
                label: None,
                kind: RowKind::Truncated {
                    remaining: frame.remaining,
                },
            });
        }
    }
}
