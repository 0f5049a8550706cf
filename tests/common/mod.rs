//! Shared integration test helpers for valscope.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{json_session, paths, row};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use valscope::{Heap, InspectOptions, InspectionSession, InspectorRow, Value, inspect};

/// Import `json` into a fresh heap and open a session on it.
pub fn json_session(json: serde_json::Value, depth: usize) -> (Heap, InspectionSession) {
    let mut heap = Heap::new();
    let root = heap.import_json(&json);
    let session = inspect(root, options(depth));
    (heap, session)
}

/// Default options with the given initial expand depth.
pub fn options(depth: usize) -> InspectOptions {
    InspectOptions::default().with_initial_expand_depth(depth)
}

/// Session over a value already built in `heap`.
pub fn session(root: Value, depth: usize) -> InspectionSession {
    inspect(root, options(depth))
}

/// Serialized path of every row.
pub fn paths(rows: &[InspectorRow]) -> Vec<String> {
    rows.iter().map(|r| r.path.to_string()).collect()
}

/// The row whose path serializes to `path` (first match).
pub fn row<'a>(rows: &'a [InspectorRow], path: &str) -> &'a InspectorRow {
    rows.iter()
        .find(|r| r.path.to_string() == path)
        .unwrap_or_else(|| panic!("no row at {path}; have {:?}", paths(rows)))
}

/// `label: summary` for node rows, in display order.
pub fn label_summaries(rows: &[InspectorRow]) -> Vec<String> {
    rows.iter()
        .filter_map(|r| {
            let summary = r.summary()?;
            Some(match &r.label {
                Some(label) => format!("{label}: {summary}"),
                None => summary.to_string(),
            })
        })
        .collect()
}
