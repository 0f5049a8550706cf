//! Runtime value inspector: classify arbitrary, possibly cyclic values and
//! render them as a lazily expanded tree.
//!
//! ```
//! use valscope::{Heap, InspectOptions, inspect};
//!
//! let mut heap = Heap::new();
//! let root = heap.import_json(&serde_json::json!({"a": 1, "b": {"c": 2}}));
//! let mut session = inspect(root, InspectOptions::default());
//! session.toggle_str("$.b").unwrap();
//! let paths: Vec<String> = session.rows(&heap).iter().map(|r| r.path.to_string()).collect();
//! assert_eq!(paths, ["$", "$.a", "$.b", "$.b.c"]);
//! ```

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod inspector;

pub use inspector::{
    AccessError, BigIntLiteral, Heap, HeapObject, InspectOptions, InspectionSession, InspectorRow,
    NodePath, NodeState, ObjectId, PathKey, Property, PropertyKey, RowKind, StyleToken,
    StyledLine, StyledSegment, Tag, ThemeColors, Value, classify, inspect, style_of, summarize,
};
pub use valscope_config as config;
