//! Runtime value inspector.
//!
//! Displays arbitrary, possibly cyclic runtime values as a lazily expanded
//! tree. The pieces, bottom-up:
//!
//! - [`value`]: the value model, a [`Heap`] arena of identity-bearing values
//!   referenced from immediate [`Value`]s
//! - [`classify`]: total mapping from a value to a [`Tag`], its one-line
//!   summary and a semantic [`StyleToken`]
//! - [`path`]: [`NodePath`], the structural address of a node and the key of
//!   all expansion state
//! - [`expansion`]: the per-session [`ExpansionStore`]
//! - [`children`]: one level of enumeration with accessor failures isolated
//! - [`walker`]: pre-order traversal with the ancestor cycle guard and the
//!   per-node size guard
//! - [`session`]: [`InspectionSession`], the host-facing handle
//! - [`render`]: rows to [`StyledLine`]s using a [`ThemeColors`] palette
//!
//! Nothing here mutates the inspected value and nothing propagates a
//! failure to the host: accessor errors, cycles and oversized nodes all end
//! up as marker rows.

pub mod children;
pub mod classify;
pub mod demo;
pub mod error;
pub mod expansion;
pub mod json;
pub mod path;
pub mod render;
pub mod session;
pub mod theme;
pub mod tree_renderer;
pub mod types;
pub mod value;
pub mod walker;

pub use classify::{classify, style_of, summarize, summarize_with_limit};
pub use error::{AccessError, PathParseError, ValueError};
pub use expansion::ExpansionStore;
pub use path::{NodePath, PathKey};
pub use session::{InspectOptions, InspectionSession, inspect};
pub use theme::ThemeColors;
pub use types::{InspectorRow, NodeState, RowKind, StyleToken, StyledLine, StyledSegment, Tag};
pub use value::{BigIntLiteral, Heap, HeapObject, ObjectId, Property, PropertyKey, Value};
