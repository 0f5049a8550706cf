//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on config fields.

mod colors;
mod inspector;

// ── Inspector behaviour ────────────────────────────────────────────────────
pub use inspector::{
    initial_expand_depth, max_children_per_node, max_expand_depth, max_summary_chars,
    show_title,
};

// ── Semantic palette ───────────────────────────────────────────────────────
pub use colors::{
    boolean_color, callable_color, container_color, date_color, error_color, guide_color,
    key_color, marker_color, null_color, number_color, pattern_color, string_color,
    symbol_color, title_color,
};
