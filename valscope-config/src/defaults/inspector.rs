//! Defaults for the inspector section.

pub fn initial_expand_depth() -> usize {
    1
}

pub fn max_children_per_node() -> usize {
    100
}

/// Upper bound on `initial_expand_depth` accepted by `Config::validate`.
pub fn max_expand_depth() -> usize {
    64
}

pub fn max_summary_chars() -> usize {
    120
}

pub fn show_title() -> bool {
    true
}
