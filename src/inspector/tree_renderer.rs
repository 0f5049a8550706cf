//! Tree drawing primitives: indentation guides, disclosure markers and the
//! fixed texts used for marker rows.

use super::path::NodePath;
use super::types::NodeState;

/// Tree guide characters used for indentation.
pub struct TreeGuideChars {
    /// Vertical continuation line: `│`
    pub vertical: &'static str,
    /// Spacer between guide columns.
    pub spacer: &'static str,
}

impl Default for TreeGuideChars {
    fn default() -> Self {
        Self {
            vertical: "│",
            spacer: "  ",
        }
    }
}

/// Generate tree guide prefix string for a given depth.
///
/// Each depth level produces a `│` followed by padding. For example, at depth 2:
/// ```text
/// │  │
/// ```
pub fn tree_guides(depth: usize) -> String {
    let chars = TreeGuideChars::default();
    let mut prefix = String::new();
    for _ in 0..depth {
        prefix.push_str(chars.vertical);
        prefix.push_str(chars.spacer);
    }
    prefix
}

/// Disclosure marker, padded so leaf rows line up with their siblings.
pub fn disclosure_marker(state: NodeState) -> &'static str {
    match state {
        NodeState::Collapsed => "▶ ",
        NodeState::Expanded => "▼ ",
        NodeState::Leaf => "  ",
    }
}

/// `[Circular *$.a]`
pub fn circular_marker(target: &NodePath) -> String {
    format!("[Circular *{target}]")
}

/// `<access failed: reason>`
pub fn access_failed_marker(message: &str) -> String {
    format!("<access failed: {message}>")
}

/// `… 12 more`
pub fn truncation_marker(remaining: usize) -> String {
    format!("… {remaining} more")
}
