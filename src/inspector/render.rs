//! Turns walker rows into styled lines.
//!
//! Layout of one row:
//!
//! ```text
//! │  │  ▶ key: summary
//! └guides┘└marker
//! ```

use super::classify::style_of;
use super::theme::ThemeColors;
use super::tree_renderer::{
    access_failed_marker, circular_marker, disclosure_marker, tree_guides, truncation_marker,
};
use super::types::{InspectorRow, NodeState, RowKind, StyleToken, StyledLine, StyledSegment};

/// Render `rows`, preceded by a bold title line when `title` is given.
pub fn render_rows(rows: &[InspectorRow], title: Option<&str>, theme: &ThemeColors) -> Vec<StyledLine> {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if let Some(title) = title {
        lines.push(StyledLine::new(vec![StyledSegment {
            text: title.to_string(),
            fg: Some(theme.color(StyleToken::Title)),
            bold: true,
            ..Default::default()
        }]));
    }
    lines.extend(rows.iter().map(|row| render_row(row, theme)));
    lines
}

/// Render a single row.
pub fn render_row(row: &InspectorRow, theme: &ThemeColors) -> StyledLine {
    let mut segments = Vec::with_capacity(4);
    let guides = tree_guides(row.depth);
    if !guides.is_empty() {
        segments.push(token_segment(&guides, StyleToken::Guide, theme));
    }

    let state = row.state();
    if matches!(row.kind, RowKind::Truncated { .. }) {
        segments.push(plain_segment(disclosure_marker(NodeState::Leaf)));
    } else {
        segments.push(token_segment(disclosure_marker(state), StyleToken::Marker, theme));
    }

    if let Some(label) = &row.label {
        segments.push(token_segment(&format!("{label}: "), StyleToken::Key, theme));
    }

    match &row.kind {
        RowKind::Node { tag, summary, .. } => {
            segments.push(token_segment(summary, style_of(*tag), theme));
        }
        RowKind::Circular { target, .. } => {
            segments.push(token_segment(&circular_marker(target), StyleToken::Marker, theme));
        }
        RowKind::AccessFailed { message } => {
            segments.push(StyledSegment {
                text: access_failed_marker(message),
                fg: Some(theme.color(StyleToken::Error)),
                italic: true,
                ..Default::default()
            });
        }
        RowKind::Truncated { remaining } => {
            segments.push(StyledSegment {
                text: truncation_marker(*remaining),
                fg: Some(theme.color(StyleToken::Marker)),
                italic: true,
                ..Default::default()
            });
        }
    }

    StyledLine::new(segments)
}

fn token_segment(text: &str, token: StyleToken, theme: &ThemeColors) -> StyledSegment {
    StyledSegment {
        text: text.to_string(),
        fg: Some(theme.color(token)),
        ..Default::default()
    }
}

fn plain_segment(text: &str) -> StyledSegment {
    StyledSegment {
        text: text.to_string(),
        ..Default::default()
    }
}
