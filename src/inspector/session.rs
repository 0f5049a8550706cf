//! Inspection sessions: one root value plus its expansion state.

use valscope_config::InspectorSettings;

use super::error::PathParseError;
use super::expansion::ExpansionStore;
use super::path::NodePath;
use super::render::render_rows;
use super::theme::ThemeColors;
use super::types::{InspectorRow, StyledLine};
use super::value::{Heap, Value};
use super::walker::{WalkLimits, walk};

/// Knobs for one inspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectOptions {
    /// Levels open on first render; the root is depth 0.
    pub initial_expand_depth: usize,
    pub max_children_per_node: usize,
    pub max_summary_chars: usize,
    /// Display-only heading.
    pub title: Option<String>,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self::from_settings(&InspectorSettings::default())
    }
}

impl InspectOptions {
    /// Options taken from the `inspector:` config section.
    pub fn from_settings(settings: &InspectorSettings) -> Self {
        Self {
            initial_expand_depth: settings.initial_expand_depth,
            max_children_per_node: settings.max_children_per_node.max(1),
            max_summary_chars: settings.max_summary_chars,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_initial_expand_depth(mut self, depth: usize) -> Self {
        self.initial_expand_depth = depth;
        self
    }

    pub fn with_max_children_per_node(mut self, max: usize) -> Self {
        self.max_children_per_node = max.max(1);
        self
    }

    fn limits(&self) -> WalkLimits {
        WalkLimits {
            max_children_per_node: self.max_children_per_node.max(1),
            max_summary_chars: self.max_summary_chars,
        }
    }
}

/// State of one inspector widget.
///
/// The session owns nothing but the root value handle and its expansion
/// store; the heap is borrowed for each render. Sessions never share a
/// store, so two inspectors over the same value expand independently.
#[derive(Debug, Clone)]
pub struct InspectionSession {
    root: Value,
    options: InspectOptions,
    store: ExpansionStore,
}

/// Start inspecting `value`.
pub fn inspect(value: Value, options: InspectOptions) -> InspectionSession {
    InspectionSession::new(value, options)
}

impl InspectionSession {
    pub fn new(root: Value, options: InspectOptions) -> Self {
        let store = ExpansionStore::new(options.initial_expand_depth);
        Self {
            root,
            options,
            store,
        }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn options(&self) -> &InspectOptions {
        &self.options
    }

    pub fn title(&self) -> Option<&str> {
        self.options.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.options.title = title;
    }

    /// Swap in a new root. Expansion state is discarded unless `value` is
    /// the same value as the current root. Returns whether it was reset.
    pub fn replace_root(&mut self, value: Value) -> bool {
        let reset = !self.root.is_same(&value);
        if reset {
            log::debug!("inspector root changed, dropping {} expansion entries", self.store.len());
            self.store.reset();
        }
        self.root = value;
        reset
    }

    /// Flip the node at `path`; returns whether it is now expanded.
    pub fn toggle(&mut self, path: &NodePath) -> bool {
        let expanded = self.store.toggle(path);
        log::debug!("toggle {path} -> {}", if expanded { "expanded" } else { "collapsed" });
        expanded
    }

    /// [`toggle`](Self::toggle) with a path in its string form.
    pub fn toggle_str(&mut self, path: &str) -> Result<bool, PathParseError> {
        let path: NodePath = path.parse()?;
        Ok(self.toggle(&path))
    }

    /// Show one more batch of children under `path`; returns how many
    /// batches are now visible.
    pub fn show_more(&mut self, path: &NodePath) -> usize {
        let batches = self.store.extend_window(path);
        log::debug!("show more under {path}: {batches} batches");
        batches
    }

    /// Whether `path` is currently expanded.
    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.store.peek(path)
    }

    /// Visible rows in display order.
    pub fn rows(&mut self, heap: &Heap) -> Vec<InspectorRow> {
        walk(heap, &self.root, &mut self.store, self.options.limits())
    }

    /// Visible rows as styled lines, title first.
    pub fn render_lines(&mut self, heap: &Heap, theme: &ThemeColors) -> Vec<StyledLine> {
        let rows = self.rows(heap);
        render_rows(&rows, self.options.title.as_deref(), theme)
    }
}
