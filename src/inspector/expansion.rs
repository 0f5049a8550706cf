//! Path-keyed expand/collapse state for one inspection session.

use std::collections::HashMap;

use super::path::NodePath;

/// Recorded state of one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    pub expanded: bool,
    /// Set once the host has toggled this path at least once.
    pub toggled: bool,
}

/// Expansion flags keyed by [`NodePath`].
///
/// A path that has never been observed falls back to
/// `depth < initial_expand_depth`. Entries are added lazily, the first time
/// the walker asks about a path or the host toggles it, and live until
/// [`ExpansionStore::reset`].
#[derive(Debug, Clone)]
pub struct ExpansionStore {
    initial_expand_depth: usize,
    entries: HashMap<NodePath, Expansion>,
    /// Extra `show more` batches granted per path.
    windows: HashMap<NodePath, usize>,
}

impl ExpansionStore {
    pub fn new(initial_expand_depth: usize) -> Self {
        Self {
            initial_expand_depth,
            entries: HashMap::new(),
            windows: HashMap::new(),
        }
    }

    pub fn initial_expand_depth(&self) -> usize {
        self.initial_expand_depth
    }

    fn default_for(&self, path: &NodePath) -> bool {
        path.depth() < self.initial_expand_depth
    }

    /// Whether `path` is expanded, recording the default on first sight.
    ///
    /// Also returns the recorded key for `path`. Children built from it share
    /// their prefix with the keys recorded on earlier walks, which keeps
    /// repeated lookups along deep paths cheap.
    pub fn observe(&mut self, path: NodePath) -> (NodePath, bool) {
        if let Some((recorded, entry)) = self.entries.get_key_value(&path) {
            return (recorded.clone(), entry.expanded);
        }
        let expanded = self.default_for(&path);
        self.entries.insert(
            path.clone(),
            Expansion {
                expanded,
                toggled: false,
            },
        );
        (path, expanded)
    }

    /// Read-only lookup that does not record anything.
    pub fn peek(&self, path: &NodePath) -> bool {
        self.entries
            .get(path)
            .map_or_else(|| self.default_for(path), |entry| entry.expanded)
    }

    /// Flip the flag for `path` and return the new value.
    pub fn toggle(&mut self, path: &NodePath) -> bool {
        let default = self.default_for(path);
        let entry = self.entries.entry(path.clone()).or_insert(Expansion {
            expanded: default,
            toggled: false,
        });
        entry.expanded = !entry.expanded;
        entry.toggled = true;
        entry.expanded
    }

    /// Force `path` open or closed.
    pub fn set_expanded(&mut self, path: &NodePath, expanded: bool) {
        self.entries.insert(
            path.clone(),
            Expansion {
                expanded,
                toggled: true,
            },
        );
    }

    /// Number of child batches shown for `path` (at least 1).
    pub fn window_batches(&self, path: &NodePath) -> usize {
        1 + self.windows.get(path).copied().unwrap_or(0)
    }

    /// Grant one more batch of children to `path`; returns the new count.
    pub fn extend_window(&mut self, path: &NodePath) -> usize {
        let extra = self.windows.entry(path.clone()).or_insert(0);
        *extra = extra.saturating_add(1);
        1 + *extra
    }

    /// Drop every recorded flag and window.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.windows.clear();
    }

    /// Number of paths observed or toggled so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &NodePath) -> Option<Expansion> {
        self.entries.get(path).copied()
    }
}
