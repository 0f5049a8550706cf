//! Top-level configuration structure.
//!
//! Maps to `~/.config/valscope/config.yaml`:
//!
//! ```yaml
//! log_level: off
//! inspector:
//!   initial_expand_depth: 1
//!   max_children_per_node: 100
//!   max_summary_chars: 120
//!   show_title: true
//! theme:
//!   string: [166, 227, 161]
//!   number: [249, 226, 175]
//! ```

mod persistence;

use crate::defaults;
use crate::error::ConfigError;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};

/// Complete valscope configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Verbosity of the debug log file.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Inspector behaviour knobs.
    #[serde(default)]
    pub inspector: InspectorSettings,

    /// Semantic colour palette.
    #[serde(default)]
    pub theme: ThemeSettings,
}

/// Inspector behaviour (lives under `inspector:` in config.yaml).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectorSettings {
    /// Levels that auto-expand on first render (root is depth 0).
    #[serde(default = "defaults::initial_expand_depth")]
    pub initial_expand_depth: usize,

    /// Ceiling on children enumerated by one expansion.
    #[serde(default = "defaults::max_children_per_node")]
    pub max_children_per_node: usize,

    /// Longest string/message rendered inside a one-line summary.
    #[serde(default = "defaults::max_summary_chars")]
    pub max_summary_chars: usize,

    /// Whether the title line is rendered above the tree.
    #[serde(default = "defaults::show_title")]
    pub show_title: bool,
}

impl Default for InspectorSettings {
    fn default() -> Self {
        Self {
            initial_expand_depth: defaults::initial_expand_depth(),
            max_children_per_node: defaults::max_children_per_node(),
            max_summary_chars: defaults::max_summary_chars(),
            show_title: defaults::show_title(),
        }
    }
}

/// RGB colours per semantic style token (lives under `theme:`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default = "defaults::string_color")]
    pub string: [u8; 3],
    #[serde(default = "defaults::number_color")]
    pub number: [u8; 3],
    #[serde(default = "defaults::boolean_color")]
    pub boolean: [u8; 3],
    /// Used for `null` and `undefined`.
    #[serde(default = "defaults::null_color")]
    pub null: [u8; 3],
    #[serde(default = "defaults::callable_color")]
    pub callable: [u8; 3],
    #[serde(default = "defaults::symbol_color")]
    pub symbol: [u8; 3],
    #[serde(default = "defaults::date_color")]
    pub date: [u8; 3],
    #[serde(default = "defaults::pattern_color")]
    pub pattern: [u8; 3],
    /// Exceptions and access-failure rows.
    #[serde(default = "defaults::error_color")]
    pub error: [u8; 3],
    /// Objects, arrays, maps and sets.
    #[serde(default = "defaults::container_color")]
    pub container: [u8; 3],
    #[serde(default = "defaults::key_color")]
    pub key: [u8; 3],
    /// Tree guide characters.
    #[serde(default = "defaults::guide_color")]
    pub guide: [u8; 3],
    /// Circular-reference and truncation markers.
    #[serde(default = "defaults::marker_color")]
    pub marker: [u8; 3],
    #[serde(default = "defaults::title_color")]
    pub title: [u8; 3],
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            string: defaults::string_color(),
            number: defaults::number_color(),
            boolean: defaults::boolean_color(),
            null: defaults::null_color(),
            callable: defaults::callable_color(),
            symbol: defaults::symbol_color(),
            date: defaults::date_color(),
            pattern: defaults::pattern_color(),
            error: defaults::error_color(),
            container: defaults::container_color(),
            key: defaults::key_color(),
            guide: defaults::guide_color(),
            marker: defaults::marker_color(),
            title: defaults::title_color(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial expand depth
    pub fn with_initial_expand_depth(mut self, depth: usize) -> Self {
        self.inspector.initial_expand_depth = depth;
        self
    }

    /// Set the per-node child budget
    pub fn with_max_children_per_node(mut self, max: usize) -> Self {
        self.inspector.max_children_per_node = max;
        self
    }

    /// Check field values that serde cannot express as types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inspector.max_children_per_node == 0 {
            return Err(ConfigError::Validation(
                "inspector.max_children_per_node must be greater than 0".to_string(),
            ));
        }
        if self.inspector.initial_expand_depth > defaults::max_expand_depth() {
            return Err(ConfigError::Validation(format!(
                "inspector.initial_expand_depth {} exceeds the maximum of {}",
                self.inspector.initial_expand_depth,
                defaults::max_expand_depth()
            )));
        }
        if self.inspector.max_summary_chars < 8 {
            return Err(ConfigError::Validation(
                "inspector.max_summary_chars must be at least 8".to_string(),
            ));
        }
        Ok(())
    }
}
