//! Configuration system for the valscope runtime value inspector.
//!
//! This crate provides configuration loading, saving, and default values
//! for the inspector and its CLI host. It includes:
//!
//! - Inspector knobs (initial expand depth, per-node child budget, title)
//! - Semantic colour palette used when rendering inspector rows
//! - Log level selection for the debug log file
//! - YAML persistence under `~/.config/valscope/config.yaml`

pub mod config;
pub mod defaults;
pub mod error;
mod types;

pub use config::{Config, InspectorSettings, ThemeSettings};
pub use error::ConfigError;
pub use types::LogLevel;
