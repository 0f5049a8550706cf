//! Command-line interface for valscope.
//!
//! Subcommands render a JSON document (`inspect`), the built-in sample value
//! (`demo`), or list the paths a render would show (`paths`).

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use valscope_config::{Config, LogLevel};

use crate::inspector::demo::{DEMO_TITLE, build_demo};
use crate::inspector::{
    Heap, InspectOptions, InspectionSession, NodePath, RowKind, ThemeColors, Value, inspect,
};

/// valscope - inspect runtime values as a collapsible tree
#[derive(Parser, Debug)]
#[command(name = "valscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/valscope/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a JSON document as an inspector tree
    Inspect {
        /// JSON file to read; `-` or omitted reads stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Render a built-in value that exercises every value kind
    Demo {
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Print the path of every visible node, one per line
    Paths {
        /// JSON file to read; `-` or omitted reads stdin
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Levels to expand (defaults to everything)
        #[arg(long, value_name = "N")]
        depth: Option<usize>,
    },
}

/// Options shared by the rendering subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Levels expanded on first render (root is 0)
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// Children shown per node before a `… N more` marker
    #[arg(long, value_name = "N")]
    pub max_children: Option<usize>,

    /// Title line shown above the tree
    #[arg(long)]
    pub title: Option<String>,

    /// Toggle a node before rendering (repeatable), e.g. `$.user.tags`
    #[arg(long = "toggle", value_name = "PATH")]
    pub toggles: Vec<String>,

    /// Show one more batch of children under a node (repeatable)
    #[arg(long = "more", value_name = "PATH")]
    pub more: Vec<String>,

    /// Disable colours
    #[arg(long)]
    pub plain: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tree text
    #[default]
    Text,
    /// Rows as a JSON array
    Json,
}

/// Run a parsed command line. `level_pinned` is true when the log level
/// came from the flag or `RUST_LOG`.
pub fn run(cli: Cli, level_pinned: bool) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    if !level_pinned {
        crate::debug::apply_config_level(config.log_level.to_level_filter());
    }

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Inspect { file, display } => {
            let mut heap = Heap::new();
            let root = read_json(&mut heap, file.as_deref())?;
            render(&mut stdout, &heap, root, &config, &display, None)
        }
        Commands::Demo { display } => {
            let mut heap = Heap::new();
            let root = build_demo(&mut heap);
            render(&mut stdout, &heap, root, &config, &display, Some(DEMO_TITLE))
        }
        Commands::Paths { file, depth } => {
            let mut heap = Heap::new();
            let root = read_json(&mut heap, file.as_deref())?;
            let options = InspectOptions::from_settings(&config.inspector)
                .with_initial_expand_depth(depth.unwrap_or(usize::MAX));
            write_paths(&mut stdout, &heap, root, options)
        }
    }
}

/// One line per visible node path.
fn write_paths(
    out: &mut impl Write,
    heap: &Heap,
    root: Value,
    options: InspectOptions,
) -> Result<()> {
    let mut session = inspect(root, options);
    for row in session.rows(heap) {
        // Truncation rows carry their parent's path.
        if !matches!(row.kind, RowKind::Truncated { .. }) {
            writeln!(out, "{}", row.path)?;
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|e| {
            log::warn!("Using default config: {e}");
            Config::default()
        })),
    }
}

fn read_json(heap: &mut Heap, file: Option<&Path>) -> Result<Value> {
    let text = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    let json: serde_json::Value = serde_json::from_str(&text).context("input is not valid JSON")?;
    Ok(heap.import_json(&json))
}

/// Build a session from config and flags, apply the requested toggles and
/// print it.
fn render(
    out: &mut impl Write,
    heap: &Heap,
    root: Value,
    config: &Config,
    display: &DisplayArgs,
    default_title: Option<&str>,
) -> Result<()> {
    let mut session = session_for(root, config, display, default_title)?;

    match display.format {
        OutputFormat::Json => {
            let rows = session.rows(heap);
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let theme = ThemeColors::from_settings(&config.theme);
            let color = !display.plain && io::stdout().is_terminal();
            for line in session.render_lines(heap, &theme) {
                let text = if color { line.to_ansi() } else { line.plain_text() };
                writeln!(out, "{text}")?;
            }
        }
    }
    Ok(())
}

fn session_for(
    root: Value,
    config: &Config,
    display: &DisplayArgs,
    default_title: Option<&str>,
) -> Result<InspectionSession> {
    let mut options = InspectOptions::from_settings(&config.inspector);
    if let Some(depth) = display.depth {
        options = options.with_initial_expand_depth(depth);
    }
    if let Some(max) = display.max_children {
        options = options.with_max_children_per_node(max);
    }
    if config.inspector.show_title {
        options.title = display
            .title
            .clone()
            .or_else(|| default_title.map(String::from));
    }

    let mut session = inspect(root, options);
    for path in &display.toggles {
        session
            .toggle_str(path)
            .with_context(|| format!("bad --toggle path {path:?}"))?;
    }
    for path in &display.more {
        let path: NodePath = path
            .parse()
            .with_context(|| format!("bad --more path {path:?}"))?;
        session.show_more(&path);
    }
    Ok(session)
}
