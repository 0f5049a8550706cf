//! Debug logging for valscope.
//!
//! All `log::*!` output is routed to `valscope_debug.log` in the system temp
//! directory (`/tmp` on most Unix systems, `%TEMP%` on Windows) so that
//! stdout stays reserved for the rendered tree.
//!
//! Level precedence: the `--log-level` flag, then `RUST_LOG`, then the
//! `log_level` config value (applied after the config is loaded). When
//! `RUST_LOG` is set, records are mirrored to stderr as well.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("valscope_debug.log")
}

struct DebugLogger {
    file: Option<File>,
    mirror_stderr: bool,
}

impl DebugLogger {
    fn open() -> Self {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
            .ok();
        let mut logger = DebugLogger {
            file,
            mirror_stderr: std::env::var_os("RUST_LOG").is_some(),
        };
        logger.write_raw(&format!(
            "{}\nvalscope debug session started at {}\n{}\n",
            "=".repeat(80),
            timestamp(),
            "=".repeat(80)
        ));
        logger
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(file) = self.file.as_mut() {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }
}

fn timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string()
}

struct LogBridge;

static LOGGER: OnceLock<Mutex<DebugLogger>> = OnceLock::new();
static BRIDGE: LogBridge = LogBridge;

fn logger() -> &'static Mutex<DebugLogger> {
    LOGGER.get_or_init(|| Mutex::new(DebugLogger::open()))
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        let mut logger = logger().lock();
        logger.write_raw(&line);
        if logger.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = logger().lock().file.as_mut() {
            let _ = file.flush();
        }
    }
}

/// Level requested through `RUST_LOG`, if it names a plain level.
fn env_level() -> Option<LevelFilter> {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.trim().parse::<LevelFilter>().ok())
}

/// Install the log bridge. Returns whether the level is now fixed by the
/// flag or `RUST_LOG`, in which case the config value must not override it.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) -> bool {
    let pinned = cli_level.or_else(env_level);
    let level = pinned.unwrap_or(LevelFilter::Off);
    if log::set_logger(&BRIDGE).is_ok() {
        log::set_max_level(level);
        if level != LevelFilter::Off {
            // Open eagerly so the session header lands before any record.
            let _ = logger();
        }
    }
    pinned.is_some()
}

/// Apply the level from the config file.
pub fn apply_config_level(level: LevelFilter) {
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_in_temp_dir() {
        let path = log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("valscope_debug.log"));
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp();
        assert_eq!(ts.len(), "2024-01-01 00:00:00.000".len());
    }
}
