use anyhow::Result;
use clap::Parser;
use valscope::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI --log-level takes precedence, then RUST_LOG, then config (applied in `cli::run`).
    let level_pinned = valscope::debug::init_log_bridge(cli.log_level.map(|l| l.to_level_filter()));
    log::info!("Starting valscope {}", valscope::VERSION);

    if let Err(e) = cli::run(cli, level_pinned) {
        eprintln!("valscope: error: {e:#}");
        log::error!("{e:#}");
        std::process::exit(1);
    }
    Ok(())
}
