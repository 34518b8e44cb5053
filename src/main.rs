use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use lunacy::config::load_keybinds;
use lunacy::tui;

/// View LeftWM keybindings from ~/.config/leftwm/config.ron
#[derive(Parser)]
#[command(name = "lunacy")]
#[command(version)]
#[command(about = "Terminal viewer for LeftWM keybindings")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Quiet by default; RUST_LOG turns on diagnostics before the TUI takes over
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp_secs()
        .init();

    let keybinds = load_keybinds().context("Failed to load LeftWM config")?;
    debug!("Loaded {} keybinds", keybinds.len());

    tui::run_tui(keybinds)
}
