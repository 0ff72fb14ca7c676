//! Mystic Catalog - terminal catalog of astrology and numerology services
//!
//! Without a subcommand the interactive catalog screen starts. Subcommands
//! give headless, scriptable access to the same catalog.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use mystic_catalog::catalog::Catalog;
use mystic_catalog::cli::{ConfigArgs, DispatchArgs, RenderArgs, TabsArgs, TokensArgs};
use mystic_catalog::config::Config;
use mystic_catalog::constants::APP_NAME;
use mystic_catalog::logging::{self, LogTarget};
use mystic_catalog::tokens::DesignTokens;
use mystic_catalog::tui;

/// Mystic Catalog - browse charts, reports, and tools
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog tabs
    Tabs(TabsArgs),
    /// Print the render tree for a tab
    Render(RenderArgs),
    /// Dispatch a catalog item as if it were selected
    Dispatch(DispatchArgs),
    /// List design tokens
    Tokens(TokensArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return run_screen(cli.verbose);
    };

    if let Err(e) = logging::init(cli.verbose, LogTarget::Stderr) {
        eprintln!("Warning: {e:#}");
    }

    let result = match command {
        Command::Tabs(args) => args.execute(),
        Command::Render(args) => args.execute(),
        Command::Dispatch(args) => args.execute(),
        Command::Tokens(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.code.code());
    }

    Ok(())
}

/// Starts the interactive catalog screen.
fn run_screen(verbose: bool) -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {e:#}; using default configuration");
        Config::default()
    });

    // The screen owns stdout, so logs go to a file
    if let Err(e) = LogTarget::default_file().and_then(|target| logging::init(verbose, target)) {
        eprintln!("Warning: file logging disabled: {e:#}");
    }

    let catalog = Catalog::load().context("Failed to load the embedded catalog")?;
    let tokens = DesignTokens::load().context("Failed to load the embedded design tokens")?;
    let mut state = tui::ScreenState::new(&catalog, &tokens, config)?;

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    if let Err(e) = &result {
        warn!("{APP_NAME} exited with error: {e:#}");
    }
    result
}
