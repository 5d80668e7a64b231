//! seatplan-room entry point.
//!
//! Loads an analysis snapshot, restores or applies the room layout choice,
//! and prints the resulting room map.
//!
//! # Usage
//!
//! ```text
//! seatplan-room --analysis <FILE> [OPTIONS]
//!
//! Options:
//!   --layout <TAG>         Select a layout (teatro, mesa_u, buffet, ...)
//!   --segment <NAME>       Highlight only this segment
//!   --min-score <0-100>    Highlight only participants at or above this score
//!   --save                 Persist the active layout for future sessions
//!   --output <text|json>   Output format [default: text]
//!   --state-file <PATH>    Saved-layout file [default: state.toml next to the config]
//!   --config <PATH>        Config file [default: platform config dir]
//!   --list-layouts         Print the selectable layouts and exit
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable               | Description                       |
//! |------------------------|-----------------------------------|
//! | `SEATPLAN_ANALYSIS`    | Analysis snapshot path           |
//! | `SEATPLAN_CONFIG`      | Config file path                 |
//! | `SEATPLAN_STATE_FILE`  | Saved-layout file path           |
//! | `RUST_LOG`             | Log filter, overrides `log_level` |
//!
//! Logs go to stderr so that `--output json` stays machine-readable.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use seatplan_core::LayoutFormat;
use seatplan_room::application::layout_selection::LayoutStore;
use seatplan_room::application::room_session::RoomSession;
use seatplan_room::infrastructure::render::render_text;
use seatplan_room::infrastructure::snapshot::load_snapshot;
use seatplan_room::infrastructure::storage::config::{load_config, load_config_from, AppConfig};
use seatplan_room::infrastructure::storage::layout_store::{MemoryLayoutStore, TomlFileLayoutStore};

// ── CLI argument definitions ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Room configuration for event seating plans.
#[derive(Debug, Parser)]
#[command(
    name = "seatplan-room",
    about = "Partition an analysed participant list into a room layout",
    version
)]
struct Cli {
    /// Analysis snapshot (JSON) produced by the matching service.
    #[arg(long, env = "SEATPLAN_ANALYSIS", required_unless_present = "list_layouts")]
    analysis: Option<PathBuf>,

    /// Layout to select for this session.
    #[arg(long)]
    layout: Option<LayoutFormat>,

    /// Highlight only participants of this segment.
    #[arg(long)]
    segment: Option<String>,

    /// Highlight only participants scoring at least this much.
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: u8,

    /// Persist the active layout so the next session starts with it.
    #[arg(long)]
    save: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Key-value file holding the saved layout.
    #[arg(long, env = "SEATPLAN_STATE_FILE")]
    state_file: Option<PathBuf>,

    /// Config file to use instead of the platform default.
    #[arg(long, env = "SEATPLAN_CONFIG")]
    config: Option<PathBuf>,

    /// Print the selectable layouts and exit.
    #[arg(long)]
    list_layouts: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<AppConfig> {
        match &self.config {
            Some(path) => load_config_from(path)
                .with_context(|| format!("failed to load config from {}", path.display())),
            None => Ok(load_config().unwrap_or_else(|e| {
                // Logging is not initialised yet.
                eprintln!("using default config: {e}");
                AppConfig::default()
            })),
        }
    }

    /// Picks the layout store: `--state-file`, then the configured state
    /// file, then an in-memory store when no path can be resolved.
    fn layout_store(&self, config: &AppConfig) -> Arc<dyn LayoutStore> {
        let path = match &self.state_file {
            Some(path) => Ok(path.clone()),
            None => config.state_file_path(),
        };
        match path {
            Ok(path) => {
                info!(path = %path.display(), "using layout store");
                Arc::new(TomlFileLayoutStore::new(path))
            }
            Err(e) => {
                warn!("saved layouts will not persist: {e}");
                Arc::new(MemoryLayoutStore::new())
            }
        }
    }
}

fn print_layouts() {
    for format in LayoutFormat::SELECTABLE {
        println!(
            "{:<12} {:<14} {}",
            format.as_str(),
            format.label(),
            format.description().unwrap_or_default()
        );
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_layouts {
        print_layouts();
        return Ok(());
    }

    let config = cli.load_config()?;

    // `RUST_LOG` wins; otherwise the configured level applies.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .init();

    let analysis_path = cli
        .analysis
        .clone()
        .context("--analysis is required")?;
    let analysis = load_snapshot(&analysis_path)
        .with_context(|| format!("failed to load analysis {}", analysis_path.display()))?;

    let store = cli.layout_store(&config);
    let mut session = RoomSession::new(analysis, store, config.partition_options());

    if let Some(layout) = cli.layout {
        session.select_layout(layout);
    }
    session.set_segment(cli.segment.clone());
    session.set_min_score(cli.min_score);

    if cli.save && !session.save_layout() {
        warn!("layout was not saved; it applies to this session only");
    }

    let view = session.view();
    match cli.output {
        OutputFormat::Text => print!("{}", render_text(&view)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&view).context("failed to serialize room view")?
        ),
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
