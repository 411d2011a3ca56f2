//! kanban-dnd - Entry Point

use clap::Parser;
use kanban_dnd::model::{BoardCommand, BoardState};
use kanban_dnd::source::{self, RecordedDrop};
use std::path::PathBuf;
use tracing::info;

/// Kanban board driven by keyboard commands and recorded drops
#[derive(Parser, Debug)]
#[command(name = "kanban-dnd")]
#[command(version)]
#[command(about = "Reorder a kanban board with keyboard commands and recorded drag-and-drop gestures")]
pub struct Args {
    /// Board JSON file (uses the sample board if not provided)
    pub board: Option<PathBuf>,

    /// Keyboard command to run, e.g. "move-card-up id:3" (repeatable)
    #[arg(short, long = "command")]
    pub commands: Vec<String>,

    /// JSON file of recorded drops to replay after the commands (repeatable)
    #[arg(short, long = "replay")]
    pub replays: Vec<PathBuf>,

    /// Items per column of the sample board
    #[arg(long)]
    pub items_per_column: Option<usize>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = kanban_dnd::config::load_config_with_precedence(args.config.clone())?;
        let merged = kanban_dnd::config::merge_config(config_file);
        let with_env = kanban_dnd::config::apply_env_overrides(merged);
        kanban_dnd::config::apply_cli_overrides(
            with_env,
            args.board.clone(),
            args.items_per_column,
        )
    };

    kanban_dnd::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let initial: BoardState = match &config.board_file {
        Some(path) => source::load_board(path)?,
        None => source::basic_board(config.items_per_column)?,
    };
    let commands = args
        .commands
        .iter()
        .map(|text| text.parse::<BoardCommand>())
        .collect::<Result<Vec<_>, _>>()?;
    let mut drops: Vec<RecordedDrop> = Vec::new();
    for path in &args.replays {
        drops.extend(source::load_replay(path)?);
    }

    let report = kanban_dnd::integration::run_session(initial, commands, drops)?;

    for announcement in &report.announcements {
        println!("{announcement}");
    }
    if !report.announcements.is_empty() {
        println!();
    }
    print!("{}", report.rendered);

    Ok(())
}
