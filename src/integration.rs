//! Scripted board sessions.
//!
//! Drives a board the way the binary does: mount console elements, activate,
//! run keyboard commands, then replay recorded drops, all against one board
//! instance. Testable without any I/O.

use crate::board::{Board, DropDisposition};
use crate::effects::LiveRegion;
use crate::model::{BoardCommand, BoardError, BoardState, Operation};
use crate::source::RecordedDrop;
use crate::view::{render_board, MountedBoard};
use tracing::info;

/// Everything a scripted session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Operations recorded, in order.
    pub operations: Vec<Operation>,
    /// Drops that were ignored or skipped.
    pub ignored_drops: usize,
    /// Announcements made while the board was active, oldest first.
    pub announcements: Vec<String>,
    /// Highlights played on mounted elements.
    pub flashes: usize,
    /// The final board as text.
    pub rendered: String,
}

/// Run `commands`, then `drops`, against a fresh board built from `initial`.
///
/// # Errors
///
/// Stops at the first [`BoardError`]; earlier operations stay applied.
pub fn run_session(
    initial: BoardState,
    commands: Vec<BoardCommand>,
    drops: Vec<RecordedDrop>,
) -> Result<SessionReport, BoardError> {
    let mut board = Board::new(initial, LiveRegion::default());
    let mounted = MountedBoard::mount(board.state(), board.registry());
    board.activate();

    let mut operations = Vec::new();
    let mut ignored_drops = 0;

    for command in commands {
        operations.extend(board.execute(command)?);
    }
    let instance_id = board.instance_id();
    for recorded in drops {
        match board.handle_drop(&recorded.into_event(instance_id))? {
            DropDisposition::Applied(operation) => operations.push(operation),
            DropDisposition::Ignored | DropDisposition::Skipped => ignored_drops += 1,
        }
    }

    let announcements = board.announcer().history().iter().cloned().collect();
    board.deactivate();

    info!(
        operations = operations.len(),
        ignored_drops,
        "Session finished"
    );
    Ok(SessionReport {
        operations,
        ignored_drops,
        announcements,
        flashes: mounted.total_flashes(),
        rendered: render_board(board.state()),
    })
}
