//! Post-move feedback: highlight, announcement and focus.

pub mod announcer;
pub mod coordinator;

pub use announcer::{Announcer, LiveRegion, DEFAULT_HISTORY_CAPACITY};
pub use coordinator::{
    card_move_message, card_reorder_message, column_reorder_message, PostMoveEffectCoordinator,
};
