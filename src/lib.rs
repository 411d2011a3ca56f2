//! Kanban drag-and-drop state engine.
//!
//! Columns of cards, reordered by pointer drops and keyboard commands, with
//! post-move feedback (highlight, screen-reader announcement, focus) for
//! whatever renders the board.
//!
//! Pure core, impure shell: [`model`], [`state`] and [`dnd`] are pure;
//! [`board`] wires them to the [`registry`] and [`effects`]; [`source`],
//! [`config`], [`logging`] and [`view`] sit at the edge.

pub mod board;
pub mod config;
pub mod dnd;
pub mod effects;
pub mod integration;
pub mod logging;
pub mod model;
pub mod registry;
pub mod source;
pub mod state;
pub mod view;

pub use board::{Board, DropDisposition};
