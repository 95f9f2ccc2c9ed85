//! # Swimlane Core
//!
//! State reconciliation for a three-lane task board.
//!
//! Cards are partitioned into `backlog`, `in-progress` and `complete` lanes.
//! A [`BoardReconciler`] owns that partition and republishes it as a whole on
//! every move, while a [`DragGestureAdapter`] turns drag library drop events
//! into moves and keeps the library from touching the rendered elements.

pub mod config;
pub mod directory;
pub mod domain;
pub mod drag;
pub mod error;

// Re-export commonly used types
pub use config::{BoardConfig, Column};
pub use directory::{CardDirectory, FileDirectory, SeedDirectory};
pub use domain::{
    board::{BoardState, LaneView},
    card::{Card, CardId, CardRecord},
    lane::Lane,
    reconciler::{AppliedMove, BoardReconciler, MoveOutcome, MoveSink},
};
pub use drag::{DragGestureAdapter, DragLibrary, ElementAttributes};
pub use error::{BoardError, Result};
