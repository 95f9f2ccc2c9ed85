pub mod board;
pub mod card;
pub mod lane;
pub mod reconciler;

pub use board::{BoardState, LaneView};
pub use card::{Card, CardId, CardRecord};
pub use lane::Lane;
pub use reconciler::{AppliedMove, BoardReconciler, MoveOutcome, MoveSink};
