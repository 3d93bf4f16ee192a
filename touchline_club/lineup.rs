//! Team sheet for one event: the fixed rugby position catalogue, the
//! position → player mapping and the drag-and-drop assignment rules.

mod board;
mod composition;
mod engine;
mod positions;

pub use board::{BoardState, CompositionBoard};
pub use composition::{Composition, CompositionDocument, Normalized};
pub use engine::{assign, available_players, reset, unassign};
pub use positions::{FieldSpot, POSITIONS, PositionDef, PositionKey, PositionRole};
