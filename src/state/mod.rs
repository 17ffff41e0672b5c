//! Players, the table snapshot, and pure turn transitions.

pub mod error;
pub mod player;
pub mod table;

pub use error::ActionError;
pub use player::{Player, PlayerId, SeatMap};
pub use table::{GameState, Spread, StateParts, Step, TurnPhase};
