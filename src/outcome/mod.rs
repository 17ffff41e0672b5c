//! Round outcomes: terminal events, the resolver, and chip settlement.

pub mod resolver;
pub mod settlement;

pub use resolver::{resolve_outcome, RoundOutcome, TerminalEvent, WinType};
pub use settlement::{ChipDelta, Settlement};
