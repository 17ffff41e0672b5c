//! The pure rule predicates: spread validity, hit validity, scoring.
//!
//! This module is the single authoritative implementation of the Tonk
//! rules. UI enablement, AI move selection, and optimistic prediction
//! all call these same functions; nothing re-implements them.
//!
//! Every function here is total over well-typed input, allocation-light,
//! side-effect-free, and safe to call speculatively: bad input yields
//! `false` or `0`, never a panic, because these predicates gate UI
//! affordances and must never take the renderer down with them.

pub mod hit;
pub mod scoring;
pub mod spread;

pub use hit::is_valid_hit;
pub use scoring::hand_points;
pub use spread::is_valid_spread;
