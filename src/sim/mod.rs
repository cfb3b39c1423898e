//! Deterministic simulation module
//!
//! All puzzle logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only, owned by the state
//! - Stable hazard order (placement order)
//! - No rendering or platform dependencies
//!
//! Screen-style coordinates: y grows downward, so smaller y is higher. The
//! goal sits near the top (small y), the bar starts near the bottom.

pub mod action;
pub mod judge;
pub mod layout;
pub mod state;
pub mod tick;

pub use action::{Action, ActionSet};
pub use judge::judge;
pub use layout::place_hazards;
pub use state::{Ball, Bar, SimState, SimStatus, Wind};
pub use tick::{advance, apply_action};
