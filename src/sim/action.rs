//! Discrete control actions
//!
//! The agent picks one action per tick. Each action nudges one bar endpoint
//! by the configured speed; raising an endpoint decreases its y (y grows
//! downward).

use serde::{Deserialize, Serialize};

/// One discrete control action, applied before physics integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RaiseLeft,
    LowerLeft,
    RaiseRight,
    LowerRight,
    /// Leave the bar alone this tick
    Hold,
}

impl Action {
    /// Full enumeration in wire order (the raw indices agents send)
    pub const ALL: [Action; 5] = [
        Action::RaiseLeft,
        Action::LowerLeft,
        Action::RaiseRight,
        Action::LowerRight,
        Action::Hold,
    ];

    /// Map a raw action index within `set`; `None` when out of range
    pub fn from_index(idx: usize, set: ActionSet) -> Option<Action> {
        if idx < set.size() {
            Some(Self::ALL[idx])
        } else {
            None
        }
    }

    /// Wire index of this action
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::RaiseLeft => "raise-left",
            Action::LowerLeft => "lower-left",
            Action::RaiseRight => "raise-right",
            Action::LowerRight => "lower-right",
            Action::Hold => "hold",
        }
    }

    /// Endpoint deltas `(left, right)` in y units for a per-action `speed`
    #[inline]
    pub fn deltas(&self, speed: f32) -> (f32, f32) {
        match self {
            Action::RaiseLeft => (-speed, 0.0),
            Action::LowerLeft => (speed, 0.0),
            Action::RaiseRight => (0.0, -speed),
            Action::LowerRight => (0.0, speed),
            Action::Hold => (0.0, 0.0),
        }
    }
}

/// Size of the action surface exposed to the agent. `Three` is the prefix
/// `[raise-left, lower-left, raise-right]` the training setups use; `Five`
/// is the full enumeration including `lower-right` and `hold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ActionSet {
    #[default]
    Three,
    Five,
}

impl ActionSet {
    #[inline]
    pub fn size(&self) -> usize {
        match self {
            ActionSet::Three => 3,
            ActionSet::Five => 5,
        }
    }
}
