//! Termination judgment
//!
//! Evaluated once per tick after integration, in strict priority order:
//! off the bar, then hazard contact, then goal containment. First match
//! wins; an off-bar ball is checked first because hazard and goal tests
//! are meaningless once the ball has left the surface.

use crate::config::SimConfig;
use crate::sim::state::{SimState, SimStatus};

/// Classify the current state. Pure; the tick driver stores the result.
/// A terminal status is sticky until reset.
pub fn judge(state: &SimState, cfg: &SimConfig) -> SimStatus {
    if state.status.is_terminal() {
        return state.status;
    }
    if off_bar(state, cfg) {
        return SimStatus::Failed;
    }
    if hazard_hit(state, cfg).is_some() {
        return SimStatus::Failed;
    }
    if in_goal(state, cfg) {
        return SimStatus::Succeeded;
    }
    SimStatus::Ongoing
}

/// Ball center strictly outside the bar's horizontal extent
#[inline]
pub fn off_bar(state: &SimState, cfg: &SimConfig) -> bool {
    let x = state.ball.pos.x;
    x < cfg.bar.left_edge_x() || x > cfg.bar.right_edge_x()
}

/// Index of the first hazard whose center lies within the ball radius
/// (strict inequality, so grazing at exactly one radius is survivable)
pub fn hazard_hit(state: &SimState, cfg: &SimConfig) -> Option<usize> {
    state
        .hazards
        .iter()
        .position(|h| state.ball.pos.distance(*h) < cfg.ball_radius)
}

/// Ball center inside the goal rectangle, inclusive on all edges
#[inline]
pub fn in_goal(state: &SimState, cfg: &SimConfig) -> bool {
    cfg.goal.contains(state.ball.pos)
}
