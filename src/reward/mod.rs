//! Reward and feature shaping
//!
//! Interchangeable policies convert raw physics state into the scalar
//! learning signal and the flat observation row the external agent consumes.
//! Policies read the simulation state; the only thing they ever mutate is
//! their own previous-height memo, primed at episode start and updated at
//! the end of each non-terminal scoring call.
//!
//! All policies are terminal-dominant: once the episode has succeeded or
//! failed, the configured terminal reward short-circuits every shaping term.

mod basic;
mod hazard;
mod tuned;
mod wind;

pub use basic::BasicShaping;
pub use hazard::HazardShaping;
pub use tuned::TunedShaping;
pub use wind::WindShaping;

use glam::Vec2;

use crate::config::{ShapingKind, SimConfig};
use crate::sim::state::SimState;

/// A pluggable scoring strategy, selected once at construction
pub trait ShapingPolicy {
    /// Prime the vertical-progress memo at episode start
    fn begin_episode(&mut self, state: &SimState);

    /// Observation row for the current state, in this policy's layout.
    /// Used for the initial observation and for frozen terminal steps.
    fn features(&self, state: &SimState) -> Vec<f32>;

    /// Score the state after a tick, returning the scalar reward and the
    /// observation row
    fn score(&mut self, state: &SimState, cfg: &SimConfig) -> (f32, Vec<f32>);
}

/// Build the policy for a selector
pub fn build(kind: ShapingKind) -> Box<dyn ShapingPolicy> {
    match kind {
        ShapingKind::Basic => Box::new(BasicShaping::new()),
        ShapingKind::HazardAware => Box::new(HazardShaping::new()),
        ShapingKind::WindAware => Box::new(WindShaping::new()),
        ShapingKind::Tuned => Box::new(TunedShaping::new()),
    }
}

/// Base observation row: ball position, bar endpoint heights, velocity,
/// then hazard pairs in placement order. Length `5 + 2 * hazards`.
pub fn base_features(state: &SimState) -> Vec<f32> {
    let mut obs = Vec::with_capacity(5 + 2 * state.hazards.len());
    obs.push(state.ball.pos.x);
    obs.push(state.ball.pos.y);
    obs.push(state.bar.left_y);
    obs.push(state.bar.right_y);
    obs.push(state.ball.vx);
    push_hazards(&mut obs, &state.hazards);
    obs
}

/// Wind observation row: the base prefix plus the signed wind magnitude and
/// jitter width before the hazard pairs. Length `7 + 2 * hazards`.
pub fn wind_features(state: &SimState) -> Vec<f32> {
    let mut obs = Vec::with_capacity(7 + 2 * state.hazards.len());
    obs.push(state.ball.pos.x);
    obs.push(state.ball.pos.y);
    obs.push(state.bar.left_y);
    obs.push(state.bar.right_y);
    obs.push(state.ball.vx);
    obs.push(state.wind.signed());
    obs.push(state.wind.jitter);
    push_hazards(&mut obs, &state.hazards);
    obs
}

fn push_hazards(obs: &mut Vec<f32>, hazards: &[Vec2]) {
    for h in hazards {
        obs.push(h.x);
        obs.push(h.y);
    }
}

/// Centering score in [0, 1]: 1 at `center_x`, 0 at or beyond `half_width`
#[inline]
pub(crate) fn centering(x: f32, center_x: f32, half_width: f32) -> f32 {
    (1.0 - (x - center_x).abs() / half_width).max(0.0)
}

/// Hazards crossed by upward motion this tick: previous y strictly above
/// the hazard line, current y at or past it. A single large step can cross
/// several hazards and collects each one.
pub(crate) fn hazards_crossed(prev_y: f32, y: f32, hazards: &[Vec2]) -> usize {
    hazards.iter().filter(|h| prev_y > h.y && y <= h.y).count()
}
