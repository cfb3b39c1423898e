//! Tiltbar - a tilting-bar balance puzzle simulation
//!
//! A ball rolls along a bar whose two endpoints can be raised or lowered one
//! notch per tick. The bar sags under its own weight, the ball must climb to
//! a goal region near the top of the playfield, and hazard holes (plus an
//! optional gusting wind) stand in the way. An external agent drives the
//! puzzle through the episodic API in [`env`], one discrete action per tick,
//! and reads back a scalar reward and a flat feature vector.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, hazards, termination)
//! - `reward`: Pluggable reward/feature shaping policies
//! - `env`: Episodic reset/step/render API for the external agent
//! - `config`: Typed configuration with the named variant presets
//! - `geom`: Small shared geometry types

pub mod config;
pub mod env;
pub mod geom;
pub mod reward;
pub mod sim;

pub use config::SimConfig;
pub use env::{BalanceEnv, StepInfo, StepOutcome};
pub use sim::action::Action;
pub use sim::state::{SimState, SimStatus};

/// Simulation constants shared by every variant
pub mod consts {
    /// Gap between the bar surface and the ball center, on top of the ball
    /// radius. The ball's y is derived as
    /// `surface_y - ball_radius - SURFACE_MARGIN`.
    pub const SURFACE_MARGIN: f32 = 5.0;

    /// Vertical clearance kept between the goal region's lower edge and the
    /// highest position the bar endpoints may reach.
    pub const GOAL_CLEARANCE: f32 = 20.0;

    /// Attempt budget for rejection-sampled hazard placement. Exhausting it
    /// yields a sparser field, never an error.
    pub const PLACEMENT_ATTEMPTS: u32 = 1000;

    /// Coupling from wind force to ball horizontal acceleration.
    pub const WIND_COUPLING: f32 = 0.5;
}
