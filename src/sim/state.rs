//! Simulation state and core types
//!
//! Everything that changes tick to tick lives here, including the owned
//! seeded RNG that makes trajectories reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{BarConfig, SimConfig, WindConfig};
use crate::consts::SURFACE_MARGIN;
use crate::sim::layout::place_hazards;

/// Episode status. Terminal once set; only a reset returns it to `Ongoing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimStatus {
    #[default]
    Ongoing,
    /// Ball left the bar or fell into a hazard
    Failed,
    /// Ball center reached the goal region
    Succeeded,
}

impl SimStatus {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        *self != SimStatus::Ongoing
    }
}

/// The tiltable bar. Only the endpoint heights are state; the horizontal
/// extent comes from [`BarConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Left endpoint y
    pub left_y: f32,
    /// Right endpoint y
    pub right_y: f32,
}

impl Bar {
    /// Level bar with both endpoints at `y`
    pub fn level(y: f32) -> Self {
        Self {
            left_y: y,
            right_y: y,
        }
    }

    /// Rise/run of the bar surface. Positive slope means the right end sits
    /// lower (larger y), which rolls the ball rightward.
    #[inline]
    pub fn slope(&self, width: f32) -> f32 {
        (self.right_y - self.left_y) / width
    }

    /// Surface y at horizontal position `x` from the bar's line equation
    #[inline]
    pub fn surface_y(&self, x: f32, bar: &BarConfig) -> f32 {
        self.left_y + (x - bar.left_edge_x()) * self.slope(bar.width)
    }
}

/// The rolling ball. Vertical position is derived from the bar surface each
/// tick; only the horizontal velocity is integrated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vx: f32,
}

/// Gust parameters currently in force. Resampled every
/// `WindConfig::resample_interval` ticks; zero everywhere when wind is
/// disabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub strength: f32,
    /// -1.0 or +1.0
    pub direction: f32,
    /// Half-width of the per-tick uniform noise
    pub jitter: f32,
}

impl Wind {
    /// No wind at all
    pub fn calm() -> Self {
        Self {
            strength: 0.0,
            direction: 0.0,
            jitter: 0.0,
        }
    }

    /// Initial parameters before the first resample
    pub fn from_config(cfg: &WindConfig) -> Self {
        Self {
            strength: cfg.initial_strength,
            direction: cfg.initial_direction,
            jitter: cfg.initial_jitter,
        }
    }

    /// Signed base magnitude (`strength * direction`), the deterministic
    /// part of the per-tick force and the value exposed to observations
    #[inline]
    pub fn signed(&self) -> f32 {
        self.strength * self.direction
    }
}

/// Complete simulation state, exactly one writer (the tick driver)
#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed the RNG was last rebuilt from
    pub seed: u64,
    /// Tick counter, reset to 0 each episode
    pub tick: u64,
    pub bar: Bar,
    pub ball: Ball,
    pub wind: Wind,
    /// Hazard centers in placement order, immutable until the next reset
    pub hazards: Vec<Vec2>,
    pub status: SimStatus,
    /// Owned RNG; all hazard placement, spawn jitter and wind sampling draw
    /// from here and nowhere else
    pub rng: Pcg32,
}

impl SimState {
    /// Create a state for `cfg`, seeded with `seed`, with the first episode
    /// already reset
    pub fn new(cfg: &SimConfig, seed: u64) -> Self {
        let mut state = Self {
            seed,
            tick: 0,
            bar: Bar::level(cfg.bar.start_y),
            ball: Ball {
                pos: Vec2::ZERO,
                vx: 0.0,
            },
            wind: Wind::calm(),
            hazards: Vec::new(),
            status: SimStatus::Ongoing,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset(cfg);
        state
    }

    /// Start a fresh episode: level bar, re-spawned ball, regenerated
    /// hazards, wind back to its initial parameters. Continues the current
    /// RNG stream; use [`SimState::reseed`] first for a reproducible episode.
    pub fn reset(&mut self, cfg: &SimConfig) {
        self.tick = 0;
        self.status = SimStatus::Ongoing;
        self.bar = Bar::level(cfg.bar.start_y);

        let x = cfg.bar.center_x
            + self
                .rng
                .random_range(-cfg.spawn_jitter..=cfg.spawn_jitter);
        let y = self.bar.surface_y(x, &cfg.bar) - cfg.ball_radius - SURFACE_MARGIN;
        self.ball = Ball {
            pos: Vec2::new(x, y),
            vx: 0.0,
        };

        self.wind = match &cfg.wind {
            Some(w) => Wind::from_config(w),
            None => Wind::calm(),
        };
        self.hazards = place_hazards(&cfg.hazards, cfg.ball_radius, &mut self.rng);
    }

    /// Rebuild the RNG from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Index and ball-center distance of the nearest hazard
    pub fn nearest_hazard(&self) -> Option<(usize, f32)> {
        self.hazards
            .iter()
            .enumerate()
            .map(|(i, h)| (i, self.ball.pos.distance(*h)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}
