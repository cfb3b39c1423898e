//! Simulation configuration
//!
//! One typed configuration drives every variant. The named presets
//! reproduce the four historical setups (basic field, fixed hazard course,
//! scattered hazards, windy large field) instead of duplicating the engine
//! per variant.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::GOAL_CLEARANCE;
use crate::geom::Rect;
use crate::sim::action::ActionSet;

/// Reward/feature shaping policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShapingKind {
    #[default]
    Basic,
    HazardAware,
    WindAware,
    Tuned,
}

impl ShapingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapingKind::Basic => "basic",
            ShapingKind::HazardAware => "hazard-aware",
            ShapingKind::WindAware => "wind-aware",
            ShapingKind::Tuned => "tuned",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "basic" => Some(ShapingKind::Basic),
            "hazard" | "hazard-aware" => Some(ShapingKind::HazardAware),
            "wind" | "wind-aware" => Some(ShapingKind::WindAware),
            "tuned" => Some(ShapingKind::Tuned),
            _ => None,
        }
    }
}

/// Bar geometry. Construction-time constants; the endpoint heights
/// themselves live in the simulation state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BarConfig {
    /// Horizontal center of the bar
    pub center_x: f32,
    /// Full width between the endpoints
    pub width: f32,
    /// Bar thickness (carried for display collaborators; the physics treats
    /// the surface as a line)
    pub thickness: f32,
    /// Endpoint y at reset (both endpoints, level bar)
    pub start_y: f32,
}

impl BarConfig {
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    #[inline]
    pub fn left_edge_x(&self) -> f32 {
        self.center_x - self.half_width()
    }

    #[inline]
    pub fn right_edge_x(&self) -> f32 {
        self.center_x + self.half_width()
    }
}

/// Periodic gust model. Parameters persist between resamples; the per-tick
/// force is `strength * direction + uniform(-jitter, jitter)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindConfig {
    /// Ticks between parameter resamples
    pub resample_interval: u64,
    /// Strength range drawn at each resample
    pub strength_min: f32,
    pub strength_max: f32,
    /// Jitter half-width range drawn at each resample
    pub jitter_min: f32,
    pub jitter_max: f32,
    /// Parameters in force from reset until the first resample
    pub initial_strength: f32,
    pub initial_direction: f32,
    pub initial_jitter: f32,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            resample_interval: 100,
            strength_min: 0.02,
            strength_max: 0.1,
            jitter_min: 0.005,
            jitter_max: 0.02,
            initial_strength: 0.1,
            initial_direction: 1.0,
            initial_jitter: 0.02,
        }
    }
}

/// How hazards are placed at reset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum HazardLayout {
    /// No hazards
    #[default]
    None,
    /// Exact coordinates, identical on every reset
    Fixed(Vec<Vec2>),
    /// Rejection-sampled scatter inside `zone` with pairwise separation of
    /// at least `2 * ball_radius + margin`
    Scatter { count: usize, margin: f32, zone: Rect },
    /// Fixed base points, each shifted right by `uniform(0, jitter)`
    Rows { bases: Vec<Vec2>, jitter: f32 },
}

impl HazardLayout {
    /// Nominal hazard count (the scatter layout may place fewer when its
    /// attempt budget runs out)
    pub fn nominal_count(&self) -> usize {
        match self {
            HazardLayout::None => 0,
            HazardLayout::Fixed(points) => points.len(),
            HazardLayout::Scatter { count, .. } => *count,
            HazardLayout::Rows { bases, .. } => bases.len(),
        }
    }
}

/// Top-level simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    // === Playfield ===
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels (y grows downward)
    pub height: f32,
    /// Success rectangle near the top of the playfield
    pub goal: Rect,

    // === Bar & ball ===
    pub bar: BarConfig,
    pub ball_radius: f32,
    /// Half-width of the random horizontal spawn offset around bar center
    pub spawn_jitter: f32,

    // === Physics ===
    /// Slope-to-acceleration factor
    pub gravity: f32,
    /// Multiplicative velocity damping per tick, in (0, 1)
    pub friction: f32,
    /// Downward drift applied to both endpoints every tick
    pub sag: f32,
    /// Endpoints may not drop below `height - floor_margin`
    pub floor_margin: f32,
    /// Endpoint delta applied per raise/lower action
    pub action_speed: f32,

    // === Variant selection ===
    pub hazards: HazardLayout,
    /// Gust model; `None` disables wind entirely
    pub wind: Option<WindConfig>,
    pub actions: ActionSet,
    pub shaping: ShapingKind,
    /// Episode step limit; exceeding it truncates the episode without
    /// terminating it
    pub max_steps: Option<u32>,
}

impl SimConfig {
    /// Highest y the bar endpoints may reach (stays clear of the goal)
    #[inline]
    pub fn min_bar_height(&self) -> f32 {
        self.goal.bottom() + GOAL_CLEARANCE
    }

    /// Lowest y the bar endpoints may reach
    #[inline]
    pub fn max_bar_height(&self) -> f32 {
        self.height - self.floor_margin
    }

    /// Small level field, no hazards, no wind
    pub fn basic() -> Self {
        Self {
            width: 720.0,
            height: 700.0,
            goal: Rect::new(280.0, 40.0, 160.0, 60.0),
            bar: BarConfig {
                center_x: 360.0,
                width: 300.0,
                thickness: 6.0,
                start_y: 600.0,
            },
            ball_radius: 18.0,
            spawn_jitter: 10.0,
            gravity: 0.3,
            friction: 0.995,
            sag: 0.2,
            floor_margin: 50.0,
            action_speed: 4.0,
            hazards: HazardLayout::None,
            wind: None,
            actions: ActionSet::Three,
            shaping: ShapingKind::Basic,
            max_steps: Some(1000),
        }
    }

    /// Basic field with the five-hole fixed course
    pub fn fixed_course() -> Self {
        Self {
            hazards: HazardLayout::Fixed(vec![
                Vec2::new(350.0, 200.0),
                Vec2::new(230.0, 450.0),
                Vec2::new(450.0, 300.0),
                Vec2::new(400.0, 480.0),
                Vec2::new(280.0, 350.0),
            ]),
            shaping: ShapingKind::HazardAware,
            ..Self::basic()
        }
    }

    /// Basic field with five rejection-sampled holes
    pub fn scatter() -> Self {
        Self {
            hazards: HazardLayout::Scatter {
                count: 5,
                margin: 50.0,
                zone: Rect::new(200.0, 150.0, 320.0, 350.0),
            },
            shaping: ShapingKind::HazardAware,
            ..Self::basic()
        }
    }

    /// Large field with gusting wind and eight jittered holes
    pub fn windy() -> Self {
        Self {
            width: 1200.0,
            height: 1000.0,
            goal: Rect::new(475.0, 40.0, 250.0, 80.0),
            bar: BarConfig {
                center_x: 600.0,
                width: 450.0,
                thickness: 6.0,
                start_y: 900.0,
            },
            ball_radius: 18.0,
            spawn_jitter: 10.0,
            gravity: 0.3,
            friction: 0.995,
            sag: 0.2,
            floor_margin: 30.0,
            action_speed: 4.0,
            hazards: HazardLayout::Rows {
                bases: vec![
                    Vec2::new(600.0, 200.0),
                    Vec2::new(500.0, 450.0),
                    Vec2::new(350.0, 600.0),
                    Vec2::new(300.0, 480.0),
                    Vec2::new(730.0, 550.0),
                    Vec2::new(650.0, 700.0),
                    Vec2::new(500.0, 800.0),
                    Vec2::new(400.0, 350.0),
                ],
                jitter: 100.0,
            },
            wind: Some(WindConfig::default()),
            actions: ActionSet::Three,
            shaping: ShapingKind::WindAware,
            max_steps: Some(1000),
        }
    }

    /// Windy field scored by the tuned shaping policy
    pub fn tuned() -> Self {
        Self {
            shaping: ShapingKind::Tuned,
            ..Self::windy()
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "basic" => Some(Self::basic()),
            "fixed" | "fixed-course" | "fixed_course" => Some(Self::fixed_course()),
            "scatter" => Some(Self::scatter()),
            "windy" => Some(Self::windy()),
            "tuned" => Some(Self::tuned()),
            _ => None,
        }
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::basic()
    }
}
