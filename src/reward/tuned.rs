//! Tuned shaping for the windy field
//!
//! The heaviest-handed policy: asymmetric climb scoring gated on horizontal
//! alignment, a quadratic nearest-hazard penalty whose coefficient escalates
//! together with the climb bonus near the goal, and a token climb reward
//! while hugging the underside of a hazard so the agent slips sideways
//! instead of stalling.

use crate::config::SimConfig;
use crate::reward::{ShapingPolicy, centering, hazards_crossed, wind_features};
use crate::sim::state::{SimState, SimStatus};

const SUCCESS_REWARD: f32 = 200.0;
const FAIL_REWARD: f32 = -100.0;
const X_WEIGHT: f32 = 2.5;
const PASS_BONUS: f32 = 25.0;
const TIME_PENALTY: f32 = -0.02;
const BASE_PENALTY_COEFF: f32 = -150.0;
/// Wind strength above which the climb weight is reduced
const WIND_THRESHOLD: f32 = 0.04;
/// Per-unit speed cost discouraging oscillation
const VELOCITY_PENALTY: f32 = 0.02;

#[derive(Debug, Clone, Default)]
pub struct TunedShaping {
    previous_y: f32,
}

impl TunedShaping {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShapingPolicy for TunedShaping {
    fn begin_episode(&mut self, state: &SimState) {
        self.previous_y = state.ball.pos.y;
    }

    fn features(&self, state: &SimState) -> Vec<f32> {
        wind_features(state)
    }

    fn score(&mut self, state: &SimState, cfg: &SimConfig) -> (f32, Vec<f32>) {
        let obs = self.features(state);
        match state.status {
            SimStatus::Succeeded => return (SUCCESS_REWARD, obs),
            SimStatus::Failed => return (FAIL_REWARD, obs),
            SimStatus::Ongoing => {}
        }

        let ball = state.ball.pos;
        let goal_top = cfg.goal.top();
        let x_center_score = centering(ball.x, cfg.goal.center_x(), cfg.bar.half_width());

        // Climbing pays full rate, sliding back down costs a fifth of it
        let delta_y = self.previous_y - ball.y;
        let vertical_score = if delta_y > 0.0 {
            2.0 * delta_y
        } else {
            0.2 * delta_y
        };

        let min_hazard_dist = state.nearest_hazard().map(|(_, d)| d);
        let danger_zone = cfg.ball_radius * 2.5;
        let hazard_near = min_hazard_dist.is_some_and(|d| d < danger_zone * 2.0);
        let strong_wind = state.wind.strength > WIND_THRESHOLD;

        let y_weight = if hazard_near || strong_wind { 1.0 } else { 1.2 };

        // Severely off-center climbing earns nothing
        let mut vertical_reward = if x_center_score < 0.5 {
            0.0
        } else {
            y_weight * vertical_score
        };

        // Hugging the underside of a hazard caps the climb term at a token
        // value so stalling there stops paying
        let very_close = cfg.ball_radius * 1.1;
        let hugging = state
            .hazards
            .iter()
            .any(|h| ball.distance(*h) < very_close && ball.y > h.y);
        if hugging {
            vertical_reward = 0.2;
        }

        let center_reward = X_WEIGHT * x_center_score;

        // Near the goal the climb bonus and the hazard penalty escalate
        // together
        let mut penalty_coeff = BASE_PENALTY_COEFF;
        let mut climb_bonus = 0.0;
        if delta_y > 0.0 && ball.y < goal_top + 200.0 {
            climb_bonus = 15.0;
            penalty_coeff *= 3.0;
        } else if delta_y > 0.0 && ball.y < goal_top + 500.0 {
            climb_bonus = 5.0;
            penalty_coeff *= 2.0;
        }

        // Quadratic in the nearest hazard's encroachment depth
        let safe = cfg.ball_radius * 2.0;
        let hazard_penalty = match min_hazard_dist {
            Some(d) if d < safe => {
                let ratio = (safe - d) / safe;
                penalty_coeff * ratio * ratio
            }
            _ => 0.0,
        };

        let pass_bonus =
            PASS_BONUS * hazards_crossed(self.previous_y, ball.y, &state.hazards) as f32;

        // Goal-line alignment pays once the ball is at goal height
        let x_goal_bonus = if ball.y <= goal_top + 30.0 {
            2.0 * x_center_score
        } else {
            0.0
        };

        let velocity_penalty = -VELOCITY_PENALTY * state.ball.vx.abs();

        self.previous_y = ball.y;
        (
            center_reward
                + vertical_reward
                + hazard_penalty
                + pass_bonus
                + TIME_PENALTY
                + climb_bonus
                + x_goal_bonus
                + velocity_penalty,
            obs,
        )
    }
}
