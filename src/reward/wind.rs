//! Wind-aware shaping for the large gusty field
//!
//! Exposes the gust parameters in the observation row and weights the
//! centering term by how far below the goal the ball still is, so alignment
//! pays early and climbing pays late. Penalties use a widened safety band.

use crate::config::SimConfig;
use crate::reward::{ShapingPolicy, centering, hazards_crossed, wind_features};
use crate::sim::state::{SimState, SimStatus};

const SUCCESS_REWARD: f32 = 100.0;
const FAIL_REWARD: f32 = -100.0;
/// Widened safety band as a multiple of the ball radius
const SAFE_MULTIPLE: f32 = 2.5;
const PASS_BONUS: f32 = 15.0;
const TIME_PENALTY: f32 = -0.02;

#[derive(Debug, Clone, Default)]
pub struct WindShaping {
    previous_y: f32,
}

impl WindShaping {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShapingPolicy for WindShaping {
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
        let delta_y = self.previous_y - ball.y;
        let vertical_score = 2.0 * delta_y;

        // Fades to zero as the ball approaches goal height
        let goal_bottom = cfg.goal.bottom();
        let height_weight = ((ball.y - goal_bottom) / (cfg.height - goal_bottom)).min(1.0);
        let x_score =
            3.0 * centering(ball.x, cfg.goal.center_x(), cfg.bar.half_width()) * height_weight;

        let safe = SAFE_MULTIPLE * cfg.ball_radius;
        let mut hazard_penalty = 0.0;
        for h in &state.hazards {
            let d = ball.distance(*h);
            if d < safe {
                hazard_penalty += -20.0 * (safe - d) / safe;
            }
        }

        let pass_bonus =
            PASS_BONUS * hazards_crossed(self.previous_y, ball.y, &state.hazards) as f32;

        self.previous_y = ball.y;
        (
            vertical_score + x_score + hazard_penalty + pass_bonus + TIME_PENALTY,
            obs,
        )
    }
}
