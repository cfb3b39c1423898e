//! Hazard-aware shaping for the five-hole courses
//!
//! Below the goal line the policy pays for upward velocity; at goal height
//! it pays for horizontal alignment with the goal instead. Hazard proximity
//! is penalized linearly inside a two-radius safety band.

use crate::config::SimConfig;
use crate::reward::{ShapingPolicy, base_features, centering, hazards_crossed};
use crate::sim::state::{SimState, SimStatus};

const SUCCESS_REWARD: f32 = 100.0;
const FAIL_REWARD: f32 = -100.0;
/// Safety band as a multiple of the ball radius
const SAFE_MULTIPLE: f32 = 2.0;
const PASS_BONUS: f32 = 3.0;

#[derive(Debug, Clone, Default)]
pub struct HazardShaping {
    previous_y: f32,
}

impl HazardShaping {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShapingPolicy for HazardShaping {
    fn begin_episode(&mut self, state: &SimState) {
        self.previous_y = state.ball.pos.y;
    }

    fn features(&self, state: &SimState) -> Vec<f32> {
        base_features(state)
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
        let x_ratio = centering(ball.x, cfg.goal.center_x(), cfg.bar.half_width());

        // Below the goal line, climbing is what matters; at goal height the
        // centering term takes over completely
        let (velocity_score, x_score) = if ball.y >= cfg.goal.bottom() {
            (20.0 * delta_y, 5.0 * x_ratio)
        } else {
            (0.0, 20.0 * x_ratio)
        };

        let safe = SAFE_MULTIPLE * cfg.ball_radius;
        let mut hazard_penalty = 0.0;
        for h in &state.hazards {
            let d = ball.distance(*h);
            if d < safe {
                hazard_penalty += -10.0 * (safe - d) / safe;
            }
        }

        let pass_bonus =
            PASS_BONUS * hazards_crossed(self.previous_y, ball.y, &state.hazards) as f32;

        self.previous_y = ball.y;
        (velocity_score + x_score + hazard_penalty + pass_bonus, obs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::state::SimState;
    use glam::Vec2;

    fn primed(cfg: &SimConfig, x: f32, y: f32) -> (HazardShaping, SimState) {
        let mut state = SimState::new(cfg, 1);
        state.ball.pos = Vec2::new(x, y);
        let mut policy = HazardShaping::new();
        policy.begin_episode(&state);
        (policy, state)
    }

    #[test]
    fn test_centering_beats_edge_for_equal_climb() {
        let cfg = SimConfig::basic();
        // Same upward delta, one ball centered on the goal, one at the bar edge
        let (mut center_policy, mut state) = primed(&cfg, cfg.goal.center_x(), 500.0);
        state.ball.pos.y = 490.0;
        let (r_center, _) = center_policy.score(&state, &cfg);

        let (mut edge_policy, mut state) = primed(&cfg, cfg.bar.right_edge_x(), 500.0);
        state.ball.pos.y = 490.0;
        let (r_edge, _) = edge_policy.score(&state, &cfg);

        assert!(r_center > r_edge);
    }

    #[test]
    fn test_velocity_term_gated_at_goal_height() {
        let cfg = SimConfig::fixed_course();
        // Above the goal's lower edge the climb term vanishes
        let (mut policy, mut state) = primed(&cfg, 600.0, 99.0);
        state.ball.pos.y = 90.0;
        state.hazards.clear();
        let (reward, _) = policy.score(&state, &cfg);
        // x=600 is far right of goal center 360: ratio 0, so only the zeroed
        // velocity term remains
        assert_eq!(reward, 0.0);
    }

    #[test]
    fn test_hazard_proximity_penalty() {
        let cfg = SimConfig::fixed_course();
        // Sitting right next to the hazard at (350, 200), inside the band
        let (mut policy, mut state) = primed(&cfg, 350.0 + cfg.ball_radius, 200.0);
        state.ball.pos.y = 200.0;
        let (reward_near, _) = policy.score(&state, &cfg);

        let (mut policy_far, mut state_far) = primed(&cfg, 350.0, 260.0);
        state_far.ball.pos.y = 260.0;
        let (reward_far, _) = policy_far.score(&state_far, &cfg);

        // Identical zero delta; the near ball eats the proximity penalty.
        // Centering differs a little, but the -5 penalty dwarfs it.
        assert!(reward_near < reward_far);
    }

    #[test]
    fn test_pass_bonus_on_upward_crossing() {
        let cfg = SimConfig::basic();
        let mut state = SimState::new(&cfg, 1);
        state.hazards = vec![Vec2::new(100.0, 300.0)];
        state.ball.pos = Vec2::new(360.0, 301.0);
        let mut policy = HazardShaping::new();
        policy.begin_episode(&state);

        let mut without = policy.clone();
        let mut state_still = state.clone();

        state.ball.pos.y = 300.0;
        let (with_cross, _) = policy.score(&state, &cfg);
        state_still.ball.pos.y = 301.0;
        let (no_cross, _) = without.score(&state_still, &cfg);

        // Crossing adds +3 and a slightly larger climb term
        assert!(with_cross > no_cross + PASS_BONUS - 1.0);
    }

    #[test]
    fn test_terminal_rewards() {
        let cfg = SimConfig::fixed_course();
        let (mut policy, mut state) = primed(&cfg, 360.0, 500.0);
        state.status = SimStatus::Failed;
        assert_eq!(policy.score(&state, &cfg).0, -100.0);
        state.status = SimStatus::Succeeded;
        assert_eq!(policy.score(&state, &cfg).0, 100.0);
    }
}
