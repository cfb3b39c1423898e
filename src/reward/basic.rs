//! Baseline shaping: climb, stay centered over the bar

use crate::config::SimConfig;
use crate::reward::{ShapingPolicy, base_features, centering};
use crate::sim::state::{SimState, SimStatus};

const SUCCESS_REWARD: f32 = 100.0;
const FAIL_REWARD: f32 = -100.0;

/// Height ratio plus bar-centering plus raw vertical progress. The gentlest
/// of the policies, intended for hazard-free fields.
#[derive(Debug, Clone, Default)]
pub struct BasicShaping {
    previous_y: f32,
}

impl BasicShaping {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShapingPolicy for BasicShaping {
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
        let height_ratio = (cfg.height - ball.y) / cfg.height;
        let x_score = centering(ball.x, cfg.bar.center_x, cfg.bar.half_width());
        let delta_y = self.previous_y - ball.y;

        self.previous_y = ball.y;
        (height_ratio + x_score + delta_y, obs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::state::SimState;

    #[test]
    fn test_upward_motion_scores_higher() {
        let cfg = SimConfig::basic();
        let mut state = SimState::new(&cfg, 1);
        state.ball.pos.x = cfg.bar.center_x;
        state.ball.pos.y = 500.0;

        let mut up = BasicShaping::new();
        up.begin_episode(&state);
        let mut still = up.clone();

        state.ball.pos.y = 490.0;
        let (r_up, _) = up.score(&state, &cfg);
        state.ball.pos.y = 500.0;
        let (r_still, _) = still.score(&state, &cfg);
        assert!(r_up > r_still);
    }

    #[test]
    fn test_terminal_rewards_dominate() {
        let cfg = SimConfig::basic();
        let mut state = SimState::new(&cfg, 1);
        let mut policy = BasicShaping::new();
        policy.begin_episode(&state);

        state.status = SimStatus::Succeeded;
        assert_eq!(policy.score(&state, &cfg).0, 100.0);
        state.status = SimStatus::Failed;
        assert_eq!(policy.score(&state, &cfg).0, -100.0);
    }

    #[test]
    fn test_memo_updates_each_ongoing_call() {
        let cfg = SimConfig::basic();
        let mut state = SimState::new(&cfg, 1);
        state.ball.pos.y = 500.0;
        let mut policy = BasicShaping::new();
        policy.begin_episode(&state);

        state.ball.pos.y = 480.0;
        let (first, _) = policy.score(&state, &cfg);
        // Same height again: delta term gone, reward drops
        let (second, _) = policy.score(&state, &cfg);
        assert!(first > second);
        assert!((first - second - 20.0).abs() < 1e-4);
    }
}
