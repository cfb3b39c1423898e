//! Episodic control layer
//!
//! `BalanceEnv` owns one simulation state, its configuration, and the
//! shaping policy, and exposes the reset/step/render cycle an external
//! training loop drives. All stochasticity flows through the state's
//! seeded RNG, so a seeded reset replays bit for bit.

use log::{debug, warn};

use crate::config::SimConfig;
use crate::reward::{self, ShapingPolicy};
use crate::sim::{self, Action, SimState, SimStatus};

/// Everything a training loop needs back from one step
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub observation: Vec<f32>,
    pub reward: f32,
    /// The episode ended in success or failure (now or on an earlier tick)
    pub terminated: bool,
    /// The step limit cut the episode short without a terminal state
    pub truncated: bool,
    pub info: StepInfo,
}

/// Side-channel facts about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInfo {
    pub success: bool,
    pub tick: u64,
}

/// The tilting-bar puzzle behind a reset/step interface
pub struct BalanceEnv {
    config: SimConfig,
    state: SimState,
    policy: Box<dyn ShapingPolicy>,
    steps: u32,
    /// When set, `render()` produces a one-line summary
    pub render_enabled: bool,
}

impl BalanceEnv {
    /// Builds an environment with a random seed. Use `with_seed` (or
    /// `reset(Some(seed))`) for reproducible runs.
    pub fn new(config: SimConfig) -> Self {
        let seed = rand::random::<u64>();
        Self::with_seed(config, seed)
    }

    pub fn with_seed(config: SimConfig, seed: u64) -> Self {
        let state = SimState::new(&config, seed);
        let mut policy = reward::build(config.shaping);
        policy.begin_episode(&state);
        Self {
            config,
            state,
            policy,
            steps: 0,
            render_enabled: false,
        }
    }

    /// Starts a fresh episode and returns its initial observation.
    ///
    /// `Some(seed)` rebuilds the RNG for a reproducible trajectory; `None`
    /// keeps drawing from the current stream so consecutive episodes get
    /// fresh spawn jitter and hazard layouts.
    pub fn reset(&mut self, seed: Option<u64>) -> Vec<f32> {
        if let Some(seed) = seed {
            self.state.reseed(seed);
        }
        self.state.reset(&self.config);
        self.steps = 0;
        self.policy.begin_episode(&self.state);
        debug!(
            "episode reset, seed {} hazards {}",
            self.state.seed,
            self.state.hazards.len()
        );
        self.policy.features(&self.state)
    }

    /// Runs one action/physics/judge/score cycle.
    ///
    /// Stepping a finished episode is a no-op: the frozen terminal
    /// observation comes back with zero reward and `terminated` still set.
    pub fn step(&mut self, action: Action) -> StepOutcome {
        if self.state.status.is_terminal() {
            debug!("step on finished episode ignored, tick {}", self.state.tick);
            return StepOutcome {
                observation: self.policy.features(&self.state),
                reward: 0.0,
                terminated: true,
                truncated: false,
                info: self.info(),
            };
        }

        sim::apply_action(&mut self.state, action, &self.config);
        sim::advance(&mut self.state, &self.config);
        self.state.status = sim::judge(&self.state, &self.config);
        let (reward, observation) = self.policy.score(&self.state, &self.config);

        self.steps += 1;
        let terminated = self.state.status.is_terminal();
        let truncated = !terminated
            && self
                .config
                .max_steps
                .is_some_and(|limit| self.steps >= limit);
        if terminated || truncated {
            debug!(
                "episode over at tick {}: {:?}{}",
                self.state.tick,
                self.state.status,
                if truncated { " (step limit)" } else { "" }
            );
        }
        StepOutcome {
            observation,
            reward,
            terminated,
            truncated,
            info: self.info(),
        }
    }

    /// Steps from a raw action index as produced by an agent's argmax.
    /// Out-of-range indices count as `Hold` after a logged warning.
    pub fn step_index(&mut self, index: usize) -> StepOutcome {
        let action = match Action::from_index(index, self.config.actions) {
            Some(action) => action,
            None => {
                warn!("action index {index} out of range, holding");
                Action::Hold
            }
        };
        self.step(action)
    }

    /// One-line state summary for console monitoring, `None` unless enabled
    pub fn render(&self) -> Option<String> {
        if !self.render_enabled {
            return None;
        }
        let ball = &self.state.ball;
        Some(format!(
            "tick {:5}  ball ({:7.2}, {:7.2}) vx {:+6.3}  bar {:6.1}/{:6.1}  {:?}",
            self.state.tick,
            ball.pos.x,
            ball.pos.y,
            ball.vx,
            self.state.bar.left_y,
            self.state.bar.right_y,
            self.state.status,
        ))
    }

    /// Length of the feature vector this configuration produces
    pub fn observation_len(&self) -> usize {
        self.policy.features(&self.state).len()
    }

    /// Number of discrete action indices the agent may emit
    pub fn action_count(&self) -> usize {
        self.config.actions.size()
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    fn info(&self) -> StepInfo {
        StepInfo {
            success: self.state.status == SimStatus::Succeeded,
            tick: self.state.tick,
        }
    }
}
