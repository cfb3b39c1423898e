//! Tiltbar entry point
//!
//! Runs random-action episodes against a chosen configuration and logs the
//! outcomes. A smoke driver and a template for wiring up a real agent.
//!
//! Usage: `tiltbar [preset-or-config.json] [episodes] [--render]`

use rand::Rng;

use tiltbar::{BalanceEnv, SimConfig};

fn main() {
    env_logger::init();

    let mut preset = String::from("basic");
    let mut episodes: u32 = 5;
    let mut render = false;
    for arg in std::env::args().skip(1) {
        if arg == "--render" {
            render = true;
        } else if let Ok(n) = arg.parse::<u32>() {
            episodes = n;
        } else {
            preset = arg;
        }
    }

    let config = load_config(&preset);
    let mut env = BalanceEnv::new(config);
    env.render_enabled = render;
    log::info!(
        "running {} episodes on '{}': {} observations, {} actions",
        episodes,
        preset,
        env.observation_len(),
        env.action_count()
    );

    let mut rng = rand::rng();
    let mut successes = 0u32;
    let mut total_reward = 0.0f32;
    for episode in 0..episodes {
        env.reset(None);
        let mut episode_reward = 0.0f32;
        let mut steps = 0u32;
        loop {
            let index = rng.random_range(0..env.action_count());
            let out = env.step_index(index);
            episode_reward += out.reward;
            steps += 1;
            if let Some(line) = env.render() {
                println!("{}", line);
            }
            if out.terminated || out.truncated {
                if out.info.success {
                    successes += 1;
                }
                let ending = if out.info.success {
                    "success"
                } else if out.terminated {
                    "failure"
                } else {
                    "timeout"
                };
                log::info!(
                    "episode {}: {} after {} steps, reward {:.1}",
                    episode,
                    ending,
                    steps,
                    episode_reward
                );
                break;
            }
        }
        total_reward += episode_reward;
    }
    log::info!(
        "{}/{} succeeded, mean episode reward {:.1}",
        successes,
        episodes,
        total_reward / episodes.max(1) as f32
    );
}

/// A known preset name, or a path to a JSON configuration file
fn load_config(name: &str) -> SimConfig {
    if let Some(config) = SimConfig::preset(name) {
        return config;
    }
    let text = std::fs::read_to_string(name)
        .expect("argument is neither a preset name nor a readable config file");
    SimConfig::from_json(&text).expect("invalid config JSON")
}
