//! Tabular Q-learning training loop

use super::config::QLearningConfig;
use super::policy::{choose_action_epsilon_greedy, EpsilonSchedule};
use super::q_table::{QTable, Transition};
use crate::game::{GridWorldEnv, GridWorldError, Result};
use crate::metrics::EpisodeHistory;
use rand::Rng;
use tracing::{debug, info};

/// Trailing window used for progress lines
const PROGRESS_WINDOW: usize = 50;

/// Learned table and per-episode statistics
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub q_table: QTable,
    pub history: EpisodeHistory,
}

/// Train a Q-table against `env`
///
/// Every episode starts from the environment's default start and runs
/// until the environment reports `done`. Exploration decays after each
/// episode and never drops below `epsilon_min`. Environment errors are
/// not caught: a misuse aborts the whole run.
pub fn train_q_learning<R: Rng + ?Sized>(
    env: &mut GridWorldEnv,
    config: &QLearningConfig,
    rng: &mut R,
) -> Result<TrainingOutcome> {
    config.validate().map_err(GridWorldError::InvalidConfig)?;

    let mut q_table = QTable::new(env.num_states());
    let mut history = EpisodeHistory::with_capacity(config.num_episodes);
    let mut schedule =
        EpsilonSchedule::new(config.epsilon_start, config.epsilon_min, config.epsilon_decay);

    info!(
        episodes = config.num_episodes,
        alpha = config.alpha,
        gamma = config.gamma,
        epsilon = schedule.current(),
        "starting Q-learning"
    );

    for episode in 0..config.num_episodes {
        let epsilon = schedule.current();
        let (steps, total_reward, success) =
            run_episode(env, &mut q_table, config, epsilon, rng)?;

        history.record_episode(steps, total_reward, success, epsilon);
        debug!(episode, steps, total_reward, success, epsilon, "episode finished");

        if config.log_frequency > 0 && (episode + 1) % config.log_frequency == 0 {
            let recent = history.recent(PROGRESS_WINDOW);
            info!(
                episode = episode + 1,
                mean_steps = recent.mean_steps,
                mean_return = recent.mean_return,
                success_rate = recent.success_rate,
                epsilon,
                "training progress"
            );
        }

        schedule.decay();
    }

    info!(
        episodes = history.len(),
        total_steps = history.total_steps(),
        "Q-learning finished"
    );

    Ok(TrainingOutcome { q_table, history })
}

/// Run one exploring episode, updating the table after every step
///
/// Returns (steps, undiscounted return, reached goal).
fn run_episode<R: Rng + ?Sized>(
    env: &mut GridWorldEnv,
    q_table: &mut QTable,
    config: &QLearningConfig,
    epsilon: f32,
    rng: &mut R,
) -> Result<(u32, f32, bool)> {
    let start = env.reset(None)?;
    let mut state = env.state_to_index(start);
    let mut steps = 0;
    let mut total_reward = 0.0;

    loop {
        let action = choose_action_epsilon_greedy(q_table, state, epsilon, rng);
        let result = env.step(action)?;
        let next_state = env.state_to_index(result.position);

        let transition = Transition {
            state,
            action,
            reward: result.reward,
            next_state,
            done: result.done,
        };
        q_table.update(&transition, config.alpha, config.gamma);

        total_reward += result.reward;
        steps += 1;
        state = next_state;

        if result.done {
            return Ok((steps, total_reward, result.info.reached_goal));
        }
    }
}
