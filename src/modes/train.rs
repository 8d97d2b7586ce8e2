//! Training mode for the Q-learning agent
//!
//! Trains a Q-table on the configured grid, then reports the recent
//! training averages, the greedy policy and a few greedy rollouts.
//!
//! # Example
//!
//! ```rust,no_run
//! use gridworld_q::modes::{TrainConfig, TrainMode};
//!
//! let mut train_mode = TrainMode::new(TrainConfig::default())?;
//! train_mode.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::{self, Write};

use super::visualize::{run_greedy_episode_to, write_greedy_policy, EpisodeSummary};
use crate::game::{EnvConfig, GridWorldEnv, Position};
use crate::metrics::WindowStats;
use crate::rl::{train_q_learning, QLearningConfig, TrainingOutcome};

/// Configuration for training mode
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Grid layout and rewards
    pub env_config: EnvConfig,

    /// Q-learning hyperparameters
    pub q_config: QLearningConfig,

    /// RNG seed, entropy-seeded when absent
    pub seed: Option<u64>,

    /// Trailing episodes averaged in the final report
    pub summary_window: usize,

    /// Starting cells of the greedy rollouts shown after training
    pub rollout_starts: Vec<Position>,

    /// Step cap for each greedy rollout
    pub rollout_max_steps: u32,

    /// Emit the final report as JSON after the text report
    pub summary_json: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            env_config: EnvConfig::classic(),
            q_config: QLearningConfig::default(),
            seed: None,
            summary_window: 50,
            rollout_starts: vec![Position::new(0, 0), Position::new(0, 4), Position::new(4, 0)],
            rollout_max_steps: 30,
            summary_json: false,
        }
    }
}

/// Machine-readable summary of a training run
#[derive(Debug, Clone, Serialize)]
pub struct TrainReport {
    pub episodes: usize,
    pub recent: WindowStats,
    pub rollouts: Vec<EpisodeSummary>,
}

/// Training mode: one environment, one table, one report
pub struct TrainMode {
    env: GridWorldEnv,
    rng: StdRng,
    config: TrainConfig,
}

impl TrainMode {
    pub fn new(config: TrainConfig) -> Result<Self> {
        let env = GridWorldEnv::new(config.env_config.clone())
            .context("Failed to build grid world")?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self { env, rng, config })
    }

    /// Train and print the report to stdout
    pub fn run(&mut self) -> Result<TrainReport> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Train and write the report to `out`
    pub fn run_to<W: Write>(&mut self, out: &mut W) -> Result<TrainReport> {
        self.print_header(out)?;

        let outcome = train_q_learning(&mut self.env, &self.config.q_config, &mut self.rng)
            .context("Q-learning training failed")?;

        let recent = self.print_summary(&outcome, out)?;

        writeln!(out, "\nGreedy policy (arrows):")?;
        write_greedy_policy(&self.env, &outcome.q_table, out)?;

        let mut rollouts = Vec::with_capacity(self.config.rollout_starts.len());
        for &start in &self.config.rollout_starts {
            let summary = run_greedy_episode_to(
                &mut self.env,
                &outcome.q_table,
                start,
                self.config.rollout_max_steps,
                out,
            )
            .with_context(|| format!("Greedy rollout from {} failed", start))?;
            rollouts.push(summary);
        }

        let report = TrainReport {
            episodes: outcome.history.len(),
            recent,
            rollouts,
        };

        if self.config.summary_json {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            writeln!(out, "{}", json)?;
        }

        Ok(report)
    }

    /// Print training header information
    fn print_header<W: Write>(&self, out: &mut W) -> Result<()> {
        let env = &self.config.env_config;
        let q = &self.config.q_config;

        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(out, "Q-Learning - Grid World")?;
        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(
            out,
            "Grid: {}x{}, goal {}, {} barrier(s), max {} steps",
            env.grid_size,
            env.grid_size,
            env.goal,
            env.barriers.len(),
            env.max_steps
        )?;
        writeln!(out, "Episodes: {}", q.num_episodes)?;
        writeln!(out, "  Alpha: {}", q.alpha)?;
        writeln!(out, "  Gamma: {}", q.gamma)?;
        writeln!(
            out,
            "  Epsilon: {} -> {} (decay {})",
            q.epsilon_start, q.epsilon_min, q.epsilon_decay
        )?;
        if let Some(seed) = self.config.seed {
            writeln!(out, "Seed: {}", seed)?;
        }
        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(out)?;
        Ok(())
    }

    /// Print averages over the trailing summary window
    fn print_summary<W: Write>(&self, outcome: &TrainingOutcome, out: &mut W) -> Result<WindowStats> {
        let window = self.config.summary_window;
        let recent = outcome.history.recent(window);

        writeln!(out, "Average steps (last {} episodes): {:.2}", window, recent.mean_steps)?;
        writeln!(out, "Average return (last {} episodes): {:.2}", window, recent.mean_return)?;
        writeln!(out, "Success rate (last {} episodes): {:.2}", window, recent.success_rate)?;

        Ok(recent)
    }
}
