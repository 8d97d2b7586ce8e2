//! Greedy policy inspection and playback
//!
//! Read-only consumers of a trained Q-table: an arrow grid of the greedy
//! policy and step-by-step greedy rollouts rendered as text.

use serde::Serialize;
use std::io::{self, Write};

use crate::game::{GridWorldEnv, Position, Result};
use crate::render::Renderer;
use crate::rl::QTable;

/// Outcome of one greedy rollout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub start: Position,
    pub steps: u32,
    pub total_reward: f32,
    pub reached_goal: bool,
}

/// Print the greedy policy arrows to stdout
pub fn print_greedy_policy(env: &GridWorldEnv, q_table: &QTable) -> Result<()> {
    write_greedy_policy(env, q_table, &mut io::stdout().lock())
}

/// Write the greedy policy arrows
///
/// `^ > v <` for the argmax action of each open cell, `G` goal, `X` barrier.
pub fn write_greedy_policy<W: Write>(env: &GridWorldEnv, q_table: &QTable, out: &mut W) -> Result<()> {
    writeln!(out, "{}", Renderer::new().render_policy(env, q_table))?;
    writeln!(out)?;
    Ok(())
}

/// Play one greedy episode, rendering every step to stdout
pub fn run_greedy_episode(
    env: &mut GridWorldEnv,
    q_table: &QTable,
    start: Position,
    max_steps: u32,
) -> Result<EpisodeSummary> {
    run_greedy_episode_to(env, q_table, start, max_steps, &mut io::stdout().lock())
}

/// Play one greedy episode from `start`, writing each rendered step
///
/// Stops when the environment reports `done` or after `max_steps`, a cap
/// independent of the environment's own step limit.
pub fn run_greedy_episode_to<W: Write>(
    env: &mut GridWorldEnv,
    q_table: &QTable,
    start: Position,
    max_steps: u32,
    out: &mut W,
) -> Result<EpisodeSummary> {
    let renderer = Renderer::new();
    let position = env.reset(Some(start))?;
    let mut state = env.state_to_index(position);
    let mut steps = 0;
    let mut total_reward = 0.0;
    let mut done = false;

    writeln!(out, "Starting greedy episode from {}", start)?;
    writeln!(out, "{}\n", renderer.render_grid(env))?;

    while !done && steps < max_steps {
        let action = q_table.best_action(state);
        let result = env.step(action)?;

        total_reward += result.reward;
        steps += 1;
        state = env.state_to_index(result.position);
        done = result.done;

        writeln!(
            out,
            "Step {}: action={:?}, reward={:.2}",
            steps, action, result.reward
        )?;
        writeln!(out, "{}\n", renderer.render_grid(env))?;
    }

    writeln!(
        out,
        "Episode finished. Steps: {}, Total reward: {:.2}\n",
        steps, total_reward
    )?;

    Ok(EpisodeSummary {
        start,
        steps,
        total_reward,
        reached_goal: env.at_goal(),
    })
}
