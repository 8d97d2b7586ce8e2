//! Grid World Q-Learning - a tabular reinforcement-learning sandbox
//!
//! This library provides:
//! - Deterministic grid-world environment (game module)
//! - Tabular Q-learning with epsilon-greedy exploration (rl module)
//! - Per-episode training statistics (metrics module)
//! - Text rendering of grids and greedy policies (render module)
//! - Training and greedy playback routines (modes module)

pub mod game;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod rl;
