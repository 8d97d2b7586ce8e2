//! Tabular Q-learning
//!
//! Provides:
//! - Dense Q-table with the Q-learning update
//! - Epsilon-greedy action selection over an injected RNG
//! - Hyperparameter configuration
//! - The episode training loop

pub mod config;
pub mod policy;
pub mod q_table;
pub mod trainer;

pub use config::QLearningConfig;
pub use policy::{choose_action_epsilon_greedy, EpsilonSchedule};
pub use q_table::{QTable, Transition};
pub use trainer::{train_q_learning, TrainingOutcome};
