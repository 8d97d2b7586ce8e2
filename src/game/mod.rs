//! Grid-world environment
//!
//! Holds the grid geometry, goal, barriers and the agent position, and
//! implements the reset/step state machine the learning loop drives.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use action::Action;
pub use config::EnvConfig;
pub use engine::{GridWorldEnv, StepInfo, StepResult};
pub use error::{GridWorldError, Result};
pub use state::Position;
