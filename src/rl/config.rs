//! Q-learning hyperparameter configuration

use serde::{Deserialize, Serialize};

/// Hyperparameters for tabular Q-learning
///
/// # Example
///
/// ```rust
/// use gridworld_q::rl::QLearningConfig;
///
/// let config = QLearningConfig {
///     num_episodes: 2000,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QLearningConfig {
    /// Number of training episodes
    ///
    /// Default: 500
    pub num_episodes: usize,

    /// Learning rate (alpha)
    ///
    /// Default: 0.1
    pub alpha: f32,

    /// Discount factor for future rewards (gamma)
    ///
    /// Default: 0.99
    pub gamma: f32,

    /// Exploration rate for the first episode
    ///
    /// Default: 0.2
    pub epsilon_start: f32,

    /// Floor the exploration rate never decays below
    ///
    /// Default: 0.05
    pub epsilon_min: f32,

    /// Multiplicative exploration decay applied after every episode
    ///
    /// Default: 0.995
    pub epsilon_decay: f32,

    /// Log a progress line every N episodes, 0 disables
    ///
    /// Default: 100
    pub log_frequency: usize,
}

impl QLearningConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters
    ///
    /// # Returns
    ///
    /// `Ok(())` if all parameters are valid, `Err(String)` with an error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(format!("alpha must be in (0, 1], got {}", self.alpha));
        }

        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(format!("gamma must be in [0, 1], got {}", self.gamma));
        }

        if !(0.0..=1.0).contains(&self.epsilon_start) {
            return Err(format!(
                "epsilon_start must be in [0, 1], got {}",
                self.epsilon_start
            ));
        }

        if !(0.0..=1.0).contains(&self.epsilon_min) {
            return Err(format!(
                "epsilon_min must be in [0, 1], got {}",
                self.epsilon_min
            ));
        }

        if self.epsilon_min > self.epsilon_start {
            return Err(format!(
                "epsilon_min ({}) cannot exceed epsilon_start ({})",
                self.epsilon_min, self.epsilon_start
            ));
        }

        if !(self.epsilon_decay > 0.0 && self.epsilon_decay <= 1.0) {
            return Err(format!(
                "epsilon_decay must be in (0, 1], got {}",
                self.epsilon_decay
            ));
        }

        Ok(())
    }
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            num_episodes: 500,
            alpha: 0.1,
            gamma: 0.99,
            epsilon_start: 0.2,
            epsilon_min: 0.05,
            epsilon_decay: 0.995,
            log_frequency: 100,
        }
    }
}
