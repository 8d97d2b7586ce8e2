use super::error::{GridWorldError, Result};
use super::state::Position;
use serde::{Deserialize, Serialize};

/// Configuration for the grid world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Terminal goal cell
    pub goal: Position,
    /// Blocked cells, fixed for the lifetime of the environment
    pub barriers: Vec<Position>,
    /// Step limit after which an episode times out
    pub max_steps: u32,
    /// Default start used by `reset(None)`
    pub start: Position,

    // Rewards
    /// Reward added on every step
    pub step_cost: f32,
    /// Bonus for reaching the goal
    pub goal_reward: f32,
    /// Penalty for walking into a wall or barrier
    pub bump_penalty: f32,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            goal: Position::new(4, 4),
            barriers: Vec::new(),
            max_steps: 50,
            start: Position::new(0, 0),
            step_cost: -1.0,
            goal_reward: 10.0,
            bump_penalty: -5.0,
        }
    }
}

impl EnvConfig {
    /// Create a configuration with the default rewards for a custom layout
    pub fn new(grid_size: usize, goal: Position, barriers: Vec<Position>) -> Self {
        Self {
            grid_size,
            goal,
            barriers,
            ..Default::default()
        }
    }

    /// Set the step limit
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// The 5x5 layout with three barriers near the top-left corner
    pub fn classic() -> Self {
        Self::new(
            5,
            Position::new(4, 4),
            vec![Position::new(1, 1), Position::new(1, 2), Position::new(2, 1)],
        )
    }

    /// Check that the layout is usable
    ///
    /// The goal, barriers and default start must lie on the grid, the goal
    /// must not be a barrier, and the default start must be neither.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(invalid("grid_size must be at least 1".to_string()));
        }

        if self.max_steps == 0 {
            return Err(invalid("max_steps must be at least 1".to_string()));
        }

        if !self.goal.is_in_bounds(self.grid_size) {
            return Err(invalid(format!(
                "goal {} is outside the {}x{} grid",
                self.goal, self.grid_size, self.grid_size
            )));
        }

        if let Some(barrier) = self
            .barriers
            .iter()
            .find(|b| !b.is_in_bounds(self.grid_size))
        {
            return Err(invalid(format!(
                "barrier {} is outside the {}x{} grid",
                barrier, self.grid_size, self.grid_size
            )));
        }

        if self.barriers.contains(&self.goal) {
            return Err(invalid(format!("goal {} overlaps a barrier", self.goal)));
        }

        if !self.start.is_in_bounds(self.grid_size) {
            return Err(invalid(format!(
                "start {} is outside the {}x{} grid",
                self.start, self.grid_size, self.grid_size
            )));
        }

        if self.start == self.goal || self.barriers.contains(&self.start) {
            return Err(GridWorldError::InvalidStartPosition {
                position: self.start,
            });
        }

        Ok(())
    }
}

fn invalid(msg: String) -> GridWorldError {
    GridWorldError::InvalidConfig(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnvConfig::default();
        assert_eq!(config.grid_size, 5);
        assert_eq!(config.goal, Position::new(4, 4));
        assert!(config.barriers.is_empty());
        assert_eq!(config.max_steps, 50);
        assert_eq!(config.step_cost, -1.0);
        assert_eq!(config.goal_reward, 10.0);
        assert_eq!(config.bump_penalty, -5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_classic_config_is_valid() {
        let config = EnvConfig::classic();
        assert_eq!(config.barriers.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_goal_on_barrier_rejected() {
        let config = EnvConfig::new(5, Position::new(2, 2), vec![Position::new(2, 2)]);
        assert!(matches!(
            config.validate(),
            Err(GridWorldError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let config = EnvConfig::new(5, Position::new(5, 4), Vec::new());
        assert!(config.validate().is_err());

        let config = EnvConfig::new(5, Position::new(4, 4), vec![Position::new(-1, 0)]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blocked_start_rejected() {
        let config = EnvConfig::new(5, Position::new(4, 4), vec![Position::new(0, 0)]);
        assert!(matches!(
            config.validate(),
            Err(GridWorldError::InvalidStartPosition { .. })
        ));
    }

    #[test]
    fn test_zero_sizes_rejected() {
        let mut config = EnvConfig::default();
        config.grid_size = 0;
        assert!(config.validate().is_err());

        let config = EnvConfig::default().with_max_steps(0);
        assert!(config.validate().is_err());
    }
}
