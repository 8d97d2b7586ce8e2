use super::{
    action::Action,
    config::EnvConfig,
    error::{GridWorldError, Result},
    state::Position,
};
use crate::render::Renderer;
use std::collections::HashSet;

/// Information about a step
///
/// Purely observational; the reward already accounts for everything here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepInfo {
    /// The move hit a wall or a barrier and the agent stayed put
    pub bumped: bool,
    /// The agent is on the goal after this step
    pub reached_goal: bool,
    /// The episode ended because the step limit ran out
    pub timed_out: bool,
}

/// Result of an environment step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Agent position after the step
    pub position: Position,
    /// Step cost plus any bump penalty or goal bonus
    pub reward: f32,
    /// Whether the episode has terminated
    pub done: bool,
    pub info: StepInfo,
}

/// Deterministic square grid world with a single goal
///
/// An episode runs from `reset` until a step reports `done`, either by
/// reaching the goal or by exhausting `max_steps`. Stepping a finished
/// episode is an error until the next `reset`.
#[derive(Debug, Clone)]
pub struct GridWorldEnv {
    config: EnvConfig,
    barriers: HashSet<Position>,
    agent_pos: Position,
    steps_taken: u32,
    done: bool,
}

impl GridWorldEnv {
    /// Create an environment, rejecting unusable layouts
    ///
    /// The agent starts at the configured default start, ready to step.
    pub fn new(config: EnvConfig) -> Result<Self> {
        config.validate()?;

        let barriers = config.barriers.iter().copied().collect();
        let agent_pos = config.start;

        Ok(Self {
            config,
            barriers,
            agent_pos,
            steps_taken: 0,
            done: false,
        })
    }

    /// Reset the episode and return the starting position
    ///
    /// Starts at `start` if given, otherwise at the configured default
    /// start. Fails if the start is off the grid, the goal or a barrier.
    pub fn reset(&mut self, start: Option<Position>) -> Result<Position> {
        let position = start.unwrap_or(self.config.start);

        if !position.is_in_bounds(self.config.grid_size) || !self.is_open(position) {
            return Err(GridWorldError::InvalidStartPosition { position });
        }

        self.agent_pos = position;
        self.steps_taken = 0;
        self.done = false;

        Ok(self.agent_pos)
    }

    /// Execute one step of the episode
    pub fn step(&mut self, action: Action) -> Result<StepResult> {
        if self.done {
            return Err(GridWorldError::EpisodeFinished);
        }

        self.steps_taken += 1;

        let proposed = self.agent_pos.moved_in_direction(action);
        let mut reward = self.config.step_cost;
        let mut info = StepInfo::default();

        if self.is_walkable(proposed) {
            self.agent_pos = proposed;
        } else {
            // Agent stays put
            reward += self.config.bump_penalty;
            info.bumped = true;
        }

        if self.agent_pos == self.config.goal {
            reward += self.config.goal_reward;
            info.reached_goal = true;
            self.done = true;
        } else if self.steps_taken >= self.config.max_steps {
            info.timed_out = true;
            self.done = true;
        }

        Ok(StepResult {
            position: self.agent_pos,
            reward,
            done: self.done,
            info,
        })
    }

    /// Step with a discrete action index
    ///
    /// Indices outside 0..4 fail with `InvalidAction` before any state
    /// is touched.
    pub fn step_index(&mut self, action_idx: usize) -> Result<StepResult> {
        let action = Action::from_index(action_idx)?;
        self.step(action)
    }

    /// Row-major flat index of a position, `row * grid_size + col`
    pub fn state_to_index(&self, pos: Position) -> usize {
        debug_assert!(pos.is_in_bounds(self.config.grid_size));
        pos.row as usize * self.config.grid_size + pos.col as usize
    }

    /// Inverse of `state_to_index`
    pub fn index_to_state(&self, index: usize) -> Position {
        let size = self.config.grid_size;
        Position::new((index / size) as i32, (index % size) as i32)
    }

    /// Number of cells, i.e. rows of the Q-table
    pub fn num_states(&self) -> usize {
        self.config.grid_size * self.config.grid_size
    }

    /// Print the current grid to stdout
    pub fn render(&self) {
        println!("{}", Renderer::new().render_grid(self));
    }

    pub fn grid_size(&self) -> usize {
        self.config.grid_size
    }

    pub fn goal(&self) -> Position {
        self.config.goal
    }

    pub fn max_steps(&self) -> u32 {
        self.config.max_steps
    }

    pub fn agent_pos(&self) -> Position {
        self.agent_pos
    }

    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// Whether the current episode has terminated
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether the agent currently stands on the goal
    pub fn at_goal(&self) -> bool {
        self.agent_pos == self.config.goal
    }

    pub fn is_barrier(&self, pos: Position) -> bool {
        self.barriers.contains(&pos)
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// In bounds and not a barrier
    fn is_walkable(&self, pos: Position) -> bool {
        pos.is_in_bounds(self.config.grid_size) && !self.is_barrier(pos)
    }

    /// Neither the goal nor a barrier
    fn is_open(&self, pos: Position) -> bool {
        pos != self.config.goal && !self.is_barrier(pos)
    }
}
