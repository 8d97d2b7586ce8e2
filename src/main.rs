use anyhow::Result;
use clap::Parser;
use gridworld_q::game::{EnvConfig, Position};
use gridworld_q::modes::{TrainConfig, TrainMode};
use gridworld_q::rl::QLearningConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridworld_q")]
#[command(version, about = "Tabular Q-learning on a grid world")]
struct Cli {
    /// Side length of the square grid
    #[arg(long, default_value = "5")]
    grid_size: usize,

    /// Goal cell as `row,col`
    #[arg(long, default_value = "4,4")]
    goal: Position,

    /// Barrier cell as `row,col`, repeatable
    #[arg(long = "barrier", default_values = ["1,1", "1,2", "2,1"])]
    barriers: Vec<Position>,

    /// Ignore barriers and train on an open grid
    #[arg(long)]
    open: bool,

    /// Step limit per episode
    #[arg(long, default_value = "50")]
    max_steps: u32,

    /// Reward added on every step
    #[arg(long, default_value = "-1.0", allow_hyphen_values = true)]
    step_cost: f32,

    /// Bonus for reaching the goal
    #[arg(long, default_value = "10.0")]
    goal_reward: f32,

    /// Penalty for bumping into a wall or barrier
    #[arg(long, default_value = "-5.0", allow_hyphen_values = true)]
    bump_penalty: f32,

    /// Number of training episodes
    #[arg(long, default_value = "500")]
    episodes: usize,

    /// Learning rate
    #[arg(long, default_value = "0.1")]
    alpha: f32,

    /// Discount factor
    #[arg(long, default_value = "0.99")]
    gamma: f32,

    /// Initial exploration rate
    #[arg(long, default_value = "0.2")]
    epsilon_start: f32,

    /// Exploration floor
    #[arg(long, default_value = "0.05")]
    epsilon_min: f32,

    /// Per-episode exploration decay
    #[arg(long, default_value = "0.995")]
    epsilon_decay: f32,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Episodes averaged in the final report
    #[arg(long, default_value = "50")]
    summary_window: usize,

    /// Greedy rollout start as `row,col`, repeatable
    #[arg(long = "rollout-start", default_values = ["0,0", "0,4", "4,0"])]
    rollout_starts: Vec<Position>,

    /// Step cap for each greedy rollout
    #[arg(long, default_value = "30")]
    rollout_max_steps: u32,

    /// Log training progress every N episodes (0 disables)
    #[arg(long, default_value = "100")]
    log_frequency: usize,

    /// Print the final report as JSON as well
    #[arg(long)]
    summary_json: bool,
}

impl Cli {
    fn into_train_config(self) -> TrainConfig {
        let barriers = if self.open { Vec::new() } else { self.barriers };

        let env_config = EnvConfig {
            grid_size: self.grid_size,
            goal: self.goal,
            barriers,
            max_steps: self.max_steps,
            step_cost: self.step_cost,
            goal_reward: self.goal_reward,
            bump_penalty: self.bump_penalty,
            ..Default::default()
        };

        let q_config = QLearningConfig {
            num_episodes: self.episodes,
            alpha: self.alpha,
            gamma: self.gamma,
            epsilon_start: self.epsilon_start,
            epsilon_min: self.epsilon_min,
            epsilon_decay: self.epsilon_decay,
            log_frequency: self.log_frequency,
        };

        TrainConfig {
            env_config,
            q_config,
            seed: self.seed,
            summary_window: self.summary_window,
            rollout_starts: self.rollout_starts,
            rollout_max_steps: self.rollout_max_steps,
            summary_json: self.summary_json,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut train_mode = TrainMode::new(cli.into_train_config())?;
    train_mode.run()?;

    Ok(())
}
