pub mod train;
pub mod visualize;

pub use train::{TrainConfig, TrainMode, TrainReport};
pub use visualize::{
    print_greedy_policy, run_greedy_episode, run_greedy_episode_to, write_greedy_policy,
    EpisodeSummary,
};
