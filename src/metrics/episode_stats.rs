//! Per-episode training statistics
//!
//! Keeps the full ordered history of episode lengths, returns and goal
//! flags, plus the exploration rate each episode ran with, and summarizes
//! trailing windows of it.

use serde::Serialize;

/// Averages over a trailing window of episodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowStats {
    /// Episodes actually in the window (fewer than requested early on)
    pub episodes: usize,
    pub mean_steps: f32,
    pub mean_return: f32,
    pub success_rate: f32,
}

/// Ordered per-episode statistics, appended once per finished episode
#[derive(Debug, Clone, Default, Serialize)]
pub struct EpisodeHistory {
    steps: Vec<u32>,
    returns: Vec<f32>,
    successes: Vec<bool>,
    epsilons: Vec<f32>,
}

impl EpisodeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(episodes: usize) -> Self {
        Self {
            steps: Vec::with_capacity(episodes),
            returns: Vec::with_capacity(episodes),
            successes: Vec::with_capacity(episodes),
            epsilons: Vec::with_capacity(episodes),
        }
    }

    /// Record the completion of an episode
    ///
    /// # Example
    ///
    /// ```rust
    /// use gridworld_q::metrics::EpisodeHistory;
    ///
    /// let mut history = EpisodeHistory::new();
    /// history.record_episode(8, 2.0, true, 0.2);
    ///
    /// assert_eq!(history.len(), 1);
    /// assert_eq!(history.total_steps(), 8);
    /// ```
    pub fn record_episode(&mut self, steps: u32, total_reward: f32, success: bool, epsilon: f32) {
        self.steps.push(steps);
        self.returns.push(total_reward);
        self.successes.push(success);
        self.epsilons.push(epsilon);
    }

    /// Steps taken per episode
    pub fn steps(&self) -> &[u32] {
        &self.steps
    }

    /// Undiscounted return per episode
    pub fn returns(&self) -> &[f32] {
        &self.returns
    }

    /// Whether each episode ended on the goal rather than by timeout
    pub fn successes(&self) -> &[bool] {
        &self.successes
    }

    /// Exploration rate used during each episode
    pub fn epsilons(&self) -> &[f32] {
        &self.epsilons
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn total_steps(&self) -> u64 {
        self.steps.iter().map(|&s| u64::from(s)).sum()
    }

    /// Averages over the last `window` episodes
    ///
    /// Divides by the number of episodes actually present, so an empty
    /// history or a zero window yields all zeros.
    pub fn recent(&self, window: usize) -> WindowStats {
        let start = self.len().saturating_sub(window);
        let episodes = self.len() - start;

        if episodes == 0 {
            return WindowStats {
                episodes: 0,
                mean_steps: 0.0,
                mean_return: 0.0,
                success_rate: 0.0,
            };
        }

        let n = episodes as f32;
        let steps: u64 = self.steps[start..].iter().map(|&s| u64::from(s)).sum();
        let returns: f32 = self.returns[start..].iter().sum();
        let successes = self.successes[start..].iter().filter(|&&s| s).count();

        WindowStats {
            episodes,
            mean_steps: steps as f32 / n,
            mean_return: returns / n,
            success_rate: successes as f32 / n,
        }
    }

    /// One-line summary of the last `window` episodes
    pub fn format_summary(&self, window: usize) -> String {
        let stats = self.recent(window);
        format!(
            "Episodes: {} | Steps: {} | Len: {:.2} | Return: {:.2} | Success: {:.2}",
            self.len(),
            self.total_steps(),
            stats.mean_steps,
            stats.mean_return,
            stats.success_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let history = EpisodeHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.total_steps(), 0);
    }

    #[test]
    fn test_record_episode_keeps_order() {
        let mut history = EpisodeHistory::new();
        history.record_episode(50, -80.0, false, 0.2);
        history.record_episode(8, 2.0, true, 0.199);

        assert_eq!(history.steps(), &[50, 8]);
        assert_eq!(history.returns(), &[-80.0, 2.0]);
        assert_eq!(history.successes(), &[false, true]);
        assert_eq!(history.epsilons().len(), 2);
        assert_eq!(history.total_steps(), 58);
    }

    #[test]
    fn test_recent_window() {
        let mut history = EpisodeHistory::new();
        history.record_episode(50, -50.0, false, 0.2);
        history.record_episode(10, 0.0, true, 0.2);
        history.record_episode(8, 2.0, true, 0.2);

        let stats = history.recent(2);
        assert_eq!(stats.episodes, 2);
        assert!((stats.mean_steps - 9.0).abs() < 1e-5);
        assert!((stats.mean_return - 1.0).abs() < 1e-5);
        assert!((stats.success_rate - 1.0).abs() < 1e-5);

        // Window larger than the history covers everything
        let stats = history.recent(50);
        assert_eq!(stats.episodes, 3);
        assert!((stats.success_rate - 2.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_stats() {
        let history = EpisodeHistory::new();
        let stats = history.recent(50);

        assert_eq!(stats.episodes, 0);
        assert_eq!(stats.mean_steps, 0.0);
        assert_eq!(stats.mean_return, 0.0);
        assert_eq!(stats.success_rate, 0.0);
    }

    #[test]
    fn test_format_summary() {
        let mut history = EpisodeHistory::new();
        history.record_episode(8, 2.0, true, 0.05);

        let summary = history.format_summary(50);
        assert!(summary.contains("Episodes: 1"));
        assert!(summary.contains("Steps: 8"));
        assert!(summary.contains("Len: 8.00"));
        assert!(summary.contains("Return: 2.00"));
        assert!(summary.contains("Success: 1.00"));
    }
}
