//! Action selection

use super::q_table::QTable;
use crate::game::Action;
use rand::Rng;

/// Epsilon-greedy action selection
///
/// With probability `epsilon` returns a uniformly random action, otherwise
/// the greedy action for `state` (lowest index on ties).
pub fn choose_action_epsilon_greedy<R: Rng + ?Sized>(
    q_table: &QTable,
    state: usize,
    epsilon: f32,
    rng: &mut R,
) -> Action {
    if rng.gen::<f32>() < epsilon {
        Action::ALL[rng.gen_range(0..Action::COUNT)]
    } else {
        q_table.best_action(state)
    }
}

/// Multiplicative exploration decay with a floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonSchedule {
    epsilon: f32,
    min: f32,
    decay: f32,
}

impl EpsilonSchedule {
    pub fn new(start: f32, min: f32, decay: f32) -> Self {
        Self {
            epsilon: start.max(min),
            min,
            decay,
        }
    }

    /// Exploration rate for the current episode
    pub fn current(&self) -> f32 {
        self.epsilon
    }

    /// Advance to the next episode: `epsilon = max(min, epsilon * decay)`
    pub fn decay(&mut self) -> f32 {
        self.epsilon = (self.epsilon * self.decay).max(self.min);
        self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_epsilon_is_greedy() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut table = QTable::new(1);
        table.set(0, Action::Left, 1.0);

        for _ in 0..100 {
            assert_eq!(
                choose_action_epsilon_greedy(&table, 0, 0.0, &mut rng),
                Action::Left
            );
        }
    }

    #[test]
    fn test_full_epsilon_explores_every_action() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = QTable::new(1);
        let mut seen = [false; Action::COUNT];

        for _ in 0..200 {
            let action = choose_action_epsilon_greedy(&table, 0, 1.0, &mut rng);
            seen[action.index()] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let table = QTable::new(1);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            assert_eq!(
                choose_action_epsilon_greedy(&table, 0, 0.5, &mut a),
                choose_action_epsilon_greedy(&table, 0, 0.5, &mut b)
            );
        }
    }

    #[test]
    fn test_epsilon_decays_to_floor() {
        let mut schedule = EpsilonSchedule::new(0.2, 0.05, 0.5);
        assert!((schedule.current() - 0.2).abs() < 1e-6);

        assert!((schedule.decay() - 0.1).abs() < 1e-6);
        assert!((schedule.decay() - 0.05).abs() < 1e-6);

        for _ in 0..1000 {
            assert!(schedule.decay() >= 0.05);
        }
        assert!((schedule.current() - 0.05).abs() < 1e-6);
    }
}
