//! Dense state-action value table

use crate::game::Action;

/// One observed environment transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: usize,
    pub action: Action,
    pub reward: f32,
    pub next_state: usize,
    pub done: bool,
}

/// Q-values for every (state index, action) pair
///
/// Sized once for `num_states` rows of `Action::COUNT` columns, zero
/// initialized, never resized.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    values: Vec<[f32; Action::COUNT]>,
}

impl QTable {
    /// Create a zero-filled table
    pub fn new(num_states: usize) -> Self {
        Self {
            values: vec![[0.0; Action::COUNT]; num_states],
        }
    }

    pub fn num_states(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, state: usize, action: Action) -> f32 {
        self.values[state][action.index()]
    }

    pub fn set(&mut self, state: usize, action: Action, value: f32) {
        self.values[state][action.index()] = value;
    }

    /// All action values for one state, in action index order
    pub fn row(&self, state: usize) -> &[f32; Action::COUNT] {
        &self.values[state]
    }

    /// Largest action value for a state
    pub fn max_value(&self, state: usize) -> f32 {
        self.values[state]
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Greedy action for a state
    ///
    /// Ties go to the lowest action index so greedy playback is
    /// reproducible.
    pub fn best_action(&self, state: usize) -> Action {
        let row = &self.values[state];
        let mut best = 0;
        for (idx, &value) in row.iter().enumerate().skip(1) {
            if value > row[best] {
                best = idx;
            }
        }
        Action::ALL[best]
    }

    /// Apply one Q-learning update and return the TD error
    ///
    /// `Q[s,a] += alpha * (r + gamma * max_a' Q[s',a'] - Q[s,a])`, with the
    /// bootstrap term fixed at 0 when `done` is set.
    pub fn update(&mut self, transition: &Transition, alpha: f32, gamma: f32) -> f32 {
        let best_next = if transition.done {
            0.0
        } else {
            self.max_value(transition.next_state)
        };
        let td_target = transition.reward + gamma * best_next;
        let td_error = td_target - self.get(transition.state, transition.action);
        self.values[transition.state][transition.action.index()] += alpha * td_error;
        td_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_zero() {
        let table = QTable::new(25);
        assert_eq!(table.num_states(), 25);
        for state in 0..25 {
            assert_eq!(table.row(state), &[0.0; 4]);
        }
    }

    #[test]
    fn test_best_action_breaks_ties_low() {
        let mut table = QTable::new(2);
        assert_eq!(table.best_action(0), Action::Up);

        table.set(1, Action::Right, 2.0);
        table.set(1, Action::Left, 2.0);
        assert_eq!(table.best_action(1), Action::Right);

        table.set(1, Action::Down, 3.0);
        assert_eq!(table.best_action(1), Action::Down);
        assert!((table.max_value(1) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_best_action_all_negative() {
        let mut table = QTable::new(1);
        table.set(0, Action::Up, -4.0);
        table.set(0, Action::Right, -1.0);
        table.set(0, Action::Down, -2.0);
        table.set(0, Action::Left, -3.0);
        assert_eq!(table.best_action(0), Action::Right);
    }

    #[test]
    fn test_update_bootstraps_from_next_state() {
        let mut table = QTable::new(2);
        table.set(1, Action::Down, 5.0);

        let transition = Transition {
            state: 0,
            action: Action::Right,
            reward: -1.0,
            next_state: 1,
            done: false,
        };
        let td_error = table.update(&transition, 0.5, 0.9);

        // target = -1 + 0.9 * 5 = 3.5
        assert!((td_error - 3.5).abs() < 1e-5);
        assert!((table.get(0, Action::Right) - 1.75).abs() < 1e-5);
    }

    #[test]
    fn test_update_never_bootstraps_past_terminal() {
        let mut table = QTable::new(2);
        table.set(1, Action::Up, 100.0);

        let transition = Transition {
            state: 0,
            action: Action::Down,
            reward: 9.0,
            next_state: 1,
            done: true,
        };
        table.update(&transition, 1.0, 0.99);

        assert!((table.get(0, Action::Down) - 9.0).abs() < 1e-5);
    }
}
