use super::error::{GridWorldError, Result};

/// Move the agent can take on the grid
///
/// The discriminants are the action indices used as Q-table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Action {
    /// Number of distinct actions
    pub const COUNT: usize = 4;

    /// All actions in index order
    pub const ALL: [Action; Action::COUNT] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// Convert a discrete action index to an action
    ///
    /// - 0 → Up
    /// - 1 → Right
    /// - 2 → Down
    /// - 3 → Left
    /// - other → `InvalidAction`
    pub fn from_index(idx: usize) -> Result<Self> {
        Self::ALL
            .get(idx)
            .copied()
            .ok_or(GridWorldError::InvalidAction(idx))
    }

    /// Column of this action in the Q-table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the delta (d_row, d_col) for moving in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Action::Up => (-1, 0),
            Action::Right => (0, 1),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
        }
    }

    /// Arrow used when printing a greedy policy
    pub fn symbol(self) -> char {
        match self {
            Action::Up => '^',
            Action::Right => '>',
            Action::Down => 'v',
            Action::Left => '<',
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = GridWorldError;

    fn try_from(idx: usize) -> Result<Self> {
        Self::from_index(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_delta() {
        assert_eq!(Action::Up.delta(), (-1, 0));
        assert_eq!(Action::Right.delta(), (0, 1));
        assert_eq!(Action::Down.delta(), (1, 0));
        assert_eq!(Action::Left.delta(), (0, -1));
    }

    #[test]
    fn test_index_mapping() {
        for (idx, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), idx);
            assert_eq!(Action::from_index(idx).unwrap(), *action);
        }
    }

    #[test]
    fn test_invalid_index() {
        assert!(matches!(
            Action::from_index(4),
            Err(GridWorldError::InvalidAction(4))
        ));
        assert!(Action::try_from(999).is_err());
    }

    #[test]
    fn test_symbols() {
        let symbols: String = Action::ALL.iter().map(|a| a.symbol()).collect();
        assert_eq!(symbols, "^>v<");
    }
}
