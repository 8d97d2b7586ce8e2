use super::action::Action;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cell on the grid, 0-based (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Position reached by applying an action, without any bounds check
    pub fn moved_in_direction(&self, action: Action) -> Self {
        let (d_row, d_col) = action.delta();
        self.moved_by(d_row, d_col)
    }

    /// Check if the position lies inside a square grid of the given size
    pub fn is_in_bounds(&self, grid_size: usize) -> bool {
        let size = grid_size as i32;
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `row,col`, e.g. `4,4`
impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `row,col`, got `{}`", s))?;
        let row = row
            .trim()
            .parse()
            .map_err(|e| format!("invalid row in `{}`: {}", s, e))?;
        let col = col
            .trim()
            .parse()
            .map_err(|e| format!("invalid col in `{}`: {}", s, e))?;
        Ok(Self::new(row, col))
    }
}
