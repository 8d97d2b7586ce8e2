use crate::game::{GridWorldEnv, Position};
use crate::rl::QTable;

/// Plain-text renderer for grid snapshots and greedy policies
///
/// Cells are separated by single spaces, one grid row per line.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Snapshot of the grid
    ///
    /// `A` agent, `G` goal, `X` barrier, `.` empty.
    pub fn render_grid(&self, env: &GridWorldEnv) -> String {
        self.render_cells(env, |pos| {
            if pos == env.agent_pos() {
                'A'
            } else if pos == env.goal() {
                'G'
            } else if env.is_barrier(pos) {
                'X'
            } else {
                '.'
            }
        })
    }

    /// Greedy action arrow for every open cell, `G` and `X` elsewhere
    pub fn render_policy(&self, env: &GridWorldEnv, q_table: &QTable) -> String {
        self.render_cells(env, |pos| {
            if pos == env.goal() {
                'G'
            } else if env.is_barrier(pos) {
                'X'
            } else {
                q_table.best_action(env.state_to_index(pos)).symbol()
            }
        })
    }

    fn render_cells(&self, env: &GridWorldEnv, cell: impl Fn(Position) -> char) -> String {
        let size = env.grid_size() as i32;
        let mut lines = Vec::with_capacity(env.grid_size());

        for row in 0..size {
            let cells: Vec<String> = (0..size)
                .map(|col| cell(Position::new(row, col)).to_string())
                .collect();
            lines.push(cells.join(" "));
        }

        lines.join("\n")
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Action, EnvConfig};

    #[test]
    fn test_render_grid() {
        let mut env = GridWorldEnv::new(EnvConfig::classic()).unwrap();
        env.reset(Some(Position::new(0, 1))).unwrap();

        let grid = Renderer::new().render_grid(&env);
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], ". A . . .");
        assert_eq!(lines[1], ". X X . .");
        assert_eq!(lines[2], ". X . . .");
        assert_eq!(lines[4], ". . . . G");
    }

    #[test]
    fn test_render_policy() {
        let env = GridWorldEnv::new(EnvConfig::classic()).unwrap();
        let mut q_table = QTable::new(env.num_states());
        q_table.set(0, Action::Down, 1.0);

        let policy = Renderer::new().render_policy(&env, &q_table);
        let lines: Vec<&str> = policy.lines().collect();

        // All-zero rows fall back to the first action
        assert_eq!(lines[0], "v ^ ^ ^ ^");
        assert_eq!(lines[1], "^ X X ^ ^");
        assert_eq!(lines[4], "^ ^ ^ ^ G");
    }
}
