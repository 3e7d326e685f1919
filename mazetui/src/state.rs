use maze_grid::core::{CellCoord, MazeGrid};
use maze_grid::render::maze_string;
use maze_grid::table::TableOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum EditorMode {
    Edit,
    Help,
    ConfirmQuit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// Serializable mirror of [`maze_grid::core::MazeGrid`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MazeState {
    pub size: u16,
    pub walls: Vec<bool>,
    pub knowns: Vec<bool>,
    pub start: (u16, u16),
    pub goals: Vec<(u16, u16)>,
}

impl MazeState {
    pub fn from_grid(grid: &MazeGrid) -> Self {
        Self {
            size: grid.size() as u16,
            walls: grid.walls.clone(),
            knowns: grid.knowns.clone(),
            start: (grid.start.x.max(0) as u16, grid.start.y.max(0) as u16),
            goals: grid
                .goals
                .iter()
                .map(|goal| (goal.x.max(0) as u16, goal.y.max(0) as u16))
                .collect(),
        }
    }

    pub fn to_grid(&self) -> MazeGrid {
        let mut grid = MazeGrid::with_markers(
            self.size as usize,
            CellCoord::new(self.start.0 as i32, self.start.1 as i32),
            self.goals
                .iter()
                .map(|&(x, y)| CellCoord::new(x as i32, y as i32))
                .collect(),
        );
        if self.walls.len() == grid.walls.len() {
            grid.walls = self.walls.clone();
        }
        if self.knowns.len() == grid.knowns.len() {
            grid.knowns = self.knowns.clone();
        }
        grid
    }

    pub fn text(&self) -> String {
        maze_string(&self.to_grid())
    }

    pub fn text_width(&self) -> u16 {
        4 * self.size + 1
    }

    pub fn text_height(&self) -> u16 {
        2 * self.size + 1
    }

    /// The cell whose 3-character body covers the given text position, if
    /// the position is on one and not on a wall marker or border.
    pub fn cell_at_text(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        if self.size == 0 || row >= self.text_height() || column >= self.text_width() {
            return None;
        }
        if row % 2 == 0 || column % 4 == 0 {
            return None;
        }
        let x = (column - 1) / 4;
        let y = self.size - 1 - (row - 1) / 2;
        Some((x, y))
    }

    /// Text position of the start cell's body center.
    pub fn start_cursor(&self) -> (u16, u16) {
        if self.size == 0 {
            return (0, 0);
        }
        let x = self.start.0.min(self.size - 1);
        let y = self.start.1.min(self.size - 1);
        (4 * x + 2, 2 * (self.size - 1 - y) + 1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TableConfig {
    pub name: String,
    pub elem_type: String,
    pub bit_order: [u8; 4],
    pub y_origin_is_top: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        let options = TableOptions::default();
        Self {
            name: options.name,
            elem_type: options.elem_type,
            bit_order: options.bit_order,
            y_origin_is_top: options.y_origin_is_top,
        }
    }
}

impl TableConfig {
    pub fn to_options(&self) -> TableOptions {
        TableOptions {
            name: self.name.clone(),
            elem_type: self.elem_type.clone(),
            bit_order: self.bit_order,
            y_origin_is_top: self.y_origin_is_top,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AppState {
    pub mode: EditorMode,
    pub maze: MazeState,
    /// Cursor position on the rendered character grid (column, row).
    pub cursor: (u16, u16),
    pub file: Option<String>,
    pub dirty: bool,
    pub should_quit: bool,
    pub table: TableConfig,
    pub last_status: Option<String>,
}

impl AppState {
    pub fn new(maze: MazeState, file: Option<String>, table: TableConfig) -> Self {
        let cursor = maze.start_cursor();
        Self {
            mode: EditorMode::Edit,
            maze,
            cursor,
            file,
            dirty: false,
            should_quit: false,
            table,
            last_status: None,
        }
    }

    /// Flat offset of the cursor into the rendered text, newlines included.
    pub fn cursor_offset(&self) -> usize {
        let stride = self.maze.text_width() as usize + 1;
        self.cursor.1 as usize * stride + self.cursor.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_grid::core::Direction;

    #[test]
    fn mirror_round_trips_through_the_grid() {
        let mut grid = MazeGrid::new(3);
        grid.update_wall(0, 0, Direction::East, true);
        grid.update_wall(1, 2, Direction::North, false);
        grid.start = CellCoord::new(2, 1);
        grid.goals.push(CellCoord::new(1, 1));

        let state = MazeState::from_grid(&grid);
        assert_eq!(state.to_grid(), grid);
    }

    #[test]
    fn cell_lookup_skips_walls_and_borders() {
        let maze = MazeState::from_grid(&MazeGrid::new(2));
        // Body characters of cell (0, 1), the top-left cell.
        assert_eq!(maze.cell_at_text(1, 1), Some((0, 1)));
        assert_eq!(maze.cell_at_text(2, 1), Some((0, 1)));
        assert_eq!(maze.cell_at_text(3, 1), Some((0, 1)));
        // Bottom-right cell body.
        assert_eq!(maze.cell_at_text(6, 3), Some((1, 0)));
        // Horizontal lines and wall-marker columns are not cells.
        assert_eq!(maze.cell_at_text(2, 0), None);
        assert_eq!(maze.cell_at_text(4, 1), None);
        assert_eq!(maze.cell_at_text(0, 3), None);
        // Out of the text block entirely.
        assert_eq!(maze.cell_at_text(9, 1), None);
        assert_eq!(maze.cell_at_text(1, 5), None);
    }

    #[test]
    fn cursor_starts_on_the_start_cell() {
        let mut grid = MazeGrid::new(4);
        grid.start = CellCoord::new(2, 1);
        let maze = MazeState::from_grid(&grid);
        let (column, row) = maze.start_cursor();
        assert_eq!((column, row), (10, 5));
        assert_eq!(maze.cell_at_text(column, row), Some((2, 1)));
    }

    #[test]
    fn cursor_offset_matches_the_rendered_text() {
        let maze = MazeState::from_grid(&MazeGrid::new(2));
        let state = AppState::new(maze, None, TableConfig::default());
        // Start cell (0, 0) sits at column 2 of text row 3.
        assert_eq!(state.cursor, (2, 3));
        let text = state.maze.text();
        assert_eq!(text.as_bytes()[state.cursor_offset()], b'S');
    }
}
