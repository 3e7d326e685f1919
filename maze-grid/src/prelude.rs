pub use crate::core::{CellCoord, CoreError, Direction, MazeGrid, WallAxis, WallKey};
pub use crate::parse::parse_maze_string;
pub use crate::render::{locate, maze_string, WallRef};
pub use crate::table::{sanitize_identifier, table_string, TableOptions};

#[cfg(feature = "ratatui")]
pub use crate::view::{viewport_origin, MazeTheme, MazeView};
