use crate::core::{CellCoord, Direction, MazeGrid};

/// Lenient parser for the ASCII maze form. Malformed input never fails:
/// short or ragged lines simply leave the corresponding walls unknown, and
/// the inferred size is the larger of what the first line's width and the
/// line count suggest.
pub fn parse_maze_string(text: &str) -> MazeGrid {
    let lines: Vec<&str> = text.trim().lines().collect();
    let size_x = lines.first().map_or(0, |line| line.len() / 4);
    let size_y = lines.len() / 2;
    let mut maze = MazeGrid::new(size_x.max(size_y));

    // Reversed so index 0 is the bottom border and maze row y sits at
    // lines 2y (horizontal) and 2y+1 (vertical).
    let lines: Vec<&str> = lines.into_iter().rev().collect();
    for y in 0..size_y {
        let horizontal = lines[2 * y].trim().as_bytes();
        for x in 0..size_x {
            match horizontal.get(4 * x + 2) {
                Some(b'-') => maze.update_wall(x as i32, y as i32, Direction::South, true),
                Some(b' ') => maze.update_wall(x as i32, y as i32, Direction::South, false),
                _ => {}
            }
        }
        let vertical = lines[2 * y + 1].trim().as_bytes();
        for x in 0..size_x {
            match vertical.get(4 * x) {
                Some(b'|') => maze.update_wall(x as i32, y as i32, Direction::West, true),
                Some(b' ') => maze.update_wall(x as i32, y as i32, Direction::West, false),
                _ => {}
            }
            match vertical.get(4 * x + 2) {
                Some(b'S') => maze.start = CellCoord::new(x as i32, y as i32),
                Some(b'G') => maze.goals.push(CellCoord::new(x as i32, y as i32)),
                _ => {}
            }
        }
    }
    maze
}
