use crate::core::{CellCoord, Direction, MazeGrid};

/// Logical wall reference recovered from a character offset. The reference
/// may point past the field edge, in which case updates through it are
/// neutralized by the boundary rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallRef {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

pub fn maze_string(maze: &MazeGrid) -> String {
    let size = maze.size() as i32;
    let mut res = String::new();
    // The y = -1 pass only emits the bottom border: every wall it asks for
    // resolves out of field and therefore renders as a known wall.
    for y in (-1..size).rev() {
        res.push('+');
        for x in 0..size {
            if !maze.is_known(x, y, Direction::North) {
                res.push_str(" . ");
            } else if maze.is_wall(x, y, Direction::North) {
                res.push_str("---");
            } else {
                res.push_str("   ");
            }
            res.push('+');
        }
        res.push('\n');
        if y < 0 {
            break;
        }
        res.push('|');
        for x in 0..size {
            let cell = CellCoord::new(x, y);
            if maze.start == cell {
                res.push_str(" S ");
            } else if maze.goals.contains(&cell) {
                res.push_str(" G ");
            } else {
                res.push_str("   ");
            }
            if !maze.is_known(x, y, Direction::East) {
                res.push('.');
            } else if maze.is_wall(x, y, Direction::East) {
                res.push('|');
            } else {
                res.push(' ');
            }
        }
        res.push('\n');
    }
    res
}

/// Maps a flat character offset into [`maze_string`] output (newlines
/// included) back to the wall drawn there. Structural characters return
/// `None`: the corner pillars on horizontal lines and the cell-body center
/// (the `S`/`G` column) on vertical lines.
pub fn locate(maze: &MazeGrid, offset: usize) -> Option<WallRef> {
    let size = maze.size() as i64;
    let index = offset as i64;
    // Every rendered line is 4N+1 characters plus its newline; a maze row
    // spans a horizontal and a vertical line.
    let line_span = 4 * size + 2;
    let row_span = line_span * 2;

    let y = (size * row_span - index).div_euclid(row_span);
    let x = ((index - 2) % line_span).div_euclid(4);
    let line_parity = (index.div_euclid(line_span) + 1) % 2;
    let column = index % line_span;

    if line_parity == 0 && column % 4 != 2 {
        Some(WallRef {
            x: x as i32,
            y: y as i32,
            direction: Direction::East,
        })
    } else if line_parity == 1 && column % 4 != 0 {
        Some(WallRef {
            x: x as i32,
            y: y as i32,
            direction: Direction::North,
        })
    } else {
        None
    }
}
