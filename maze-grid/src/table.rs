use std::fmt::Write;

use crate::core::{Direction, MazeGrid};

/// Configuration for the generated lookup table. `bit_order` assigns the
/// output bit position of the east, north, west, and south walls in that
/// order and is expected to be a permutation of 0..=3; it is not validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    pub name: String,
    pub elem_type: String,
    pub bit_order: [u8; 4],
    pub y_origin_is_top: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            name: "maze_data".to_string(),
            elem_type: "const uint8_t".to_string(),
            bit_order: [0, 1, 2, 3],
            y_origin_is_top: false,
        }
    }
}

pub fn table_string(maze: &MazeGrid, options: &TableOptions) -> String {
    let size = maze.size();
    let y_comment = if options.y_origin_is_top { "N-1-y" } else { "y" };
    let mut res = format!(
        "{} {}[ /* {} */ {}][ /* x */ {}] = {{\n",
        options.elem_type, options.name, y_comment, size, size
    );
    let rows: Vec<usize> = if options.y_origin_is_top {
        (0..size).rev().collect()
    } else {
        (0..size).collect()
    };
    for y in rows {
        res.push_str("    {");
        for x in 0..size {
            let mut mask: u32 = 0;
            for (direction, bit) in Direction::ALL.into_iter().zip(options.bit_order) {
                if maze.is_wall(x as i32, y as i32, direction) {
                    mask |= 1 << bit;
                }
            }
            let _ = write!(res, "0x{:x}", mask);
            if x < size - 1 {
                res.push_str(", ");
            }
        }
        res.push_str("},\n");
    }
    res.push_str("};\n");
    res
}

/// Derives a C identifier from an arbitrary string, e.g. a file name.
pub fn sanitize_identifier(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if out.is_empty() {
        return "maze_data".to_string();
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}
