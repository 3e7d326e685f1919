use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallAxis {
    East,
    North,
}

impl WallAxis {
    pub const fn layer(self) -> usize {
        match self {
            WallAxis::East => 0,
            WallAxis::North => 1,
        }
    }
}

/// Canonical storage slot for one physical wall. The wall shared by two
/// adjacent cells resolves to the same key from either side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WallKey {
    pub x: i32,
    pub y: i32,
    pub axis: WallAxis,
}

impl WallKey {
    pub const fn canonical(x: i32, y: i32, direction: Direction) -> Self {
        match direction {
            Direction::East => Self {
                x,
                y,
                axis: WallAxis::East,
            },
            Direction::North => Self {
                x,
                y,
                axis: WallAxis::North,
            },
            Direction::West => Self {
                x: x - 1,
                y,
                axis: WallAxis::East,
            },
            Direction::South => Self {
                x,
                y: y - 1,
                axis: WallAxis::North,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    InvalidCoordinate { x: i32, y: i32 },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidCoordinate { x, y } => {
                write!(f, "coordinate out of field: ({}, {})", x, y)
            }
        }
    }
}

impl std::error::Error for CoreError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    size: usize,
    /// Canonical wall storage, indexed by [`MazeGrid::wall_index`].
    pub walls: Vec<bool>,
    /// Whether the wall at the same index has ever been observed.
    pub knowns: Vec<bool>,
    pub start: CellCoord,
    pub goals: Vec<CellCoord>,
}

impl MazeGrid {
    pub fn new(size: usize) -> Self {
        Self::with_markers(size, CellCoord::new(0, 0), Vec::new())
    }

    pub fn with_markers(size: usize, start: CellCoord, goals: Vec<CellCoord>) -> Self {
        let wall_slots = size * size * 2;
        Self {
            size,
            walls: vec![false; wall_slots],
            knowns: vec![false; wall_slots],
            start,
            goals,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains_cell(&self, x: i32, y: i32) -> bool {
        let s = self.size as i32;
        x >= 0 && y >= 0 && x < s && y < s
    }

    // East-axis walls only exist between columns and north-axis walls only
    // between rows, hence the asymmetric upper bounds.
    pub fn contains_wall(&self, key: WallKey) -> bool {
        let s = self.size as i32;
        let z = key.axis.layer() as i32;
        key.x >= 0 && key.y >= 0 && key.x < s + z - 1 && key.y < s - z
    }

    pub fn cell_index(&self, x: i32, y: i32) -> Result<usize, CoreError> {
        if !self.contains_cell(x, y) {
            return Err(CoreError::InvalidCoordinate { x, y });
        }
        Ok(y as usize * self.size + x as usize)
    }

    pub fn wall_index(&self, key: WallKey) -> Result<usize, CoreError> {
        if !self.contains_wall(key) {
            return Err(CoreError::InvalidCoordinate { x: key.x, y: key.y });
        }
        Ok(key.x as usize + key.y as usize * self.size + key.axis.layer() * self.size * self.size)
    }

    /// Walls past the field edge read as present: the maze is always enclosed.
    pub fn is_wall(&self, x: i32, y: i32, direction: Direction) -> bool {
        match self.wall_index(WallKey::canonical(x, y, direction)) {
            Ok(index) => self.walls[index],
            Err(_) => true,
        }
    }

    /// Walls past the field edge read as known.
    pub fn is_known(&self, x: i32, y: i32, direction: Direction) -> bool {
        match self.wall_index(WallKey::canonical(x, y, direction)) {
            Ok(index) => self.knowns[index],
            Err(_) => true,
        }
    }

    pub fn set_wall(&mut self, x: i32, y: i32, direction: Direction, present: bool) {
        if let Ok(index) = self.wall_index(WallKey::canonical(x, y, direction)) {
            self.walls[index] = present;
        }
    }

    pub fn set_known(&mut self, x: i32, y: i32, direction: Direction, known: bool) {
        if let Ok(index) = self.wall_index(WallKey::canonical(x, y, direction)) {
            self.knowns[index] = known;
        }
    }

    pub fn update_wall(&mut self, x: i32, y: i32, direction: Direction, present: bool) {
        self.set_wall(x, y, direction, present);
        self.set_known(x, y, direction, true);
    }

    pub fn is_goal(&self, x: i32, y: i32) -> bool {
        self.goals.contains(&CellCoord::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_keys_collapse_shared_walls() {
        let east = WallKey::canonical(1, 2, Direction::East);
        let west = WallKey::canonical(2, 2, Direction::West);
        assert_eq!(east, west);

        let north = WallKey::canonical(1, 2, Direction::North);
        let south = WallKey::canonical(1, 3, Direction::South);
        assert_eq!(north, south);
    }

    #[test]
    fn shared_wall_reads_from_both_sides() {
        let mut maze = MazeGrid::new(2);
        maze.update_wall(0, 0, Direction::East, true);

        assert!(maze.is_wall(1, 0, Direction::West));
        assert!(maze.is_known(1, 0, Direction::West));
        assert!(maze.is_known(0, 0, Direction::East));
    }

    #[test]
    fn canonicalization_is_symmetric_everywhere() {
        let mut maze = MazeGrid::new(3);
        maze.update_wall(0, 1, Direction::East, true);
        maze.update_wall(1, 1, Direction::North, true);
        maze.update_wall(2, 0, Direction::West, true);

        for x in 0..3 {
            for y in 0..3 {
                assert_eq!(
                    maze.is_wall(x, y, Direction::East),
                    maze.is_wall(x + 1, y, Direction::West),
                    "east/west mismatch at ({}, {})",
                    x,
                    y
                );
                assert_eq!(
                    maze.is_wall(x, y, Direction::North),
                    maze.is_wall(x, y + 1, Direction::South),
                    "north/south mismatch at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn field_boundary_is_always_walled_and_known() {
        let maze = MazeGrid::new(4);
        for y in 0..4 {
            assert!(maze.is_wall(0, y, Direction::West));
            assert!(maze.is_wall(3, y, Direction::East));
            assert!(maze.is_known(0, y, Direction::West));
            assert!(maze.is_known(3, y, Direction::East));
        }
        for x in 0..4 {
            assert!(maze.is_wall(x, 0, Direction::South));
            assert!(maze.is_wall(x, 3, Direction::North));
            assert!(maze.is_known(x, 0, Direction::South));
            assert!(maze.is_known(x, 3, Direction::North));
        }
    }

    #[test]
    fn single_cell_maze_is_fully_enclosed_by_the_boundary_rule() {
        let maze = MazeGrid::new(1);
        // Nothing has been stored, so each side can only be known through
        // the out-of-field rule.
        assert!(maze.knowns.iter().all(|&known| !known));
        for direction in Direction::ALL {
            assert!(maze.is_wall(0, 0, direction));
            assert!(maze.is_known(0, 0, direction));
        }
    }

    #[test]
    fn boundary_writes_are_ignored() {
        let mut maze = MazeGrid::new(2);
        maze.set_wall(1, 0, Direction::East, false);
        maze.set_known(1, 0, Direction::East, false);
        maze.update_wall(-1, 0, Direction::West, false);

        assert!(maze.is_wall(1, 0, Direction::East));
        assert!(maze.is_known(1, 0, Direction::East));
        assert!(maze.walls.iter().all(|&wall| !wall));
    }

    #[test]
    fn set_wall_without_known_keeps_wall_unobserved() {
        let mut maze = MazeGrid::new(3);
        maze.set_wall(1, 1, Direction::East, true);

        assert!(maze.is_wall(1, 1, Direction::East));
        assert!(!maze.is_known(1, 1, Direction::East));
    }

    #[test]
    fn cell_index_is_strict_about_bounds() {
        let maze = MazeGrid::new(3);
        assert_eq!(maze.cell_index(0, 0), Ok(0));
        assert_eq!(maze.cell_index(2, 1), Ok(5));
        assert_eq!(
            maze.cell_index(3, 0),
            Err(CoreError::InvalidCoordinate { x: 3, y: 0 })
        );
        assert_eq!(
            maze.cell_index(0, -1),
            Err(CoreError::InvalidCoordinate { x: 0, y: -1 })
        );
    }

    #[test]
    fn wall_bounds_are_asymmetric_per_axis() {
        let maze = MazeGrid::new(4);
        // East-axis walls stop one column short of the field edge.
        assert!(maze.contains_wall(WallKey {
            x: 2,
            y: 3,
            axis: WallAxis::East,
        }));
        assert!(!maze.contains_wall(WallKey {
            x: 3,
            y: 0,
            axis: WallAxis::East,
        }));
        // North-axis walls stop one row short.
        assert!(maze.contains_wall(WallKey {
            x: 3,
            y: 2,
            axis: WallAxis::North,
        }));
        assert!(!maze.contains_wall(WallKey {
            x: 0,
            y: 3,
            axis: WallAxis::North,
        }));
    }
}
