use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        };

        write!(f, "{}", name)
    }
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }

    /// Unit step of this direction as (dx, dy), y grows towards South.
    pub fn delta(&self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub fn from_delta(dx: i64, dy: i64) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (1, 0) => Some(Direction::East),
            (0, 1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn neighbor(&self, dir: Direction) -> Self {
        self.offset(dir, 1)
    }

    pub fn offset(&self, dir: Direction, n: i64) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx * n, self.y + dy * n)
    }

    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan_distance(&self, other: &Position) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Direction of the unit step from `self` to `other`, if they're adjacent.
    pub fn step_to(&self, other: &Position) -> Option<Direction> {
        Direction::from_delta(other.x - self.x, other.y - self.y)
    }
}

#[test]
fn test_reverse_cancels_delta() {
    for dir in Direction::all_dirs() {
        let (dx, dy) = dir.delta();
        let (rx, ry) = dir.reverse().delta();
        assert_eq!((dx + rx, dy + ry), (0, 0));
        assert_eq!(dir.reverse().reverse(), *dir);
        assert_eq!(Direction::from_delta(dx, dy), Some(*dir));
    }
}

#[test]
fn test_manhattan_distance() {
    let pos = Position::new(-2, 3);
    assert_eq!(pos.manhattan_distance(&Position::new(1, -1)), 7);
    assert_eq!(pos.manhattan_distance(&pos), 0);
    assert_eq!(pos.offset(Direction::West, 4), Position::new(-6, 3));
    assert_eq!(pos.step_to(&pos.neighbor(Direction::North)), Some(Direction::North));
    assert_eq!(pos.step_to(&Position::new(0, 3)), None);
}
