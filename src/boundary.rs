use std::{
    collections::{BTreeSet, HashMap, HashSet},
    fmt::Display,
};

use crate::geom::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Boundary,
    Ground,
}

impl Tile {
    pub fn to_char(&self) -> char {
        match self {
            Tile::Boundary => '#',
            Tile::Ground => '.',
        }
    }
}

/// Boundary points of one polygon, with no storage for the ground around them.
#[derive(Debug, Default)]
pub struct SparseBoundarySet {
    points: HashSet<Position>,
    rows: HashMap<i64, BTreeSet<i64>>,
    cols: HashMap<i64, BTreeSet<i64>>,
    bounds: Option<(Position, Position)>,
}

impl SparseBoundarySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path(path: &[Position]) -> Self {
        let mut set = Self::new();
        for pos in path {
            set.set(*pos);
        }

        set
    }

    pub fn set(&mut self, pos: Position) {
        if !self.points.insert(pos) {
            return;
        }

        self.rows.entry(pos.y).or_default().insert(pos.x);
        self.cols.entry(pos.x).or_default().insert(pos.y);
        let (min_pos, max_pos) = self.bounds.get_or_insert((pos, pos));
        min_pos.x = min_pos.x.min(pos.x);
        min_pos.y = min_pos.y.min(pos.y);
        max_pos.x = max_pos.x.max(pos.x);
        max_pos.y = max_pos.y.max(pos.y);
    }

    pub fn item_at(&self, pos: &Position) -> Tile {
        if self.points.contains(pos) {
            Tile::Boundary
        } else {
            Tile::Ground
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Top left corner of the bounding rectangle.
    pub fn min_pos(&self) -> Option<Position> {
        self.bounds.map(|(min_pos, _)| min_pos)
    }

    /// Bottom right corner of the bounding rectangle.
    pub fn max_pos(&self) -> Option<Position> {
        self.bounds.map(|(_, max_pos)| max_pos)
    }

    pub fn width(&self) -> u64 {
        self.bounds
            .map(|(min_pos, max_pos)| max_pos.x.abs_diff(min_pos.x) + 1)
            .unwrap_or(0)
    }

    pub fn height(&self) -> u64 {
        self.bounds
            .map(|(min_pos, max_pos)| max_pos.y.abs_diff(min_pos.y) + 1)
            .unwrap_or(0)
    }

    pub fn is_inside(&self, pos: &Position) -> bool {
        self.bounds.is_some_and(|(min_pos, max_pos)| {
            (min_pos.x..=max_pos.x).contains(&pos.x) && (min_pos.y..=max_pos.y).contains(&pos.y)
        })
    }

    /// Closest boundary point strictly along the ray from `from` going `dir`.
    pub fn nearest_along_direction(&self, from: &Position, dir: Direction) -> Option<Position> {
        match dir {
            Direction::North => self
                .cols
                .get(&from.x)
                .and_then(|ys| ys.range(..from.y).next_back())
                .map(|y| Position::new(from.x, *y)),
            Direction::South => self
                .cols
                .get(&from.x)
                .and_then(|ys| ys.range((from.y + 1)..).next())
                .map(|y| Position::new(from.x, *y)),
            Direction::West => self
                .rows
                .get(&from.y)
                .and_then(|xs| xs.range(..from.x).next_back())
                .map(|x| Position::new(*x, from.y)),
            Direction::East => self
                .rows
                .get(&from.y)
                .and_then(|xs| xs.range((from.x + 1)..).next())
                .map(|x| Position::new(*x, from.y)),
        }
    }

    #[cfg(test)]
    fn nearest_along_direction_by_scan(&self, from: &Position, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.delta();
        self.points
            .iter()
            .filter(|pos| (pos.x - from.x).signum() == dx && (pos.y - from.y).signum() == dy)
            .min_by_key(|pos| from.manhattan_distance(pos))
            .copied()
    }
}

impl Display for SparseBoundarySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some((min_pos, max_pos)) = self.bounds else {
            return Ok(());
        };

        for y in min_pos.y..=max_pos.y {
            let row = (min_pos.x..=max_pos.x)
                .map(|x| self.item_at(&Position::new(x, y)).to_char())
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hook() -> SparseBoundarySet {
        // #####
        // #...#
        // #..##
        // #..#.
        // ####.
        let rows = ["#####", "#...#", "#..##", "#..#.", "####."];
        let mut set = SparseBoundarySet::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    set.set(Position::new(x as i64, y as i64));
                }
            }
        }

        set
    }

    #[test]
    fn test_bounds_and_display() {
        let set = hook();
        assert_eq!(set.len(), 16);
        assert_eq!((set.width(), set.height()), (5, 5));
        assert_eq!(set.min_pos(), Some(Position::new(0, 0)));
        assert_eq!(set.max_pos(), Some(Position::new(4, 4)));
        assert_eq!(set.item_at(&Position::new(3, 2)), Tile::Boundary);
        assert_eq!(set.item_at(&Position::new(4, 4)), Tile::Ground);
        assert!(set.is_inside(&Position::new(4, 4)));
        assert!(!set.is_inside(&Position::new(5, 0)));
        assert_eq!(
            set.to_string(),
            "#####\n#...#\n#..##\n#..#.\n####.\n"
        );
    }

    #[test]
    fn test_negative_bounds() {
        let mut set = SparseBoundarySet::new();
        set.set(Position::new(-3, 2));
        set.set(Position::new(1, -4));
        assert_eq!(set.min_pos(), Some(Position::new(-3, -4)));
        assert_eq!(set.max_pos(), Some(Position::new(1, 2)));
        assert_eq!((set.width(), set.height()), (5, 7));
    }

    #[test]
    fn test_nearest_matches_scan() {
        let set = hook();
        for y in -1..=5 {
            for x in -1..=5 {
                let from = Position::new(x, y);
                for dir in Direction::all_dirs() {
                    assert_eq!(
                        set.nearest_along_direction(&from, *dir),
                        set.nearest_along_direction_by_scan(&from, *dir),
                        "from {} going {}",
                        from,
                        dir
                    );
                }
            }
        }

        assert_eq!(
            set.nearest_along_direction(&Position::new(1, 0), Direction::South),
            Some(Position::new(1, 4))
        );
        assert_eq!(
            set.nearest_along_direction(&Position::new(4, 2), Direction::South),
            None
        );
    }
}
