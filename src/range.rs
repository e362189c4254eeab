use std::{collections::HashSet, fmt::Display};

use crate::geom::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn of(dir: Direction) -> Self {
        if dir.is_horizontal() {
            Axis::X
        } else {
            Axis::Y
        }
    }

    pub fn cross(&self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Contiguous run of integers `[start, start + len)` on one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerRange {
    start: i64,
    len: i64,
    axis: Axis,
}

impl IntegerRange {
    pub fn new(start: i64, len: u64, axis: Axis) -> Self {
        Self {
            start,
            len: i64::try_from(len).expect("range length should fit in i64"),
            axis,
        }
    }

    pub fn empty(axis: Axis) -> Self {
        Self::new(0, 0, axis)
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last coordinate inside this range, only meaningful when not empty.
    pub fn last(&self) -> i64 {
        self.start + self.len - 1
    }

    pub fn len(&self) -> u64 {
        self.len as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn contains(&self, x: i64) -> bool {
        self.start <= x && x <= self.last()
    }

    pub fn add(&mut self, x: i64) -> bool {
        if self.is_empty() {
            self.start = x;
            self.len = 1;
        } else if x == self.start - 1 {
            self.start = x;
            self.len += 1;
        } else if x == self.start + self.len {
            self.len += 1;
        } else if !self.contains(x) {
            return false;
        }

        true
    }

    pub fn area_of_intersection(&self, other: &IntegerRange) -> u64 {
        if self.axis != other.axis || self.is_empty() || other.is_empty() {
            return 0;
        }

        let overlap = self.last().min(other.last()) - self.start.max(other.start) + 1;
        u64::try_from(overlap).unwrap_or(0)
    }

    /// Merge `other` into this range if their union is contiguous.
    pub fn absorb(&mut self, other: &IntegerRange) -> bool {
        if self.axis != other.axis {
            return false;
        }

        if other.is_empty() {
            return true;
        }

        if self.is_empty() {
            *self = other.clone();
            return true;
        }

        if other.start > self.last() + 1 || other.last() < self.start - 1 {
            return false;
        }

        let start = self.start.min(other.start);
        let last = self.last().max(other.last());
        self.start = start;
        self.len = last - start + 1;

        true
    }
}

impl Display for IntegerRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "{}: empty", self.axis)
        } else {
            write!(f, "{}: {}..={}", self.axis, self.start, self.last())
        }
    }
}

/// Straight horizontal (axis X) or vertical (axis Y) run of positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRange {
    underlying: IntegerRange,
    fixed: i64,
}

impl PositionRange {
    /// Range of `len` positions from `start` going in `dir`, inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn new(start: Position, dir: Direction, len: u64) -> Self {
        assert!(len > 0, "position range should have at least one position");

        let shift = i64::try_from(len).expect("range length should fit in i64") - 1;
        let (fixed, range_start) = match dir {
            Direction::North => (start.x, start.y - shift),
            Direction::South => (start.x, start.y),
            Direction::West => (start.y, start.x - shift),
            Direction::East => (start.y, start.x),
        };

        Self {
            underlying: IntegerRange::new(range_start, len, Axis::of(dir)),
            fixed,
        }
    }

    pub fn single(pos: Position, axis: Axis) -> Self {
        let (fixed, varying) = Self::split(&pos, axis);
        Self {
            underlying: IntegerRange::new(varying, 1, axis),
            fixed,
        }
    }

    pub fn axis(&self) -> Axis {
        self.underlying.axis()
    }

    /// The coordinate shared by all positions of this range.
    pub fn fixed(&self) -> i64 {
        self.fixed
    }

    pub fn len(&self) -> u64 {
        self.underlying.len()
    }

    pub fn is_empty(&self) -> bool {
        self.underlying.is_empty()
    }

    pub fn start_pos(&self) -> Position {
        self.pos_at(self.underlying.start())
    }

    pub fn width(&self) -> u64 {
        match self.axis() {
            Axis::X => self.len(),
            Axis::Y => 1,
        }
    }

    pub fn height(&self) -> u64 {
        match self.axis() {
            Axis::X => 1,
            Axis::Y => self.len(),
        }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        let (fixed, varying) = Self::split(pos, self.axis());
        fixed == self.fixed && self.underlying.contains(varying)
    }

    pub fn add(&mut self, pos: &Position) -> bool {
        let (fixed, varying) = Self::split(pos, self.axis());
        fixed == self.fixed && self.underlying.add(varying)
    }

    /// Merge `other` into this range if the union is still one straight run.
    ///
    /// A single position lying on the line of a cross-axis range is taken as
    /// a member of that line, so the merged range always keeps the axis of
    /// the longer one.
    pub fn absorb(&mut self, other: &PositionRange) -> bool {
        if self.axis() == other.axis() {
            return self.fixed == other.fixed && self.underlying.absorb(&other.underlying);
        }

        if self.len() == 1 {
            let mut turned = PositionRange::single(self.start_pos(), other.axis());
            if turned.absorb(other) {
                *self = turned;
                return true;
            }
        } else if other.len() == 1 {
            return self.absorb(&PositionRange::single(other.start_pos(), self.axis()));
        }

        false
    }

    pub fn area_of_intersection(&self, other: &PositionRange) -> u64 {
        if self.axis() == other.axis() {
            if self.fixed == other.fixed {
                self.underlying.area_of_intersection(&other.underlying)
            } else {
                0
            }
        } else {
            let crossing = match self.axis() {
                Axis::X => Position::new(other.fixed, self.fixed),
                Axis::Y => Position::new(self.fixed, other.fixed),
            };

            if self.contains(&crossing) && other.contains(&crossing) {
                1
            } else {
                0
            }
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (self.underlying.start()..=self.underlying.last()).map(|v| self.pos_at(v))
    }

    fn pos_at(&self, varying: i64) -> Position {
        match self.axis() {
            Axis::X => Position::new(varying, self.fixed),
            Axis::Y => Position::new(self.fixed, varying),
        }
    }

    // (fixed, varying) coordinates of `pos` for a range on `axis`.
    fn split(pos: &Position, axis: Axis) -> (i64, i64) {
        match axis {
            Axis::X => (pos.y, pos.x),
            Axis::Y => (pos.x, pos.y),
        }
    }
}

impl Display for PositionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}={}",
            self.underlying,
            self.axis().cross(),
            self.fixed
        )
    }
}

/// Sparse region made of straight runs of positions.
#[derive(Debug, Clone, Default)]
pub struct PositionRanges {
    ranges: Vec<PositionRange>,
}

/// Interior positions of a boundary walk.
pub type Region = PositionRanges;

impl PositionRanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, range: PositionRange) {
        for stored in self.ranges.iter_mut() {
            if stored.absorb(&range) {
                return;
            }
        }

        self.ranges.push(range);
    }

    pub fn add_all(&mut self, other: &PositionRanges) {
        for range in &other.ranges {
            self.add(range.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PositionRange> {
        self.ranges.iter()
    }

    pub fn area_of_intersection(&self, other: &PositionRange) -> u64 {
        self.ranges
            .iter()
            .map(|r| r.area_of_intersection(other))
            .sum()
    }

    /// Count of distinct positions, by inclusion-exclusion over pairs.
    ///
    /// Exact as long as no position is covered by more than two stored
    /// ranges, which holds when every range is a maximal run between
    /// boundary points.
    pub fn points_n(&self) -> u64 {
        let total = self
            .ranges
            .iter()
            .map(|r| r.width() * r.height())
            .sum::<u64>();
        let shared = self
            .ranges
            .iter()
            .enumerate()
            .map(|(ind, r)| {
                self.ranges[(ind + 1)..]
                    .iter()
                    .map(|other| r.area_of_intersection(other))
                    .sum::<u64>()
            })
            .sum::<u64>();

        total - shared
    }

    /// Every distinct position in this region, in no particular order.
    pub fn enumerate_all_points_slow(&self) -> Vec<Position> {
        self.ranges
            .iter()
            .flat_map(|r| r.positions())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Display for PositionRanges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for range in &self.ranges {
            writeln!(f, "{}", range)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_range_add() {
        let mut range = IntegerRange::empty(Axis::X);
        assert!(range.add(5));
        assert_eq!((range.start(), range.len()), (5, 1));
        assert!(range.add(4));
        assert!(range.add(6));
        assert!(range.add(5));
        assert_eq!((range.start(), range.last()), (4, 6));
        assert!(!range.add(8));
        assert!(!range.add(2));
        assert_eq!((range.start(), range.last()), (4, 6));
    }

    #[test]
    fn test_integer_range_intersection() {
        let range = IntegerRange::new(3, 5, Axis::Y);
        assert_eq!(range.area_of_intersection(&IntegerRange::new(0, 5, Axis::Y)), 2);
        assert_eq!(range.area_of_intersection(&IntegerRange::new(6, 5, Axis::Y)), 2);
        assert_eq!(range.area_of_intersection(&IntegerRange::new(4, 2, Axis::Y)), 2);
        assert_eq!(range.area_of_intersection(&IntegerRange::new(-1, 20, Axis::Y)), 5);
        assert_eq!(range.area_of_intersection(&IntegerRange::new(8, 2, Axis::Y)), 0);
        assert_eq!(range.area_of_intersection(&IntegerRange::new(0, 3, Axis::Y)), 0);
        assert_eq!(range.area_of_intersection(&IntegerRange::new(3, 5, Axis::X)), 0);
    }

    #[test]
    fn test_integer_range_absorb() {
        let mut range = IntegerRange::new(3, 3, Axis::X);
        assert!(range.absorb(&IntegerRange::new(6, 2, Axis::X)));
        assert_eq!((range.start(), range.last()), (3, 7));
        assert!(range.absorb(&IntegerRange::new(1, 3, Axis::X)));
        assert_eq!((range.start(), range.last()), (1, 7));
        assert!(range.absorb(&IntegerRange::new(6, 4, Axis::X)));
        assert_eq!((range.start(), range.last()), (1, 9));
        assert!(range.absorb(&IntegerRange::new(2, 2, Axis::X)));
        assert!(range.absorb(&IntegerRange::new(-5, 20, Axis::X)));
        assert_eq!((range.start(), range.last()), (-5, 14));

        assert!(!range.absorb(&IntegerRange::new(16, 1, Axis::X)));
        assert!(!range.absorb(&IntegerRange::new(0, 3, Axis::Y)));
        assert_eq!((range.start(), range.last()), (-5, 14));
    }

    #[test]
    fn test_position_range_normalized() {
        let north = PositionRange::new(Position::new(2, 5), Direction::North, 3);
        let south = PositionRange::new(Position::new(2, 3), Direction::South, 3);
        assert_eq!(north, south);
        assert_eq!(north.start_pos(), Position::new(2, 3));

        let west = PositionRange::new(Position::new(5, 1), Direction::West, 4);
        assert_eq!(west.start_pos(), Position::new(2, 1));
        assert_eq!((west.width(), west.height()), (4, 1));
        assert!(west.contains(&Position::new(5, 1)));
        assert!(!west.contains(&Position::new(6, 1)));
        assert!(!west.contains(&Position::new(3, 2)));
    }

    #[test]
    #[should_panic]
    fn test_position_range_zero_len() {
        PositionRange::new(Position::new(0, 0), Direction::East, 0);
    }

    #[test]
    fn test_position_range_add() {
        let mut range = PositionRange::new(Position::new(1, 4), Direction::East, 2);
        assert!(range.add(&Position::new(3, 4)));
        assert!(!range.add(&Position::new(4, 5)));
        assert_eq!(range.len(), 3);
    }

    #[test]
    fn test_single_point_absorbs_into_cross_line() {
        let column = PositionRange::new(Position::new(3, 0), Direction::South, 4);
        let mut point = PositionRange::single(Position::new(3, 2), Axis::X);
        assert!(point.absorb(&column));
        assert_eq!(point, column);

        let mut column_copy = column.clone();
        assert!(column_copy.absorb(&PositionRange::single(Position::new(3, 4), Axis::X)));
        assert_eq!(column_copy.len(), 5);
        assert_eq!(column_copy.axis(), Axis::Y);

        let mut far_point = PositionRange::single(Position::new(3, 9), Axis::X);
        assert!(!far_point.absorb(&column));
        assert_eq!(far_point.axis(), Axis::X);

        let mut row = PositionRange::new(Position::new(0, 1), Direction::East, 3);
        assert!(!row.absorb(&column));
    }

    #[test]
    fn test_crossing_intersection() {
        let row = PositionRange::new(Position::new(0, 2), Direction::East, 5);
        let column = PositionRange::new(Position::new(3, 0), Direction::South, 4);
        let short_column = PositionRange::new(Position::new(3, 0), Direction::South, 2);
        assert_eq!(row.area_of_intersection(&column), 1);
        assert_eq!(column.area_of_intersection(&row), 1);
        assert_eq!(row.area_of_intersection(&short_column), 0);

        let point = PositionRange::single(Position::new(3, 7), Axis::X);
        assert_eq!(point.area_of_intersection(&column), 0);
    }

    #[test]
    fn test_ranges_points_n() {
        let mut ranges = PositionRanges::new();
        ranges.add(PositionRange::new(Position::new(0, 1), Direction::East, 3));
        ranges.add(PositionRange::new(Position::new(0, 2), Direction::East, 3));
        ranges.add(PositionRange::new(Position::new(1, 0), Direction::South, 4));
        ranges.add(PositionRange::new(Position::new(2, 1), Direction::West, 3));
        ranges.add(PositionRange::single(Position::new(1, 3), Axis::X));
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges.points_n(), 8);
        assert_eq!(ranges.enumerate_all_points_slow().len(), 8);

        let border = PositionRange::new(Position::new(0, 0), Direction::East, 3);
        assert_eq!(ranges.area_of_intersection(&border), 1);

        let mut merged = PositionRanges::new();
        merged.add(PositionRange::new(Position::new(0, 1), Direction::East, 3));
        merged.add_all(&ranges);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.points_n(), 8);
        assert_eq!(merged.iter().filter(|r| r.axis() == Axis::Y).count(), 1);
    }
}
