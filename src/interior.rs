use std::fmt::Display;

use crate::{
    boundary::{SparseBoundarySet, Tile},
    geom::{Direction, Position},
    range::{PositionRange, PositionRanges, Region},
    Error,
};

/// Shape of the boundary at one vertex of the walk, named after the pipe it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    StraightNS,
    StraightEW,
    CornerBottomLeft,
    CornerBottomRight,
    CornerTopRight,
    CornerTopLeft,
}

impl Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl EdgeKind {
    pub fn all_kinds() -> &'static [EdgeKind] {
        static ALL_KINDS: [EdgeKind; 6] = [
            EdgeKind::StraightNS,
            EdgeKind::StraightEW,
            EdgeKind::CornerBottomLeft,
            EdgeKind::CornerBottomRight,
            EdgeKind::CornerTopRight,
            EdgeKind::CornerTopLeft,
        ];

        &ALL_KINDS
    }

    /// Kind of the vertex entered going `incoming` and left going `outgoing`,
    /// `None` when the walk turns back on itself.
    pub fn classify(incoming: Direction, outgoing: Direction) -> Option<Self> {
        use Direction::*;

        match (incoming, outgoing) {
            (South, East) | (West, North) => Some(EdgeKind::CornerBottomLeft),
            (South, West) | (East, North) => Some(EdgeKind::CornerBottomRight),
            (North, West) | (East, South) => Some(EdgeKind::CornerTopRight),
            (North, East) | (West, South) => Some(EdgeKind::CornerTopLeft),
            (North, North) | (South, South) => Some(EdgeKind::StraightNS),
            (East, East) | (West, West) => Some(EdgeKind::StraightEW),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            EdgeKind::StraightNS => '|',
            EdgeKind::StraightEW => '-',
            EdgeKind::CornerBottomLeft => 'L',
            EdgeKind::CornerBottomRight => 'J',
            EdgeKind::CornerTopRight => '7',
            EdgeKind::CornerTopLeft => 'F',
        }
    }

    /// Directions of the not connected neighbors, split into side A and side B.
    pub fn side_dirs(&self) -> (&'static [Direction], &'static [Direction]) {
        use Direction::*;

        match self {
            EdgeKind::StraightNS => (&[West], &[East]),
            EdgeKind::StraightEW => (&[South], &[North]),
            EdgeKind::CornerBottomLeft => (&[West, South], &[]),
            EdgeKind::CornerBottomRight => (&[], &[South, East]),
            EdgeKind::CornerTopRight => (&[], &[North, East]),
            EdgeKind::CornerTopLeft => (&[North, West], &[]),
        }
    }
}

/// Whether side labels swap when the walk goes from a `prev` vertex to a `cur` one.
pub fn should_flip(prev: EdgeKind, cur: EdgeKind) -> bool {
    use EdgeKind::*;

    matches!(
        (prev, cur),
        (CornerBottomLeft, CornerBottomRight)
            | (CornerBottomRight, CornerBottomLeft | StraightEW)
            | (CornerTopRight, CornerTopLeft)
            | (CornerTopLeft, CornerTopRight | StraightEW)
            | (StraightEW, CornerTopLeft | CornerBottomRight)
    )
}

/// How the physical side directions of a vertex map onto sides A and B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideOrientation {
    Straight,
    Flipped,
}

impl SideOrientation {
    pub fn next(self, prev: EdgeKind, cur: EdgeKind) -> Self {
        match (self, should_flip(prev, cur)) {
            (orientation, false) => orientation,
            (SideOrientation::Straight, true) => SideOrientation::Flipped,
            (SideOrientation::Flipped, true) => SideOrientation::Straight,
        }
    }

    pub fn sides(self, kind: EdgeKind) -> (&'static [Direction], &'static [Direction]) {
        let (a_dirs, b_dirs) = kind.side_dirs();
        match self {
            SideOrientation::Straight => (a_dirs, b_dirs),
            SideOrientation::Flipped => (b_dirs, a_dirs),
        }
    }
}

/// Kind of every vertex in a closed boundary walk.
pub fn classify_path(path: &[Position]) -> Result<Vec<EdgeKind>, Error> {
    if path.len() < 3 {
        return Err(Error::BoundaryTooShort(path.len()));
    }

    let steps = (0..path.len())
        .map(|ind| {
            let next = &path[(ind + 1) % path.len()];
            path[ind]
                .step_to(next)
                .ok_or(Error::DisjointBoundary((ind + 1) % path.len()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    (0..path.len())
        .map(|ind| {
            let incoming = steps[(ind + path.len() - 1) % path.len()];
            EdgeKind::classify(incoming, steps[ind]).ok_or(Error::ReversedBoundary(ind))
        })
        .collect()
}

/// Lattice points strictly inside the polygon walked by `path`.
///
/// `path` visits every boundary point once with unit steps and is closed
/// implicitly, the last point being adjacent to the first one.
pub fn interior_points(path: &[Position]) -> Result<Region, Error> {
    let kinds = classify_path(path)?;
    let boundary = SparseBoundarySet::from_path(path);

    let mut side_a = PositionRanges::new();
    let mut side_b = PositionRanges::new();
    let mut orientation = SideOrientation::Straight;
    for (ind, pos) in path.iter().enumerate() {
        if ind > 0 {
            orientation = orientation.next(kinds[ind - 1], kinds[ind]);
        }

        let (a_dirs, b_dirs) = orientation.sides(kinds[ind]);
        for (side, dirs) in [(&mut side_a, a_dirs), (&mut side_b, b_dirs)] {
            for dir in dirs {
                if let Some(range) = ground_run(&boundary, pos, *dir) {
                    side.add(range);
                }
            }
        }
    }

    select_interior(&boundary, side_a, side_b)
}

/// Count of lattice points strictly inside the polygon walked by `path`.
pub fn interior_points_n(path: &[Position]) -> Result<u64, Error> {
    interior_points(path).map(|region| region.points_n())
}

// Ground positions between `pos` and the next boundary point (or the edge of
// the bounding rectangle) going `dir`.
fn ground_run(boundary: &SparseBoundarySet, pos: &Position, dir: Direction) -> Option<PositionRange> {
    let next = pos.neighbor(dir);
    if !boundary.is_inside(&next) || boundary.item_at(&next) == Tile::Boundary {
        return None;
    }

    let len = match boundary.nearest_along_direction(pos, dir) {
        Some(hit) => pos.manhattan_distance(&hit) - 1,
        None => {
            let (min_pos, max_pos) = (boundary.min_pos()?, boundary.max_pos()?);
            match dir {
                Direction::North => pos.y.abs_diff(min_pos.y),
                Direction::East => max_pos.x.abs_diff(pos.x),
                Direction::South => max_pos.y.abs_diff(pos.y),
                Direction::West => pos.x.abs_diff(min_pos.x),
            }
        }
    };

    Some(PositionRange::new(next, dir, len))
}

fn select_interior(
    boundary: &SparseBoundarySet,
    side_a: PositionRanges,
    side_b: PositionRanges,
) -> Result<Region, Error> {
    let (Some(min_pos), Some(max_pos)) = (boundary.min_pos(), boundary.max_pos()) else {
        return Ok(side_b);
    };

    let borders = [
        PositionRange::new(min_pos, Direction::South, boundary.height()),
        PositionRange::new(
            Position::new(max_pos.x, min_pos.y),
            Direction::South,
            boundary.height(),
        ),
        PositionRange::new(min_pos, Direction::East, boundary.width()),
        PositionRange::new(
            Position::new(min_pos.x, max_pos.y),
            Direction::East,
            boundary.width(),
        ),
    ];
    let touches_border = |side: &PositionRanges| {
        borders
            .iter()
            .any(|border| side.area_of_intersection(border) > 0)
    };

    // Outside points inside the bounding rectangle always reach one of its
    // edges, inside points never do.
    match (touches_border(&side_a), touches_border(&side_b)) {
        (true, true) => Err(Error::AmbiguousInterior),
        (true, false) => Ok(side_b),
        (false, true) => Ok(side_a),
        (false, false) => match (side_a.is_empty(), side_b.is_empty()) {
            (true, _) => Ok(side_b),
            (false, true) => Ok(side_a),
            (false, false) => Err(Error::AmbiguousInterior),
        },
    }
}

/// Twice the area enclosed by `path` is the sum of cross products of its consecutive points.
pub fn shoelace_area(path: &[Position]) -> u64 {
    let double_area = (0..path.len())
        .map(|ind| {
            let (cur, next) = (&path[ind], &path[(ind + 1) % path.len()]);
            cur.x * next.y - next.x * cur.y
        })
        .sum::<i64>();

    double_area.unsigned_abs() / 2
}

/// Interior count from Pick's theorem, `A = I + B / 2 - 1`, for a unit-step walk.
pub fn interior_points_n_by_pick(path: &[Position]) -> u64 {
    (2 * shoelace_area(path) + 2 - path.len() as u64) / 2
}
