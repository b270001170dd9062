//! Compass directions indexing tile edges and grid neighbors

/// One of the four grid directions, in the fixed cyclic edge order
///
/// The discriminant is the edge index of a tile's edge array, so rotating a
/// tile by one quarter turn shifts the array right by one position.
#[derive(Debug, Hash, PartialEq, Eq, Copy, Clone)]
pub enum Direction {
    /// Toward the next column (east edge, index 0)
    East = 0,
    /// Toward the next row (south edge, index 1)
    South = 1,
    /// Toward the previous column (west edge, index 2)
    West = 2,
    /// Toward the previous row (north edge, index 3)
    North = 3,
}

impl Direction {
    /// All directions in edge-index order
    pub const ALL: [Self; 4] = [Self::East, Self::South, Self::West, Self::North];

    /// The direction facing back at this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::North => Self::South,
        }
    }

    /// Edge-array index of this direction
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row and column deltas of the neighbor in this direction
    pub const fn offset(self) -> [i64; 2] {
        match self {
            Self::East => [0, 1],
            Self::South => [1, 0],
            Self::West => [0, -1],
            Self::North => [-1, 0],
        }
    }
}
