use glam::IVec3;

/// Neighbor directions used by the element rules (6 faces + 4 downward edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    // 6 face neighbors
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    East = 4,
    West = 5,
    // 4 downward edge neighbors
    DownNorth = 6,
    DownSouth = 7,
    DownEast = 8,
    DownWest = 9,
}

/// Horizontal compass directions, indexed by a random draw in `[0, 4)`.
pub const CARDINALS: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

/// Two-step slide paths for granular solids: sideways, then down.
/// Index `i` starts with `CARDINALS[i]`.
pub const SLIDE_PATHS: [[Direction; 2]; 4] = [
    [Direction::West, Direction::DownWest],
    [Direction::East, Direction::DownEast],
    [Direction::North, Direction::DownNorth],
    [Direction::South, Direction::DownSouth],
];

impl Direction {
    /// Offset vector for this direction. Y-up convention: Down = (0,-1,0).
    pub fn offset(self) -> IVec3 {
        match self {
            // Faces
            Direction::Down => IVec3::new(0, -1, 0),
            Direction::Up => IVec3::new(0, 1, 0),
            Direction::North => IVec3::new(0, 0, -1),
            Direction::South => IVec3::new(0, 0, 1),
            Direction::East => IVec3::new(1, 0, 0),
            Direction::West => IVec3::new(-1, 0, 0),
            // Edges (down)
            Direction::DownNorth => IVec3::new(0, -1, -1),
            Direction::DownSouth => IVec3::new(0, -1, 1),
            Direction::DownEast => IVec3::new(1, -1, 0),
            Direction::DownWest => IVec3::new(-1, -1, 0),
        }
    }
}
