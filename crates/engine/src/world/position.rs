use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Absolute block position in the world.
///
/// `Display` and `FromStr` implement the sparse-map key codec: the key for
/// (x, y, z) is `"x,y,z"` -- decimal integers, comma-separated, no padding
/// or whitespace. Encoding and parsing are exact inverses over all of i64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl BlockPos {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// The (x, z) column this block sits in.
    pub const fn column(&self) -> ColumnPos {
        ColumnPos { x: self.x, z: self.z }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Failure to parse a sparse-map coordinate key.
///
/// Internally generated keys are well-formed by construction; this only
/// fires on malformed keys arriving from an external map file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseKeyError {
    #[error("expected 3 comma-separated coordinates, got {0}")]
    FieldCount(usize),
    #[error("invalid coordinate integer: {0}")]
    Int(#[from] std::num::ParseIntError),
}

impl FromStr for BlockPos {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(',');
        let mut next = || fields.next().map(str::parse::<i64>);
        let (Some(x), Some(y), Some(z)) = (next(), next(), next()) else {
            return Err(ParseKeyError::FieldCount(s.split(',').count()));
        };
        if fields.next().is_some() {
            return Err(ParseKeyError::FieldCount(s.split(',').count()));
        }
        Ok(BlockPos::new(x?, y?, z?))
    }
}

/// An (x, z) column position -- a block position with the vertical axis
/// dropped. Platforms live at y = 0, so detection works entirely in
/// column space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnPos {
    pub x: i64,
    pub z: i64,
}

impl ColumnPos {
    pub const fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }

    /// The block position of this column at a given height.
    pub const fn at(&self, y: i64) -> BlockPos {
        BlockPos::new(self.x, y, self.z)
    }

    /// The four axis-aligned neighbors (4-connectivity).
    pub const fn neighbors(&self) -> [ColumnPos; 4] {
        [
            Self::new(self.x + 1, self.z),
            Self::new(self.x - 1, self.z),
            Self::new(self.x, self.z + 1),
            Self::new(self.x, self.z - 1),
        ]
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
