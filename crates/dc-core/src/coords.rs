//! Grid addresses and continuous world-space vectors.
//!
//! `GridPoint` is the integer address of one dungeon cell.  `WorldVec` is a
//! single-precision continuous position used only for pose sampling — the
//! resolver itself works entirely on `GridPoint`s.  One cell is one world
//! unit on every axis, with a cell's base corner at its `GridPoint` cast to
//! `f32`.

use std::fmt;
use std::ops::{Add, Sub};

use crate::Direction;

// ── GridPoint ─────────────────────────────────────────────────────────────────

/// Integer 3-vector grid address of one dungeon cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPoint {
    pub const ORIGIN: GridPoint = GridPoint { x: 0, y: 0, z: 0 };

    #[inline]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The adjacent cell one step in `direction`.
    #[inline]
    pub fn neighbor(self, direction: Direction) -> GridPoint {
        let (dx, dy, dz) = direction.offset();
        GridPoint::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Per-axis absolute deltas to `other` — the continuity metric for
    /// checkpoint paths (each axis may change by at most one cell per step).
    #[inline]
    pub fn axis_deltas(self, other: GridPoint) -> (i32, i32, i32) {
        (
            (other.x - self.x).abs(),
            (other.y - self.y).abs(),
            (other.z - self.z).abs(),
        )
    }

    /// Chebyshev distance — zero iff the points are equal.
    #[inline]
    pub fn chebyshev(self, other: GridPoint) -> i32 {
        let (dx, dy, dz) = self.axis_deltas(other);
        dx.max(dy).max(dz)
    }

    /// Base corner of this cell in world space.
    #[inline]
    pub fn to_world(self) -> WorldVec {
        WorldVec::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Center of this cell in world space.
    #[inline]
    pub fn center(self) -> WorldVec {
        WorldVec::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }
}

impl Add for GridPoint {
    type Output = GridPoint;
    #[inline]
    fn add(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for GridPoint {
    type Output = GridPoint;
    #[inline]
    fn sub(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ── WorldVec ──────────────────────────────────────────────────────────────────

/// Continuous world-space position/offset stored as single-precision floats.
///
/// `f32` gives far more than sub-millimetre precision at dungeon scale while
/// keeping pose samples copy-cheap.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldVec {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldVec {
    pub const ZERO: WorldVec = WorldVec { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Linear interpolation from `self` to `other` at `t ∈ [0, 1]`.
    #[inline]
    pub fn lerp(self, other: WorldVec, t: f32) -> WorldVec {
        WorldVec::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: WorldVec) -> f32 {
        let d = other - self;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }

    /// Distance ignoring the world-vertical (`y`) axis — the planar gap used
    /// by jump/scale threshold checks.
    pub fn planar_distance(self, other: WorldVec) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }
}

impl Add for WorldVec {
    type Output = WorldVec;
    #[inline]
    fn add(self, rhs: WorldVec) -> WorldVec {
        WorldVec::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for WorldVec {
    type Output = WorldVec;
    #[inline]
    fn sub(self, rhs: WorldVec) -> WorldVec {
        WorldVec::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for WorldVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
