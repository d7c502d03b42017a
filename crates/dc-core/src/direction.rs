//! 6-way cube-face direction algebra.
//!
//! # Basis
//!
//! The grid uses a fixed right-handed basis:
//!
//! ```text
//! East  = +x    Up    = +y    North = +z
//! West  = -x    Down  = -y    South = -z
//! ```
//!
//! # Down references
//!
//! Wall- and ceiling-anchored entities have a "down" that is not world
//! `Down`: a spider on the north wall treats `North` as down.  Every
//! rotation helper therefore takes an explicit down reference instead of
//! assuming world gravity.  Yaw rotations are quarter-turns about the down
//! axis; pitch rotations are quarter-turns in the vertical plane spanned by
//! the direction and its down reference.

use std::fmt;

/// One of the three grid axes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One of the six cube-face directions.
///
/// "No direction" is expressed as `Option<Direction>` at call sites (anchor
/// directions, primary movement directions) so the algebra here stays total.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl Direction {
    /// All six directions, in face-index order.  The position of a direction
    /// in this array is its canonical face index (see [`face_index`](Self::face_index)).
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Canonical face index in `0..6`, usable for per-face array storage.
    #[inline]
    pub fn face_index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East  => 1,
            Direction::South => 2,
            Direction::West  => 3,
            Direction::Up    => 4,
            Direction::Down  => 5,
        }
    }

    /// Unit offset of this direction in the grid basis.
    #[inline]
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, 0, 1),
            Direction::East  => (1, 0, 0),
            Direction::South => (0, 0, -1),
            Direction::West  => (-1, 0, 0),
            Direction::Up    => (0, 1, 0),
            Direction::Down  => (0, -1, 0),
        }
    }

    /// The opposite face.
    #[inline]
    pub fn inverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East  => Direction::West,
            Direction::South => Direction::North,
            Direction::West  => Direction::East,
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
        }
    }

    /// The axis this direction lies on.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::East | Direction::West => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
        }
    }

    /// `true` when this direction is perpendicular to `down` — i.e. a
    /// cardinal within the plane an entity anchored on the `down` face
    /// moves in.
    #[inline]
    pub fn is_planar(self, down: Direction) -> bool {
        self.axis() != down.axis()
    }

    /// Quarter-turn to the left (counter-clockwise seen from above the
    /// `down` face).  With world `Down`: North → West → South → East.
    ///
    /// Directions parallel to `down` are unchanged.
    pub fn rotated_left(self, down: Direction) -> Direction {
        if !self.is_planar(down) {
            return self;
        }
        cross(down, self)
    }

    /// Quarter-turn to the right.  With world `Down`: North → East → South
    /// → West.  Directions parallel to `down` are unchanged.
    pub fn rotated_right(self, down: Direction) -> Direction {
        if !self.is_planar(down) {
            return self;
        }
        cross(self, down)
    }

    /// Quarter-turn pitching the look toward the `down` face: a floor-bound
    /// entity looking `North` ends up looking `Down`; one already looking
    /// `Down` ends up looking backward (`South` continues the rotation).
    ///
    /// Identity when `self` and `down` share an axis and no horizontal
    /// component exists to rotate through (callers re-derive look from
    /// travel direction in that case).
    pub fn pitched_down(self, down: Direction) -> Direction {
        if self == down || self == down.inverse() {
            return self;
        }
        down
    }

    /// Quarter-turn pitching the look away from the `down` face.
    pub fn pitched_up(self, down: Direction) -> Direction {
        if self == down || self == down.inverse() {
            return self;
        }
        down.inverse()
    }
}

/// Cross product of two face directions, mapped back onto a face direction.
///
/// Only called with perpendicular inputs, where the result is always another
/// unit face direction.
fn cross(a: Direction, b: Direction) -> Direction {
    let (ax, ay, az) = a.offset();
    let (bx, by, bz) = b.offset();
    let v = (ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx);
    match v {
        (0, 0, 1) => Direction::North,
        (1, 0, 0) => Direction::East,
        (0, 0, -1) => Direction::South,
        (-1, 0, 0) => Direction::West,
        (0, 1, 0) => Direction::Up,
        (0, -1, 0) => Direction::Down,
        // Parallel inputs produce the zero vector; keep the first operand so
        // the rotation helpers stay total.
        _ => a,
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::East  => "east",
            Direction::South => "south",
            Direction::West  => "west",
            Direction::Up    => "up",
            Direction::Down  => "down",
        };
        f.write_str(s)
    }
}
