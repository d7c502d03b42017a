//! Checkpoints and poses: the spatial state snapshots movement paths are
//! made of.
//!
//! A [`Checkpoint`] is immutable — interpreting a movement produces a list
//! of them, and nothing mutates one afterwards.  A [`Pose`] is the caller's
//! current spatial state handed into the interpreter; the framework never
//! stores entity state itself.

use dc_core::{Direction, GridPoint};

/// An immutable snapshot of one spatial state along a movement path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pub coords: GridPoint,

    /// Face the entity is attached to, `None` while airborne.
    pub anchor: Option<Direction>,

    pub look: Direction,

    /// When set, the entity sits at its anchor's edge toward this direction
    /// instead of at the surface rest position.  Bounces and corner rounds
    /// pass through edge checkpoints.
    pub edge: Option<Direction>,
}

impl Checkpoint {
    /// A checkpoint at the rest position of `anchor` (or the cell center
    /// when unanchored).
    pub fn rest(coords: GridPoint, anchor: Option<Direction>, look: Direction) -> Self {
        Self { coords, anchor, look, edge: None }
    }

    /// This checkpoint shifted to the anchor edge toward `direction`.
    pub fn at_edge(self, direction: Direction) -> Self {
        Self { edge: Some(direction), ..self }
    }
}

/// The current spatial state of an entity, supplied per request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pose {
    pub coords: GridPoint,

    /// Face the entity is attached to, `None` while airborne.
    pub anchor: Option<Direction>,

    pub look: Direction,

    /// Set while the entity is mid-fall; the first step of the next
    /// interpretation starts ungrounded even over an anchor.
    pub falling: bool,
}

impl Pose {
    /// The entity's down reference: its anchor face, or world down while
    /// airborne.
    #[inline]
    pub fn down(&self) -> Direction {
        self.anchor.unwrap_or(Direction::Down)
    }

    /// This pose as the opening checkpoint of a path.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::rest(self.coords, self.anchor, self.look)
    }
}
