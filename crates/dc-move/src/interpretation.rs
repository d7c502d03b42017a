//! Movement requests and their interpreted checkpoint paths.
//!
//! A [`Movement`] is what the caller asks for, expressed relative to the
//! entity's look and down reference.  A [`MovementInterpretation`] is the
//! interpreter's answer: an ordered list of [`CheckpointStep`]s from the
//! pre-move state to the authoritative resting pose, plus a path-level
//! [`PathOutcome`].
//!
//! # Path invariants
//!
//! - `steps[0]` equals the pre-move checkpoint;
//! - consecutive steps differ by at most one cell per axis (corner rounds
//!   and elevation edges span two axes by one cell each);
//! - the last step is the authoritative resting pose.

use dc_core::Direction;

use crate::Checkpoint;

/// How an entity relates to its support while traversing one step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepTransition {
    /// Supported by an anchor throughout.
    Grounded,
    /// No support; falling or flying.
    Ungrounded,
    /// A deliberate step off support.  Assigned retroactively when the step
    /// after a grounded one turns out to lead into open air.
    Jump,
}

impl StepTransition {
    /// Only [`Grounded`](Self::Grounded) counts; a jump is already in the air.
    #[inline]
    pub fn is_grounded(self) -> bool {
        matches!(self, StepTransition::Grounded)
    }
}

/// One entry of an interpreted path: where, and how supported.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CheckpointStep {
    pub checkpoint: Checkpoint,
    pub transition: StepTransition,
}

impl CheckpointStep {
    #[inline]
    pub fn new(checkpoint: Checkpoint, transition: StepTransition) -> Self {
        Self { checkpoint, transition }
    }
}

/// Path-level classification of an interpreted movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathOutcome {
    /// Nothing to animate; the path is a zero-displacement stand-in.
    Refused,
    /// The entity reaches an edge and returns to where it started.
    Bouncing,
    /// Supported start to finish.
    Grounded,
    /// An airborne path that ends on an anchor.
    Landing,
    /// The path ends in open air.
    Airbourne,
}

/// A movement request, relative to the entity's look and down reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    Up,
    Down,
    TurnLeft,
    TurnRight,
}

impl Movement {
    #[inline]
    pub fn is_rotation(self) -> bool {
        matches!(self, Movement::TurnLeft | Movement::TurnRight)
    }

    /// The world direction this translation resolves to for an entity with
    /// the given look and down reference; `None` for rotations.
    pub fn translation_direction(self, look: Direction, down: Direction) -> Option<Direction> {
        match self {
            Movement::Forward     => Some(look),
            Movement::Backward    => Some(look.inverse()),
            Movement::StrafeLeft  => Some(look.rotated_left(down)),
            Movement::StrafeRight => Some(look.rotated_right(down)),
            Movement::Up          => Some(down.inverse()),
            Movement::Down        => Some(down),
            Movement::TurnLeft | Movement::TurnRight => None,
        }
    }

    /// The look after this rotation for an entity with the given look and
    /// down reference; `None` for translations.
    pub fn rotated_look(self, look: Direction, down: Direction) -> Option<Direction> {
        match self {
            Movement::TurnLeft  => Some(look.rotated_left(down)),
            Movement::TurnRight => Some(look.rotated_right(down)),
            _ => None,
        }
    }
}

/// The interpreter's answer to one movement request.
#[derive(Clone, Debug, PartialEq)]
pub struct MovementInterpretation {
    pub movement: Movement,

    /// World direction the movement resolved to; `None` for rotations.
    pub primary_direction: Option<Direction>,

    pub forced: bool,

    /// Animation duration multiplier relative to a full step.
    pub duration_scale: f32,

    /// The checkpoint path; never empty.
    pub steps: Vec<CheckpointStep>,

    pub outcome: PathOutcome,
}

impl MovementInterpretation {
    /// The pre-move checkpoint.
    pub fn origin(&self) -> &Checkpoint {
        &self.steps[0].checkpoint
    }

    /// The authoritative resting pose.
    pub fn destination(&self) -> &Checkpoint {
        &self.steps[self.steps.len() - 1].checkpoint
    }

    /// Do consecutive steps differ by at most one cell per axis?
    pub fn is_continuous(&self) -> bool {
        self.steps.windows(2).all(|w| {
            let (dx, dy, dz) = w[0].checkpoint.coords.axis_deltas(w[1].checkpoint.coords);
            dx <= 1 && dy <= 1 && dz <= 1
        })
    }
}
