//! `dc-move` — movement interpretation for the `rust_dc` dungeon-crawler
//! framework.
//!
//! This crate turns one movement request (forward, strafe, turn, …) into a
//! checkpoint path over the topology of `dc-topo`: an ordered list of
//! renderable spatial snapshots from the pre-move pose to the authoritative
//! resting pose.  It owns no entity state and mutates no dungeon state;
//! the simulation layer (`dc-sim`) drives reservation and occupancy around
//! the paths produced here.
//!
//! # What lives here
//!
//! | Module             | Contents                                           |
//! |--------------------|----------------------------------------------------|
//! | [`checkpoint`]     | `Checkpoint`, `Pose`                               |
//! | [`interpretation`] | `Movement`, `CheckpointStep`, `MovementInterpretation`, outcomes |
//! | [`interpreter`]    | `Interpreter` — the resolution algorithm           |
//! | [`evaluate`]       | `evaluate`, `PoseSample` — deterministic sampling  |
//! | [`error`]          | `MoveError`, `MoveResult`                          |

pub mod checkpoint;
pub mod error;
pub mod evaluate;
pub mod interpretation;
pub mod interpreter;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use checkpoint::{Checkpoint, Pose};
pub use error::{MoveError, MoveResult};
pub use evaluate::{evaluate, PoseSample};
pub use interpretation::{
    CheckpointStep, Movement, MovementInterpretation, PathOutcome, StepTransition,
};
pub use interpreter::Interpreter;
