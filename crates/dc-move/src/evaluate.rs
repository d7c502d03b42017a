//! Deterministic pose sampling over an interpreted path.
//!
//! `evaluate` maps a normalized progress value onto a piecewise-linear
//! interpolation of the path's checkpoints.  Positions derive from cell
//! bases plus anchor surface or edge offsets; yaw interpolates along the
//! shortest arc; pitch comes from vertical looks.  The same inputs always
//! produce the same sample — animation smoothing (easing) is applied by the
//! simulation layer before calling in.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use dc_core::{Direction, WorldVec};
use dc_topo::Dungeon;

use crate::{Checkpoint, MoveError, MoveResult, MovementInterpretation};

/// One sampled pose along a path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PoseSample {
    pub position: WorldVec,

    /// Heading about the world vertical: north 0, east π/2, south π,
    /// west −π/2.
    pub yaw_rad: f32,

    /// π/2 looking straight up, −π/2 straight down, 0 in the plane.
    pub pitch_rad: f32,

    /// Index of the checkpoint the sample departs from.
    pub checkpoint: usize,

    /// Progress within the current segment, in `[0, 1]`.
    pub step_progress: f32,
}

/// Sample `interpretation` at normalized `progress ∈ [0, 1]`.
///
/// Progress outside the range clamps; progress 0 and 1 reproduce the first
/// and last checkpoints exactly.
pub fn evaluate(
    dungeon:        &Dungeon,
    interpretation: &MovementInterpretation,
    progress:       f32,
) -> MoveResult<PoseSample> {
    if interpretation.steps.is_empty() {
        return Err(MoveError::EmptyInterpretation);
    }
    if !progress.is_finite() {
        return Err(MoveError::NonFiniteProgress(progress));
    }

    let segments = interpretation.steps.len() - 1;
    if segments == 0 {
        let c = &interpretation.steps[0].checkpoint;
        return Ok(PoseSample {
            position:      position_of(dungeon, c),
            yaw_rad:       yaw_of(c.look).unwrap_or(0.0),
            pitch_rad:     pitch_of(c.look),
            checkpoint:    0,
            step_progress: 1.0,
        });
    }

    let scaled = progress.clamp(0.0, 1.0) * segments as f32;
    let idx = (scaled.floor() as usize).min(segments - 1);
    let s = scaled - idx as f32;
    let from = &interpretation.steps[idx].checkpoint;
    let to = &interpretation.steps[idx + 1].checkpoint;

    let position = position_of(dungeon, from).lerp(position_of(dungeon, to), s);
    let (yaw_a, yaw_b) = segment_yaws(from.look, to.look);
    let pitch_a = pitch_of(from.look);
    let pitch_b = pitch_of(to.look);

    Ok(PoseSample {
        position,
        yaw_rad: lerp_angle(yaw_a, yaw_b, s),
        pitch_rad: pitch_a + (pitch_b - pitch_a) * s,
        checkpoint: idx,
        step_progress: s,
    })
}

/// World position of a checkpoint: cell base plus the anchor's surface or
/// edge offset; cell center while unanchored.
fn position_of(dungeon: &Dungeon, c: &Checkpoint) -> WorldVec {
    let base = c.coords.to_world();
    match c.anchor {
        Some(face) => match dungeon.node_at(c.coords).and_then(|n| n.anchor(face)) {
            Some(anchor) => {
                let local = match c.edge {
                    Some(edge) => anchor.edge_position(edge),
                    None => anchor.surface_position(),
                };
                base + local
            }
            None => {
                log::warn!("checkpoint at {} names a missing {} anchor", c.coords, face);
                base + face_midpoint(face)
            }
        },
        None => match c.edge {
            Some(edge) => {
                let (dx, dy, dz) = edge.offset();
                c.coords.center()
                    + WorldVec::new(dx as f32 * 0.5, dy as f32 * 0.5, dz as f32 * 0.5)
            }
            None => c.coords.center(),
        },
    }
}

/// Cell-local midpoint of a face, used when anchor data is missing.
fn face_midpoint(face: Direction) -> WorldVec {
    let (fx, fy, fz) = face.offset();
    WorldVec::new(
        0.5 + fx as f32 * 0.5,
        0.5 + fy as f32 * 0.5,
        0.5 + fz as f32 * 0.5,
    )
}

/// Yaw endpoints for one segment.  A vertical look carries no yaw of its
/// own and borrows the other endpoint's so pitching never spins the camera.
fn segment_yaws(a: Direction, b: Direction) -> (f32, f32) {
    match (yaw_of(a), yaw_of(b)) {
        (Some(ya), Some(yb)) => (ya, yb),
        (Some(ya), None) => (ya, ya),
        (None, Some(yb)) => (yb, yb),
        (None, None) => (0.0, 0.0),
    }
}

fn yaw_of(look: Direction) -> Option<f32> {
    match look {
        Direction::North => Some(0.0),
        Direction::East  => Some(FRAC_PI_2),
        Direction::South => Some(PI),
        Direction::West  => Some(-FRAC_PI_2),
        Direction::Up | Direction::Down => None,
    }
}

fn pitch_of(look: Direction) -> f32 {
    match look {
        Direction::Up => FRAC_PI_2,
        Direction::Down => -FRAC_PI_2,
        _ => 0.0,
    }
}

/// Interpolate along the shortest arc between two yaws.
fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    let mut d = b - a;
    while d > PI {
        d -= TAU;
    }
    while d <= -PI {
        d += TAU;
    }
    a + d * t
}
