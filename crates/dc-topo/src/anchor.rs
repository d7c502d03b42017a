//! Cube-face anchors: the surfaces entities attach to.
//!
//! An anchor belongs to exactly one face of a node.  Its geometry is
//! data-driven by level content (walls, doors, ramps), never computed here:
//! the dungeon-build step stores per-direction edge profiles, and this
//! module only answers queries against them.
//!
//! # Edge geometry
//!
//! Edge heights are measured in cell units along the face normal, away from
//! the surface.  A flat floor anchor has height 0.0 everywhere.  A ramp
//! ascending northward stores 0.0 at its south edge and 1.0 at its north
//! edge.  `edge_position` returns the cell-local midpoint of an edge:
//!
//! ```text
//! surface_mid = (0.5, 0.5, 0.5) + face · 0.5
//! edge(d)     = surface_mid + d · (0.5 − inset(d)) + face⁻¹ · edge_height(d)
//! ```

use dc_core::{Direction, EntityProfile, TransportMode, WorldVec};

/// Per-direction edge data on an anchor surface.
///
/// The presence of a profile marks a surface discontinuity (a lip, a ramp
/// break) at that side of the anchor; flat continuous surfaces store none.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeProfile {
    /// Surface height at this edge, in cell units above the anchor base.
    pub height: f32,

    /// Planar recession of the edge from the cell boundary (a broken ramp
    /// lip, a gap before a ledge).  0.0 = edge reaches the boundary.
    pub inset: f32,
}

/// Optional look restriction carried by an anchor.
///
/// The only mutable part of an anchor after dungeon build (spinner tiles
/// and lock-view scripting toggle these at play time).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LookConstraint {
    /// Look is pinned to one direction; rotation requests are refused.
    Fixed(Direction),
    /// Any look is legal but rotation requests are refused.
    NoRotation,
}

/// An entity attachment surface on one cube face of a node.
#[derive(Clone, Debug)]
pub struct Anchor {
    /// The face this anchor occupies (the anchored entity's "down").
    pub face: Direction,

    /// Modes that may attach here.  An entity attaches when its mode set
    /// intersects this mask.
    pub traversal: TransportMode,

    constraint: Option<LookConstraint>,

    /// Edge profiles indexed by `Direction::face_index`.
    edges: [Option<EdgeProfile>; 6],
}

impl Anchor {
    /// A flat anchor on `face` accepting the given traversal modes.
    pub fn new(face: Direction, traversal: TransportMode) -> Self {
        Self {
            face,
            traversal,
            constraint: None,
            edges: [None; 6],
        }
    }

    /// A flat floor anchor accepting every mode.
    pub fn floor() -> Self {
        Self::new(Direction::Down, TransportMode::ALL)
    }

    /// Builder-style: record a boundary-reaching edge toward `direction`.
    pub fn with_edge(self, direction: Direction, height: f32) -> Self {
        self.with_edge_profile(direction, EdgeProfile { height, inset: 0.0 })
    }

    /// Builder-style: record a full edge profile toward `direction`.
    pub fn with_edge_profile(mut self, direction: Direction, profile: EdgeProfile) -> Self {
        self.edges[direction.face_index()] = Some(profile);
        self
    }

    /// Builder-style: attach a look constraint.
    pub fn with_constraint(mut self, constraint: LookConstraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Does the surface have a recorded edge discontinuity toward `direction`?
    #[inline]
    pub fn has_edge(&self, direction: Direction) -> bool {
        self.edges[direction.face_index()].is_some()
    }

    /// Surface height at the edge toward `direction`; 0.0 where no profile
    /// is recorded (flat surface).
    #[inline]
    pub fn edge_height(&self, direction: Direction) -> f32 {
        self.edges[direction.face_index()]
            .map(|e| e.height)
            .unwrap_or(0.0)
    }

    /// Planar recession of the edge toward `direction`; 0.0 where no profile
    /// is recorded.
    #[inline]
    pub fn edge_inset(&self, direction: Direction) -> f32 {
        self.edges[direction.face_index()]
            .map(|e| e.inset)
            .unwrap_or(0.0)
    }

    /// Cell-local midpoint of the edge toward `direction` (see module doc).
    /// An inset pulls the point back from the cell boundary along the same
    /// direction.
    pub fn edge_position(&self, direction: Direction) -> WorldVec {
        let (fx, fy, fz) = self.face.offset();
        let (dx, dy, dz) = direction.offset();
        let h = self.edge_height(direction);
        let reach = 0.5 - self.edge_inset(direction);
        let (nx, ny, nz) = self.face.inverse().offset();
        WorldVec::new(
            0.5 + fx as f32 * 0.5 + dx as f32 * reach + nx as f32 * h,
            0.5 + fy as f32 * 0.5 + dy as f32 * reach + ny as f32 * h,
            0.5 + fz as f32 * 0.5 + dz as f32 * reach + nz as f32 * h,
        )
    }

    /// Cell-local resting position at the middle of the surface.
    pub fn surface_position(&self) -> WorldVec {
        let (fx, fy, fz) = self.face.offset();
        WorldVec::new(
            0.5 + fx as f32 * 0.5,
            0.5 + fy as f32 * 0.5,
            0.5 + fz as f32 * 0.5,
        )
    }

    /// Can `profile` attach to this anchor?
    #[inline]
    pub fn allows(&self, profile: &EntityProfile) -> bool {
        self.traversal.intersects(profile.modes)
    }

    pub fn constraint(&self) -> Option<LookConstraint> {
        self.constraint
    }

    /// Toggle the look constraint at play time.
    pub fn set_constraint(&mut self, constraint: Option<LookConstraint>) {
        self.constraint = constraint;
    }

    /// Rotation requests are legal unless a constraint is present.
    #[inline]
    pub fn allows_rotation(&self) -> bool {
        self.constraint.is_none()
    }
}
