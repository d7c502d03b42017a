//! Entity capability data consumed by the topology and movement crates.
//!
//! The framework never owns entity state; callers hand in an
//! [`EntityProfile`] per request.  Spatial state (coordinates, anchor, look)
//! travels separately as a pose — see `dc-move`.

use crate::{EntityId, TransportMode};

/// Numeric movement thresholds, in cell units.
///
/// The scale-height pair bounds how much vertical offset an entity steps
/// over without jumping; the forward-jump pair bounds the horizontal gap it
/// clears.  The two pairs trade off against each other: a small vertical
/// offset tolerates a wide gap, a large vertical offset only a narrow one.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Abilities {
    /// Vertical offset climbable at full stride (grounded, any gap up to
    /// `max_forward_jump`).
    pub min_scale_height: f32,

    /// Absolute vertical limit, usable only across gaps narrower than
    /// `min_forward_jump`.
    pub max_scale_height: f32,

    /// Horizontal gap crossable while scaling near `max_scale_height`.
    pub min_forward_jump: f32,

    /// Absolute horizontal gap limit at low vertical offsets.  Gaps wider
    /// than `min_forward_jump` mark the crossing steps as jumps.
    pub max_forward_jump: f32,

    /// Multiplier applied to turn animations relative to a full step.
    pub turn_duration_scale: f32,
}

impl Default for Abilities {
    /// A humanoid walker: steps half a cell, jumps one cell, turns at half
    /// step duration.
    fn default() -> Self {
        Self {
            min_scale_height:    0.5,
            max_scale_height:    1.0,
            min_forward_jump:    0.5,
            max_forward_jump:    1.0,
            turn_duration_scale: 0.5,
        }
    }
}

/// The capability view of one entity: identity, modes, and thresholds.
///
/// Cheap to clone; the resolver treats it as read-only.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityProfile {
    pub id: EntityId,

    /// The transportation modes this entity commands.
    pub modes: TransportMode,

    pub abilities: Abilities,

    /// When set, look direction pitches to stay aligned with travel as the
    /// entity rounds onto walls and ceilings (wall-crawler behavior).
    /// When clear, look is preserved wherever it remains valid.
    pub rotation_respects_anchor: bool,
}

impl EntityProfile {
    /// A walking entity with default abilities.
    pub fn walker(id: EntityId) -> Self {
        Self {
            id,
            modes: TransportMode::WALKING,
            abilities: Abilities::default(),
            rotation_respects_anchor: false,
        }
    }

    /// A flying entity with default abilities.
    pub fn flyer(id: EntityId) -> Self {
        Self {
            id,
            modes: TransportMode::FLYING,
            abilities: Abilities::default(),
            rotation_respects_anchor: false,
        }
    }

    /// A wall-crawler: walks, climbs, and reorients around corners.
    pub fn crawler(id: EntityId) -> Self {
        Self {
            id,
            modes: TransportMode::WALKING | TransportMode::CLIMBING,
            abilities: Abilities::default(),
            rotation_respects_anchor: true,
        }
    }

    #[inline]
    pub fn flies(&self) -> bool {
        self.modes.flies()
    }
}
