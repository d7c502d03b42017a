//! Transportation-mode bit flags shared across all movement-related crates.
//!
//! Entities combine modes (a flying swimmer, a climbing walker), and anchors
//! gate attachment by mode set, so this is a flag newtype rather than an
//! enum.  An empty set means the entity cannot traverse anything.

/// Bit-flag set of the ways an entity can move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportMode(pub u8);

impl TransportMode {
    /// No movement capability at all.
    pub const NONE: Self = Self(0);

    /// Ground movement on floor anchors.
    pub const WALKING: Self = Self(1 << 0);

    /// Free movement through open nodes; exempt from fall logic.
    pub const FLYING: Self = Self(1 << 1);

    /// Wall and ceiling anchor attachment.
    pub const CLIMBING: Self = Self(1 << 2);

    /// Movement through water volumes.
    pub const SWIMMING: Self = Self(1 << 3);

    /// Instant relocation; ignores intermediate topology.
    pub const TELEPORTING: Self = Self(1 << 4);

    /// Passage through constricted edges that block normal-sized bodies.
    pub const SQUEEZING: Self = Self(1 << 5);

    /// Every mode set — the permissive default for anchor traversal masks.
    pub const ALL: Self = Self(0b0011_1111);

    /// `true` if every flag in `other` is set in `self`.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// `true` if any flag in `other` is set in `self`.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Convenience: does this set include `FLYING`?
    #[inline]
    pub fn flies(self) -> bool {
        self.intersects(Self::FLYING)
    }
}

impl std::ops::BitOr for TransportMode {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for TransportMode {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
