//! Grid nodes: one cell of the dungeon with up to six anchors, six face
//! kinds, and the occupancy/reservation sets.

use dc_core::{Direction, EntityId, EntityProfile, GridPoint};

use crate::rules::OccupancyRules;
use crate::Anchor;

/// What a node face is made of, from the perspective of an entity trying to
/// cross it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FaceKind {
    /// Nothing there; freely crossable.
    #[default]
    Open,
    /// Solid level geometry.
    Wall,
    /// A door; crossable only while open.
    Door { open: bool },
    /// Renders as solid, traverses as open (secret passage surface).
    Illusory,
}

impl FaceKind {
    /// Can an entity cross this face?
    #[inline]
    pub fn is_passable(self) -> bool {
        match self {
            FaceKind::Open | FaceKind::Illusory => true,
            FaceKind::Door { open } => open,
            FaceKind::Wall => false,
        }
    }
}

/// One grid cell of the dungeon.
///
/// Created at dungeon build (see [`DungeonBuilder`][crate::DungeonBuilder]),
/// mutated only through the occupancy/reservation calls during play.
#[derive(Clone, Debug)]
pub struct Node {
    pub coords: GridPoint,

    /// Entry gate for ground-bound entities.
    pub walkable: bool,

    /// Entry gate for flying entities.
    pub flyable: bool,

    anchors: [Option<Anchor>; 6],
    faces: [FaceKind; 6],

    /// Entities currently standing in this cell.
    occupants: Vec<EntityId>,

    /// Entities that will pass through this cell while an in-flight movement
    /// animates.  Counts as provisional occupancy for routing.
    reservations: Vec<EntityId>,
}

impl Node {
    pub fn new(coords: GridPoint) -> Self {
        Self {
            coords,
            walkable: true,
            flyable: true,
            anchors: Default::default(),
            faces: Default::default(),
            occupants: Vec::new(),
            reservations: Vec::new(),
        }
    }

    // ── Build-time configuration (chainable for DungeonBuilder use) ───────

    pub fn add_anchor(&mut self, anchor: Anchor) -> &mut Self {
        let slot = anchor.face.face_index();
        self.anchors[slot] = Some(anchor);
        self
    }

    pub fn set_face(&mut self, direction: Direction, kind: FaceKind) -> &mut Self {
        self.faces[direction.face_index()] = kind;
        self
    }

    pub fn set_walkable(&mut self, walkable: bool) -> &mut Self {
        self.walkable = walkable;
        self
    }

    pub fn set_flyable(&mut self, flyable: bool) -> &mut Self {
        self.flyable = flyable;
        self
    }

    // ── Topology queries ──────────────────────────────────────────────────

    #[inline]
    pub fn anchor(&self, direction: Direction) -> Option<&Anchor> {
        self.anchors[direction.face_index()].as_ref()
    }

    #[inline]
    pub fn anchor_mut(&mut self, direction: Direction) -> Option<&mut Anchor> {
        self.anchors[direction.face_index()].as_mut()
    }

    #[inline]
    pub fn face(&self, direction: Direction) -> FaceKind {
        self.faces[direction.face_index()]
    }

    #[inline]
    pub fn has_floor(&self) -> bool {
        self.anchor(Direction::Down).is_some()
    }

    #[inline]
    pub fn has_ceiling(&self) -> bool {
        self.anchor(Direction::Up).is_some()
    }

    /// A usable anchor on `direction` for `profile`, if any.
    pub fn usable_anchor(&self, direction: Direction, profile: &EntityProfile) -> Option<&Anchor> {
        self.anchor(direction).filter(|a| a.allows(profile))
    }

    /// Is a rotation request legal for an entity anchored on `anchor_dir`?
    ///
    /// Unanchored entities may always rotate; anchored ones defer to the
    /// anchor's look constraint.
    pub fn allows_rotation(&self, _profile: &EntityProfile, anchor_dir: Option<Direction>) -> bool {
        match anchor_dir.and_then(|d| self.anchor(d)) {
            Some(anchor) => anchor.allows_rotation(),
            None => true,
        }
    }

    // ── Occupancy & reservation ───────────────────────────────────────────

    pub fn occupants(&self) -> &[EntityId] {
        &self.occupants
    }

    pub fn reservations(&self) -> &[EntityId] {
        &self.reservations
    }

    pub fn add_occupant(&mut self, entity: EntityId, rules: &dyn OccupancyRules) {
        if !self.occupants.contains(&entity) {
            for &other in &self.occupants {
                rules.handle_meeting(entity, other);
            }
            self.occupants.push(entity);
        }
    }

    pub fn remove_occupant(&mut self, entity: EntityId, rules: &dyn OccupancyRules) {
        if let Some(i) = self.occupants.iter().position(|&e| e == entity) {
            self.occupants.swap_remove(i);
            for &other in &self.occupants {
                rules.handle_departure(entity, other);
            }
        }
    }

    /// Provisionally occupy this node for an in-flight movement.
    pub fn reserve(&mut self, entity: EntityId) {
        if !self.reservations.contains(&entity) {
            self.reservations.push(entity);
        }
    }

    /// Release one provisional occupancy.  Exact inverse of [`reserve`](Self::reserve).
    pub fn remove_reservation(&mut self, entity: EntityId) {
        if let Some(i) = self.reservations.iter().position(|&e| e == entity) {
            self.reservations.swap_remove(i);
        }
    }

    /// May `entity` move into this node under `rules`?
    ///
    /// Occupants and reservations both count; the entity's own entries never
    /// block it.
    pub fn is_vacant_for(&self, entity: EntityId, rules: &dyn OccupancyRules) -> bool {
        self.occupants
            .iter()
            .chain(self.reservations.iter())
            .all(|&other| other == entity || rules.may_coexist(entity, other))
    }

    /// Mode-specific entry gate.
    pub fn admits(&self, profile: &EntityProfile) -> bool {
        if profile.flies() {
            self.flyable
        } else {
            self.walkable
        }
    }
}
