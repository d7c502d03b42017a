//! The dungeon map: a sparse coordinate-keyed node store plus its builder.
//!
//! Built once from level content, then queried read-only by the resolver;
//! the only play-time mutations are node occupancy/reservation calls and
//! anchor constraint toggles.

use rustc_hash::FxHashMap;

use dc_core::{Direction, GridPoint, TransportMode};

use crate::{Anchor, FaceKind, LookConstraint, Node, TopoError, TopoResult};

/// Sparse 3-D grid of [`Node`]s keyed by [`GridPoint`].
///
/// Do not construct directly; use [`DungeonBuilder`].
pub struct Dungeon {
    nodes: FxHashMap<GridPoint, Node>,
}

impl Dungeon {
    /// An empty dungeon — every coordinate is outside the level.
    pub fn empty() -> Self {
        DungeonBuilder::new().build()
    }

    #[inline]
    pub fn node_at(&self, at: GridPoint) -> Option<&Node> {
        self.nodes.get(&at)
    }

    #[inline]
    pub fn node_at_mut(&mut self, at: GridPoint) -> Option<&mut Node> {
        self.nodes.get_mut(&at)
    }

    /// Toggle the look constraint on the anchor at `at`/`face`.
    ///
    /// The play-time mutation path for spinner tiles and lock-view
    /// scripting.  Errors name whichever of the node or the anchor the map
    /// does not hold.
    pub fn set_look_constraint(
        &mut self,
        at:         GridPoint,
        face:       Direction,
        constraint: Option<LookConstraint>,
    ) -> TopoResult<()> {
        let node = self.node_at_mut(at).ok_or(TopoError::MissingNode(at))?;
        let anchor = node
            .anchor_mut(face)
            .ok_or(TopoError::MissingAnchor { at, face })?;
        anchor.set_constraint(constraint);
        Ok(())
    }

    #[inline]
    pub fn contains(&self, at: GridPoint) -> bool {
        self.nodes.contains_key(&at)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Construct a [`Dungeon`] incrementally, then call [`build`](Self::build).
///
/// Nodes may be added in any order and reconfigured freely until `build`.
///
/// # Example
///
/// ```
/// use dc_core::{Direction, GridPoint};
/// use dc_topo::{DungeonBuilder, FaceKind};
///
/// let mut b = DungeonBuilder::new();
/// b.floor_node(GridPoint::new(0, 0, 0));
/// b.floor_node(GridPoint::new(0, 0, 1))
///     .set_face(Direction::North, FaceKind::Wall);
/// let dungeon = b.build();
/// assert_eq!(dungeon.node_count(), 2);
/// ```
pub struct DungeonBuilder {
    nodes: FxHashMap<GridPoint, Node>,
}

impl DungeonBuilder {
    pub fn new() -> Self {
        Self { nodes: FxHashMap::default() }
    }

    /// Pre-allocate for the expected cell count when bulk-loading tile maps.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
        }
    }

    /// Insert (or fetch for reconfiguration) the node at `at`.
    ///
    /// A fresh node has all faces [`FaceKind::Open`], no anchors, and admits
    /// both walkers and flyers.
    pub fn node(&mut self, at: GridPoint) -> &mut Node {
        self.nodes.entry(at).or_insert_with(|| Node::new(at))
    }

    /// Convenience: a node with a flat all-mode floor anchor.
    pub fn floor_node(&mut self, at: GridPoint) -> &mut Node {
        let node = self.node(at);
        if !node.has_floor() {
            node.add_anchor(Anchor::floor());
        }
        node
    }

    /// Convenience: a node with a climbable wall anchor on `face`.
    pub fn wall_node(&mut self, at: GridPoint, face: Direction) -> &mut Node {
        let node = self.node(at);
        node.set_face(face, FaceKind::Wall);
        node.add_anchor(Anchor::new(face, TransportMode::CLIMBING));
        node
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and produce a [`Dungeon`].
    pub fn build(self) -> Dungeon {
        Dungeon { nodes: self.nodes }
    }
}

impl Default for DungeonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
