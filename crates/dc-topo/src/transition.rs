//! The node transition protocol.
//!
//! `Dungeon::allows_transition` answers one question: for an entity on a
//! given anchor of a given node, what does one step in a direction mean?
//! The answer is a [`MovementOutcome`] plus resolved target coordinates and
//! target anchor.  Callers honor the outcomes in strict precedence
//! `Refused > Blocked > NodeInternal > NodeExit` and act on the first
//! satisfied case — the movement interpreter (`dc-move`) builds checkpoint
//! paths on top of this classification.
//!
//! `forced` movements (pushes, knockbacks) bypass occupancy refusal but
//! never hard blocks: a shove cannot pass a wall.

use dc_core::{Direction, EntityProfile, GridPoint};

use crate::rules::OccupancyRules;
use crate::{Dungeon, Node};

/// Node-local classification of one requested step.
///
/// Precedence (checked by callers in this order, first satisfied wins):
/// `Refused` — movement impossible, nothing to animate;
/// `Blocked` — the entity reaches its anchor edge, then can go no further;
/// `NodeInternal` — a face change within the same node;
/// `NodeExit` — the step crosses into a neighbouring node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MovementOutcome {
    Refused,
    Blocked,
    NodeInternal,
    NodeExit,
}

/// A resolved transition: outcome plus where the step would land.
///
/// For `Refused` and `Blocked` the target equals the origin.  `anchor` is
/// the face direction of the resolved target anchor, or `None` when the
/// step leads into unanchored space (open air, dungeon boundary).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub outcome: MovementOutcome,
    pub target: GridPoint,
    pub anchor: Option<Direction>,
}

impl Transition {
    fn refused(at: GridPoint, anchor: Option<Direction>) -> Self {
        Self { outcome: MovementOutcome::Refused, target: at, anchor }
    }

    fn blocked(at: GridPoint, anchor: Option<Direction>) -> Self {
        Self { outcome: MovementOutcome::Blocked, target: at, anchor }
    }
}

impl Dungeon {
    /// Resolve one step of `profile` from `origin` (anchored on
    /// `anchor_dir`, `None` when unanchored) toward `direction`.
    ///
    /// Uses transportation modes, occupancy rules, and static topology
    /// (walls, doors, illusory faces).  See the module doc for outcome
    /// precedence and the `forced` contract.
    pub fn allows_transition(
        &self,
        profile:    &EntityProfile,
        rules:      &dyn OccupancyRules,
        origin:     GridPoint,
        anchor_dir: Option<Direction>,
        direction:  Direction,
        forced:     bool,
    ) -> Transition {
        let Some(node) = self.node_at(origin) else {
            // The caller believes it stands somewhere the map does not know.
            log::warn!("transition queried from missing node {origin}");
            return Transition::refused(origin, anchor_dir);
        };

        // Stepping into one's own support surface is never meaningful.
        if anchor_dir == Some(direction) {
            return Transition::refused(origin, anchor_dir);
        }

        if !node.face(direction).is_passable() {
            return self.resolve_internal(profile, node, origin, anchor_dir, direction);
        }

        self.resolve_exit(profile, rules, origin, anchor_dir, direction, forced)
    }

    /// A closed face: either a same-node face change onto an anchor the
    /// entity can use, or a hard block.
    fn resolve_internal(
        &self,
        profile:    &EntityProfile,
        node:       &Node,
        origin:     GridPoint,
        anchor_dir: Option<Direction>,
        direction:  Direction,
    ) -> Transition {
        match node.usable_anchor(direction, profile) {
            Some(_) => Transition {
                outcome: MovementOutcome::NodeInternal,
                target: origin,
                anchor: Some(direction),
            },
            None => Transition::blocked(origin, anchor_dir),
        }
    }

    /// An open face: classify the crossing into the neighbour (or beyond it
    /// around an outer corner).
    fn resolve_exit(
        &self,
        profile:    &EntityProfile,
        rules:      &dyn OccupancyRules,
        origin:     GridPoint,
        anchor_dir: Option<Direction>,
        direction:  Direction,
        forced:     bool,
    ) -> Transition {
        let target = origin.neighbor(direction);
        let Some(neighbor) = self.node_at(target) else {
            // Dungeon boundary: exits resolve, landing is the interpreter's
            // problem (fall or fly onward).
            return Transition {
                outcome: MovementOutcome::NodeExit,
                target,
                anchor: None,
            };
        };

        if !neighbor.face(direction.inverse()).is_passable() {
            // Open from this side, shut from the other (one-way door edge).
            return Transition::blocked(origin, anchor_dir);
        }

        if !neighbor.admits(profile) {
            return Transition::blocked(origin, anchor_dir);
        }

        if !forced && !neighbor.is_vacant_for(profile.id, rules) {
            return Transition::refused(origin, anchor_dir);
        }

        let anchor = self.resolve_target_anchor(profile, rules, neighbor, anchor_dir, direction, forced);
        match anchor {
            TargetAnchor::Same(dir) => Transition {
                outcome: MovementOutcome::NodeExit,
                target,
                anchor: Some(dir),
            },
            TargetAnchor::OuterCorner(diagonal, dir) => Transition {
                outcome: MovementOutcome::NodeExit,
                target: diagonal,
                anchor: Some(dir),
            },
            TargetAnchor::None => Transition {
                outcome: MovementOutcome::NodeExit,
                target,
                anchor: None,
            },
        }
    }

    /// Resolve which anchor (if any) receives the entity in the exit node.
    fn resolve_target_anchor(
        &self,
        profile:    &EntityProfile,
        rules:      &dyn OccupancyRules,
        neighbor:   &Node,
        anchor_dir: Option<Direction>,
        direction:  Direction,
        forced:     bool,
    ) -> TargetAnchor {
        let Some(face) = anchor_dir else {
            return TargetAnchor::None;
        };

        // Preferred: the matching face of the neighbour.
        if neighbor.usable_anchor(face, profile).is_some() {
            return TargetAnchor::Same(face);
        }

        // Outer corner: the neighbour has no matching surface but its face
        // toward the entity's down is open, and the node one further step
        // that way carries an anchor looking back at the travel direction.
        // The entity wraps around the convex corner onto that surface.
        if neighbor.face(face).is_passable() {
            let diagonal = neighbor.coords.neighbor(face);
            if let Some(diag_node) = self.node_at(diagonal) {
                let vacant = forced || diag_node.is_vacant_for(profile.id, rules);
                if vacant
                    && diag_node.admits(profile)
                    && diag_node.face(face.inverse()).is_passable()
                    && diag_node.usable_anchor(direction.inverse(), profile).is_some()
                {
                    return TargetAnchor::OuterCorner(diagonal, direction.inverse());
                }
            }
        }

        TargetAnchor::None
    }
}

enum TargetAnchor {
    Same(Direction),
    OuterCorner(GridPoint, Direction),
    None,
}
