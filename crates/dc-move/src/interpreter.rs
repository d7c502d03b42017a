//! The movement interpreter: one request in, one checkpoint path out.
//!
//! Interpretation is a pure function of dungeon topology, occupancy rules,
//! the entity's capability profile, and its current pose.  Nothing here
//! mutates the dungeon; reservation and occupancy migration belong to the
//! simulation layer on top.
//!
//! # Dispatch order
//!
//! 1. Rotations resolve against the current anchor's look constraint and
//!    never consult neighbouring nodes.
//! 2. Unanchored translations try the elevation edge first, then fall back
//!    to plain node-to-node resolution.
//! 3. Anchored translations run the node transition protocol, then refine
//!    the successful outcomes: elevation edge, outer-corner round, and
//!    finally plain anchor-to-anchor resolution, in that order.  The
//!    elevation edge is attempted before corner and anchor dispatch for
//!    every direction/anchor combination.
//!
//! Topology inconsistencies (the protocol naming an anchor the map does not
//! hold) log a warning and degrade to the bounce path; they never panic.

use dc_core::{Axis, Direction, EntityProfile, GridPoint, WorldVec};
use dc_topo::{
    Anchor, Dungeon, FaceKind, MovementOutcome, OccupancyRules, Transition,
};

use crate::{
    Checkpoint, CheckpointStep, Movement, MovementInterpretation, PathOutcome, Pose,
    StepTransition,
};

/// Resolves movement requests against a dungeon under occupancy rules.
pub struct Interpreter<'a> {
    dungeon: &'a Dungeon,
    rules:   &'a dyn OccupancyRules,
}

/// One translation request, threaded through the interpretation procedures.
struct Request<'p> {
    profile:   &'p EntityProfile,
    pose:      &'p Pose,
    movement:  Movement,
    direction: Direction,
    forced:    bool,
}

impl<'a> Interpreter<'a> {
    pub fn new(dungeon: &'a Dungeon, rules: &'a dyn OccupancyRules) -> Self {
        Self { dungeon, rules }
    }

    /// Interpret one movement request from `pose`.
    ///
    /// Returns `None` exactly when a rotation is disallowed outright or the
    /// pose names a node the map does not hold; such requests are dropped
    /// without animation.  Every other request resolves to a path, even if
    /// it is a zero-displacement refusal.
    pub fn interpret(
        &self,
        profile:  &EntityProfile,
        pose:     &Pose,
        movement: Movement,
        forced:   bool,
    ) -> Option<MovementInterpretation> {
        if movement.is_rotation() {
            return self.interpret_rotation(profile, pose, movement, forced);
        }
        let direction = movement.translation_direction(pose.look, pose.down())?;
        let req = Request { profile, pose, movement, direction, forced };
        Some(self.interpret_translation(&req))
    }

    // ── Rotation ──────────────────────────────────────────────────────────

    fn interpret_rotation(
        &self,
        profile:  &EntityProfile,
        pose:     &Pose,
        movement: Movement,
        forced:   bool,
    ) -> Option<MovementInterpretation> {
        let Some(node) = self.dungeon.node_at(pose.coords) else {
            log::warn!("rotation requested from missing node {}", pose.coords);
            return None;
        };
        if !node.allows_rotation(profile, pose.anchor) {
            return None;
        }

        let look = movement.rotated_look(pose.look, pose.down())?;
        let transition = if profile.flies() {
            StepTransition::Grounded
        } else {
            StepTransition::Ungrounded
        };
        let steps = vec![
            CheckpointStep::new(pose.checkpoint(), transition),
            CheckpointStep::new(Checkpoint::rest(pose.coords, pose.anchor, look), transition),
        ];
        Some(MovementInterpretation {
            movement,
            primary_direction: None,
            forced,
            duration_scale: profile.abilities.turn_duration_scale,
            steps,
            outcome: PathOutcome::Grounded,
        })
    }

    // ── Translation dispatch ──────────────────────────────────────────────

    fn interpret_translation(&self, req: &Request) -> MovementInterpretation {
        let base = base_transition(req.profile, req.pose);

        if req.pose.anchor.is_none() {
            if let Some(path) = self.elevation_offset_edge(req) {
                return path;
            }
            return self.interpret_by_dungeon(req, base);
        }

        let t = self.dungeon.allows_transition(
            req.profile,
            self.rules,
            req.pose.coords,
            req.pose.anchor,
            req.direction,
            req.forced,
        );
        match t.outcome {
            MovementOutcome::Refused => req.refusal(base),
            MovementOutcome::Blocked => req.bounce(base),
            MovementOutcome::NodeInternal | MovementOutcome::NodeExit => {
                if let Some(path) = self.elevation_offset_edge(req) {
                    return path;
                }
                let corner = req
                    .pose
                    .anchor
                    .map(|down| req.pose.coords.neighbor(req.direction).neighbor(down));
                if t.outcome == MovementOutcome::NodeExit && corner == Some(t.target) {
                    self.round_outer_corner(req, base, &t)
                } else {
                    self.interpret_by_anchor(req, base, &t)
                }
            }
        }
    }

    // ── Elevation edge ────────────────────────────────────────────────────

    /// Step across a surface discontinuity onto the next cell up or down a
    /// ramp edge.  `None` when no reachable elevation target exists; plain
    /// dispatch continues.
    fn elevation_offset_edge(&self, req: &Request) -> Option<MovementInterpretation> {
        let down = req.pose.down();
        if !req.direction.is_planar(down) {
            return None;
        }
        let origin_node = self.dungeon.node_at(req.pose.coords)?;
        let origin_anchor = origin_node.usable_anchor(down, req.profile)?;
        if !origin_anchor.has_edge(req.direction) {
            return None;
        }

        // Ascent is preferred; the descent target is tried only when no
        // climb fits.
        for vertical in [down.inverse(), down] {
            if let Some(path) = self.try_elevation_edge(req, down, vertical, origin_anchor) {
                return Some(path);
            }
        }
        None
    }

    fn try_elevation_edge(
        &self,
        req:           &Request,
        down:          Direction,
        vertical:      Direction,
        origin_anchor: &Anchor,
    ) -> Option<MovementInterpretation> {
        let target = req.pose.coords.neighbor(vertical).neighbor(req.direction);
        let target_node = self.dungeon.node_at(target)?;
        let entry = req.direction.inverse();
        let target_anchor = target_node.usable_anchor(down, req.profile)?;
        if !target_node.admits(req.profile) {
            return None;
        }
        if !req.forced && !target_node.is_vacant_for(req.profile.id, self.rules) {
            return None;
        }

        // The two-hop route to the target: over the lip when climbing, off
        // the edge and then down when descending.
        let open = if vertical == down {
            self.corridor_open(req.pose.coords, req.direction)
                && self.corridor_open(req.pose.coords.neighbor(req.direction), vertical)
        } else {
            self.corridor_open(req.pose.coords, vertical)
                && self.corridor_open(req.pose.coords.neighbor(vertical), req.direction)
        };
        if !open {
            return None;
        }

        let o_edge = origin_anchor.edge_height(req.direction);
        let t_edge = target_anchor.edge_height(entry);
        let vert = if vertical == down {
            o_edge + 1.0 - t_edge
        } else {
            1.0 + t_edge - o_edge
        };
        let o_pos = req.pose.coords.to_world() + origin_anchor.edge_position(req.direction);
        let t_pos = target.to_world() + target_anchor.edge_position(entry);
        let planar = planar_gap(o_pos, t_pos, down);

        let ab = &req.profile.abilities;
        let reachable = (vert <= ab.min_scale_height && planar < ab.max_forward_jump)
            || (vert < ab.max_scale_height && planar < ab.min_forward_jump);
        if !reachable {
            return None;
        }

        let transition = if planar > ab.min_forward_jump {
            StepTransition::Jump
        } else {
            StepTransition::Grounded
        };
        let rest = Checkpoint::rest(target, Some(down), req.pose.look);
        let steps = vec![
            CheckpointStep::new(req.pose.checkpoint(), transition),
            CheckpointStep::new(req.pose.checkpoint().at_edge(req.direction), transition),
            CheckpointStep::new(rest.at_edge(entry), transition),
            CheckpointStep::new(rest, transition),
        ];
        Some(req.path(steps, PathOutcome::Grounded))
    }

    // ── Outer corner ──────────────────────────────────────────────────────

    /// Wrap around a convex corner onto the anchor the transition protocol
    /// resolved on the diagonal node.
    fn round_outer_corner(
        &self,
        req:  &Request,
        base: StepTransition,
        t:    &Transition,
    ) -> MovementInterpretation {
        let old_down = req.pose.down();
        let Some(new_down) = t.anchor else {
            log::warn!("corner transition to {} carries no anchor", t.target);
            return req.bounce(base);
        };

        let look = reoriented_look(req.profile, req.pose.look, req.direction, old_down, new_down);
        let rest = Checkpoint::rest(t.target, Some(new_down), look);
        let steps = vec![
            CheckpointStep::new(req.pose.checkpoint(), StepTransition::Grounded),
            CheckpointStep::new(
                req.pose.checkpoint().at_edge(req.direction),
                StepTransition::Grounded,
            ),
            CheckpointStep::new(rest.at_edge(old_down.inverse()), StepTransition::Grounded),
            CheckpointStep::new(rest, StepTransition::Grounded),
        ];
        req.path(steps, PathOutcome::Grounded)
    }

    // ── Anchor- and node-level resolution ─────────────────────────────────

    /// Refine a successful protocol outcome for an anchored entity.
    fn interpret_by_anchor(
        &self,
        req:  &Request,
        base: StepTransition,
        t:    &Transition,
    ) -> MovementInterpretation {
        match t.outcome {
            MovementOutcome::NodeInternal => {
                // Face change within the same node: climb onto the wall the
                // entity just ran into.
                let look = reoriented_look(
                    req.profile,
                    req.pose.look,
                    req.direction,
                    req.pose.down(),
                    req.direction,
                );
                let rest = Checkpoint::rest(req.pose.coords, Some(req.direction), look);
                let steps = vec![
                    CheckpointStep::new(req.pose.checkpoint(), StepTransition::Grounded),
                    CheckpointStep::new(
                        req.pose.checkpoint().at_edge(req.direction),
                        StepTransition::Grounded,
                    ),
                    CheckpointStep::new(rest, StepTransition::Grounded),
                ];
                req.path(steps, PathOutcome::Grounded)
            }
            MovementOutcome::NodeExit => self.interpret_by_node(req, base, t.target, true),
            MovementOutcome::Refused | MovementOutcome::Blocked => req.bounce(base),
        }
    }

    /// Resolve a crossing into `target`.  When `preauthorized`, the node
    /// transition protocol already validated entry; otherwise the face,
    /// mode, and occupancy gates run here.
    fn interpret_by_node(
        &self,
        req:           &Request,
        base:          StepTransition,
        target:        GridPoint,
        preauthorized: bool,
    ) -> MovementInterpretation {
        let Some(node) = self.dungeon.node_at(target) else {
            return self.step_off(req, base, target);
        };

        if !preauthorized {
            let entry_open = self.corridor_open(req.pose.coords, req.direction);
            let vacant = req.forced || node.is_vacant_for(req.profile.id, self.rules);
            if !entry_open || !node.admits(req.profile) || !vacant {
                return req.bounce(base);
            }
        }

        let down = req.pose.down();
        if let Some(anchor) = node.usable_anchor(down, req.profile) {
            let outcome = if base.is_grounded() {
                PathOutcome::Grounded
            } else {
                PathOutcome::Landing
            };
            let rest = Checkpoint::rest(target, Some(down), req.pose.look);
            let mut steps = vec![CheckpointStep::new(req.pose.checkpoint(), base)];
            if anchor.has_edge(req.direction.inverse()) {
                steps.push(CheckpointStep::new(
                    rest.at_edge(req.direction.inverse()),
                    StepTransition::Grounded,
                ));
            }
            steps.push(CheckpointStep::new(rest, StepTransition::Grounded));
            return req.path(steps, outcome);
        }

        if node.face(req.direction.inverse()) == FaceKind::Illusory {
            // Secret passage: drift through without marking a jump-off.
            let steps = vec![
                CheckpointStep::new(req.pose.checkpoint(), base),
                CheckpointStep::new(
                    Checkpoint::rest(target, None, req.pose.look),
                    StepTransition::Ungrounded,
                ),
            ];
            return req.path(steps, PathOutcome::Airbourne);
        }

        self.step_off(req, base, target)
    }

    /// Resolve a crossing with no anchored context: into a mapped node, or
    /// onward through open space.
    fn interpret_by_dungeon(&self, req: &Request, base: StepTransition) -> MovementInterpretation {
        let target = req.pose.coords.neighbor(req.direction);
        if self.dungeon.contains(target) {
            self.interpret_by_node(req, base, target, false)
        } else {
            self.step_off(req, base, target)
        }
    }

    /// A step into unsupported space.  The immediately preceding step — and
    /// only that one — is reclassified from grounded to a jump.
    fn step_off(&self, req: &Request, base: StepTransition, target: GridPoint) -> MovementInterpretation {
        let first = if base.is_grounded() { StepTransition::Jump } else { base };
        let steps = vec![
            CheckpointStep::new(req.pose.checkpoint(), first),
            CheckpointStep::new(
                Checkpoint::rest(target, None, req.pose.look),
                StepTransition::Ungrounded,
            ),
        ];
        req.path(steps, PathOutcome::Airbourne)
    }

    /// Both faces of the boundary crossed from `from` toward `direction` are
    /// passable; absent nodes count as open space.
    fn corridor_open(&self, from: GridPoint, direction: Direction) -> bool {
        let near = self
            .dungeon
            .node_at(from)
            .is_none_or(|n| n.face(direction).is_passable());
        let far = self
            .dungeon
            .node_at(from.neighbor(direction))
            .is_none_or(|n| n.face(direction.inverse()).is_passable());
        near && far
    }
}

impl Request<'_> {
    fn path(&self, steps: Vec<CheckpointStep>, outcome: PathOutcome) -> MovementInterpretation {
        MovementInterpretation {
            movement: self.movement,
            primary_direction: Some(self.direction),
            forced: self.forced,
            duration_scale: 1.0,
            steps,
            outcome,
        }
    }

    /// Zero-displacement stand-in for a refused request.
    fn refusal(&self, base: StepTransition) -> MovementInterpretation {
        let steps = vec![
            CheckpointStep::new(self.pose.checkpoint(), base),
            CheckpointStep::new(self.pose.checkpoint(), base),
        ];
        self.path(steps, PathOutcome::Refused)
    }

    /// Run to the anchor edge, come back.
    fn bounce(&self, base: StepTransition) -> MovementInterpretation {
        let steps = vec![
            CheckpointStep::new(self.pose.checkpoint(), base),
            CheckpointStep::new(self.pose.checkpoint().at_edge(self.direction), base),
            CheckpointStep::new(self.pose.checkpoint(), base),
        ];
        self.path(steps, PathOutcome::Bouncing)
    }
}

/// First step of a path: grounded when flying or resting on an anchor.
fn base_transition(profile: &EntityProfile, pose: &Pose) -> StepTransition {
    if profile.flies() || (pose.anchor.is_some() && !pose.falling) {
        StepTransition::Grounded
    } else {
        StepTransition::Ungrounded
    }
}

/// Re-derive the look after the down reference changes.
///
/// A look still perpendicular to the new down is preserved; a look parallel
/// to it pitches through the turn onto the old down axis.  Profiles with
/// `rotation_respects_anchor` always pitch, staying aligned with the travel
/// the entity just performed regardless of where it was looking.
fn reoriented_look(
    profile:   &EntityProfile,
    look:      Direction,
    direction: Direction,
    old_down:  Direction,
    new_down:  Direction,
) -> Direction {
    let pitched = |d: Direction| {
        if d == new_down {
            old_down.inverse()
        } else {
            old_down
        }
    };
    if profile.rotation_respects_anchor {
        pitched(direction)
    } else if look.axis() != new_down.axis() {
        look
    } else {
        pitched(look)
    }
}

/// Distance between two world points ignoring the axis `down` lies on.
fn planar_gap(a: WorldVec, b: WorldVec, down: Direction) -> f32 {
    let d = b - a;
    let (u, v) = match down.axis() {
        Axis::X => (d.y, d.z),
        Axis::Y => (d.x, d.z),
        Axis::Z => (d.x, d.y),
    };
    (u * u + v * v).sqrt()
}
