//! Unit tests for dc-sim.

use std::cell::RefCell;
use std::rc::Rc;

use dc_core::{Direction, EntityId, EntityProfile, GridPoint, Tick};
use dc_move::{Interpreter, MoveError, Movement, MovementInterpretation, Pose};
use dc_topo::{Dungeon, DungeonBuilder, SoloOccupancy};

use crate::{
    CheckpointRegistry, Easing, MovementBus, MovementListener, MovementResolved, SimError,
    TransitDriver,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn p(x: i32, y: i32, z: i32) -> GridPoint {
    GridPoint::new(x, y, z)
}

/// A straight 3-cell floor corridor along +z at y = 0.
fn corridor() -> Dungeon {
    let mut b = DungeonBuilder::new();
    for z in 0..3 {
        b.floor_node(p(0, 0, z));
    }
    b.build()
}

/// Resolve one forward step from the south end of the corridor.
fn forward_step(dungeon: &Dungeon, entity: EntityId) -> MovementInterpretation {
    let profile = EntityProfile::walker(entity);
    let pose = Pose {
        coords:  p(0, 0, 0),
        anchor:  Some(Direction::Down),
        look:    Direction::North,
        falling: false,
    };
    Interpreter::new(dungeon, &SoloOccupancy)
        .interpret(&profile, &pose, Movement::Forward, false)
        .unwrap()
}

fn resolved(entity: EntityId, interpretation: MovementInterpretation) -> MovementResolved {
    MovementResolved {
        entity,
        interpretation,
        tick: Tick::ZERO,
        duration_ticks: 2,
        forced: false,
        easing: None,
    }
}

// ── Easing ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod easing {
    use super::*;

    #[test]
    fn all_curves_pin_the_endpoints() {
        for e in [Easing::Linear, Easing::SmoothStep, Easing::EaseOut] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
        }
    }

    #[test]
    fn curve_shapes() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::SmoothStep.apply(0.5), 0.5);
        assert_eq!(Easing::SmoothStep.apply(0.25), 0.15625);
        assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    }

    #[test]
    fn out_of_range_progress_clamps() {
        assert_eq!(Easing::SmoothStep.apply(-1.0), 0.0);
        assert_eq!(Easing::SmoothStep.apply(2.0), 1.0);
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use super::*;

    #[test]
    fn record_overwrites_and_remove_forgets() {
        let dungeon = corridor();
        let itp = forward_step(&dungeon, EntityId(1));
        let mut reg = CheckpointRegistry::new();

        reg.record(EntityId(1), *itp.origin());
        reg.record(EntityId(1), *itp.destination());
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(EntityId(1)), Some(itp.destination()));

        assert_eq!(reg.remove(EntityId(1)), Some(*itp.destination()));
        assert!(reg.is_empty());
        assert_eq!(reg.get(EntityId(1)), None);
    }
}

// ── Bus ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bus {
    use super::*;

    /// Appends its tag to a shared journal on every callback.
    struct Tagged {
        tag:     &'static str,
        journal: Rc<RefCell<Vec<String>>>,
    }

    impl MovementListener for Tagged {
        fn on_movement_resolved(&mut self, event: &MovementResolved) {
            self.journal
                .borrow_mut()
                .push(format!("{}:resolved:{}", self.tag, event.entity));
        }

        fn on_movement_completed(&mut self, entity: EntityId, _tick: Tick) {
            self.journal
                .borrow_mut()
                .push(format!("{}:completed:{entity}", self.tag));
        }
    }

    #[test]
    fn listeners_fire_once_in_registration_order() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut bus = MovementBus::new();
        bus.register(Box::new(Tagged { tag: "a", journal: Rc::clone(&journal) }));
        bus.register(Box::new(Tagged { tag: "b", journal: Rc::clone(&journal) }));
        assert_eq!(bus.listener_count(), 2);

        let dungeon = corridor();
        bus.publish(&resolved(EntityId(7), forward_step(&dungeon, EntityId(7))));
        bus.publish_completed(EntityId(7), Tick(2));

        assert_eq!(
            *journal.borrow(),
            vec![
                "a:resolved:EntityId(7)".to_string(),
                "b:resolved:EntityId(7)".to_string(),
                "a:completed:EntityId(7)".to_string(),
                "b:completed:EntityId(7)".to_string(),
            ]
        );
    }
}

// ── Transit driver ────────────────────────────────────────────────────────────

#[cfg(test)]
mod transit {
    use super::*;

    struct World {
        dungeon:  Dungeon,
        driver:   TransitDriver,
        bus:      MovementBus,
        registry: CheckpointRegistry,
    }

    /// A corridor with `entity` standing and registered at the south end.
    fn world(entity: EntityId) -> World {
        let mut dungeon = corridor();
        dungeon
            .node_at_mut(p(0, 0, 0))
            .unwrap()
            .add_occupant(entity, &SoloOccupancy);
        World {
            dungeon,
            driver: TransitDriver::new(),
            bus: MovementBus::new(),
            registry: CheckpointRegistry::new(),
        }
    }

    #[test]
    fn begin_reserves_the_crossed_nodes() {
        let e = EntityId(1);
        let mut w = world(e);
        let itp = forward_step(&w.dungeon, e);

        w.driver.begin(&mut w.dungeon, &mut w.bus, resolved(e, itp)).unwrap();

        assert!(w.driver.is_in_transit(e));
        assert_eq!(w.dungeon.node_at(p(0, 0, 1)).unwrap().reservations(), &[e]);
        // The origin keeps plain occupancy, no self-reservation.
        assert!(w.dungeon.node_at(p(0, 0, 0)).unwrap().reservations().is_empty());
    }

    #[test]
    fn begin_twice_is_an_error() {
        let e = EntityId(1);
        let mut w = world(e);
        let itp = forward_step(&w.dungeon, e);

        w.driver
            .begin(&mut w.dungeon, &mut w.bus, resolved(e, itp.clone()))
            .unwrap();
        assert!(matches!(
            w.driver.begin(&mut w.dungeon, &mut w.bus, resolved(e, itp)),
            Err(SimError::AlreadyInTransit(_))
        ));
    }

    #[test]
    fn begin_rejects_an_empty_path() {
        let e = EntityId(1);
        let mut w = world(e);
        let mut itp = forward_step(&w.dungeon, e);
        itp.steps.clear();

        assert!(matches!(
            w.driver.begin(&mut w.dungeon, &mut w.bus, resolved(e, itp)),
            Err(SimError::Move(MoveError::EmptyInterpretation))
        ));
        assert!(!w.driver.is_in_transit(e));
    }

    #[test]
    fn progress_applies_the_easing() {
        let e = EntityId(1);
        let mut w = world(e);
        let itp = forward_step(&w.dungeon, e);
        let mut event = resolved(e, itp);
        event.duration_ticks = 4;
        event.easing = Some(Easing::SmoothStep);

        w.driver.begin(&mut w.dungeon, &mut w.bus, event).unwrap();

        assert_eq!(w.driver.progress(e, Tick(0)), Some(0.0));
        assert_eq!(w.driver.progress(e, Tick(1)), Some(0.15625));
        assert_eq!(w.driver.progress(e, Tick(4)), Some(1.0));
        // Past the end the flight stays pinned until completed.
        assert_eq!(w.driver.progress(e, Tick(9)), Some(1.0));
        assert_eq!(w.driver.progress(EntityId(2), Tick(1)), None);
    }

    #[test]
    fn complete_migrates_occupancy_and_releases() {
        let e = EntityId(1);
        let mut w = world(e);
        let itp = forward_step(&w.dungeon, e);
        let destination = *itp.destination();

        w.driver.begin(&mut w.dungeon, &mut w.bus, resolved(e, itp)).unwrap();
        let snapped = w
            .driver
            .complete(&mut w.dungeon, &SoloOccupancy, &mut w.registry, &mut w.bus, e, Tick(2))
            .unwrap();

        assert_eq!(snapped, destination);
        assert!(!w.driver.is_in_transit(e));
        assert!(w.dungeon.node_at(p(0, 0, 0)).unwrap().occupants().is_empty());
        assert_eq!(w.dungeon.node_at(p(0, 0, 1)).unwrap().occupants(), &[e]);
        assert!(w.dungeon.node_at(p(0, 0, 1)).unwrap().reservations().is_empty());
        assert_eq!(w.registry.get(e), Some(&destination));
    }

    #[test]
    fn complete_without_begin_is_an_error() {
        let e = EntityId(1);
        let mut w = world(e);
        assert!(matches!(
            w.driver
                .complete(&mut w.dungeon, &SoloOccupancy, &mut w.registry, &mut w.bus, e, Tick(0)),
            Err(SimError::NotInTransit(_))
        ));
    }

    #[test]
    fn abandon_snaps_forward_and_releases_everything() {
        let e = EntityId(1);
        let mut w = world(e);
        let itp = forward_step(&w.dungeon, e);
        let destination = *itp.destination();

        w.driver.begin(&mut w.dungeon, &mut w.bus, resolved(e, itp)).unwrap();
        // Halfway through the 2-tick flight: the interpolation sits midway
        // along the only segment, so the snap rounds onto the destination —
        // never back to the origin.
        let snapped = w
            .driver
            .abandon(&mut w.dungeon, &SoloOccupancy, &mut w.registry, &mut w.bus, e, Tick(1))
            .unwrap();

        assert_eq!(snapped, destination);
        assert!(!w.driver.is_in_transit(e));
        assert_eq!(w.dungeon.node_at(p(0, 0, 1)).unwrap().occupants(), &[e]);
        assert!(w.dungeon.node_at(p(0, 0, 1)).unwrap().reservations().is_empty());
        assert!(w.dungeon.node_at(p(0, 0, 0)).unwrap().occupants().is_empty());
        assert_eq!(w.registry.get(e), Some(&destination));
    }

    #[test]
    fn abandon_at_the_start_stays_on_the_origin() {
        let e = EntityId(1);
        let mut w = world(e);
        let itp = forward_step(&w.dungeon, e);
        let origin = *itp.origin();

        w.driver.begin(&mut w.dungeon, &mut w.bus, resolved(e, itp)).unwrap();
        let snapped = w
            .driver
            .abandon(&mut w.dungeon, &SoloOccupancy, &mut w.registry, &mut w.bus, e, Tick(0))
            .unwrap();

        assert_eq!(snapped, origin);
        assert_eq!(w.dungeon.node_at(p(0, 0, 0)).unwrap().occupants(), &[e]);
        assert!(w.dungeon.node_at(p(0, 0, 1)).unwrap().occupants().is_empty());
        // The reservation on the never-reached node is released all the same.
        assert!(w.dungeon.node_at(p(0, 0, 1)).unwrap().reservations().is_empty());
    }
}
