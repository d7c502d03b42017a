//! The transit driver: in-flight movements and the reserve/release
//! discipline around them.
//!
//! While a movement animates, every node its path crosses is provisionally
//! reserved so concurrent resolution treats those cells as occupied.  The
//! driver owns that discipline end to end:
//!
//! - [`begin`](TransitDriver::begin) reserves the crossed nodes and
//!   publishes the resolved movement on the bus;
//! - [`complete`](TransitDriver::complete) snaps to the final checkpoint,
//!   migrates occupancy, and releases every reservation;
//! - [`abandon`](TransitDriver::abandon) snaps to the nearest checkpoint of
//!   the current interpolation value — never back to the origin — and
//!   releases every outstanding reservation.
//!
//! Everything here is tick-serial and single-threaded; there is no locking
//! beyond the explicit reserve/release calls.

use rustc_hash::FxHashMap;

use dc_core::{EntityId, GridPoint, Tick};
use dc_move::{evaluate, Checkpoint, MoveError, MovementInterpretation};
use dc_topo::{Dungeon, OccupancyRules};

use crate::{CheckpointRegistry, Easing, MovementBus, MovementResolved, SimError, SimResult};

/// One movement currently animating.
struct InFlight {
    interpretation: MovementInterpretation,
    started:        Tick,
    duration_ticks: u64,
    easing:         Easing,

    /// Nodes this driver reserved at begin, released exactly once.
    reserved: Vec<GridPoint>,
}

/// Owns every in-flight movement of one world.
#[derive(Default)]
pub struct TransitDriver {
    flights: FxHashMap<EntityId, InFlight>,
}

impl TransitDriver {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_in_transit(&self, entity: EntityId) -> bool {
        self.flights.contains_key(&entity)
    }

    /// Start animating a resolved movement.
    ///
    /// Reserves every mapped node the path crosses beyond its origin, stores
    /// the flight, and publishes the event.  One flight per entity at a
    /// time.
    pub fn begin(
        &mut self,
        dungeon: &mut Dungeon,
        bus:     &mut MovementBus,
        event:   MovementResolved,
    ) -> SimResult<()> {
        if self.flights.contains_key(&event.entity) {
            return Err(SimError::AlreadyInTransit(event.entity));
        }
        if event.interpretation.steps.is_empty() {
            return Err(MoveError::EmptyInterpretation.into());
        }

        let origin = event.interpretation.origin().coords;
        let mut reserved: Vec<GridPoint> = Vec::new();
        for step in &event.interpretation.steps[1..] {
            let coords = step.checkpoint.coords;
            if coords == origin || reserved.contains(&coords) {
                continue;
            }
            if let Some(node) = dungeon.node_at_mut(coords) {
                node.reserve(event.entity);
                reserved.push(coords);
            }
        }

        bus.publish(&event);
        self.flights.insert(
            event.entity,
            InFlight {
                interpretation: event.interpretation,
                started:        event.tick,
                duration_ticks: event.duration_ticks,
                easing:         event.easing.unwrap_or_default(),
                reserved,
            },
        );
        Ok(())
    }

    /// Eased progress of an entity's flight at `now`, or `None` when it is
    /// not in transit.  Zero-duration flights are already done.
    pub fn progress(&self, entity: EntityId, now: Tick) -> Option<f32> {
        let flight = self.flights.get(&entity)?;
        Some(flight.easing.apply(flight.raw_progress(now)))
    }

    /// Finish a flight: snap to the final checkpoint, migrate occupancy,
    /// release every reservation, and notify the bus.
    pub fn complete(
        &mut self,
        dungeon:  &mut Dungeon,
        rules:    &dyn OccupancyRules,
        registry: &mut CheckpointRegistry,
        bus:      &mut MovementBus,
        entity:   EntityId,
        now:      Tick,
    ) -> SimResult<Checkpoint> {
        let flight = self
            .flights
            .remove(&entity)
            .ok_or(SimError::NotInTransit(entity))?;

        let destination = *flight.interpretation.destination();
        self.settle(dungeon, rules, registry, entity, &flight, destination);
        bus.publish_completed(entity, now);
        Ok(destination)
    }

    /// Cut a flight short: snap to the nearest checkpoint of the current
    /// interpolation value, release every outstanding reservation, and
    /// notify the bus.  The entity never rolls back to its origin.
    pub fn abandon(
        &mut self,
        dungeon:  &mut Dungeon,
        rules:    &dyn OccupancyRules,
        registry: &mut CheckpointRegistry,
        bus:      &mut MovementBus,
        entity:   EntityId,
        now:      Tick,
    ) -> SimResult<Checkpoint> {
        let flight = self
            .flights
            .remove(&entity)
            .ok_or(SimError::NotInTransit(entity))?;

        let eased = flight.easing.apply(flight.raw_progress(now));
        let sample = evaluate(dungeon, &flight.interpretation, eased)?;
        let index = if sample.step_progress >= 0.5 {
            sample.checkpoint + 1
        } else {
            sample.checkpoint
        };
        let snapped = flight.interpretation.steps[index].checkpoint;

        self.settle(dungeon, rules, registry, entity, &flight, snapped);
        bus.publish_abandoned(entity, now);
        Ok(snapped)
    }

    /// Move the entity's committed state to `at` and release the flight's
    /// reservations.
    fn settle(
        &self,
        dungeon:  &mut Dungeon,
        rules:    &dyn OccupancyRules,
        registry: &mut CheckpointRegistry,
        entity:   EntityId,
        flight:   &InFlight,
        at:       Checkpoint,
    ) {
        for &coords in &flight.reserved {
            if let Some(node) = dungeon.node_at_mut(coords) {
                node.remove_reservation(entity);
            }
        }

        let origin = flight.interpretation.origin().coords;
        if origin != at.coords {
            match dungeon.node_at_mut(origin) {
                Some(node) => {
                    node.remove_occupant(entity, rules);
                }
                None => log::warn!("transit origin {origin} is not in the map"),
            }
            if let Some(node) = dungeon.node_at_mut(at.coords) {
                node.add_occupant(entity, rules);
            }
        }

        registry.record(entity, at);
    }
}

impl InFlight {
    fn raw_progress(&self, now: Tick) -> f32 {
        if self.duration_ticks == 0 {
            return 1.0;
        }
        let elapsed = now.since(self.started) as f32;
        (elapsed / self.duration_ticks as f32).clamp(0.0, 1.0)
    }
}
