//! Pluggable occupancy policy.
//!
//! The framework decides *where* entities may go; games decide *who* may
//! share a cell and what happens when they meet.  Implement this trait to
//! supply that policy (party members stacking, ethereal monsters, pushable
//! props).

use dc_core::EntityId;

/// Policy hooks consulted by node occupancy and the transition protocol.
pub trait OccupancyRules {
    /// May `a` and `b` occupy (or pass through) the same node?
    fn may_coexist(&self, a: EntityId, b: EntityId) -> bool;

    /// Called when `arriving` joins a node `present` already occupies.
    fn handle_meeting(&self, _arriving: EntityId, _present: EntityId) {}

    /// Called when `leaving` departs a node `present` still occupies.
    fn handle_departure(&self, _leaving: EntityId, _present: EntityId) {}
}

/// The strictest policy: one entity per node, no exceptions.
pub struct SoloOccupancy;

impl OccupancyRules for SoloOccupancy {
    fn may_coexist(&self, _a: EntityId, _b: EntityId) -> bool {
        false
    }
}
