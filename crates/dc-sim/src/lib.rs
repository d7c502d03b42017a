//! `dc-sim` — tick-driven integration surface for the `rust_dc`
//! dungeon-crawler framework.
//!
//! The lower crates are pure: `dc-move` turns requests into checkpoint
//! paths without touching any state.  This crate supplies the stateful shell
//! a game loop plugs into — who stands where, which movements are animating,
//! and who gets told about them.
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`registry`] | `CheckpointRegistry` — committed checkpoint per entity |
//! | [`bus`]      | `MovementBus`, `MovementListener`, `MovementResolved`, `Easing` |
//! | [`transit`]  | `TransitDriver` — in-flight movements, reserve/release |
//! | [`error`]    | `SimError`, `SimResult`                                |

pub mod bus;
pub mod error;
pub mod registry;
pub mod transit;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bus::{Easing, MovementBus, MovementListener, MovementResolved};
pub use error::{SimError, SimResult};
pub use registry::CheckpointRegistry;
pub use transit::TransitDriver;
