//! `dc-core` — foundational types for the `rust_dc` dungeon-crawler framework.
//!
//! This crate is a dependency of every other `dc-*` crate.  It intentionally
//! has no `dc-*` dependencies and minimal external ones (only optional
//! `serde`); every API here is total, so it carries no error type.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`direction`] | `Direction`, `Axis` — 6-way cube-face algebra           |
//! | [`coords`]    | `GridPoint` (integer cell address), `WorldVec` (f32)    |
//! | [`transport`] | `TransportMode` bit flags                               |
//! | [`entity`]    | `Abilities`, `EntityProfile`                            |
//! | [`ids`]       | `EntityId`                                              |
//! | [`time`]      | `Tick`                                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.     |

pub mod coords;
pub mod direction;
pub mod entity;
pub mod ids;
pub mod time;
pub mod transport;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coords::{GridPoint, WorldVec};
pub use direction::{Axis, Direction};
pub use entity::{Abilities, EntityProfile};
pub use ids::EntityId;
pub use time::Tick;
pub use transport::TransportMode;
