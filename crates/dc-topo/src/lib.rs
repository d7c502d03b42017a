//! `dc-topo` — the static and semi-static world model of the `rust_dc`
//! framework: grid nodes, cube-face anchors, occupancy/reservation, the node
//! transition protocol, and bounded flood fill.
//!
//! # What lives here
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`anchor`]     | `Anchor`, `EdgeProfile`, `LookConstraint`            |
//! | [`node`]       | `Node`, `FaceKind`                                   |
//! | [`rules`]      | `OccupancyRules` trait, `SoloOccupancy`              |
//! | [`dungeon`]    | `Dungeon` map, `DungeonBuilder`                      |
//! | [`transition`] | `MovementOutcome`, `Transition`, `allows_transition` |
//! | [`floodfill`]  | lazy breadth-first `FloodFill` iterator              |
//! | [`error`]      | `TopoError`, `TopoResult`                            |

pub mod anchor;
pub mod dungeon;
pub mod error;
pub mod floodfill;
pub mod node;
pub mod rules;
pub mod transition;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use anchor::{Anchor, EdgeProfile, LookConstraint};
pub use dungeon::{Dungeon, DungeonBuilder};
pub use error::{TopoError, TopoResult};
pub use floodfill::FloodFill;
pub use node::{FaceKind, Node};
pub use rules::{OccupancyRules, SoloOccupancy};
pub use transition::{MovementOutcome, Transition};
