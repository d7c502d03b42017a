//! Bounded breadth-first reachability over the node graph.
//!
//! Area and zone features (spell templates, noise propagation, room
//! detection) all need "every cell reachable within N steps under some
//! passability rule".  `FloodFill` provides that as a lazy iterator so
//! callers stop pulling once they have what they need.
//!
//! # Exploration pattern
//!
//! From each visited coordinate the fill probes the six cardinal neighbours
//! (filter tested on the primary hop) and, through each passable cardinal,
//! the diagonals formed with every non-parallel secondary direction (filter
//! tested again on the secondary hop).  A diagonal is therefore reachable
//! only if some two-hop route to it passes the filter at both hops.
//!
//! # Guarantees
//!
//! - each coordinate is yielded exactly once per call;
//! - depth 0 yields only the origin;
//! - yields come out in breadth-first (ascending-depth) order.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use dc_core::{Direction, GridPoint};

use crate::{Dungeon, Node};

/// Lazy breadth-first traversal; see the module doc.
///
/// The filter decides whether a hop `from → to` along `direction` is
/// traversable for the caller's purpose.
pub struct FloodFill<'a, F>
where
    F: FnMut(&Node, Direction, &Node) -> bool,
{
    dungeon:   &'a Dungeon,
    filter:    F,
    max_depth: u32,
    visited:   FxHashSet<GridPoint>,
    queue:     VecDeque<(GridPoint, u32)>,
}

impl<'a, F> FloodFill<'a, F>
where
    F: FnMut(&Node, Direction, &Node) -> bool,
{
    /// A fill from `origin`, exploring at most `max_depth` rings outward.
    pub fn new(dungeon: &'a Dungeon, origin: GridPoint, max_depth: u32, filter: F) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(origin);
        let mut queue = VecDeque::new();
        queue.push_back((origin, 0));
        Self { dungeon, filter, max_depth, visited, queue }
    }

    /// Enqueue `to` at `depth` unless already seen.
    fn discover(&mut self, to: GridPoint, depth: u32) {
        if self.visited.insert(to) {
            self.queue.push_back((to, depth));
        }
    }

    /// Probe all hops out of `at`, enqueueing what passes the filter.
    fn expand(&mut self, at: GridPoint, depth: u32) {
        let Some(from) = self.dungeon.node_at(at) else {
            return;
        };

        for primary in Direction::ALL {
            let mid_coords = at.neighbor(primary);
            let Some(mid) = self.dungeon.node_at(mid_coords) else {
                continue;
            };
            if !(self.filter)(from, primary, mid) {
                continue;
            }
            self.discover(mid_coords, depth + 1);

            for secondary in Direction::ALL {
                if secondary.axis() == primary.axis() {
                    continue;
                }
                let diag_coords = mid_coords.neighbor(secondary);
                if self.visited.contains(&diag_coords) {
                    continue;
                }
                let Some(diag) = self.dungeon.node_at(diag_coords) else {
                    continue;
                };
                if (self.filter)(mid, secondary, diag) {
                    self.discover(diag_coords, depth + 1);
                }
            }
        }
    }
}

impl<'a, F> Iterator for FloodFill<'a, F>
where
    F: FnMut(&Node, Direction, &Node) -> bool,
{
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        let (at, depth) = self.queue.pop_front()?;
        if depth < self.max_depth {
            self.expand(at, depth);
        }
        Some(at)
    }
}
