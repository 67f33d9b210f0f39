//! Relay Graph - per-epoch communication network of the New Mars relay fleet
//!
//! Builds, for one epoch at a time, the weighted visibility graph over all
//! network nodes (Walker shell satellites, mothership relays, surface
//! rovers) and aggregates mothership-to-rover shortest-path costs:
//!
//! - Line-of-sight occlusion against the planet body
//! - Zenith-angle gating and penalty for rover-facing links
//! - QKD-inspired edge weighting (quality indicator + distance)
//! - Dijkstra relay cost over the mothership/rover partitions

use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

pub mod builder;
pub mod geometry;
pub mod routing;

pub use builder::{build_epoch_graph, EpochGraph, LinkModel};
pub use routing::average_relay_cost;

/// Links must clear the body by this multiple of the planet radius.
pub const LOS_CLEARANCE_FACTOR: f64 = 1.05;

/// Sentinel replacing a negative edge weight from the cost formula.
///
/// A negative weight only arises when two nodes are close enough that the
/// separation constraint is already violated; the sentinel keeps the
/// shortest-path routine's non-negativity precondition intact.
pub const NEGATIVE_WEIGHT_SENTINEL: f64 = 1.0e3;

/// Path cost charged for a mothership/rover pair with no connecting path.
pub const NO_PATH_PENALTY: f64 = 1.0e4;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Position slice has {actual} nodes, partitions describe {expected}")]
    NodeCountMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Named node-index partitions of the position tensor.
///
/// The node order is load-bearing: Walker shell 1, Walker shell 2,
/// motherships, rovers. The partitions are computed once per evaluation and
/// threaded to every consumer instead of being re-derived from array
/// lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePartitions {
    walker1: usize,
    walker2: usize,
    relays: usize,
    terminals: usize,
}

impl NodePartitions {
    pub fn new(walker1: usize, walker2: usize, relays: usize, terminals: usize) -> Self {
        Self {
            walker1,
            walker2,
            relays,
            terminals,
        }
    }

    pub fn total(&self) -> usize {
        self.walker1 + self.walker2 + self.relays + self.terminals
    }

    pub fn walker1(&self) -> Range<usize> {
        0..self.walker1
    }

    pub fn walker2(&self) -> Range<usize> {
        self.walker1..self.walker1 + self.walker2
    }

    pub fn relays(&self) -> Range<usize> {
        let start = self.walker1 + self.walker2;
        start..start + self.relays
    }

    pub fn terminals(&self) -> Range<usize> {
        let start = self.walker1 + self.walker2 + self.relays;
        start..start + self.terminals
    }

    pub fn in_walker1(&self, node: usize) -> bool {
        node < self.walker1
    }

    pub fn is_terminal(&self, node: usize) -> bool {
        self.terminals().contains(&node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_ranges_tile_the_node_order() {
        let parts = NodePartitions::new(20, 20, 7, 4);
        assert_eq!(parts.total(), 51);
        assert_eq!(parts.walker1(), 0..20);
        assert_eq!(parts.walker2(), 20..40);
        assert_eq!(parts.relays(), 40..47);
        assert_eq!(parts.terminals(), 47..51);
    }

    #[test]
    fn terminal_test_matches_the_tail() {
        let parts = NodePartitions::new(3, 2, 7, 4);
        assert!(!parts.is_terminal(11));
        assert!(parts.is_terminal(12));
        assert!(parts.is_terminal(15));
        assert!(parts.in_walker1(2));
        assert!(!parts.in_walker1(3));
    }
}
