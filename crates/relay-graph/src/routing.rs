//! Relay routing cost over the mothership and rover partitions.

use crate::{EpochGraph, NodePartitions, NO_PATH_PENALTY};
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;
use tracing::debug;

/// Average shortest-path cost over every (mothership, rover) pair of one
/// epoch's graph.
///
/// A pair with no connecting path is a normal outcome and contributes
/// exactly [`NO_PATH_PENALTY`].
pub fn average_relay_cost(epoch: &EpochGraph, parts: &NodePartitions) -> f64 {
    let relays = parts.relays();
    let terminals = parts.terminals();
    let pair_count = (relays.len() * terminals.len()) as f64;

    let mut total = 0.0;
    for src in relays {
        let costs = dijkstra(&epoch.graph, NodeIndex::new(src), None, |e| *e.weight());
        for dst in terminals.clone() {
            match costs.get(&NodeIndex::new(dst)) {
                Some(cost) => total += cost,
                None => {
                    debug!(relay = src, rover = dst, "no relay path, charging penalty");
                    total += NO_PATH_PENALTY;
                }
            }
        }
    }
    total / pair_count
}
