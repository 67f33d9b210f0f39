//! Per-epoch communication graph construction.
//!
//! For every unordered node pair the builder runs the line-of-sight and
//! zenith tests, weights admissible links with the QKD-inspired metric and
//! fills a symmetric weight matrix; nonzero entries become edges of a
//! petgraph graph ready for shortest-path routing.

use crate::geometry::{line_of_sight_km, zenith_cosine};
use crate::{GraphError, NodePartitions, Result, LOS_CLEARANCE_FACTOR, NEGATIVE_WEIGHT_SENTINEL};
use nalgebra::Vector3;
use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

/// Link admissibility and weighting parameters, fixed for one evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinkModel {
    /// Minimum line-of-sight clearance (km): 1.05 planet radii.
    pub los_clearance_km: f64,
    /// Cosine of the maximum zenith angle for a rover-facing link (60 deg).
    pub min_zenith_cos: f64,
    /// Quality indicator of each Walker shell.
    pub quality: (f64, f64),
}

impl LinkModel {
    pub fn new(planet_radius_km: f64, quality: (f64, f64)) -> Self {
        Self {
            los_clearance_km: LOS_CLEARANCE_FACTOR * planet_radius_km,
            min_zenith_cos: FRAC_PI_3.cos(),
            quality,
        }
    }
}

/// The communication graph of a single epoch.
pub struct EpochGraph {
    /// Node weights are position-tensor indices; edge weights are link costs.
    pub graph: UnGraph<usize, f64>,
    /// Raw symmetric weight matrix, row-major, 0 = no edge.
    weights: Vec<f64>,
    nodes: usize,
    /// Smallest link distance among admissible pairs this epoch (km).
    pub min_link_km: f64,
}

impl EpochGraph {
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.nodes + j]
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }
}

/// Build the weighted visibility graph for one epoch.
///
/// `positions` is the epoch's slice of the position tensor and must follow
/// the partition order exactly.
pub fn build_epoch_graph(
    positions: &[Vector3<f64>],
    parts: &NodePartitions,
    model: &LinkModel,
) -> Result<EpochGraph> {
    let n = parts.total();
    if positions.len() != n {
        return Err(GraphError::NodeCountMismatch {
            expected: n,
            actual: positions.len(),
        });
    }

    let mut graph = UnGraph::with_capacity(n, 4 * n);
    let nodes: Vec<_> = (0..n).map(|i| graph.add_node(i)).collect();
    let mut weights = vec![0.0; n * n];
    let mut min_link_km = f64::INFINITY;

    for i in 0..n {
        for j in 0..i {
            let los = line_of_sight_km(&positions[i], &positions[j]);
            let cos_theta_z = zenith_cosine(&positions[i], &positions[j]);

            if los >= model.los_clearance_km || cos_theta_z > 0.0 {
                // The quality indicator follows the destination side j of
                // the traversal: walker-1 range or not.
                let eta = if parts.in_walker1(j) {
                    model.quality.0
                } else {
                    model.quality.1
                };
                let (weight, d_link) = link_weight(
                    model,
                    parts.is_terminal(i),
                    &positions[i],
                    &positions[j],
                    cos_theta_z,
                    eta,
                );
                if d_link < min_link_km {
                    min_link_km = d_link;
                }
                weights[i * n + j] = weight;
                weights[j * n + i] = weight;
                if weight > 0.0 {
                    graph.add_edge(nodes[i], nodes[j], weight);
                }
            }
        }
    }

    Ok(EpochGraph {
        graph,
        weights,
        nodes: n,
        min_link_km,
    })
}

/// QKD-inspired edge weight and link distance for one admissible pair.
fn link_weight(
    model: &LinkModel,
    terminal_src: bool,
    src: &Vector3<f64>,
    dst: &Vector3<f64>,
    cos_theta_z: f64,
    eta: f64,
) -> (f64, f64) {
    let d_link = (src - dst).norm();
    let mut weight = -eta.ln() + 2.0 * d_link.ln();
    if weight < 0.0 {
        // Only happens when the pair also violates the separation
        // constraint; the sentinel keeps the weight non-negative for
        // Dijkstra.
        weight = NEGATIVE_WEIGHT_SENTINEL;
    }

    if terminal_src {
        if cos_theta_z >= model.min_zenith_cos {
            weight += 1.0 / (FRAC_PI_2 - cos_theta_z.acos()).sin();
        } else {
            weight = 0.0;
        }
    }
    (weight, d_link)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinkModel {
        LinkModel::new(6378.137, (55.0, 15.0))
    }

    #[test]
    fn close_pair_clamps_to_the_sentinel() {
        // 5 km apart: -ln(55) + 2 ln(5) < 0, so the weight must be exactly
        // the 1000.0 sentinel.
        let positions = [
            Vector3::new(12_000.0, 0.0, 0.0),
            Vector3::new(12_000.0, 5.0, 0.0),
        ];
        let parts = NodePartitions::new(2, 0, 0, 0);
        let epoch = build_epoch_graph(&positions, &parts, &model()).unwrap();
        assert_eq!(epoch.weight(0, 1), NEGATIVE_WEIGHT_SENTINEL);
        assert_eq!(epoch.weight(1, 0), NEGATIVE_WEIGHT_SENTINEL);
        assert_eq!(epoch.min_link_km, 5.0);
    }

    #[test]
    fn occluded_pair_gets_no_edge() {
        // Opposite sides of the planet, both looking through it.
        let positions = [
            Vector3::new(12_000.0, 0.0, 0.0),
            Vector3::new(-12_000.0, 0.0, 0.0),
        ];
        let parts = NodePartitions::new(2, 0, 0, 0);
        let epoch = build_epoch_graph(&positions, &parts, &model()).unwrap();
        assert_eq!(epoch.weight(0, 1), 0.0);
        assert_eq!(epoch.graph.edge_count(), 0);
    }

    #[test]
    fn weight_matrix_is_symmetric() {
        let positions = [
            Vector3::new(12_000.0, 0.0, 0.0),
            Vector3::new(0.0, 12_000.0, 0.0),
            Vector3::new(0.0, 0.0, 12_000.0),
        ];
        let parts = NodePartitions::new(2, 1, 0, 0);
        let epoch = build_epoch_graph(&positions, &parts, &model()).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(epoch.weight(i, j), epoch.weight(j, i));
            }
        }
        assert_eq!(epoch.graph.edge_count(), 3);
    }

    #[test]
    fn quality_lookup_follows_the_lower_index() {
        // Pair (walker-2 sat, walker-1 sat): j lands in walker-1, so the
        // weight uses eta1 = 55.
        let positions = [
            Vector3::new(12_000.0, 0.0, 0.0),
            Vector3::new(0.0, 12_000.0, 0.0),
        ];
        let parts = NodePartitions::new(1, 1, 0, 0);
        let epoch = build_epoch_graph(&positions, &parts, &model()).unwrap();
        let d = (positions[0] - positions[1]).norm();
        let expected = -55.0f64.ln() + 2.0 * d.ln();
        assert!((epoch.weight(1, 0) - expected).abs() < 1e-12);
    }

    #[test]
    fn overhead_rover_link_carries_the_zenith_penalty() {
        // Satellite directly above the rover: cos(theta_z) = 1, penalty
        // 1/sin(pi/2) = 1.
        let positions = [
            Vector3::new(12_000.0, 0.0, 0.0),
            Vector3::new(6378.137, 0.0, 0.0),
        ];
        let parts = NodePartitions::new(1, 0, 0, 1);
        let epoch = build_epoch_graph(&positions, &parts, &model()).unwrap();
        let d = (positions[0] - positions[1]).norm();
        let expected = -55.0f64.ln() + 2.0 * d.ln() + 1.0;
        assert!((epoch.weight(1, 0) - expected).abs() < 1e-12);
    }

    #[test]
    fn shallow_rover_link_is_rejected_but_still_measured() {
        // Visible but more than 60 degrees off zenith: the edge is dropped,
        // yet its distance still feeds the separation tracking.
        let positions = [
            Vector3::new(8000.0, 8000.0, 0.0),
            Vector3::new(6378.137, 0.0, 0.0),
        ];
        let parts = NodePartitions::new(1, 0, 0, 1);
        let epoch = build_epoch_graph(&positions, &parts, &model()).unwrap();
        assert_eq!(epoch.weight(1, 0), 0.0);
        assert_eq!(epoch.graph.edge_count(), 0);
        let d = (positions[0] - positions[1]).norm();
        assert_eq!(epoch.min_link_km, d);
    }

    #[test]
    fn node_count_mismatch_is_an_error() {
        let positions = [Vector3::new(12_000.0, 0.0, 0.0)];
        let parts = NodePartitions::new(2, 0, 0, 0);
        assert!(build_epoch_graph(&positions, &parts, &model()).is_err());
    }
}
