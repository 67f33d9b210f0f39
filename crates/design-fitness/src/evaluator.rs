//! The network design problem and its fitness evaluation.
//!
//! Construction propagates the fixed mothership fleet once; the cached
//! positions are an immutable snapshot reused read-only by every
//! evaluation, so one constructed problem can serve concurrent callers.

use crate::chromosome::DesignVector;
use crate::sites::SiteTable;
use crate::{
    Result, COMMS_COST_NORMALIZER, INFRA_COST_NORMALIZER, MIN_SATELLITE_SEPARATION_KM,
    MIN_TERMINAL_SEPARATION_KM, TERMINAL_COUNT,
};
use constellation_dynamics::{
    mothership_elements, propagate_elements, rover_positions, RoverSite, TimeGrid,
    PLANET_RADIUS_KM,
};
use nalgebra::Vector3;
use relay_graph::{average_relay_cost, build_epoch_graph, LinkModel, NodePartitions};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The fitness 4-vector of one design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fitness {
    /// Objective 1: epoch-averaged relay cost, normalized.
    pub comms_cost: f64,
    /// Objective 2: quality-weighted satellite count, normalized.
    pub infra_cost: f64,
    /// Constraint 1: rover separation violation (<= 0 satisfied).
    pub terminal_separation: f64,
    /// Constraint 2: satellite separation violation (<= 0 satisfied).
    pub satellite_separation: f64,
}

impl Fitness {
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.comms_cost,
            self.infra_cost,
            self.terminal_separation,
            self.satellite_separation,
        ]
    }

    pub fn constraints_satisfied(&self) -> bool {
        self.terminal_separation <= 0.0 && self.satellite_separation <= 0.0
    }
}

/// The relay network design problem over the standard ten-year grid.
pub struct NetworkDesignProblem {
    grid: TimeGrid,
    sites: SiteTable,
    /// Mothership positions `[relay][epoch]`, propagated once and never
    /// mutated afterwards.
    relay_positions: Vec<Vec<Vector3<f64>>>,
}

impl NetworkDesignProblem {
    pub fn new(sites: SiteTable) -> Result<Self> {
        let grid = TimeGrid::standard();
        let fleet = mothership_elements()?;
        let relay_positions = propagate_elements(&fleet, &grid)?;
        Ok(Self {
            grid,
            sites,
            relay_positions,
        })
    }

    pub fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn sites(&self) -> &SiteTable {
        &self.sites
    }

    /// Decode a flat gene slice and evaluate it.
    pub fn evaluate_genes(&self, genes: &[f64]) -> Result<Fitness> {
        self.evaluate(&DesignVector::from_genes(genes)?)
    }

    /// Evaluate one design: propagate both shells, build the per-epoch
    /// communication graphs, and assemble objectives and constraints.
    ///
    /// Propagation failure aborts with no partial result.
    pub fn evaluate(&self, design: &DesignVector) -> Result<Fitness> {
        let epoch0 = self.grid.start();
        let walker1 =
            propagate_elements(&design.shell1.walker_shell().elements(epoch0), &self.grid)?;
        let walker2 =
            propagate_elements(&design.shell2.walker_shell().elements(epoch0), &self.grid)?;

        let terminals = self.sites.select(&design.terminal_sites)?;
        let rovers = rover_positions(&terminals, &self.grid);

        let parts = NodePartitions::new(
            walker1.len(),
            walker2.len(),
            self.relay_positions.len(),
            rovers.len(),
        );

        // The ordered position tensor: walker 1, walker 2, relays, rovers.
        let mut positions: Vec<Vec<Vector3<f64>>> = Vec::with_capacity(parts.total());
        positions.extend(walker1);
        positions.extend(walker2);
        positions.extend(self.relay_positions.iter().cloned());
        positions.extend(rovers);

        let model = LinkModel::new(
            PLANET_RADIUS_KM,
            (design.shell1.quality, design.shell2.quality),
        );

        // Epoch 0 is the initialization snapshot and is excluded from the
        // aggregate.
        let mut total_cost = 0.0;
        let mut min_link_km = f64::INFINITY;
        for epoch in 1..self.grid.len() {
            let slice: Vec<Vector3<f64>> = positions.iter().map(|node| node[epoch]).collect();
            let epoch_graph = build_epoch_graph(&slice, &parts, &model)?;
            if epoch_graph.min_link_km < min_link_km {
                min_link_km = epoch_graph.min_link_km;
            }
            let cost = average_relay_cost(&epoch_graph, &parts);
            debug!(epoch, cost, "epoch relay cost");
            total_cost += cost;
        }
        let avg_cost = total_cost / (self.grid.len() - 1) as f64;

        let infra_cost = design.shell1.quality * design.shell1.satellite_count() as f64
            + design.shell2.quality * design.shell2.satellite_count() as f64;

        Ok(Fitness {
            comms_cost: avg_cost / COMMS_COST_NORMALIZER,
            infra_cost: infra_cost / INFRA_COST_NORMALIZER,
            terminal_separation: terminal_separation_violation(&terminals),
            satellite_separation: MIN_SATELLITE_SEPARATION_KM - min_link_km,
        })
    }
}

/// Rover siting constraint: required minimum great-circle separation minus
/// the smallest pairwise distance (<= 0 satisfied).
pub fn terminal_separation_violation(sites: &[RoverSite; TERMINAL_COUNT]) -> f64 {
    MIN_TERMINAL_SEPARATION_KM - min_terminal_distance_km(sites)
}

fn min_terminal_distance_km(sites: &[RoverSite; TERMINAL_COUNT]) -> f64 {
    let charts: Vec<Vector3<f64>> = sites
        .iter()
        .map(|s| {
            Vector3::new(
                s.latitude.sin() * s.longitude.cos(),
                s.latitude.cos() * s.longitude.cos(),
                s.longitude.sin(),
            )
        })
        .collect();

    let mut min_d = f64::INFINITY;
    for i in 0..charts.len() {
        for j in 0..i {
            let inner = charts[i].dot(&charts[j]).clamp(-1.0, 1.0);
            let d = PLANET_RADIUS_KM * inner.acos();
            if d < min_d {
                min_d = d;
            }
        }
    }
    min_d
}
