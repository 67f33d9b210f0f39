//! Design Fitness - quality evaluation of New Mars relay network designs
//!
//! Turns a 20-gene design vector (two Walker shells plus four rover site
//! selections) into the fitness 4-vector consumed by an external
//! multi-objective search:
//!
//! ```text
//! [ comms cost, infrastructure cost, rover separation, satellite separation ]
//! ```
//!
//! Objectives are minimized; a constraint value <= 0 means satisfied.

use std::f64::consts::{PI, TAU};
use thiserror::Error;

pub mod chromosome;
pub mod evaluator;
pub mod score;
pub mod sites;

pub use chromosome::{DesignVector, ShellGenes, EXAMPLE_CHROMOSOME};
pub use evaluator::{Fitness, NetworkDesignProblem};
pub use score::combine_scores;
pub use sites::SiteTable;

/// Fixed length of the design vector.
pub const GENE_COUNT: usize = 20;

/// Number of integer-valued genes (S/P/F per shell plus four site indices).
pub const INTEGER_GENE_COUNT: usize = 10;

/// Rovers selected per design.
pub const TERMINAL_COUNT: usize = 4;

/// Minimum great-circle distance between any two selected rovers (km).
pub const MIN_TERMINAL_SEPARATION_KM: f64 = 3000.0;

/// Minimum distance between any two network nodes at any epoch (km).
pub const MIN_SATELLITE_SEPARATION_KM: f64 = 50.0;

/// Normalization constant for the communications cost objective.
pub const COMMS_COST_NORMALIZER: f64 = 34.0;

/// Normalization constant for the infrastructure cost objective.
pub const INFRA_COST_NORMALIZER: f64 = 1.0e5;

/// Reference point for hypervolume score aggregation.
pub const HV_REFERENCE_POINT: [f64; 2] = [1.2, 1.4];

#[derive(Error, Debug)]
pub enum FitnessError {
    #[error("Design vector must have {GENE_COUNT} genes, got {0}")]
    InvalidGeneCount(usize),
    #[error("Rover site index {index} outside table of {rows} rows")]
    SiteIndexOutOfRange { index: usize, rows: usize },
    #[error("Site table parse error at line {line}: {reason}")]
    SiteTableParse { line: usize, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Dynamics(#[from] constellation_dynamics::DynamicsError),
    #[error(transparent)]
    Graph(#[from] relay_graph::GraphError),
}

pub type Result<T> = std::result::Result<T, FitnessError>;

/// Lower and upper bounds of the 20 genes, for the external optimizer.
///
/// Layout: `[a1,e1,i1,w1,eta1, a2,e2,i2,w2,eta2, S1,P1,F1, S2,P2,F2,
/// r1,r2,r3,r4]`. The last ten genes are integer-valued.
pub fn gene_bounds() -> ([f64; GENE_COUNT], [f64; GENE_COUNT]) {
    let lower = [
        1.06, 0.0, 0.0, 0.0, 1.0, // shell 1 orbit + quality
        2.0, 0.0, 0.0, 0.0, 1.0, // shell 2 orbit + quality
        4.0, 2.0, 0.0, // shell 1 S/P/F
        4.0, 2.0, 0.0, // shell 2 S/P/F
        0.0, 0.0, 0.0, 0.0, // rover site indices
    ];
    let upper = [
        1.8, 0.02, PI, TAU, 1000.0, //
        3.5, 0.1, PI, TAU, 1000.0, //
        10.0, 10.0, 9.0, //
        10.0, 10.0, 9.0, //
        99.0, 99.0, 99.0, 99.0,
    ];
    (lower, upper)
}

/// Number of objectives in the fitness vector.
pub const OBJECTIVE_COUNT: usize = 2;

/// Number of inequality constraints in the fitness vector.
pub const CONSTRAINT_COUNT: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_every_gene() {
        let (lower, upper) = gene_bounds();
        for g in 0..GENE_COUNT {
            assert!(lower[g] <= upper[g], "gene {}", g);
        }
    }

    #[test]
    fn example_chromosome_sits_inside_the_bounds() {
        let (lower, upper) = gene_bounds();
        for (g, &x) in EXAMPLE_CHROMOSOME.iter().enumerate() {
            assert!(lower[g] <= x && x <= upper[g], "gene {} = {}", g, x);
        }
    }
}
