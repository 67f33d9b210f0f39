//! Design vector decoding.
//!
//! The flat 20-gene layout is fixed:
//! `[a1,e1,i1,w1,eta1, a2,e2,i2,w2,eta2, S1,P1,F1, S2,P2,F2, r1,r2,r3,r4]`.
//! Bounds are the external optimizer's responsibility; decoding only checks
//! the gene count and truncates the integer-valued genes.

use crate::{FitnessError, Result, GENE_COUNT, TERMINAL_COUNT};
use constellation_dynamics::WalkerShell;
use serde::{Deserialize, Serialize};

/// The reference design: two 10x2 shells and four well-spread rover sites.
pub const EXAMPLE_CHROMOSOME: [f64; GENE_COUNT] = [
    1.8, 0.0, 1.2, 0.0, 55.0, // shell 1
    2.3, 0.0, 1.2, 0.0, 15.0, // shell 2
    10.0, 2.0, 1.0, // S1, P1, F1
    10.0, 2.0, 1.0, // S2, P2, F2
    13.0, 21.0, 34.0, 55.0, // rover site indices
];

/// Genes of one Walker shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShellGenes {
    /// Semi-major axis in planet radii.
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Inclination (radians).
    pub inclination: f64,
    /// Argument of perigee (radians).
    pub arg_perigee: f64,
    /// Quality indicator eta of every satellite in the shell.
    pub quality: f64,
    pub sats_per_plane: u32,
    pub planes: u32,
    pub phasing: u32,
}

impl ShellGenes {
    pub fn satellite_count(&self) -> usize {
        (self.sats_per_plane * self.planes) as usize
    }

    pub fn walker_shell(&self) -> WalkerShell {
        WalkerShell {
            sats_per_plane: self.sats_per_plane,
            planes: self.planes,
            phasing: self.phasing,
            semi_major_axis: self.semi_major_axis,
            eccentricity: self.eccentricity,
            inclination: self.inclination,
            arg_perigee: self.arg_perigee,
        }
    }
}

/// A decoded design vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignVector {
    pub shell1: ShellGenes,
    pub shell2: ShellGenes,
    pub terminal_sites: [usize; TERMINAL_COUNT],
}

impl DesignVector {
    pub fn from_genes(genes: &[f64]) -> Result<Self> {
        if genes.len() != GENE_COUNT {
            return Err(FitnessError::InvalidGeneCount(genes.len()));
        }
        let shell1 = ShellGenes {
            semi_major_axis: genes[0],
            eccentricity: genes[1],
            inclination: genes[2],
            arg_perigee: genes[3],
            quality: genes[4],
            sats_per_plane: genes[10] as u32,
            planes: genes[11] as u32,
            phasing: genes[12] as u32,
        };
        let shell2 = ShellGenes {
            semi_major_axis: genes[5],
            eccentricity: genes[6],
            inclination: genes[7],
            arg_perigee: genes[8],
            quality: genes[9],
            sats_per_plane: genes[13] as u32,
            planes: genes[14] as u32,
            phasing: genes[15] as u32,
        };
        let terminal_sites = [
            genes[16] as usize,
            genes[17] as usize,
            genes[18] as usize,
            genes[19] as usize,
        ];
        Ok(Self {
            shell1,
            shell2,
            terminal_sites,
        })
    }

    pub fn example() -> Self {
        Self::from_genes(&EXAMPLE_CHROMOSOME).expect("example chromosome has the fixed layout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_fixed_layout() {
        let design = DesignVector::example();
        assert_eq!(design.shell1.semi_major_axis, 1.8);
        assert_eq!(design.shell1.quality, 55.0);
        assert_eq!(design.shell1.sats_per_plane, 10);
        assert_eq!(design.shell1.planes, 2);
        assert_eq!(design.shell1.phasing, 1);
        assert_eq!(design.shell2.semi_major_axis, 2.3);
        assert_eq!(design.shell2.quality, 15.0);
        assert_eq!(design.terminal_sites, [13, 21, 34, 55]);
        assert_eq!(design.shell1.satellite_count(), 20);
        assert_eq!(design.shell2.satellite_count(), 20);
    }

    #[test]
    fn integer_genes_are_truncated() {
        let mut genes = EXAMPLE_CHROMOSOME;
        genes[10] = 7.9;
        genes[16] = 42.7;
        let design = DesignVector::from_genes(&genes).unwrap();
        assert_eq!(design.shell1.sats_per_plane, 7);
        assert_eq!(design.terminal_sites[0], 42);
    }

    #[test]
    fn wrong_gene_count_is_rejected() {
        let short = [0.0; 19];
        assert!(matches!(
            DesignVector::from_genes(&short),
            Err(FitnessError::InvalidGeneCount(19))
        ));
    }
}
