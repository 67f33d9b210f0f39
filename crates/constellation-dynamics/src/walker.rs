//! Walker shell generation.
//!
//! Expands the per-shell design parameters into the full set of SGP4 orbital
//! element records, one per satellite, in plane-major order.

use crate::{MU_KM3_S2, PLANET_RADIUS_KM};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A Walker constellation shell: `planes` orbital planes with
/// `sats_per_plane` satellites each, phased by `phasing`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WalkerShell {
    pub sats_per_plane: u32,
    pub planes: u32,
    pub phasing: u32,
    /// Semi-major axis in planet radii.
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Inclination (radians).
    pub inclination: f64,
    /// Argument of perigee (radians).
    pub arg_perigee: f64,
}

impl WalkerShell {
    pub fn satellite_count(&self) -> usize {
        (self.sats_per_plane * self.planes) as usize
    }

    /// Keplerian mean motion (rad/s) from the shell's semi-major axis.
    pub fn mean_motion_rad_s(&self) -> f64 {
        let a_km = self.semi_major_axis * PLANET_RADIUS_KM;
        (MU_KM3_S2 / a_km.powi(3)).sqrt()
    }

    /// Generate the element records for every satellite in the shell.
    ///
    /// Satellite `s` of plane `p` is numbered `s + p * S` and carries a mean
    /// anomaly offset of `2pi/(P*S)*F*p + 2pi/S*s` and an ascending-node
    /// offset of `2pi/P*p`. Drag terms are zero; the shell is purely
    /// geometric.
    pub fn elements(&self, epoch: NaiveDateTime) -> Vec<sgp4::Elements> {
        let planes = self.planes;
        let sats = self.sats_per_plane;
        let revs_per_day = self.mean_motion_rad_s() * 86_400.0 / TAU;

        let mut records = Vec::with_capacity(self.satellite_count());
        for p in 0..planes {
            for s in 0..sats {
                let mean_anomaly = TAU / (planes * sats) as f64 * self.phasing as f64 * p as f64
                    + TAU / sats as f64 * s as f64;
                let raan = TAU / planes as f64 * p as f64;
                records.push(sgp4::Elements {
                    object_name: None,
                    international_designator: None,
                    norad_id: (s + p * sats) as u64,
                    classification: sgp4::Classification::Unclassified,
                    datetime: epoch,
                    mean_motion_dot: 0.0,
                    mean_motion_ddot: 0.0,
                    drag_term: 0.0,
                    element_set_number: 0,
                    inclination: self.inclination.to_degrees(),
                    right_ascension: raan.to_degrees(),
                    eccentricity: self.eccentricity,
                    argument_of_perigee: self.arg_perigee.to_degrees(),
                    mean_anomaly: mean_anomaly.to_degrees(),
                    mean_motion: revs_per_day,
                    revolution_number: 0,
                    ephemeris_type: 0,
                });
            }
        }
        records
    }
}
