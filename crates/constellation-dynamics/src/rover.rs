//! Rover surface kinematics.
//!
//! Rovers sit at fixed latitude and initial longitude and rotate with the
//! planet; their positions are closed form and always succeed.

use crate::{TimeGrid, PLANET_RADIUS_KM, PLANET_SPIN_RAD_S};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A candidate rover site: latitude and initial longitude in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoverSite {
    pub latitude: f64,
    pub longitude: f64,
}

impl RoverSite {
    /// Body-centered position after `elapsed_s` seconds of planetary spin.
    pub fn position_at(&self, elapsed_s: f64) -> Vector3<f64> {
        let turned = self.longitude + PLANET_SPIN_RAD_S * elapsed_s;
        Vector3::new(
            PLANET_RADIUS_KM * self.latitude.cos() * turned.cos(),
            PLANET_RADIUS_KM * self.latitude.cos() * turned.sin(),
            PLANET_RADIUS_KM * self.latitude.sin(),
        )
    }
}

/// Positions of each rover at every epoch of the grid, `[rover][epoch]`.
pub fn rover_positions(sites: &[RoverSite], grid: &TimeGrid) -> Vec<Vec<Vector3<f64>>> {
    sites
        .iter()
        .map(|site| {
            (0..grid.len())
                .map(|k| site.position_at(grid.elapsed_seconds(k)))
                .collect()
        })
        .collect()
}
