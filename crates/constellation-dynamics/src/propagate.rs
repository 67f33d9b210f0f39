//! SGP4 propagation over the design time grid.
//!
//! Propagation correctness is a precondition of the fitness evaluation: any
//! SGP4 error for any satellite at any epoch aborts the whole evaluation
//! with no partial result.

use crate::{DynamicsError, Result, TimeGrid};
use nalgebra::Vector3;

/// Propagate each element record to every epoch of the grid.
///
/// Returns positions indexed `[satellite][epoch]`, km, body-centered.
pub fn propagate_elements(
    elements: &[sgp4::Elements],
    grid: &TimeGrid,
) -> Result<Vec<Vec<Vector3<f64>>>> {
    elements
        .iter()
        .map(|record| {
            let constants = sgp4::Constants::from_elements(record)
                .map_err(|e| DynamicsError::PropagationFailed(format!("{:?}", e)))?;
            grid.epochs()
                .iter()
                .map(|epoch| {
                    let minutes = (*epoch - record.datetime).num_seconds() as f64 / 60.0;
                    let prediction = constants.propagate(minutes).map_err(|e| {
                        DynamicsError::PropagationFailed(format!(
                            "satellite {} at {}: {:?}",
                            record.norad_id, epoch, e
                        ))
                    })?;
                    Ok(Vector3::new(
                        prediction.position[0],
                        prediction.position[1],
                        prediction.position[2],
                    ))
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mothership_elements, TimeGrid, WalkerShell, PLANET_RADIUS_KM};

    #[test]
    fn walker_shell_propagates_over_the_grid() {
        let grid = TimeGrid::standard();
        let shell = WalkerShell {
            sats_per_plane: 4,
            planes: 2,
            phasing: 1,
            semi_major_axis: 1.8,
            eccentricity: 0.0,
            inclination: 1.2,
            arg_perigee: 0.0,
        };
        let positions = propagate_elements(&shell.elements(grid.start()), &grid).unwrap();
        assert_eq!(positions.len(), 8);
        assert_eq!(positions[0].len(), grid.len());
        // A circular 1.8-radius orbit stays near 1.8 planet radii.
        for sat in &positions {
            for pos in sat {
                let r = pos.norm() / PLANET_RADIUS_KM;
                assert!(r > 1.7 && r < 1.9, "radius {} planet radii", r);
            }
        }
    }

    #[test]
    fn mothership_fleet_propagates_over_the_grid() {
        let grid = TimeGrid::standard();
        let positions = propagate_elements(&mothership_elements().unwrap(), &grid).unwrap();
        assert_eq!(positions.len(), 7);
        for sat in &positions {
            assert_eq!(sat.len(), grid.len());
            for pos in sat {
                assert!(pos.norm() > PLANET_RADIUS_KM);
            }
        }
    }

    #[test]
    fn propagation_is_deterministic() {
        let grid = TimeGrid::standard();
        let fleet = mothership_elements().unwrap();
        let a = propagate_elements(&fleet, &grid).unwrap();
        let b = propagate_elements(&fleet, &grid).unwrap();
        assert_eq!(a, b);
    }
}
