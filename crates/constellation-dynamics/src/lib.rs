//! Constellation Dynamics Library
//!
//! Deterministic kinematics for the New Mars relay network: Walker shell
//! generation, SGP4 propagation of shell and mothership satellites over the
//! design time grid, and closed-form surface kinematics for the rovers.
//!
//! All positions are body-centered Cartesian, in kilometers.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

pub mod motherships;
pub mod propagate;
pub mod rover;
pub mod walker;

pub use motherships::{mothership_elements, MOTHERSHIP_COUNT};
pub use propagate::propagate_elements;
pub use rover::{rover_positions, RoverSite};
pub use walker::WalkerShell;

/// Radius of New Mars (km).
pub const PLANET_RADIUS_KM: f64 = 6378.137;

/// Gravitational parameter of New Mars (km^3/s^2).
pub const MU_KM3_S2: f64 = 398_600.4418;

/// Angular velocity of New Mars (rad/s), one rotation per 23h 56m 4s.
pub const PLANET_SPIN_RAD_S: f64 = 7.29e-5;

/// Number of epochs in the design time grid.
pub const EPOCH_COUNT: usize = 11;

/// Start of the design time grid, in days since 2000-01-01T00:00:00 (MJD2000).
pub const GRID_START_MJD2000: i64 = 10_000;

/// Spacing between grid epochs: one Julian year (365.25 days) in seconds.
pub const GRID_STEP_SECONDS: i64 = 31_557_600;

#[derive(Error, Debug)]
pub enum DynamicsError {
    #[error("Invalid TLE format: {0}")]
    InvalidTle(String),
    #[error("Propagation failed: {0}")]
    PropagationFailed(String),
}

pub type Result<T> = std::result::Result<T, DynamicsError>;

/// The epoch grid over which the relay network is evaluated.
///
/// The standard grid spans ten years in eleven annual snapshots, starting at
/// MJD2000 day 10000.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    epochs: Vec<NaiveDateTime>,
}

impl TimeGrid {
    pub fn standard() -> Self {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("MJD2000 base date");
        let start = base + Duration::days(GRID_START_MJD2000);
        let epochs = (0..EPOCH_COUNT as i64)
            .map(|k| start + Duration::seconds(k * GRID_STEP_SECONDS))
            .collect();
        Self { epochs }
    }

    pub fn with_epochs(epochs: Vec<NaiveDateTime>) -> Self {
        Self { epochs }
    }

    pub fn epochs(&self) -> &[NaiveDateTime] {
        &self.epochs
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    pub fn start(&self) -> NaiveDateTime {
        self.epochs[0]
    }

    /// Seconds elapsed between the grid start and epoch `idx`.
    pub fn elapsed_seconds(&self, idx: usize) -> f64 {
        (self.epochs[idx] - self.epochs[0]).num_seconds() as f64
    }
}
