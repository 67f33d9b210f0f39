//! The fixed mothership relay fleet.
//!
//! Seven relay hubs with externally fixed orbital parameters. The TLEs of
//! real Earth-orbiting satellites are used as a proxy for plausible orbital
//! dynamics around a habitable planet; they never change between
//! evaluations.

use crate::{DynamicsError, Result};

/// Number of mothership relays in orbit.
pub const MOTHERSHIP_COUNT: usize = 7;

const MOTHERSHIP_TLES: [[&str; 2]; MOTHERSHIP_COUNT] = [
    [
        "1 39634U 14016A   22349.82483685  .00000056  00000-0  21508-4 0  9992",
        "2 39634  98.1813 354.7934 0001199  83.3324 276.7993 14.59201191463475",
    ],
    [
        "1 26400U 00037A   00208.84261022 +.00077745 +00000-0 +00000-0 0  9997",
        "2 26400 051.5790 297.6001 0012791 171.3037 188.7763 15.69818870002328",
    ],
    [
        "1 36508U 10013A   22349.92638064  .00000262  00000-0  64328-4 0  9992",
        "2 36508  92.0240 328.0627 0004726  21.3451 338.7953 14.51905975672463",
    ],
    [
        "1 40128U 14050A   22349.31276420 -.00000077  00000-0  00000-0 0  9995",
        "2 40128  50.1564 325.0733 1614819 130.5958 244.6527  1.85519534 54574",
    ],
    [
        "1 49810U 21116B   23065.71091236 -.00000083  00000+0  00000+0 0  9998",
        "2 49810  57.2480  13.9949 0001242 301.4399 239.8890  1.70475839  7777",
    ],
    [
        "1 44878U 19092F   22349.75758852  .00015493  00000-0  00000-0 0  9991",
        "2 44878  97.4767 172.6133 0012815  68.6990 291.5614 15.23910904165768",
    ],
    [
        "1 04382U 70034A   22349.88472104  .00001138  00000-0  18306-3 0  9999",
        "2 04382  68.4200 140.9159 1043234  48.2283 320.3286 13.08911192477908",
    ],
];

/// Parse the fixed mothership TLE set into SGP4 element records.
pub fn mothership_elements() -> Result<Vec<sgp4::Elements>> {
    MOTHERSHIP_TLES
        .iter()
        .map(|tle| {
            sgp4::Elements::from_tle(None, tle[0].as_bytes(), tle[1].as_bytes())
                .map_err(|e| DynamicsError::InvalidTle(format!("{:?}", e)))
        })
        .collect()
}
