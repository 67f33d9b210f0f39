//! Population score aggregation.
//!
//! Reduces a set of fitness vectors to one scalar: designs whose objective
//! pair dominates the fixed reference point contribute to a 2-D hypervolume,
//! returned negated so that better populations score lower.

use crate::{Fitness, HV_REFERENCE_POINT};
use std::cmp::Ordering;

/// Minimization Pareto dominance: `a` dominates `b`.
pub fn dominates(a: &[f64; 2], b: &[f64; 2]) -> bool {
    a[0] <= b[0] && a[1] <= b[1] && (a[0] < b[0] || a[1] < b[1])
}

/// Hypervolume-based population score against [`HV_REFERENCE_POINT`].
///
/// Fitness vectors that do not dominate the reference point are excluded;
/// an empty remainder scores 0.
pub fn combine_scores(points: &[Fitness]) -> f64 {
    let mut front: Vec<[f64; 2]> = points
        .iter()
        .map(|f| [f.comms_cost, f.infra_cost])
        .filter(|p| dominates(p, &HV_REFERENCE_POINT))
        .collect();
    if front.is_empty() {
        return 0.0;
    }
    -hypervolume_2d(&mut front, &HV_REFERENCE_POINT)
}

/// Area dominated by `points` and bounded by `reference`, both objectives
/// minimized.
fn hypervolume_2d(points: &mut [[f64; 2]], reference: &[f64; 2]) -> f64 {
    points.sort_by(|a, b| a[0].partial_cmp(&b[0]).unwrap_or(Ordering::Equal));

    let mut volume = 0.0;
    let mut ceiling = reference[1];
    for p in points {
        // Points at or above the running ceiling are dominated by an
        // earlier (cheaper) point and add no area.
        if p[1] < ceiling {
            volume += (reference[0] - p[0]) * (ceiling - p[1]);
            ceiling = p[1];
        }
    }
    volume
}
