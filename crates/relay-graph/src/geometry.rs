//! Link geometry primitives.
//!
//! Both primitives treat a node pair separated by less than
//! [`COINCIDENT_EPS`] as degenerate and fall back to a defined value rather
//! than dividing by a vanishing norm.

use nalgebra::Vector3;

/// Below this separation (km) two nodes are treated as coincident.
pub const COINCIDENT_EPS: f64 = 1e-6;

/// Closest approach of the line through `r1` and `r2` to the body center.
///
/// Coincident nodes return `|r1|`; a near-zero radicand (near-collinear
/// geometry) clamps to 0.
pub fn line_of_sight_km(r1: &Vector3<f64>, r2: &Vector3<f64>) -> f64 {
    let separation = (r2 - r1).norm();
    if separation < COINCIDENT_EPS {
        return r1.norm();
    }
    let u = (r2 - r1) / separation;
    let h = r1.dot(&u);
    let arg = r1.norm_squared() - h * h;
    if arg > COINCIDENT_EPS {
        arg.sqrt()
    } else {
        0.0
    }
}

/// Cosine of the zenith angle of the link from `src` toward `dst`,
/// measured against the local vertical at `src`. Coincident nodes give 0.
pub fn zenith_cosine(src: &Vector3<f64>, dst: &Vector3<f64>) -> f64 {
    let dpos = dst - src;
    let separation = dpos.norm();
    if separation < COINCIDENT_EPS {
        return 0.0;
    }
    dpos.dot(src) / (separation * src.norm())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_nodes_return_norm_of_first() {
        let r1 = Vector3::new(7000.0, 0.0, 0.0);
        let r2 = Vector3::new(7000.0 + 1e-8, 0.0, 0.0);
        assert_eq!(line_of_sight_km(&r1, &r2), r1.norm());
    }

    #[test]
    fn diametral_link_passes_through_the_center() {
        let r1 = Vector3::new(8000.0, 0.0, 0.0);
        let r2 = Vector3::new(-8000.0, 0.0, 0.0);
        assert_eq!(line_of_sight_km(&r1, &r2), 0.0);
    }

    #[test]
    fn tangential_link_keeps_the_source_radius() {
        // r2 directly "above" r1's horizon plane: closest approach is |r1|.
        let r1 = Vector3::new(7000.0, 0.0, 0.0);
        let r2 = Vector3::new(7000.0, 9000.0, 0.0);
        assert!((line_of_sight_km(&r1, &r2) - 7000.0).abs() < 1e-9);
    }

    #[test]
    fn near_collinear_radicand_clamps_to_zero() {
        let r1 = Vector3::new(7000.0, 0.0, 0.0);
        let r2 = Vector3::new(14_000.0, 1e-9, 0.0);
        assert_eq!(line_of_sight_km(&r1, &r2), 0.0);
    }

    #[test]
    fn overhead_link_has_unit_zenith_cosine() {
        let src = Vector3::new(6378.0, 0.0, 0.0);
        let dst = Vector3::new(12_000.0, 0.0, 0.0);
        assert!((zenith_cosine(&src, &dst) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn downward_link_has_negative_zenith_cosine() {
        let src = Vector3::new(12_000.0, 0.0, 0.0);
        let dst = Vector3::new(6378.0, 0.0, 0.0);
        assert!(zenith_cosine(&src, &dst) < 0.0);
    }

    #[test]
    fn coincident_nodes_have_zero_zenith_cosine() {
        let src = Vector3::new(6378.0, 0.0, 0.0);
        assert_eq!(zenith_cosine(&src, &src), 0.0);
    }
}
