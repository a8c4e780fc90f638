//! Ellipse size derived from mean motion and eccentricity.

use serde::{Deserialize, Serialize};

use crate::MU_EARTH_KM3_S2;
use crate::OrbitalElementSet;

/// Axis lengths of an orbital ellipse in km.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitShape {
    /// Half the long diameter.
    pub semi_major_axis: f64,
    /// Half the short diameter.
    pub semi_minor_axis: f64,
    /// Distance from the geometric center to the occupied focus.
    pub focus_offset: f64,
}

impl OrbitShape {
    /// Derive the ellipse from Kepler's third law, `n² a³ = μ`.
    ///
    /// `mean_motion` is in rad/s. Non-positive mean motion yields non-finite
    /// axes and an eccentricity of 1 or more yields a NaN semi-minor axis;
    /// neither is reported here.
    pub fn from_mean_motion(mean_motion: f64, eccentricity: f64) -> Self {
        let a = MU_EARTH_KM3_S2.powf(1.0 / 3.0) / mean_motion.powf(2.0 / 3.0);
        Self {
            semi_major_axis: a,
            semi_minor_axis: a * (1.0 - eccentricity * eccentricity).sqrt(),
            focus_offset: a * eccentricity,
        }
    }

    pub fn from_elements(elements: &OrbitalElementSet) -> Self {
        Self::from_mean_motion(elements.mean_motion, elements.eccentricity)
    }

    /// Closest distance to the central body.
    pub fn perigee_radius(&self) -> f64 {
        self.semi_major_axis - self.focus_offset
    }

    /// Farthest distance from the central body.
    pub fn apogee_radius(&self) -> f64 {
        self.semi_major_axis + self.focus_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geostationary_semi_major_axis() {
        // One sidereal day.
        let n = std::f64::consts::TAU / 86_164.0905;
        let shape = OrbitShape::from_mean_motion(n, 0.0);
        assert!(
            (shape.semi_major_axis - 42_164.0).abs() < 1.0,
            "a = {}",
            shape.semi_major_axis
        );
    }

    #[test]
    fn test_satisfies_keplers_third_law() {
        let n = 1.1e-3;
        let shape = OrbitShape::from_mean_motion(n, 0.3);
        let mu = n * n * shape.semi_major_axis.powi(3);
        assert!((mu - MU_EARTH_KM3_S2).abs() / MU_EARTH_KM3_S2 < 1e-12);
    }

    #[test]
    fn test_axes_from_eccentricity() {
        let shape = OrbitShape::from_mean_motion(1.0e-3, 0.6);
        let a = shape.semi_major_axis;
        assert!((shape.semi_minor_axis - 0.8 * a).abs() < 1e-9 * a);
        assert!((shape.focus_offset - 0.6 * a).abs() < 1e-9 * a);
        // a² = b² + c²
        let lhs = a * a;
        let rhs = shape.semi_minor_axis.powi(2) + shape.focus_offset.powi(2);
        assert!((lhs - rhs).abs() < 1e-6 * lhs);
    }

    #[test]
    fn test_perigee_and_apogee_sum_to_major_axis() {
        let shape = OrbitShape::from_mean_motion(2.0e-4, 0.72);
        let sum = shape.perigee_radius() + shape.apogee_radius();
        assert!((sum - 2.0 * shape.semi_major_axis).abs() < 1e-6);
    }

    #[test]
    fn test_zero_mean_motion_is_not_finite() {
        let shape = OrbitShape::from_mean_motion(0.0, 0.0);
        assert!(!shape.semi_major_axis.is_finite());
    }
}
