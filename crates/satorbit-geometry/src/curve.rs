//! Parametric sampling of an orbit ellipse in the inertial frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::{ElementError, OrbitShape, OrbitalElementSet, orbit_rotation};

/// The closed 3D curve traced by one satellite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitCurve {
    /// Copied from the element set's name.
    pub label: String,
    /// Ordered points in km, Earth-centered inertial frame.
    pub points: Vec<DVec3>,
}

impl OrbitCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `false` if any coordinate is NaN or infinite (degenerate input elements).
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
    }
}

/// Sample the orbit ellipse of `elements` at `sample_count` points.
///
/// The parameter sweeps [0, 2π] inclusive of both ends, so the first and
/// last points coincide. Points are re-centered so the central body sits at
/// the occupied focus.
///
/// Inputs are not validated: zero or negative mean motion produces
/// non-finite coordinates and an eccentricity of 1 or more produces NaN.
/// Use [`try_compute_orbit_curve`] to reject such elements up front.
pub fn compute_orbit_curve(elements: &OrbitalElementSet, sample_count: usize) -> OrbitCurve {
    let rotation = orbit_rotation(
        elements.raan,
        elements.inclination,
        elements.argument_of_pericenter,
    );
    let shape = OrbitShape::from_elements(elements);
    let focus = rotation * DVec3::new(shape.focus_offset, 0.0, 0.0);

    let step = if sample_count > 1 {
        std::f64::consts::TAU / (sample_count - 1) as f64
    } else {
        0.0
    };

    let points = (0..sample_count)
        .map(|k| {
            let theta = step * k as f64;
            let centered = DVec3::new(
                shape.semi_major_axis * theta.cos(),
                shape.semi_minor_axis * theta.sin(),
                0.0,
            );
            rotation * centered - focus
        })
        .collect();

    OrbitCurve {
        label: elements.name.clone(),
        points,
    }
}

/// Validate `elements` and then sample the orbit.
///
/// # Errors
///
/// Returns an [`ElementError`] if the elements do not describe a closed,
/// finite orbit.
pub fn try_compute_orbit_curve(
    elements: &OrbitalElementSet,
    sample_count: usize,
) -> Result<OrbitCurve, ElementError> {
    elements.validate()?;
    Ok(compute_orbit_curve(elements, sample_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_SAMPLE_COUNT, MU_EARTH_KM3_S2};
    use glam::DMat3;

    fn molniya() -> OrbitalElementSet {
        OrbitalElementSet::new("MOLNIYA 1-91", 4.1, 1.1, 4.9, 1.4584e-4, 0.72)
    }

    fn max_deviation(a: &OrbitCurve, b: &OrbitCurve) -> f64 {
        a.points
            .iter()
            .zip(&b.points)
            .map(|(p, q)| p.distance(*q))
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_label_and_sample_count() {
        let curve = compute_orbit_curve(&molniya(), DEFAULT_SAMPLE_COUNT);
        assert_eq!(curve.label, "MOLNIYA 1-91");
        assert_eq!(curve.len(), 100);
        assert!(curve.is_finite());
    }

    #[test]
    fn test_curve_closes() {
        let curve = compute_orbit_curve(&molniya(), DEFAULT_SAMPLE_COUNT);
        let first = curve.points[0];
        let last = curve.points[curve.len() - 1];
        let a = OrbitShape::from_elements(&molniya()).semi_major_axis;
        assert!(
            first.distance(last) < 1e-9 * a,
            "first {first} last {last}"
        );
    }

    #[test]
    fn test_origin_at_focus() {
        // 101 samples place θ = π exactly on a sample, so apogee is hit.
        let elements = molniya();
        let curve = compute_orbit_curve(&elements, 101);
        let shape = OrbitShape::from_elements(&elements);

        let radii: Vec<f64> = curve.points.iter().map(|p| p.length()).collect();
        let perigee = radii.iter().copied().fold(f64::INFINITY, f64::min);
        let apogee = radii.iter().copied().fold(0.0, f64::max);

        let a = shape.semi_major_axis;
        assert!(
            (perigee + apogee - 2.0 * a).abs() < 1e-9 * a,
            "perigee {perigee} + apogee {apogee} != 2a {}",
            2.0 * a
        );
        assert!((perigee - shape.perigee_radius()).abs() < 1e-9 * a);
        assert!((apogee - shape.apogee_radius()).abs() < 1e-9 * a);
    }

    #[test]
    fn test_circular_orbit_has_constant_radius() {
        let elements = OrbitalElementSet::new("ISS-ish", 0.3, 0.9, 2.0, 1.13e-3, 0.0);
        let a = OrbitShape::from_elements(&elements).semi_major_axis;
        let curve = compute_orbit_curve(&elements, 64);
        for p in &curve.points {
            let r = p.length();
            assert!((r - a).abs() < 1e-9 * a, "r = {r}, a = {a}");
        }
    }

    #[test]
    fn test_rotation_order_matters() {
        let elements = OrbitalElementSet::new("ORDER", 0.8, 0.6, 1.3, 1.0e-3, 0.4);
        let curve = compute_orbit_curve(&elements, 50);
        let shape = OrbitShape::from_elements(&elements);

        let sample_with = |rotation: DMat3| -> OrbitCurve {
            let focus = rotation * DVec3::new(shape.focus_offset, 0.0, 0.0);
            let points = (0..50)
                .map(|k| {
                    let theta = std::f64::consts::TAU * k as f64 / 49.0;
                    rotation
                        * DVec3::new(
                            shape.semi_major_axis * theta.cos(),
                            shape.semi_minor_axis * theta.sin(),
                            0.0,
                        )
                        - focus
                })
                .collect();
            OrbitCurve {
                label: elements.name.clone(),
                points,
            }
        };

        let r_raan = DMat3::from_rotation_z(elements.raan);
        let r_inc = DMat3::from_rotation_x(elements.inclination);
        let r_omega = DMat3::from_rotation_z(elements.argument_of_pericenter);

        let documented = sample_with(r_raan * r_inc * r_omega);
        assert!(max_deviation(&curve, &documented) < 1e-6);

        for wrong in [
            r_omega * r_inc * r_raan,
            r_inc * r_raan * r_omega,
            r_raan * r_omega * r_inc,
        ] {
            let swapped = sample_with(wrong);
            assert!(
                max_deviation(&curve, &swapped) > 100.0,
                "swapped composition produced the same curve"
            );
        }
    }

    #[test]
    fn test_coarse_points_lie_on_fine_curve() {
        let elements = molniya();
        let coarse = compute_orbit_curve(&elements, 100);
        let fine = compute_orbit_curve(&elements, 1000);
        let shape = OrbitShape::from_elements(&elements);
        let a = shape.semi_major_axis;
        let b = shape.semi_minor_axis;

        // Pull every point back into the orbit plane and check it satisfies
        // the ellipse equation shared by both samplings.
        let inverse = orbit_rotation(
            elements.raan,
            elements.inclination,
            elements.argument_of_pericenter,
        )
        .transpose();
        for curve in [&coarse, &fine] {
            for p in &curve.points {
                let local = inverse * *p + DVec3::new(shape.focus_offset, 0.0, 0.0);
                assert!(local.z.abs() < 1e-6, "off-plane by {}", local.z);
                let ellipse = (local.x / a).powi(2) + (local.y / b).powi(2);
                assert!((ellipse - 1.0).abs() < 1e-9, "ellipse residual {ellipse}");
            }
        }

        // And each coarse point is within one fine step of the fine polyline.
        let fine_step = fine
            .points
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .fold(0.0, f64::max);
        for p in &coarse.points {
            let nearest = fine
                .points
                .iter()
                .map(|q| q.distance(*p))
                .fold(f64::INFINITY, f64::min);
            assert!(nearest <= fine_step, "nearest {nearest} > step {fine_step}");
        }
    }

    #[test]
    fn test_unrotated_circular_scenario() {
        let elements = OrbitalElementSet::new("SCENARIO", 0.0, 0.0, 0.0, 0.0011, 0.0);
        let expected = MU_EARTH_KM3_S2.powf(1.0 / 3.0) / 0.0011_f64.powf(2.0 / 3.0);
        let curve = compute_orbit_curve(&elements, DEFAULT_SAMPLE_COUNT);

        let mut centroid = DVec3::ZERO;
        for p in &curve.points {
            assert!(p.z.abs() < 1e-9, "z = {}", p.z);
            let r = p.length();
            assert!(
                (r - expected).abs() / expected < 1e-3,
                "r = {r}, expected {expected}"
            );
            centroid += *p;
        }
        // Drop the duplicated closing point before averaging.
        centroid -= curve.points[curve.len() - 1];
        centroid /= (curve.len() - 1) as f64;
        assert!(centroid.length() < 1e-6 * expected, "centroid {centroid}");
    }

    #[test]
    fn test_degenerate_mean_motion_propagates_non_finite() {
        let elements = OrbitalElementSet::new("DEAD", 0.0, 0.0, 0.0, 0.0, 0.0);
        let curve = compute_orbit_curve(&elements, 10);
        assert_eq!(curve.len(), 10);
        assert!(!curve.is_finite());
    }

    #[test]
    fn test_try_compute_rejects_open_orbit() {
        let mut elements = molniya();
        elements.eccentricity = 1.2;
        assert!(matches!(
            try_compute_orbit_curve(&elements, 10),
            Err(ElementError::OpenTrajectory { .. })
        ));
        elements.eccentricity = 0.2;
        assert_eq!(try_compute_orbit_curve(&elements, 10).unwrap().len(), 10);
    }

    #[test]
    fn test_tiny_sample_counts() {
        assert!(compute_orbit_curve(&molniya(), 0).is_empty());
        let single = compute_orbit_curve(&molniya(), 1);
        assert_eq!(single.len(), 1);
        let perigee = OrbitShape::from_elements(&molniya()).perigee_radius();
        assert!((single.points[0].length() - perigee).abs() < 1e-6);
    }
}
