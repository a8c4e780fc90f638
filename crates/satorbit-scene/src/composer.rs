//! Orbit curves for a collection of satellites, assembled with the reference sphere.

use satorbit_geometry::{DEFAULT_SAMPLE_COUNT, OrbitCurve, OrbitalElementSet, compute_orbit_curve};
use serde::{Deserialize, Serialize};

use crate::sphere::{DEFAULT_COLATITUDE_DIVISIONS, DEFAULT_LONGITUDE_DIVISIONS, ReferenceSphere};

/// Everything a renderer needs: labeled curves in input order plus the sphere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub curves: Vec<OrbitCurve>,
    pub sphere: ReferenceSphere,
}

impl Scene {
    pub fn curve(&self, label: &str) -> Option<&OrbitCurve> {
        self.curves.iter().find(|c| c.label == label)
    }
}

/// Composition settings: curve sampling and sphere mesh resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneBuilder {
    pub sample_count: usize,
    pub sphere_radius: f64,
    pub longitude_divisions: usize,
    pub colatitude_divisions: usize,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            sphere_radius: satorbit_geometry::REFERENCE_RADIUS_KM,
            longitude_divisions: DEFAULT_LONGITUDE_DIVISIONS,
            colatitude_divisions: DEFAULT_COLATITUDE_DIVISIONS,
        }
    }
}

impl SceneBuilder {
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_sphere_radius(mut self, radius: f64) -> Self {
        self.sphere_radius = radius;
        self
    }

    pub fn with_sphere_resolution(mut self, longitude: usize, colatitude: usize) -> Self {
        self.longitude_divisions = longitude;
        self.colatitude_divisions = colatitude;
        self
    }

    /// Compute one curve per element set, preserving order. Nothing is
    /// filtered or reordered; select satellites before calling.
    pub fn build<'a, I>(&self, element_sets: I) -> Scene
    where
        I: IntoIterator<Item = &'a OrbitalElementSet>,
    {
        let curves: Vec<OrbitCurve> = element_sets
            .into_iter()
            .map(|elements| {
                let curve = compute_orbit_curve(elements, self.sample_count);
                if !curve.is_finite() {
                    tracing::warn!(satellite = %curve.label, "orbit curve has non-finite points");
                }
                tracing::debug!(satellite = %curve.label, points = curve.len(), "computed orbit curve");
                curve
            })
            .collect();

        let sphere = ReferenceSphere::new(
            self.sphere_radius,
            self.longitude_divisions,
            self.colatitude_divisions,
        );

        tracing::info!(
            curves = curves.len(),
            sphere_points = sphere.points.len(),
            "scene composed"
        );

        Scene { curves, sphere }
    }
}

/// Compose a scene with default sampling and sphere resolution.
pub fn build_scene(element_sets: &[OrbitalElementSet], sphere_radius: f64) -> Scene {
    SceneBuilder::default()
        .with_sphere_radius(sphere_radius)
        .build(element_sets)
}
