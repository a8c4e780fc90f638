//! Latitude/longitude grid mesh of the central body.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Longitude samples in the default reference sphere.
pub const DEFAULT_LONGITUDE_DIVISIONS: usize = 20;

/// Colatitude samples in the default reference sphere.
pub const DEFAULT_COLATITUDE_DIVISIONS: usize = 10;

/// A coarse wireframe sphere centered on the origin.
///
/// A visual aid only: its radius and resolution are independent of the
/// orbits it is drawn with. Grid points are stored longitude-major, so
/// `points[i * colatitude_divisions + j]` is longitude index `i` and
/// colatitude index `j`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSphere {
    pub radius: f64,
    pub longitude_divisions: usize,
    pub colatitude_divisions: usize,
    pub points: Vec<DVec3>,
}

impl ReferenceSphere {
    /// Generate the grid.
    ///
    /// Longitude `u` runs over [0, 2π] and colatitude `v` over [0, π], both
    /// with inclusive endpoints, so every meridian runs pole to pole and
    /// every parallel closes on itself.
    pub fn new(radius: f64, longitude_divisions: usize, colatitude_divisions: usize) -> Self {
        let us = linspace(std::f64::consts::TAU, longitude_divisions);
        let vs = linspace(std::f64::consts::PI, colatitude_divisions);

        let mut points = Vec::with_capacity(longitude_divisions * colatitude_divisions);
        for u in &us {
            for v in &vs {
                points.push(DVec3::new(
                    radius * u.cos() * v.sin(),
                    radius * u.sin() * v.sin(),
                    radius * v.cos(),
                ));
            }
        }

        Self {
            radius,
            longitude_divisions,
            colatitude_divisions,
            points,
        }
    }

    /// Grid point at longitude index `i`, colatitude index `j`.
    pub fn point(&self, i: usize, j: usize) -> Option<DVec3> {
        if i >= self.longitude_divisions || j >= self.colatitude_divisions {
            return None;
        }
        self.points.get(i * self.colatitude_divisions + j).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pole-to-pole polylines, one per longitude sample.
    pub fn meridians(&self) -> impl Iterator<Item = &[DVec3]> + '_ {
        self.points.chunks(self.colatitude_divisions.max(1))
    }

    /// Closed rings of constant colatitude, one per colatitude sample.
    ///
    /// Grid points missing from a truncated `points` list are skipped.
    pub fn parallels(&self) -> impl Iterator<Item = Vec<DVec3>> + '_ {
        (0..self.colatitude_divisions).map(move |j| {
            (0..self.longitude_divisions)
                .filter_map(|i| self.point(i, j))
                .collect()
        })
    }
}

impl Default for ReferenceSphere {
    fn default() -> Self {
        Self::new(
            satorbit_geometry::REFERENCE_RADIUS_KM,
            DEFAULT_LONGITUDE_DIVISIONS,
            DEFAULT_COLATITUDE_DIVISIONS,
        )
    }
}

/// `count` evenly spaced values over [0, end].
fn linspace(end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = end / (count - 1) as f64;
            (0..count).map(|k| step * k as f64).collect()
        }
    }
}
