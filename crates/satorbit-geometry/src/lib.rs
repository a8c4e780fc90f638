//! Orbit geometry: classical orbital elements to Earth-centered inertial ellipse curves.

mod constants;
mod curve;
mod elements;
mod rotation;
mod shape;

pub use constants::{DEFAULT_SAMPLE_COUNT, MU_EARTH_KM3_S2, REFERENCE_RADIUS_KM};
pub use curve::{OrbitCurve, compute_orbit_curve, try_compute_orbit_curve};
pub use elements::{ElementError, OrbitalElementSet};
pub use rotation::orbit_rotation;
pub use shape::OrbitShape;
