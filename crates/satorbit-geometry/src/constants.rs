//! Physical constants of the central body.

/// Standard gravitational parameter of the Earth in km³/s².
pub const MU_EARTH_KM3_S2: f64 = 398_600.441_8;

/// Radius of the reference sphere drawn around the central body, in km.
pub const REFERENCE_RADIUS_KM: f64 = 6_781.0;

/// Number of points used to approximate one orbit ellipse.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;
