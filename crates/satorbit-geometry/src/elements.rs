//! Classical orbital element sets.

use serde::{Deserialize, Serialize};

/// One satellite's instantaneous classical (Keplerian) elements.
///
/// Angles are in radians and are only used as rotation inputs, so no
/// wraparound normalization is applied. Mean motion is in radians per second.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElementSet {
    /// Display label. Not required to be unique.
    pub name: String,
    /// Right ascension of the ascending node in radians.
    pub raan: f64,
    /// Tilt of the orbital plane in radians.
    pub inclination: f64,
    /// In-plane rotation of the ellipse in radians.
    pub argument_of_pericenter: f64,
    /// Mean angular rate in radians per second.
    pub mean_motion: f64,
    /// Unitless shape parameter, [0, 1) for a closed ellipse.
    pub eccentricity: f64,
}

/// Reasons an element set cannot describe a closed orbit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElementError {
    /// A field holds NaN or an infinity.
    #[error("element `{field}` of {name:?} is not finite")]
    NonFinite { name: String, field: &'static str },

    /// Mean motion is zero or negative, which has no finite semi-major axis.
    #[error("mean motion of {name:?} must be positive, got {mean_motion} rad/s")]
    NonPositiveMeanMotion { name: String, mean_motion: f64 },

    /// Eccentricity outside [0, 1): parabolic, hyperbolic, or negative.
    #[error("eccentricity of {name:?} must be in [0, 1), got {eccentricity}")]
    OpenTrajectory { name: String, eccentricity: f64 },
}

impl OrbitalElementSet {
    pub fn new(
        name: impl Into<String>,
        raan: f64,
        inclination: f64,
        argument_of_pericenter: f64,
        mean_motion: f64,
        eccentricity: f64,
    ) -> Self {
        Self {
            name: name.into(),
            raan,
            inclination,
            argument_of_pericenter,
            mean_motion,
            eccentricity,
        }
    }

    /// Check the preconditions of a closed, finite orbit curve.
    ///
    /// The geometry engine itself never calls this; callers that need
    /// strict inputs validate before composing a scene.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition.
    pub fn validate(&self) -> Result<(), ElementError> {
        let fields = [
            ("raan", self.raan),
            ("inclination", self.inclination),
            ("argument_of_pericenter", self.argument_of_pericenter),
            ("mean_motion", self.mean_motion),
            ("eccentricity", self.eccentricity),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ElementError::NonFinite {
                name: self.name.clone(),
                field,
            });
        }
        if self.mean_motion <= 0.0 {
            return Err(ElementError::NonPositiveMeanMotion {
                name: self.name.clone(),
                mean_motion: self.mean_motion,
            });
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ElementError::OpenTrajectory {
                name: self.name.clone(),
                eccentricity: self.eccentricity,
            });
        }
        Ok(())
    }
}
