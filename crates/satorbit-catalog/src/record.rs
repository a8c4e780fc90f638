//! One entry of a CelesTrak GP (general perturbations) JSON document.

use std::fmt;

use satorbit_geometry::OrbitalElementSet;
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// NORAD catalog number. Published as a number, but older mirrors quote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoradId {
    Number(u64),
    Text(String),
}

impl fmt::Display for NoradId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Mean elements as published: angles in degrees, mean motion in revolutions per day.
///
/// Only the six fields the geometry needs are required; bookkeeping fields
/// are kept when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GpRecord {
    pub object_name: String,
    #[serde(default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub epoch: Option<String>,
    pub mean_motion: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub ra_of_asc_node: f64,
    pub arg_of_pericenter: f64,
    #[serde(default)]
    pub mean_anomaly: Option<f64>,
    #[serde(default)]
    pub ephemeris_type: Option<i64>,
    #[serde(default)]
    pub classification_type: Option<String>,
    #[serde(default)]
    pub norad_cat_id: Option<NoradId>,
    #[serde(default)]
    pub element_set_no: Option<i64>,
    #[serde(default)]
    pub rev_at_epoch: Option<i64>,
    #[serde(default)]
    pub bstar: Option<f64>,
    #[serde(default)]
    pub mean_motion_dot: Option<f64>,
    #[serde(default)]
    pub mean_motion_ddot: Option<f64>,
}

impl GpRecord {
    /// Mean motion converted from revolutions per day to radians per second.
    pub fn mean_motion_rad_per_sec(&self) -> f64 {
        self.mean_motion * std::f64::consts::TAU / SECONDS_PER_DAY
    }

    /// Convert to SI-angle elements for the geometry engine.
    pub fn to_elements(&self) -> OrbitalElementSet {
        OrbitalElementSet::new(
            self.object_name.clone(),
            self.ra_of_asc_node.to_radians(),
            self.inclination.to_radians(),
            self.arg_of_pericenter.to_radians(),
            self.mean_motion_rad_per_sec(),
            self.eccentricity,
        )
    }
}

impl From<&GpRecord> for OrbitalElementSet {
    fn from(record: &GpRecord) -> Self {
        record.to_elements()
    }
}
