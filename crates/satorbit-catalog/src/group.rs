//! Named satellite groups published by CelesTrak.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

const QUERY_BASE: &str = "https://celestrak.org/NORAD/elements/gp.php";

/// Broad purpose of a constellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupCategory {
    Communications,
    Gnss,
}

/// The constellations that can be plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CatalogGroup {
    Intelsat,
    Iridium,
    Starlink,
    OneWeb,
    GpsOperational,
    GlonassOperational,
    Galileo,
    Beidou,
}

impl CatalogGroup {
    pub const ALL: [CatalogGroup; 8] = [
        CatalogGroup::Intelsat,
        CatalogGroup::Iridium,
        CatalogGroup::Starlink,
        CatalogGroup::OneWeb,
        CatalogGroup::GpsOperational,
        CatalogGroup::GlonassOperational,
        CatalogGroup::Galileo,
        CatalogGroup::Beidou,
    ];

    /// CelesTrak's `GROUP=` identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Intelsat => "intelsat",
            Self::Iridium => "iridium",
            Self::Starlink => "starlink",
            Self::OneWeb => "oneweb",
            Self::GpsOperational => "gps-ops",
            Self::GlonassOperational => "glo-ops",
            Self::Galileo => "galileo",
            Self::Beidou => "beidou",
        }
    }

    pub fn category(self) -> GroupCategory {
        match self {
            Self::Intelsat | Self::Iridium | Self::Starlink | Self::OneWeb => {
                GroupCategory::Communications
            }
            Self::GpsOperational | Self::GlonassOperational | Self::Galileo | Self::Beidou => {
                GroupCategory::Gnss
            }
        }
    }

    /// URL of the group's JSON element document.
    pub fn query_url(self) -> String {
        format!("{QUERY_BASE}?GROUP={}&FORMAT=json", self.id())
    }

    /// File name a downloaded document is cached under.
    pub fn cache_file_name(self) -> String {
        format!("{}.json", self.id())
    }
}

impl fmt::Display for CatalogGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CatalogGroup {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|g| g.id() == wanted)
            .ok_or_else(|| CatalogError::UnknownGroup(s.to_string()))
    }
}

impl TryFrom<String> for CatalogGroup {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CatalogGroup> for String {
    fn from(group: CatalogGroup) -> Self {
        group.id().to_string()
    }
}
