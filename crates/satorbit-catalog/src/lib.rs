//! Satellite element catalogs in the CelesTrak general-perturbations JSON format.
//!
//! Downloading is left to the caller; this crate names the groups, knows
//! where a group's document lives and how it is cached on disk, and turns
//! its records into [`OrbitalElementSet`](satorbit_geometry::OrbitalElementSet)s.

mod error;
mod group;
mod load;
mod record;

pub use error::CatalogError;
pub use group::{CatalogGroup, GroupCategory};
pub use load::{load_group, load_records, load_records_from_path};
pub use record::{GpRecord, NoradId, SECONDS_PER_DAY};
