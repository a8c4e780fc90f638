//! Configuration for the orbit viewer.
//!
//! Settings persist to disk as `config.ron` and can be overridden from the
//! command line. Missing sections and fields fall back to defaults.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CatalogConfig, Config, DebugConfig, GeometryConfig, RenderConfig, SphereConfig,
};
pub use error::ConfigError;
