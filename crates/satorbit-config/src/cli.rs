//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Plot satellite orbits from a cached CelesTrak element catalog.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "satorbit", about = "Satellite orbit ellipses around the Earth")]
pub struct CliArgs {
    /// Catalog group (intelsat, iridium, starlink, oneweb, gps-ops, glo-ops, galileo, beidou).
    #[arg(long)]
    pub group: Option<String>,

    /// Directory holding cached `<group>.json` files.
    #[arg(long)]
    pub catalog_dir: Option<PathBuf>,

    /// Plot only the first N satellites (0 = all).
    #[arg(long)]
    pub limit: Option<usize>,

    /// Points per orbit ellipse.
    #[arg(long)]
    pub samples: Option<usize>,

    /// Write the composed scene as JSON to this file instead of printing a summary.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref group) = args.group {
            self.catalog.group = group.clone();
        }
        if let Some(ref dir) = args.catalog_dir {
            self.catalog.directory = dir.clone();
        }
        if let Some(limit) = args.limit {
            self.catalog.limit = limit;
        }
        if let Some(samples) = args.samples {
            self.geometry.sample_count = samples;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            group: Some("starlink".to_string()),
            limit: Some(10),
            samples: Some(500),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.catalog.group, "starlink");
        assert_eq!(config.catalog.limit, 10);
        assert_eq!(config.geometry.sample_count, 500);
        // Non-overridden fields retain defaults
        assert_eq!(config.catalog.directory, PathBuf::from("."));
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "satorbit",
            "--group",
            "galileo",
            "--catalog-dir",
            "/tmp/tle",
            "--export",
            "scene.json",
        ]);
        assert_eq!(args.group.as_deref(), Some("galileo"));
        assert_eq!(args.catalog_dir, Some(PathBuf::from("/tmp/tle")));
        assert_eq!(args.export, Some(PathBuf::from("scene.json")));
        assert_eq!(args.limit, None);
    }
}
