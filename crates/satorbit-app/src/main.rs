//! `satorbit`: plot the orbits of a cached CelesTrak satellite group.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p satorbit-app -- --group galileo --catalog-dir ./data`.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use satorbit_app::pipeline::{render_style, scene_builder, select_elements};
use satorbit_app::platform::{PlatformDirs, PlatformError};
use satorbit_app::summary::SummaryRenderer;
use satorbit_catalog::{CatalogError, CatalogGroup, load_group};
use satorbit_config::{CliArgs, Config, ConfigError};
use satorbit_scene::{JsonSceneWriter, RenderError, SceneRenderer};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "satorbit failed");
            eprintln!("satorbit: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let mut dirs = PlatformDirs::resolve()?;
    if let Some(ref config_dir) = args.config {
        dirs = dirs.with_config_dir(config_dir.clone());
    }
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    config.validate()?;

    satorbit_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    let group: CatalogGroup = config.catalog.group.parse()?;
    tracing::info!(%group, category = ?group.category(), "plotting catalog group");

    let records = load_group(&config.catalog.directory, group)?;
    let selection = select_elements(
        &records,
        config.catalog.limit,
        config.geometry.strict_elements,
    );
    if !selection.rejected.is_empty() {
        tracing::warn!(
            count = selection.rejected.len(),
            "satellites skipped for invalid elements"
        );
    }

    let scene = scene_builder(&config).build(&selection.elements);
    let style = render_style(&config.render);

    match args.export {
        Some(ref path) => {
            let file = File::create(path).map_err(|source| AppError::Output {
                path: path.clone(),
                source,
            })?;
            JsonSceneWriter::new(BufWriter::new(file)).render(scene, &style)?;
            tracing::info!(path = %path.display(), "scene exported");
        }
        None => {
            let stdout = std::io::stdout().lock();
            SummaryRenderer::new(stdout)
                .render(scene, &style)
                .map_err(|source| AppError::Output {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
    }

    Ok(())
}
