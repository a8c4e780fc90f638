//! From catalog records and configuration to a composed scene.

use satorbit_catalog::GpRecord;
use satorbit_config::{Config, RenderConfig};
use satorbit_geometry::{ElementError, OrbitalElementSet};
use satorbit_scene::{RenderStyle, SceneBuilder, WireframeStyle};

/// Element sets chosen for plotting, and those dropped by validation.
#[derive(Debug, Default)]
pub struct Selection {
    pub elements: Vec<OrbitalElementSet>,
    pub rejected: Vec<ElementError>,
}

/// Take the first `limit` records (all of them when `limit` is 0) in
/// catalog order and convert them to element sets.
///
/// With `strict` set, element sets that cannot form a closed orbit are
/// dropped and reported; otherwise they pass through unchanged.
pub fn select_elements(records: &[GpRecord], limit: usize, strict: bool) -> Selection {
    let take = if limit == 0 { records.len() } else { limit };
    let mut selection = Selection::default();

    for record in records.iter().take(take) {
        let elements = record.to_elements();
        if strict && let Err(err) = elements.validate() {
            tracing::warn!(%err, "skipping satellite");
            selection.rejected.push(err);
            continue;
        }
        selection.elements.push(elements);
    }

    tracing::debug!(
        selected = selection.elements.len(),
        rejected = selection.rejected.len(),
        available = records.len(),
        "selected satellites"
    );
    selection
}

/// Scene composition settings from the config.
pub fn scene_builder(config: &Config) -> SceneBuilder {
    SceneBuilder::default()
        .with_sample_count(config.geometry.sample_count)
        .with_sphere_radius(config.sphere.radius_km)
        .with_sphere_resolution(
            config.sphere.longitude_divisions,
            config.sphere.colatitude_divisions,
        )
}

pub fn render_style(render: &RenderConfig) -> RenderStyle {
    RenderStyle {
        axis_labels: [
            render.x_label.clone(),
            render.y_label.clone(),
            render.z_label.clone(),
        ],
        tick_label_size: render.tick_label_size,
        equal_aspect: render.equal_aspect,
        wireframe: WireframeStyle {
            color: render.wireframe_color,
            opacity: render.wireframe_opacity,
            line_width: render.wireframe_line_width,
        },
    }
}
