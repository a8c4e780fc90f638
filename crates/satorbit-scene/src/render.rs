//! Rendering boundary: a [`Scene`] is handed to a renderer by value together
//! with cosmetic style options.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::Scene;

/// Errors from the renderers shipped with this crate.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Failed to encode the scene.
    #[error("failed to serialize scene: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write the encoded scene.
    #[error("failed to write scene: {0}")]
    Io(#[from] std::io::Error),

    /// A curve holds NaN or infinite coordinates, which JSON cannot carry.
    #[error("orbit curve {label:?} has non-finite coordinates")]
    NonFinite { label: String },
}

/// Wireframe appearance of the reference sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireframeStyle {
    /// Linear RGB in [0, 1].
    pub color: [f32; 3],
    pub opacity: f32,
    pub line_width: f32,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 1.0],
            opacity: 0.5,
            line_width: 0.5,
        }
    }
}

/// Cosmetic options for the rendering surface. None of these affect geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub axis_labels: [String; 3],
    pub tick_label_size: f32,
    /// Draw all three axes at the same scale.
    pub equal_aspect: bool,
    pub wireframe: WireframeStyle,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            axis_labels: [
                "X-axis (km)".to_string(),
                "Y-axis (km)".to_string(),
                "Z-axis (km)".to_string(),
            ],
            tick_label_size: 7.0,
            equal_aspect: true,
            wireframe: WireframeStyle::default(),
        }
    }
}

/// Something that can present a finished scene.
///
/// Implementations own the presentation lifecycle (windows, files, legends);
/// the scene is moved in and never handed back.
pub trait SceneRenderer {
    type Error;

    fn render(&mut self, scene: Scene, style: &RenderStyle) -> Result<(), Self::Error>;
}

/// Keeps every scene it receives, for inspection in tests and tools.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub scenes: Vec<Scene>,
    pub last_style: Option<RenderStyle>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_scene(&self) -> Option<&Scene> {
        self.scenes.last()
    }
}

impl SceneRenderer for HeadlessRenderer {
    type Error = std::convert::Infallible;

    fn render(&mut self, scene: Scene, style: &RenderStyle) -> Result<(), Self::Error> {
        self.scenes.push(scene);
        self.last_style = Some(style.clone());
        Ok(())
    }
}

#[derive(Serialize)]
struct SceneDocument<'a> {
    style: &'a RenderStyle,
    scene: &'a Scene,
}

/// Writes `{ "style": ..., "scene": ... }` as pretty JSON for an external
/// plotting tool.
pub struct JsonSceneWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonSceneWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SceneRenderer for JsonSceneWriter<W> {
    type Error = RenderError;

    fn render(&mut self, scene: Scene, style: &RenderStyle) -> Result<(), Self::Error> {
        if let Some(curve) = scene.curves.iter().find(|c| !c.is_finite()) {
            return Err(RenderError::NonFinite {
                label: curve.label.clone(),
            });
        }
        let document = SceneDocument {
            style,
            scene: &scene,
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        tracing::debug!(curves = scene.curves.len(), "scene written as JSON");
        Ok(())
    }
}
