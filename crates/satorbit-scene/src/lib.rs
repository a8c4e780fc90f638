//! Scene composition: many orbit curves plus a reference sphere, and the
//! boundary through which a finished scene is handed to a renderer.

mod composer;
mod render;
mod sphere;

pub use composer::{Scene, SceneBuilder, build_scene};
pub use render::{
    HeadlessRenderer, JsonSceneWriter, RenderError, RenderStyle, SceneRenderer, WireframeStyle,
};
pub use sphere::{DEFAULT_COLATITUDE_DIVISIONS, DEFAULT_LONGITUDE_DIVISIONS, ReferenceSphere};
