//! Text renderer: one line per orbit with its perigee and apogee radii.

use std::io::Write;

use satorbit_scene::{RenderStyle, Scene, SceneRenderer};

/// Writes a plain-text table of the scene instead of drawing it.
pub struct SummaryRenderer<W: Write> {
    out: W,
}

impl<W: Write> SummaryRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SceneRenderer for SummaryRenderer<W> {
    type Error = std::io::Error;

    fn render(&mut self, scene: Scene, style: &RenderStyle) -> Result<(), Self::Error> {
        writeln!(
            self.out,
            "{:<32} {:>12} {:>12} {:>7}",
            "satellite", "perigee km", "apogee km", "points"
        )?;
        for curve in &scene.curves {
            let (nearest, farthest) = curve
                .points
                .iter()
                .map(|p| p.length())
                .fold((f64::INFINITY, 0.0_f64), |(lo, hi), r| (lo.min(r), hi.max(r)));
            if !curve.is_finite() || curve.is_empty() {
                writeln!(
                    self.out,
                    "{:<32} {:>12} {:>12} {:>7}",
                    curve.label,
                    "-",
                    "-",
                    curve.len()
                )?;
                continue;
            }
            tracing::debug!(
                satellite = %curve.label,
                perigee_km = nearest,
                apogee_km = farthest,
                "orbit extent"
            );
            writeln!(
                self.out,
                "{:<32} {:>12.1} {:>12.1} {:>7}",
                curve.label,
                nearest,
                farthest,
                curve.len()
            )?;
        }
        writeln!(
            self.out,
            "reference sphere: r = {} km, {}x{} grid; axes: {}",
            scene.sphere.radius,
            scene.sphere.longitude_divisions,
            scene.sphere.colatitude_divisions,
            style.axis_labels.join(", ")
        )?;
        self.out.flush()
    }
}
