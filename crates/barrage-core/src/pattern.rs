use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::PatternError;
use crate::point::Point;
use crate::presets::Preset;
use crate::renderer::{Renderer, Sprite};
use crate::shapes::{Shape, ShapeDescriptor};

/// Outcome of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Stamps handed to the renderer.
    pub stamps: usize,
    /// Shapes that failed to generate or spin and were skipped.
    pub skipped: usize,
}

/// An ordered collection of shapes animated together.
///
/// Shapes are drawn in order, so later shapes stack on top of earlier ones.
pub struct Pattern {
    pub shapes: Vec<ShapeDescriptor>,
    frame: u64,
}

impl Pattern {
    pub fn new(shapes: Vec<ShapeDescriptor>) -> Self {
        Self { shapes, frame: 0 }
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(preset.shapes())
    }

    /// Replace every shape with a fresh copy of `preset`.
    pub fn load_preset(&mut self, preset: Preset) {
        self.shapes = preset.shapes();
        debug!("loaded preset '{}' ({} shapes)", preset.name(), self.shapes.len());
        self.frame = 0;
    }

    pub fn push(&mut self, shape: impl Into<ShapeDescriptor>) {
        self.shapes.push(shape.into());
    }

    /// Frames stepped since creation or the last preset load.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Stamp positions of every shape for the current orientation.
    ///
    /// Does not advance anything.
    pub fn generate(&self) -> Vec<Result<Vec<Point>, PatternError>> {
        #[cfg(feature = "parallel")]
        let generated = self.shapes.par_iter().map(|shape| shape.points()).collect();

        #[cfg(not(feature = "parallel"))]
        let generated = self.shapes.iter().map(|shape| shape.points()).collect();

        generated
    }

    /// Draw one frame and spin every shape for the next.
    ///
    /// All shapes are generated before any is drawn, and all are drawn
    /// before any is spun. A shape that fails is logged and skipped; the
    /// rest of the frame is unaffected.
    pub fn step<R: Renderer>(&mut self, sprite: &Sprite, renderer: &mut R) -> FrameStats {
        let generated = self.generate();
        let mut stats = FrameStats::default();

        for (shape, points) in self.shapes.iter().zip(&generated) {
            match points {
                Ok(points) => {
                    let scale = shape.scale();
                    for point in points {
                        renderer.stamp_at(sprite, *point, scale);
                    }
                    stats.stamps += points.len();
                }
                Err(err) => {
                    warn!("skipping {} in frame {}: {}", shape.kind(), self.frame, err);
                    stats.skipped += 1;
                }
            }
        }

        for (shape, points) in self.shapes.iter_mut().zip(&generated) {
            if points.is_err() {
                continue;
            }
            if let Err(err) = shape.advance() {
                warn!("could not spin {} in frame {}: {}", shape.kind(), self.frame, err);
                stats.skipped += 1;
            }
        }

        self.frame += 1;
        stats
    }
}
