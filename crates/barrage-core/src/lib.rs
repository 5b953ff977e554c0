//! Geometric bullet-pattern engine.
//!
//! Shapes are declared once as [`shapes::ShapeDescriptor`]s, regenerated into
//! stamp positions every frame and spun in place between frames. Drawing is
//! left to a [`renderer::Renderer`] supplied by the host.

pub mod config;
pub mod error;
pub mod math;
pub mod pattern;
pub mod point;
pub mod presets;
pub mod renderer;
pub mod shapes;
pub mod spin;
pub mod vector;

pub use error::PatternError;
pub use point::Point;
pub use vector::Vector;
