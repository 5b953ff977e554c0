use crate::presets::Preset;

/// How overlapping stamps are combined on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeMode {
    /// Colours add up where stamps overlap.
    Additive,
    /// Later stamps paint over earlier ones.
    SourceOver,
}

impl CompositeMode {
    /// Value for a canvas 2D context's `globalCompositeOperation`.
    pub fn canvas_operation(self) -> &'static str {
        match self {
            CompositeMode::Additive => "lighter",
            CompositeMode::SourceOver => "source-over",
        }
    }
}

pub struct PatternConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub sprite_url: &'static str,
    pub initial_preset: Preset,
    pub composite: CompositeMode,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1200,
            canvas_height: 800,
            sprite_url: "./img/sprBullet.png",
            initial_preset: Preset::Parallelepiped,
            composite: CompositeMode::Additive,
        }
    }
}
