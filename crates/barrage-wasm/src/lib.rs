use barrage_core::config::PatternConfig;
use barrage_core::pattern::Pattern;
use barrage_core::presets::Preset;
use barrage_core::renderer::{Sprite, Stamp, StampBuffer};
use wasm_bindgen::prelude::*;

mod console;

/// Pattern animation driven one frame at a time from JavaScript.
///
/// Each `step` fills a flat buffer of `Stamp`s (x, y, width, height as f32)
/// that the host reads through `get_stamp_buffer_ptr` and draws with
/// `drawImage`.
#[wasm_bindgen]
pub struct PatternWorld {
    pattern: Pattern,
    preset: Preset,
    sprite: Sprite,
    config: PatternConfig,
    stamps: StampBuffer,
}

#[wasm_bindgen]
impl PatternWorld {
    /// Create a world for a sprite that has finished loading.
    #[wasm_bindgen(constructor)]
    pub fn new(sprite_width: f64, sprite_height: f64) -> PatternWorld {
        console::init();

        let config = PatternConfig::default();
        let preset = config.initial_preset;
        let pattern = Pattern::from_preset(preset);

        web_sys::console::log_1(
            &format!(
                "WASM PatternWorld created: preset '{}', {} shapes",
                preset.name(),
                pattern.shapes.len()
            )
            .into(),
        );

        PatternWorld {
            pattern,
            preset,
            sprite: Sprite::new(sprite_width, sprite_height),
            config,
            stamps: StampBuffer::new(),
        }
    }

    /// Generate, record and spin one frame. Returns the time taken in ms.
    #[wasm_bindgen]
    pub fn step(&mut self) -> f32 {
        let start = js_sys::Date::now();
        self.stamps.clear();
        let stats = self.pattern.step(&self.sprite, &mut self.stamps);
        if stats.skipped > 0 {
            log::debug!("frame {}: {} shapes skipped", self.pattern.frame(), stats.skipped);
        }
        let elapsed = js_sys::Date::now() - start;
        elapsed as f32
    }

    #[wasm_bindgen]
    pub fn get_stamp_buffer_ptr(&self) -> *const f32 {
        self.stamps.stamps().as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_stamp_buffer_byte_length(&self) -> usize {
        self.stamps.as_bytes().len()
    }

    #[wasm_bindgen]
    pub fn stamp_count(&self) -> usize {
        self.stamps.len()
    }

    #[wasm_bindgen]
    pub fn stamp_stride(&self) -> usize {
        std::mem::size_of::<Stamp>()
    }

    #[wasm_bindgen]
    pub fn set_sprite_size(&mut self, width: f64, height: f64) {
        self.sprite = Sprite::new(width, height);
    }

    /// Switch to the next built-in dataset. Returns its index.
    #[wasm_bindgen]
    pub fn next_preset(&mut self) -> u32 {
        self.set_preset(self.preset.next().index() as u32)
    }

    /// Switch to the dataset at `index`, wrapping around. Returns the index
    /// actually loaded.
    #[wasm_bindgen]
    pub fn set_preset(&mut self, index: u32) -> u32 {
        self.preset = Preset::from_index(index as usize);
        self.pattern.load_preset(self.preset);
        self.preset.index() as u32
    }

    #[wasm_bindgen]
    pub fn preset_name(&self) -> String {
        self.preset.name().to_string()
    }

    #[wasm_bindgen]
    pub fn shape_count(&self) -> usize {
        self.pattern.shapes.len()
    }

    #[wasm_bindgen]
    pub fn canvas_width(&self) -> u32 {
        self.config.canvas_width
    }

    #[wasm_bindgen]
    pub fn canvas_height(&self) -> u32 {
        self.config.canvas_height
    }

    #[wasm_bindgen]
    pub fn sprite_url(&self) -> String {
        self.config.sprite_url.to_string()
    }

    /// Value for the canvas context's `globalCompositeOperation`.
    #[wasm_bindgen]
    pub fn composite_operation(&self) -> String {
        self.config.composite.canvas_operation().to_string()
    }
}
