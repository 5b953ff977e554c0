//! Boundary between the engine and whatever draws the stamps.

use bytemuck::{Pod, Zeroable};

use crate::point::Point;

/// A loaded sprite image, known only by its natural size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub width: f64,
    pub height: f64,
}

impl Sprite {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Distance from the top-left corner to the image center.
    pub fn offset(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Something that can draw a sprite centred on a point.
pub trait Renderer {
    /// Draw `sprite` at `scale` times its natural size, centred on `point`.
    fn stamp_at(&mut self, sprite: &Sprite, point: Point, scale: f64);
}

/// Destination rectangle of one draw call: 16 bytes, laid out for direct
/// reads from the host.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Stamp {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Stamp {
    /// Rectangle of `sprite` scaled by `scale` and centred on `point`.
    pub fn centered(sprite: &Sprite, point: Point, scale: f64) -> Self {
        let (ox, oy) = sprite.offset();
        Self {
            x: (point.x - ox * scale) as f32,
            y: (point.y - oy * scale) as f32,
            width: (sprite.width * scale) as f32,
            height: (sprite.height * scale) as f32,
        }
    }
}

/// A renderer that records stamps for a host to draw later.
#[derive(Debug, Default)]
pub struct StampBuffer {
    stamps: Vec<Stamp>,
}

impl StampBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.stamps.clear();
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    pub fn stamps(&self) -> &[Stamp] {
        &self.stamps
    }

    /// The recorded stamps as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.stamps)
    }
}

impl Renderer for StampBuffer {
    fn stamp_at(&mut self, sprite: &Sprite, point: Point, scale: f64) {
        self.stamps.push(Stamp::centered(sprite, point, scale));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_is_centred() {
        let sprite = Sprite::new(16.0, 8.0);
        let s = Stamp::centered(&sprite, Point::new(100.0, 50.0, 7.0), 2.0);
        assert_eq!(s, Stamp { x: 84.0, y: 42.0, width: 32.0, height: 16.0 });
    }

    #[test]
    fn test_buffer_bytes() {
        let mut buf = StampBuffer::new();
        buf.stamp_at(&Sprite::new(2.0, 2.0), Point::ORIGIN, 1.0);
        buf.stamp_at(&Sprite::new(2.0, 2.0), Point::ORIGIN, 1.0);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.as_bytes().len(), 2 * std::mem::size_of::<Stamp>());
    }
}
