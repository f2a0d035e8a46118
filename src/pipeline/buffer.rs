use crate::core::Color;
use fontdue::Font;
use glam::Vec2;
use image::RgbImage;

/// Software surface in minifb's 0x00RRGGBB layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u32>,
}

/// Size of a rendered line of text, plus where its baseline sits below the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
    pub ascent: f32,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.data.fill(color.to_u32());
    }

    #[cfg(test)]
    pub(crate) fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        (x < self.width && y < self.height).then(|| Color::from_u32(self.data[x + y * self.width]))
    }

    /// Blends `color` over the pixel with the given coverage. Out of bounds is clipped.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if coverage == 0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            let index = x + y * self.width;
            self.data[index] = Color::lerp_u32(self.data[index], color.to_u32(), coverage);
        }
    }

    pub fn measure_text(font: &Font, px: f32, text: &str) -> TextExtent {
        let (ascent, descent) = match font.horizontal_line_metrics(px) {
            Some(lm) => (lm.ascent, lm.descent),
            None => (px * 0.8, -px * 0.2),
        };
        let width: f32 = text
            .chars()
            .map(|c| font.metrics(c, px).advance_width)
            .sum();
        TextExtent {
            width,
            height: ascent - descent,
            ascent,
        }
    }

    /// Draws `text` so its line box is centered on `center`.
    pub fn draw_text_centered(
        &mut self,
        font: &Font,
        px: f32,
        text: &str,
        center: Vec2,
        color: Color,
    ) {
        let extent = Self::measure_text(font, px, text);
        let left = center.x - extent.width / 2.0;
        let top = center.y - extent.height / 2.0;
        self.draw_text(font, px, text, Vec2::new(left, top + extent.ascent), color);
    }

    /// Draws `text` starting at the pen position `origin` (x, baseline).
    pub fn draw_text(&mut self, font: &Font, px: f32, text: &str, origin: Vec2, color: Color) {
        let mut cursor_x = origin.x;
        let baseline = origin.y.round() as i32;

        for c in text.chars() {
            let (metrics, bitmap) = font.rasterize(c, px);
            let glyph_left = cursor_x.round() as i32 + metrics.xmin;
            // fontdue's ymin is the bitmap's bottom edge, measured up from the baseline
            let glyph_top = baseline - metrics.ymin - metrics.height as i32;

            for (i, &alpha) in bitmap.iter().enumerate() {
                let bx = (i % metrics.width) as i32;
                let by = (i / metrics.width) as i32;
                self.blend_pixel(glyph_left + bx, glyph_top + by, color, alpha);
            }

            cursor_x += metrics.advance_width;
        }
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        let mut raw = Vec::with_capacity(self.width * self.height * 3);
        for &pixel in &self.data {
            raw.extend_from_slice(&[(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8]);
        }
        RgbImage::from_raw(self.width as u32, self.height as u32, raw)
            .unwrap_or_else(|| RgbImage::new(self.width as u32, self.height as u32))
    }
}
