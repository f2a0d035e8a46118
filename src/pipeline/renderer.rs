use crate::core::{Color, Frame, Layout, Symbol, TextStyle};
use crate::pipeline::{FrameBuffer, TextStyles};

/// Anything that can paint one frame of the animation into a surface.
pub trait FrameRenderer {
    fn render(&self, frame: &Frame, index: usize, target: &mut FrameBuffer);
}

pub fn header_text(frame: &Frame, index: usize) -> String {
    let mut text = format!("Frame: {index}");
    if let Some((x, y)) = frame.robot_position() {
        text.push_str(&format!("  @: ({x}, {y})"));
    }
    text
}

/// Draws grids as colored glyphs under a one-line header.
pub struct GridRenderer {
    layout: Layout,
    styles: TextStyles,
}

impl GridRenderer {
    pub fn new(layout: Layout, styles: TextStyles) -> Self {
        Self { layout, styles }
    }

    fn draw_header(&self, frame: &Frame, index: usize, target: &mut FrameBuffer) {
        let (font, px) = self.styles.face(TextStyle::Regular);
        let text = header_text(frame, index);
        target.draw_text_centered(font, px, &text, self.layout.header_center(), Color::WHITE);
    }

    fn draw_cells(&self, frame: &Frame, target: &mut FrameBuffer) {
        let mut glyph = [0u8; 4];
        for (y, row) in frame.rows().iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                let Some(symbol) = Symbol::from_char(c) else {
                    continue;
                };
                let (color, style) = symbol.appearance();
                let (font, px) = self.styles.face(style);
                let text = symbol.glyph().encode_utf8(&mut glyph);
                target.draw_text_centered(font, px, text, self.layout.cell_center(x, y), color);
            }
        }
    }
}

impl FrameRenderer for GridRenderer {
    fn render(&self, frame: &Frame, index: usize, target: &mut FrameBuffer) {
        target.clear(Color::BACKGROUND);
        self.draw_header(frame, index, target);
        self.draw_cells(frame, target);
    }
}
