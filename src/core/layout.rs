use crate::core::Frame;
use crate::error::{ReplayError, ReplayResult};
use glam::Vec2;

pub const TARGET_WINDOW_WIDTH: usize = 1380;
pub const HEADER_HEIGHT: usize = 40;
pub const CELL_SCALE: f64 = 1.15;
const FONT_SCALE: f64 = 0.8;
const LARGE_FONT_SCALE: f64 = 1.1;

/// Pixel geometry of the window, fixed for the whole run by the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: usize,
    pub header_height: usize,
}

impl Layout {
    pub fn new(rows: usize, cols: usize) -> ReplayResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(ReplayError::EmptyAnimation);
        }
        let per_col = TARGET_WINDOW_WIDTH / cols;
        let base = per_col.min(per_col * rows / rows);
        let cell_size = (base as f64 * CELL_SCALE) as usize;
        if cell_size == 0 {
            return Err(ReplayError::Config(format!(
                "{cols} columns don't fit in a {TARGET_WINDOW_WIDTH}px window"
            )));
        }
        let layout = Self {
            rows,
            cols,
            cell_size,
            header_height: HEADER_HEIGHT,
        };
        if !layout.has_legible_text() {
            log::warn!(
                "{cols} columns leave {cell_size}px cells, too small for any glyph; frames will render blank"
            );
        }
        Ok(layout)
    }

    /// False when cells are so small the font size rounds down to nothing.
    pub fn has_legible_text(&self) -> bool {
        self.font_size() >= 1.0
    }

    pub fn for_frame(frame: &Frame) -> ReplayResult<Self> {
        Self::new(frame.height(), frame.width())
    }

    pub fn width(&self) -> usize {
        self.cols * self.cell_size
    }

    pub fn height(&self) -> usize {
        self.rows * self.cell_size + self.header_height
    }

    pub fn font_size(&self) -> f32 {
        (self.cell_size as f64 * FONT_SCALE).floor() as f32
    }

    pub fn large_font_size(&self) -> f32 {
        (self.font_size() as f64 * LARGE_FONT_SCALE).floor() as f32
    }

    /// Center of cell (x, y), below the header band.
    pub fn cell_center(&self, x: usize, y: usize) -> Vec2 {
        let cell = self.cell_size as f32;
        Vec2::new(
            x as f32 * cell + cell / 2.0,
            y as f32 * cell + cell / 2.0 + self.header_height as f32,
        )
    }

    pub fn header_center(&self) -> Vec2 {
        Vec2::new(
            (self.width() / 2) as f32,
            (self.header_height / 2) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_grid_geometry() {
        let layout = Layout::new(2, 3).unwrap();
        // 1380 / 3 = 460, * 1.15 = 529
        assert_eq!(layout.cell_size, 529);
        assert_eq!(layout.width(), 3 * 529);
        assert_eq!(layout.height(), 2 * 529 + 40);
        assert_eq!(layout.font_size(), 423.0);
        assert_eq!(layout.large_font_size(), 465.0);
    }

    #[test]
    fn very_wide_grid_still_lays_out_without_text() {
        // 1380 / 1300 = 1, * 1.15 = 1
        let layout = Layout::new(1, 1300).unwrap();
        assert_eq!(layout.cell_size, 1);
        assert_eq!(layout.font_size(), 0.0);
        assert!(!layout.has_legible_text());
        assert!(Layout::new(10, 20).unwrap().has_legible_text());
    }

    #[test]
    fn puzzle_sized_grid() {
        let layout = Layout::new(10, 20).unwrap();
        // 1380 / 20 = 69, * 1.15 = 79.35
        assert_eq!(layout.cell_size, 79);
        assert_eq!((layout.width(), layout.height()), (1580, 830));
    }

    #[test]
    fn geometry_is_deterministic() {
        assert_eq!(Layout::new(7, 13).unwrap(), Layout::new(7, 13).unwrap());
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(matches!(Layout::new(0, 4), Err(ReplayError::EmptyAnimation)));
        assert!(matches!(Layout::new(4, 0), Err(ReplayError::EmptyAnimation)));
    }

    #[test]
    fn cell_centers_sit_below_header() {
        let layout = Layout::new(10, 20).unwrap();
        assert_eq!(layout.cell_center(0, 0), Vec2::new(39.5, 79.5));
        assert_eq!(layout.cell_center(2, 1), Vec2::new(197.5, 158.5));
        assert_eq!(layout.header_center(), Vec2::new(790.0, 20.0));
    }
}
