pub mod buffer;
pub mod fonts;
pub mod renderer;

pub use buffer::FrameBuffer;
pub use fonts::{FontSet, FontSource, TextStyles};
pub use renderer::{header_text, FrameRenderer, GridRenderer};
