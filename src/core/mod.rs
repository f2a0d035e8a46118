pub mod color;
pub mod frame;
pub mod layout;
pub mod symbol;

pub use color::Color;
pub use frame::{parse_frames, read_frames, Frame};
pub use layout::Layout;
pub use symbol::{Symbol, TextStyle};
