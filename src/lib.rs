pub mod config;
pub mod core;
pub mod encode;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod playback;
pub mod renderers;

pub use crate::core::{parse_frames, read_frames, Color, Frame, Layout, Symbol, TextStyle};
pub use config::{create_clap_command, handle_clap_matches, ReplayConfig};
pub use error::{ReplayError, ReplayResult};
pub use playback::{play, run, PlaybackReport};
