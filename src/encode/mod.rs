mod ffmpeg;
mod gif;

pub use ffmpeg::{is_ffmpeg_on_path, FfmpegEncoder};
pub use gif::GifEncoder;

use crate::error::{ReplayError, ReplayResult};
use image::RgbImage;
use std::path::Path;

pub const DEFAULT_OUTPUT: &str = "warehouse.mp4";
pub const DEFAULT_OUTPUT_FPS: u32 = 20;

/// Frames captured during playback, in display order.
#[derive(Debug, Default, Clone)]
pub struct VideoBuffer {
    frames: Vec<RgbImage>,
}

impl VideoBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: RgbImage) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }

    /// Dimensions of the first frame. Every capture has the same size.
    pub fn dimensions(&self) -> ReplayResult<(u32, u32)> {
        self.frames
            .first()
            .map(RgbImage::dimensions)
            .ok_or_else(|| ReplayError::encode("no frames were captured"))
    }
}

pub trait VideoEncoder {
    fn name(&self) -> &'static str;
    fn encode(&self, video: &VideoBuffer, fps: u32, out_path: &Path) -> ReplayResult<()>;
}

/// Picks the encoder from the output extension: `.gif` stays in-process,
/// everything else goes through ffmpeg.
pub fn encoder_for_path(path: &Path) -> Box<dyn VideoEncoder> {
    let is_gif = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"));
    if is_gif {
        Box::new(GifEncoder)
    } else {
        Box::new(FfmpegEncoder::default())
    }
}

pub(crate) fn ensure_parent_dir(path: &Path) -> ReplayResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_has_no_dimensions() {
        let video = VideoBuffer::new();
        assert!(video.is_empty());
        assert!(matches!(video.dimensions(), Err(ReplayError::Encode(_))));
    }

    #[test]
    fn dimensions_come_from_first_frame() {
        let mut video = VideoBuffer::new();
        video.push(RgbImage::new(6, 4));
        video.push(RgbImage::new(6, 4));
        assert_eq!(video.len(), 2);
        assert_eq!(video.dimensions().unwrap(), (6, 4));
    }

    #[test]
    fn extension_selects_encoder() {
        assert_eq!(encoder_for_path(Path::new("out/anim.GIF")).name(), "gif");
        assert_eq!(encoder_for_path(Path::new("warehouse.mp4")).name(), "ffmpeg");
        assert_eq!(encoder_for_path(Path::new("no_extension")).name(), "ffmpeg");
    }
}
