use crate::encode::{ensure_parent_dir, VideoBuffer, VideoEncoder};
use crate::error::ReplayResult;
use image::codecs::gif::{GifEncoder as ImageGifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Looping animated GIF written with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GifEncoder;

impl VideoEncoder for GifEncoder {
    fn name(&self) -> &'static str {
        "gif"
    }

    fn encode(&self, video: &VideoBuffer, fps: u32, out_path: &Path) -> ReplayResult<()> {
        video.dimensions()?;
        ensure_parent_dir(out_path)?;

        let file = BufWriter::new(File::create(out_path)?);
        // speed 10 keeps NeuQuant from dominating on full-window captures
        let mut encoder = ImageGifEncoder::new_with_speed(file, 10);
        encoder.set_repeat(Repeat::Infinite)?;

        let delay = Delay::from_numer_denom_ms(1000, fps.max(1));
        for frame in video.frames() {
            let rgba = DynamicImage::ImageRgb8(frame.clone()).into_rgba8();
            encoder.encode_frame(Frame::from_parts(rgba, 0, 0, delay))?;
        }

        log::debug!("wrote {} gif frames to {}", video.len(), out_path.display());
        Ok(())
    }
}
