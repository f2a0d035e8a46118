use crate::config::ReplayConfig;
use crate::core::{read_frames, Frame, Layout};
use crate::encode::{encoder_for_path, VideoBuffer};
use crate::error::{ReplayError, ReplayResult};
use crate::pipeline::{FontSet, FrameBuffer, FrameRenderer, GridRenderer, TextStyles};
use crate::renderers::{HeadlessPresenter, Presenter, WindowPresenter};
use std::time::{Duration, Instant};

/// Caps the loop at a fixed rate by sleeping off whatever is left of each frame.
pub struct FrameClock {
    frame_time: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_time: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last_tick: Instant::now(),
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    pub fn tick(&mut self) -> Duration {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.frame_time {
            std::thread::sleep(self.frame_time - elapsed);
        }
        let now = Instant::now();
        let delta = now - self.last_tick;
        self.last_tick = now;
        delta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackReport {
    pub frames_total: usize,
    pub frames_captured: usize,
    pub interrupted: bool,
}

/// Shows every frame in order and captures what was shown. A quit seen
/// before frame N leaves exactly N frames in the buffer.
pub fn play<R, P>(
    frames: &[Frame],
    layout: &Layout,
    renderer: &R,
    presenter: &mut P,
    display_fps: u32,
) -> ReplayResult<(VideoBuffer, PlaybackReport)>
where
    R: FrameRenderer,
    P: Presenter,
{
    let mut buffer = FrameBuffer::new(layout.width(), layout.height());
    let mut video = VideoBuffer::new();
    let mut clock = FrameClock::new(display_fps);
    let mut frame_index = 0;
    let mut interrupted = false;

    for frame in frames {
        if presenter.pump_events() {
            log::info!("quit requested after {frame_index} frames");
            interrupted = true;
            break;
        }

        renderer.render(frame, frame_index, &mut buffer);
        presenter.present(&buffer)?;
        video.push(buffer.to_rgb_image());

        frame_index += 1;
        let delta = clock.tick();
        log::trace!("frame {frame_index} took {:.2}ms", delta.as_secs_f32() * 1000.0);
    }

    let report = PlaybackReport {
        frames_total: frames.len(),
        frames_captured: video.len(),
        interrupted,
    };
    Ok((video, report))
}

/// The whole run: parse, play back, then encode what was captured.
pub fn run(config: &ReplayConfig) -> ReplayResult<PlaybackReport> {
    let frames = read_frames(&config.input)?;
    let first = frames.first().ok_or(ReplayError::EmptyAnimation)?;
    let layout = Layout::for_frame(first)?;
    log::info!(
        "{} frames of {}x{} cells, cell size {}px",
        frames.len(),
        layout.cols,
        layout.rows,
        layout.cell_size
    );

    let fonts = FontSet::load(&config.fonts)?;
    let renderer = GridRenderer::new(layout, TextStyles::new(fonts, &layout));

    // the window only lives for this block, so it is gone before encoding starts
    let (video, report) = if config.headless {
        let mut presenter = HeadlessPresenter::new();
        play(&frames, &layout, &renderer, &mut presenter, config.display_fps)?
    } else {
        let mut presenter = WindowPresenter::open(&layout)?;
        play(&frames, &layout, &renderer, &mut presenter, config.display_fps)?
    };

    export(&video, report, config)
}

/// Encodes what playback captured. Quitting before the first frame leaves
/// nothing to write, which is not an error.
pub fn export(
    video: &VideoBuffer,
    report: PlaybackReport,
    config: &ReplayConfig,
) -> ReplayResult<PlaybackReport> {
    if video.is_empty() {
        log::warn!(
            "no frames were captured, nothing to export to {}",
            config.output.display()
        );
        return Ok(report);
    }

    let encoder = encoder_for_path(&config.output);
    log::info!(
        "encoding {} frames at {} fps with {}",
        video.len(),
        config.output_fps,
        encoder.name()
    );
    encoder.encode(video, config.output_fps, &config.output)?;

    log::info!("saved {}", config.output.display());
    println!("Animation saved to '{}'", config.output.display());
    Ok(report)
}
