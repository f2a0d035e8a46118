use crate::error::ReplayResult;
use crate::pipeline::FrameBuffer;
use crate::renderers::Presenter;

/// Presents nowhere. Used for `--headless` runs where only the video matters.
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    presented: usize,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl Presenter for HeadlessPresenter {
    fn pump_events(&mut self) -> bool {
        false
    }

    fn present(&mut self, _buffer: &FrameBuffer) -> ReplayResult<()> {
        self.presented += 1;
        Ok(())
    }
}
