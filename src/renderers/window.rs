use crate::core::Layout;
use crate::error::{ReplayError, ReplayResult};
use crate::pipeline::FrameBuffer;
use crate::renderers::Presenter;
use minifb::{Key, Scale, Window, WindowOptions};

pub const WINDOW_TITLE: &str = "Warehouse Woes!";

/// A minifb window sized to the layout. Dropping it closes the window.
pub struct WindowPresenter {
    window: Window,
}

impl WindowPresenter {
    pub fn open(layout: &Layout) -> ReplayResult<Self> {
        let opts = WindowOptions {
            resize: false,
            scale: Scale::X1,
            title: true,
            borderless: false,
            ..WindowOptions::default()
        };
        let window = Window::new(WINDOW_TITLE, layout.width(), layout.height(), opts)
            .map_err(|e| ReplayError::display(format!("unable to open window: {e}")))?;
        log::info!("opened {}x{} window", layout.width(), layout.height());
        Ok(Self { window })
    }
}

impl Presenter for WindowPresenter {
    fn pump_events(&mut self) -> bool {
        // minifb only pumps inside update(); closing the window or Escape means quit
        self.window.update();
        !self.window.is_open() || self.window.is_key_down(Key::Escape)
    }

    fn present(&mut self, buffer: &FrameBuffer) -> ReplayResult<()> {
        self.window
            .update_with_buffer(&buffer.data, buffer.width, buffer.height)
            .map_err(|e| ReplayError::display(e.to_string()))
    }
}

impl Drop for WindowPresenter {
    fn drop(&mut self) {
        log::debug!("closing window");
    }
}
