pub mod headless;
pub mod window;

pub use headless::HeadlessPresenter;
pub use window::WindowPresenter;

use crate::error::ReplayResult;
use crate::pipeline::FrameBuffer;

/// Where finished frames get shown.
pub trait Presenter {
    /// Drains pending events. Returns true once the user asked to quit.
    fn pump_events(&mut self) -> bool;
    fn present(&mut self, buffer: &FrameBuffer) -> ReplayResult<()>;
}
