//! Redraw scheduling between event batches.

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::GlyphgridApp;

impl GlyphgridApp {
    /// Request a frame if anything changed, otherwise sleep until the next
    /// event.
    pub(super) fn schedule_redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.needs_redraw {
            self.request_redraw();
            event_loop.set_control_flow(ControlFlow::Poll);
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}
