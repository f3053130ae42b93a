//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use glyphgrid_common::{SurfaceSize, Vec2};

use crate::input::{wheel_zoom_delta, PanDrag};

use super::core::GlyphgridApp;
use super::keys::{key_action, KeyAction};

impl ApplicationHandler for GlyphgridApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                    self.viewport
                        .set_surface_size(SurfaceSize::new(size.width, size.height));
                    self.needs_redraw = true;
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.handle_left_button(state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_wheel(delta);
            }

            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => {
                self.cancel_drag();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
                self.needs_redraw = false;
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.schedule_redraw(event_loop);
    }
}

// =============================================================================
// INPUT
// =============================================================================

impl GlyphgridApp {
    fn handle_cursor_moved(&mut self, cursor: Vec2) {
        self.cursor = cursor;
        if let Some(ref mut drag) = self.drag {
            let delta = drag.move_to(cursor);
            self.viewport.apply_pan_delta(delta, false);
            self.needs_redraw = true;
        }
    }

    fn handle_left_button(&mut self, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.drag = Some(PanDrag::begin(self.cursor));
            }
            ElementState::Released => {
                if let Some(drag) = self.drag.take() {
                    self.viewport.apply_pan_delta(Vec2::ZERO, true);
                    let moved = drag.travelled();
                    tracing::debug!(dx = moved.x, dy = moved.y, "drag finished");
                    self.needs_redraw = true;
                }
            }
        }
    }

    fn handle_wheel(&mut self, delta: MouseScrollDelta) {
        let dz = wheel_zoom_delta(delta, &self.config.input);
        if dz != 0.0 {
            self.viewport.apply_zoom_delta(dz);
            self.needs_redraw = true;
        }
    }

    /// Abandon a drag in progress; the view snaps back to the committed
    /// centre.
    fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            self.viewport.cancel_pan();
            self.needs_redraw = true;
        }
    }

    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match key_action(&event.logical_key) {
            Some(KeyAction::Exit) => {
                tracing::info!("Escape pressed, exiting");
                self.should_exit = true;
            }
            Some(KeyAction::ResetView) => {
                self.cancel_drag();
                self.viewport.reset();
                self.needs_redraw = true;
            }
            None => {}
        }
    }
}
