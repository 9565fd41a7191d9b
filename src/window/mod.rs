//! Represents an OpenGL context and the window or environment around it.
//!
//! The window owns the "close requested" flag: it is raised by a close request from the
//! window manager or explicitly through `Window::set_should_close`, and the main loop
//! stops once it is set.

pub mod backends;
pub mod events;

pub mod prelude {
    pub use super::events::{Event, WindowEvent};
    pub use super::WindowParams;
}

use std::os::raw::c_void;

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::math::prelude::Vector2;

use self::backends::Visitor;
use self::events::{Event, WindowEvent};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// The OpenGL version to request, always with a core profile.
    pub gl_version: (u8, u8),
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "hello_world".to_owned(),
            size: Vector2::new(800, 600),
            gl_version: (3, 3),
            multisample: 0,
            vsync: false,
        }
    }
}

pub struct Window {
    visitor: Box<dyn Visitor>,
    events: Vec<Event>,
    should_close: bool,
}

impl Window {
    /// Creates a new window and makes its GL context current on this thread.
    pub fn new(params: WindowParams) -> Result<Self> {
        Ok(Window::from_visitor(backends::new(params)?))
    }

    /// Creates a window without any OS resources.
    pub fn headless(dimensions: Vector2<u32>) -> Self {
        Window::from_visitor(backends::new_headless(dimensions))
    }

    pub fn from_visitor(visitor: Box<dyn Visitor>) -> Self {
        Window {
            visitor,
            events: Vec::new(),
            should_close: false,
        }
    }

    /// Polls pending events without blocking. A close request raises the close flag
    /// before the events are returned.
    pub fn poll_events(&mut self) -> &[Event] {
        self.events.clear();
        self.visitor.poll_events(&mut self.events);

        if self
            .events
            .iter()
            .any(|v| *v == Event::Window(WindowEvent::Closed))
        {
            self.should_close = true;
        }

        &self.events
    }

    /// Returns true if the window has been asked to close.
    #[inline]
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    #[inline]
    pub fn set_should_close(&mut self) {
        self.should_close = true;
    }

    /// Swaps the buffers in case of double or triple buffering.
    ///
    /// **Warning**: if you enabled vsync, this function will block until the next time the screen
    /// is refreshed. However drivers can choose to override your vsync settings, which means that
    /// you can't know in advance whether swap_buffers will block or not.
    #[inline]
    pub fn swap_buffers(&self) -> Result<()> {
        self.visitor.swap_buffers()
    }

    /// Set the context as the active context in this thread.
    #[inline]
    pub fn make_current(&self) -> Result<()> {
        self.visitor.make_current()
    }

    /// Returns the size in *points* of the client area of the window.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.visitor.dimensions()
    }

    /// Returns the ratio between the backing framebuffer resolution and the window size in
    /// screen pixels. This is typically one for a normal display and two for a retina display.
    #[inline]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.visitor.device_pixel_ratio()
    }

    /// Returns the size of the framebuffer in physical pixels.
    pub fn framebuffer_dimensions(&self) -> Vector2<u32> {
        let size = self.dimensions();
        let dpr = self.device_pixel_ratio();
        Vector2::new(
            (size.x as f32 * dpr).round() as u32,
            (size.y as f32 * dpr).round() as u32,
        )
    }

    /// Returns the address of a GL entry point in the current context.
    #[inline]
    pub fn get_proc_address(&self, symbol: &str) -> *const c_void {
        self.visitor.get_proc_address(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::backends::HeadlessVisitor;
    use super::*;

    #[test]
    fn close_request_raises_flag() {
        let visitor = HeadlessVisitor::new(Vector2::new(800, 600))
            .with_frame(vec![])
            .with_frame(vec![Event::Window(WindowEvent::Closed)]);
        let mut window = Window::from_visitor(Box::new(visitor));

        assert!(window.poll_events().is_empty());
        assert!(!window.should_close());

        assert_eq!(window.poll_events().len(), 1);
        assert!(window.should_close());
    }

    #[test]
    fn framebuffer_dimensions() {
        let visitor = HeadlessVisitor::new(Vector2::new(800, 600)).with_device_pixel_ratio(2.0);
        let window = Window::from_visitor(Box::new(visitor));
        assert_eq!(window.dimensions(), Vector2::new(800, 600));
        assert_eq!(window.framebuffer_dimensions(), Vector2::new(1600, 1200));
    }

    #[test]
    fn resize_updates_dimensions() {
        let visitor = HeadlessVisitor::new(Vector2::new(800, 600))
            .with_frame(vec![Event::Window(WindowEvent::Resized(1024, 768))]);
        let mut window = Window::from_visitor(Box::new(visitor));
        window.poll_events();
        assert_eq!(window.framebuffer_dimensions(), Vector2::new(1024, 768));
    }

    #[test]
    fn params() {
        let params: WindowParams =
            serde_json::from_str(r#"{ "title": "mock", "size": { "x": 320, "y": 240 } }"#)
                .unwrap();
        assert_eq!(params.title, "mock");
        assert_eq!(params.size, Vector2::new(320, 240));
        assert_eq!(params.gl_version, (3, 3));
        assert_eq!(params.multisample, 0);
    }
}
