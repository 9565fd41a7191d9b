use std::os::raw::c_void;

use glutin::GlContext;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::super::super::events::{Event, WindowEvent};
use super::super::super::WindowParams;
use super::super::Visitor;
use super::types;

pub struct GlutinVisitor {
    window: glutin::GlWindow,
    events_loop: glutin::EventsLoop,
}

impl GlutinVisitor {
    pub fn from(params: WindowParams) -> Result<Self> {
        let builder = glutin::WindowBuilder::new()
            .with_title(params.title)
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.x),
                f64::from(params.size.y),
            ));

        let context = glutin::ContextBuilder::new()
            .with_multisampling(params.multisample)
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl(glutin::GlRequest::Specific(
                glutin::Api::OpenGl,
                params.gl_version,
            ))
            .with_vsync(params.vsync);

        let events_loop = glutin::EventsLoop::new();
        let window = glutin::GlWindow::new(builder, context, &events_loop)?;

        unsafe {
            window.make_current()?;
        }

        info!(
            "created window with OpenGL {}.{} core profile request.",
            params.gl_version.0, params.gl_version.1
        );

        Ok(GlutinVisitor {
            window,
            events_loop,
        })
    }
}

impl Visitor for GlutinVisitor {
    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        match self.window.get_inner_size() {
            Some(size) => Vector2::new(size.width as u32, size.height as u32),
            // The window has been closed.
            None => Vector2::new(0, 0),
        }
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f32 {
        self.window.get_hidpi_factor() as f32
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        let window = &self.window;
        let dpr = window.get_hidpi_factor();

        self.events_loop.poll_events(|v| {
            if let Some(e) = types::from_event(v, dpr) {
                // Some platforms need the context resized together with the window.
                if let Event::Window(WindowEvent::Resized(w, h)) = e {
                    window.resize(glutin::dpi::PhysicalSize::new(f64::from(w), f64::from(h)));
                }

                events.push(e);
            }
        });
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        unsafe {
            self.window.make_current()?;
            Ok(())
        }
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        self.window.swap_buffers()?;
        Ok(())
    }

    #[inline]
    fn get_proc_address(&self, symbol: &str) -> *const c_void {
        self.window.get_proc_address(symbol) as *const c_void
    }
}
