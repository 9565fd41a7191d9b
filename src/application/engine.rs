use std::io::{self, Write};

use crate::errors::*;
use crate::input::keyboard::Key;
use crate::input::InputSystem;
use crate::video::{VideoSystem, Viewport};
use crate::window::events::{Event, WindowEvent};
use crate::window::Window;

use super::settings::{EngineParams, Settings};
use super::Application;

/// `Engine` is the root object of the application. It binds the window, input and video
/// systems in a central place and takes care of the execution order of a frame.
pub struct Engine {
    // Declared before `window`, GL objects must go before the context does.
    pub video: VideoSystem,
    pub input: InputSystem,
    pub window: Window,
    params: EngineParams,
    frame: u64,
}

impl Engine {
    /// Creates the window, makes its context current and loads the GL functions.
    pub fn new(settings: &Settings) -> Result<Self> {
        let window = if settings.headless {
            Window::headless(settings.window.size)
        } else {
            Window::new(settings.window.clone())?
        };

        let video = if settings.headless {
            VideoSystem::headless()
        } else {
            VideoSystem::new(&window)?
        };

        Ok(Engine::from_parts(window, video, settings.engine))
    }

    pub fn from_parts(window: Window, video: VideoSystem, params: EngineParams) -> Self {
        Engine {
            video,
            input: InputSystem::new(),
            window,
            params,
            frame: 0,
        }
    }

    /// The number of frames completed so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run the main loop, this will block the working thread until the window has been
    /// asked to close.
    pub fn run<T: Application>(&mut self, application: &mut T) -> Result<()> {
        let dimensions = self.window.framebuffer_dimensions();
        self.video.set_viewport(Viewport::new(dimensions))?;

        application.on_start(&mut self.video)?;
        info!("enters main loop.");

        while !self.window.should_close() {
            if let Some(max) = self.params.max_frames {
                if self.frame >= max {
                    break;
                }
            }

            self.advance(application)?;
        }

        application.on_exit(&mut self.video)?;
        info!("exits main loop after {} frames.", self.frame);
        Ok(())
    }

    fn advance<T: Application>(&mut self, application: &mut T) -> Result<()> {
        self.process_input();

        self.video.clear(self.params.clear_color)?;
        application.on_render(&mut self.video)?;

        // Shows the back buffer we just rendered into.
        self.window.swap_buffers()?;

        for v in self.window.poll_events() {
            self.input.on_event(v);

            if let Event::Window(WindowEvent::Resized(w, h)) = *v {
                self.video.set_viewport(Viewport::new((w, h).into()))?;
            }
        }

        self.frame += 1;
        Ok(())
    }

    fn process_input(&mut self) {
        if self.input.is_key_down(Key::Escape) && !self.window.should_close() {
            notify_close(&mut io::stdout());
            self.window.set_should_close();
        }
    }
}

/// Tells the user on standard output that the window is going away.
fn notify_close<W: Write>(out: &mut W) {
    if let Err(err) = writeln!(out, "Closing window.").and_then(|_| out.flush()) {
        warn!("failed to write close notice. {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_notice() {
        let mut out: Vec<u8> = Vec::new();
        notify_close(&mut out);
        assert_eq!(String::from_utf8(out).unwrap(), "Closing window.\n");
    }
}
