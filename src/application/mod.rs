//! A minimal application model.
//!
//! ## Application
//!
//! `Application` defines the three points where user code runs: once before the main loop,
//! once per frame after the framebuffer has been cleared, and once after the main loop.
//!
//! ## Engine
//!
//! `Engine` is where we actually run the main loop. Every frame it
//!
//! 1. checks the Escape key and raises the close flag of the window,
//! 2. clears the framebuffer,
//! 3. calls `Application::on_render`,
//! 4. swaps buffers,
//! 5. polls window events, updating keyboard state and the viewport.

pub mod settings;

mod engine;
pub use self::engine::Engine;
pub use self::settings::{EngineParams, Settings};

use crate::errors::*;
use crate::video::VideoSystem;

/// `Application` is a user-friendly facade to building application, which defines a number
/// of event functions that get executed in a pre-determined order.
pub trait Application {
    /// `Application::on_start` is called once, before the main loop. This is where GPU
    /// resources are created.
    fn on_start(&mut self, _: &mut VideoSystem) -> Result<()> {
        Ok(())
    }

    /// `Application::on_render` is called every frame, after the framebuffer has been
    /// cleared.
    fn on_render(&mut self, _: &mut VideoSystem) -> Result<()> {
        Ok(())
    }

    /// `Application::on_exit` is called once, after the main loop.
    fn on_exit(&mut self, _: &mut VideoSystem) -> Result<()> {
        Ok(())
    }
}
