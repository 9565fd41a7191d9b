//! # What is This?
//!
//! `glprimer` is the smallest useful slice of an OpenGL program: open a window with a
//! core-profile context, load the GL entry points, upload a little static geometry, compile
//! a shader program and run a render loop until the user presses Escape or closes the
//! window.
//!
//! The crate ships two binaries built on top of it:
//!
//! * `hello_window` clears the window to a solid color every frame.
//! * `triangle` additionally draws a single orange triangle.
//!
//! ## Systems
//!
//! * `window` creates the window and its GL context, polls events and swaps buffers.
//! * `input` tracks keyboard state from window events.
//! * `video` loads the GL functions and wraps the handful of GL objects we need.
//! * `application` holds the settings and the `Engine` main loop.
//!
//! Every system has a headless backend, which makes it possible to drive the whole
//! main loop in tests without a GPU.

#[macro_use]
extern crate log;

pub extern crate cgmath;

pub mod errors;
pub mod logging;
pub mod math;

pub mod application;
pub mod input;
pub mod video;
pub mod window;

pub mod prelude;
