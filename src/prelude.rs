pub use crate::application::{Application, Engine, EngineParams, Settings};
pub use crate::errors::{Error, Result};
pub use crate::math::prelude::*;

pub use crate::input::keyboard::Key;
pub use crate::input::InputSystem;

pub use crate::video::assets::prelude::*;
pub use crate::video::{Viewport, VideoSystem};

pub use crate::window::prelude::*;
pub use crate::window::Window;
