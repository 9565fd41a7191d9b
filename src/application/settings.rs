//! Functions for loading settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::math::prelude::Color;
use crate::window::WindowParams;

/// The environment variable that points to an optional settings file.
pub const SETTINGS_ENV: &str = "GLPRIMER_SETTINGS";

/// A structure containing configuration data for the engine, which are
/// used to specify hardware setup stuff to create the window and other
/// context information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowParams,
    pub engine: EngineParams,
    /// Runs without a window or a GPU.
    pub headless: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// The color the framebuffer is cleared to at the start of every frame.
    pub clear_color: Color<f32>,
    /// Stops the main loop after this many frames.
    pub max_frames: Option<u64>,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            clear_color: Color::new(0.2, 0.3, 0.3, 1.0),
            max_frames: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<T: AsRef<Path>>(path: T) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|err| Error::Settings(format!("{}: {}", path.display(), err)))?;
        Settings::from_json(&json)
    }

    /// Loads the file named by `GLPRIMER_SETTINGS`, or returns the defaults if the
    /// variable is not set.
    pub fn from_env() -> Result<Self> {
        match ::std::env::var_os(SETTINGS_ENV) {
            Some(path) => {
                info!("loads settings from {:?}.", path);
                Settings::load(path)
            }
            None => Ok(Settings::default()),
        }
    }
}
