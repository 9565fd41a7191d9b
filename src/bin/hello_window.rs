//! Opens a window and clears it to a solid color until Escape is pressed or the window
//! is closed.

use std::process;

use glprimer::prelude::*;

struct HelloWindow;

impl Application for HelloWindow {}

fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    let mut engine = Engine::new(&settings)?;
    engine.run(&mut HelloWindow)
}

fn main() {
    glprimer::logging::init();

    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
