mod headless;
pub use self::headless::HeadlessVisitor;

use std::os::raw::c_void;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::events::Event;
use super::WindowParams;

pub trait Visitor {
    /// Size of the client area in points.
    fn dimensions(&self) -> Vector2<u32>;
    fn device_pixel_ratio(&self) -> f32;
    /// Appends pending events without blocking.
    fn poll_events(&mut self, events: &mut Vec<Event>);
    fn make_current(&self) -> Result<()>;
    fn swap_buffers(&self) -> Result<()>;
    /// Address of a GL entry point in the context, or null.
    fn get_proc_address(&self, symbol: &str) -> *const c_void;
}

pub fn new(params: WindowParams) -> Result<Box<dyn Visitor>> {
    let visitor = self::glutin::GlutinVisitor::from(params)?;
    Ok(Box::new(visitor))
}

pub fn new_headless(dimensions: Vector2<u32>) -> Box<dyn Visitor> {
    Box::new(HeadlessVisitor::new(dimensions))
}

mod glutin;
