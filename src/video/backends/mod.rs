//! The backend of renderer, which should be responsible for only one thing:
//! submitting commands using low-level OpenGL video APIs.

pub mod headless;

use crate::errors::*;
use crate::math::prelude::Color;
use crate::window::Window;

use super::assets::prelude::*;
use super::Viewport;

pub trait Visitor {
    unsafe fn update_viewport(&mut self, vp: Viewport) -> Result<()>;

    unsafe fn clear(&mut self, color: Color<f32>) -> Result<()>;

    unsafe fn create_mesh(
        &mut self,
        handle: MeshHandle,
        params: MeshParams,
        data: &[u8],
    ) -> Result<()>;

    unsafe fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()>;

    /// Compiles and links a program. Compile and link failures are reported as
    /// diagnostics, the program object is created anyway.
    unsafe fn create_program(
        &mut self,
        handle: ProgramHandle,
        vs: &str,
        fs: &str,
    ) -> Result<Vec<ShaderDiagnostic>>;

    unsafe fn delete_program(&mut self, handle: ProgramHandle) -> Result<()>;

    /// Draws every vertex of `mesh` with `program`, returns the number of primitives.
    unsafe fn draw(&mut self, program: ProgramHandle, mesh: MeshHandle) -> Result<u32>;
}

pub mod gl;

pub fn new(window: &Window) -> Result<Box<dyn Visitor>> {
    let visitor = unsafe { self::gl::visitor::GLVisitor::glutin(window)? };
    Ok(Box::new(visitor))
}

pub fn new_headless() -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new())
}
