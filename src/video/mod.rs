//! A thin layer over the GPU objects a minimal OpenGL program needs: a viewport, a clear
//! color, vertex buffers with their vertex arrays, and linked shader programs.
//!
//! All GL calls go through a backend `Visitor`. The `gl` backend talks to the driver, the
//! `headless` backend records the commands it receives.
//!
//! Shader compile and link failures are not errors. They are written to the log as they
//! happen and kept in `VideoSystem::diagnostics`, while the program handle stays valid.
//! Drawing with a program that failed to build is skipped.

pub mod assets;
pub mod backends;

pub mod prelude {
    pub use super::assets::prelude::*;
    pub use super::{Viewport, VideoSystem};
}

use std::collections::HashMap;

use crate::errors::*;
use crate::math::prelude::{Color, Vector2};
use crate::window::Window;

use self::assets::prelude::*;
use self::backends::Visitor;

/// The rectangle of the framebuffer we render into. The origin is the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub position: Vector2<i32>,
    pub size: Vector2<u32>,
}

impl Viewport {
    /// A viewport covering a framebuffer of `size` pixels.
    pub fn new(size: Vector2<u32>) -> Self {
        Viewport {
            position: Vector2::new(0, 0),
            size,
        }
    }
}

pub struct VideoSystem {
    visitor: Box<dyn Visitor>,
    viewport: Option<Viewport>,
    meshes: HashMap<MeshHandle, MeshParams>,
    // Program handles and whether they built without diagnostics.
    programs: HashMap<ProgramHandle, bool>,
    diagnostics: Vec<ShaderDiagnostic>,
    next: u32,
}

impl VideoSystem {
    /// Initializes the GPU function loader for the window's current context.
    pub fn new(window: &Window) -> Result<Self> {
        window.make_current()?;
        Ok(VideoSystem::from_visitor(backends::new(window)?))
    }

    pub fn headless() -> Self {
        VideoSystem::from_visitor(backends::new_headless())
    }

    pub fn from_visitor(visitor: Box<dyn Visitor>) -> Self {
        VideoSystem {
            visitor,
            viewport: None,
            meshes: HashMap::new(),
            programs: HashMap::new(),
            diagnostics: Vec::new(),
            next: 1,
        }
    }

    /// Sets the area of the framebuffer that is rendered into.
    pub fn set_viewport(&mut self, vp: Viewport) -> Result<()> {
        unsafe { self.visitor.update_viewport(vp)? };
        debug!("viewport {:?}.", vp);
        self.viewport = Some(vp);
        Ok(())
    }

    #[inline]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Clears the color buffer.
    pub fn clear(&mut self, color: Color<f32>) -> Result<()> {
        unsafe { self.visitor.clear(color) }
    }

    /// Uploads vertex data and describes its layout.
    pub fn create_mesh(&mut self, params: MeshParams, data: &[u8]) -> Result<MeshHandle> {
        params.validate(data)?;

        let handle = MeshHandle(self.next);
        unsafe { self.visitor.create_mesh(handle, params, data)? };

        self.next += 1;
        self.meshes.insert(handle, params);
        Ok(handle)
    }

    pub fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        if self.meshes.remove(&handle).is_none() {
            return Err(Error::HandleInvalid(format!("{}", handle)));
        }

        unsafe { self.visitor.delete_mesh(handle) }
    }

    /// Compiles the vertex and fragment shaders and links them into a program.
    ///
    /// The handle is returned even if a stage failed to compile or the program failed to
    /// link, in which case the failures are logged and appended to `diagnostics`.
    pub fn create_program(&mut self, vs: &str, fs: &str) -> Result<ProgramHandle> {
        let handle = ProgramHandle(self.next);
        let diagnostics = unsafe { self.visitor.create_program(handle, vs, fs)? };
        let linked = diagnostics.is_empty();

        for v in diagnostics {
            match v {
                ShaderDiagnostic::Compile { stage, ref log } => {
                    error!("{} information log: {}", stage, log)
                }
                ShaderDiagnostic::Link { ref log } => {
                    error!("Shader program information log: {}", log)
                }
            }

            error!("{}", v);
            self.diagnostics.push(v);
        }

        if !linked {
            warn!("{} is not usable, draws with it are skipped.", handle);
        }

        self.next += 1;
        self.programs.insert(handle, linked);
        Ok(handle)
    }

    pub fn delete_program(&mut self, handle: ProgramHandle) -> Result<()> {
        if self.programs.remove(&handle).is_none() {
            return Err(Error::HandleInvalid(format!("{}", handle)));
        }

        unsafe { self.visitor.delete_program(handle) }
    }

    /// Draws every vertex of `mesh` with `program`. Returns the number of primitives, which
    /// is zero if `program` failed to build.
    pub fn draw(&mut self, program: ProgramHandle, mesh: MeshHandle) -> Result<u32> {
        let linked = *self
            .programs
            .get(&program)
            .ok_or_else(|| Error::HandleInvalid(format!("{}", program)))?;

        if !self.meshes.contains_key(&mesh) {
            return Err(Error::HandleInvalid(format!("{}", mesh)));
        }

        if !linked {
            return Ok(0);
        }

        unsafe { self.visitor.draw(program, mesh) }
    }

    /// Compile and link failures reported so far.
    #[inline]
    pub fn diagnostics(&self) -> &[ShaderDiagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn mesh_params(&self, handle: MeshHandle) -> Option<MeshParams> {
        self.meshes.get(&handle).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::backends::headless::{Command, HeadlessVisitor};
    use super::backends::Visitor;
    use super::*;

    fn triangle() -> (MeshParams, Vec<u8>) {
        let verts: [[f32; 3]; 3] = [[-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0]];
        let params = MeshParams {
            layout: VertexLayout::build()
                .with(0, VertexFormat::Float, 3, false)
                .finish(),
            num_verts: 3,
            ..MeshParams::default()
        };

        (params, as_bytes(&verts).to_vec())
    }

    #[test]
    fn handles() {
        let mut video = VideoSystem::headless();
        let (params, data) = triangle();

        let mesh = video.create_mesh(params, &data).unwrap();
        let program = video.create_program("vs", "fs").unwrap();
        assert_ne!(mesh.0, program.0);
        assert_eq!(video.mesh_params(mesh), Some(params));
        assert_eq!(video.draw(program, mesh).unwrap(), 1);

        video.delete_mesh(mesh).unwrap();
        assert!(video.draw(program, mesh).is_err());
        assert!(video.delete_mesh(mesh).is_err());

        video.delete_program(program).unwrap();
        assert!(video.delete_program(program).is_err());
    }

    #[test]
    fn invalid_mesh_is_rejected() {
        let visitor = HeadlessVisitor::new();
        let recorder = visitor.recorder();
        let mut video = VideoSystem::from_visitor(Box::new(visitor));

        let (params, data) = triangle();
        assert!(video.create_mesh(params, &data[..12]).is_err());
        assert!(recorder.borrow().is_empty());
    }

    #[test]
    fn diagnostics_are_not_fatal() {
        let visitor = HeadlessVisitor::new()
            .with_compile_failure(ShaderStage::Vertex, "0:2(1): error: syntax error")
            .with_link_failure("vertex shader not compiled");
        let recorder = visitor.recorder();
        let mut video = VideoSystem::from_visitor(Box::new(visitor));

        let program = video.create_program("broken", "fs").unwrap();
        assert_eq!(video.diagnostics().len(), 2);
        assert!(video.diagnostics().iter().all(|v| !v.log().is_empty()));

        let (params, data) = triangle();
        let mesh = video.create_mesh(params, &data).unwrap();
        assert_eq!(video.draw(program, mesh).unwrap(), 0);
        assert!(video.draw(program, MeshHandle(99)).is_err());

        let commands = recorder.borrow();
        assert_eq!(
            commands.last(),
            Some(&Command::CreateMesh {
                handle: mesh,
                params,
                data,
            })
        );
    }

    #[test]
    fn unlinked_program_fails_in_backend() {
        let mut visitor = HeadlessVisitor::new().with_link_failure("undefined reference");
        let (params, data) = triangle();

        unsafe {
            let diagnostics = visitor
                .create_program(ProgramHandle(1), "vs", "fs")
                .unwrap();
            assert_eq!(diagnostics.len(), 1);

            visitor.create_mesh(MeshHandle(2), params, &data).unwrap();
            match visitor.draw(ProgramHandle(1), MeshHandle(2)) {
                Err(Error::Backend(_)) => {}
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn viewport() {
        let mut video = VideoSystem::headless();
        assert_eq!(video.viewport(), None);

        let vp = Viewport::new(Vector2::new(800, 600));
        video.set_viewport(vp).unwrap();
        assert_eq!(video.viewport(), Some(vp));
        assert_eq!(vp.position, Vector2::new(0, 0));
    }
}
