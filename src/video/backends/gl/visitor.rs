use std::collections::HashMap;
use std::ffi::CString;
use std::os::raw::c_void;

use gl::types::*;

use crate::errors::*;
use crate::math::prelude::Color;
use crate::window::Window;

use super::super::super::assets::prelude::*;
use super::super::super::assets::shader::non_empty_log;
use super::super::super::Viewport;
use super::super::Visitor;
use super::capabilities::Capabilities;

#[derive(Debug, Clone, Copy)]
struct GLMeshData {
    vao: GLuint,
    vbo: GLuint,
    params: MeshParams,
}

pub struct GLVisitor {
    meshes: HashMap<MeshHandle, GLMeshData>,
    programs: HashMap<ProgramHandle, GLuint>,
}

impl GLVisitor {
    /// Resolves the GL entry points through the window's context and validates it.
    pub unsafe fn glutin(window: &Window) -> Result<Self> {
        gl::load_with(|symbol| window.get_proc_address(symbol));
        check_entry_points()?;
        Self::new()
    }

    pub unsafe fn new() -> Result<Self> {
        let capabilities = Capabilities::parse()?;
        info!(
            "{}, vendor: {}, renderer: {}.",
            capabilities.version, capabilities.vendor, capabilities.renderer
        );

        capabilities.check()?;

        Ok(GLVisitor {
            meshes: HashMap::new(),
            programs: HashMap::new(),
        })
    }

    /// Compiles one stage. Returns the shader object together with the information log
    /// when compilation failed.
    unsafe fn compile(stage: ShaderStage, src: &str) -> Result<(GLuint, Option<String>)> {
        let c_str = CString::new(src.as_bytes())
            .map_err(|_| Error::Backend(format!("{} source contains a nul byte.", stage)))?;

        let shader = gl::CreateShader(stage.into());
        gl::ShaderSource(shader, 1, &c_str.as_ptr(), ::std::ptr::null());
        gl::CompileShader(shader);

        // Get the compile status
        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

        if status != GLint::from(gl::TRUE) {
            let mut len: GLint = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; len.max(1) as usize];
            let mut written: GLsizei = 0;
            gl::GetShaderInfoLog(
                shader,
                buf.len() as GLsizei,
                &mut written,
                buf.as_mut_ptr() as *mut GLchar,
            );

            buf.truncate(written.max(0) as usize);
            let log = String::from_utf8_lossy(&buf).into_owned();
            Ok((shader, Some(non_empty_log(log))))
        } else {
            Ok((shader, None))
        }
    }

    unsafe fn link(vs: GLuint, fs: GLuint) -> (GLuint, Option<String>) {
        let program = gl::CreateProgram();
        gl::AttachShader(program, vs);
        gl::AttachShader(program, fs);
        gl::LinkProgram(program);

        // Get the link status
        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

        if status != GLint::from(gl::TRUE) {
            let mut len: GLint = 0;
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
            let mut buf = vec![0u8; len.max(1) as usize];
            let mut written: GLsizei = 0;
            gl::GetProgramInfoLog(
                program,
                buf.len() as GLsizei,
                &mut written,
                buf.as_mut_ptr() as *mut GLchar,
            );

            buf.truncate(written.max(0) as usize);
            let log = String::from_utf8_lossy(&buf).into_owned();
            (program, Some(non_empty_log(log)))
        } else {
            (program, None)
        }
    }
}

impl Visitor for GLVisitor {
    unsafe fn update_viewport(&mut self, vp: Viewport) -> Result<()> {
        gl::Viewport(
            vp.position.x,
            vp.position.y,
            vp.size.x as GLsizei,
            vp.size.y as GLsizei,
        );
        check()
    }

    unsafe fn clear(&mut self, color: Color<f32>) -> Result<()> {
        gl::ClearColor(color.r, color.g, color.b, color.a);
        gl::Clear(gl::COLOR_BUFFER_BIT);
        check()
    }

    unsafe fn create_mesh(
        &mut self,
        handle: MeshHandle,
        params: MeshParams,
        data: &[u8],
    ) -> Result<()> {
        let mut vbo = 0;
        gl::GenBuffers(1, &mut vbo);
        assert!(vbo != 0);

        // The attribute pointers below are recorded into the bound vertex array.
        let mut vao = 0;
        gl::GenVertexArrays(1, &mut vao);
        assert!(vao != 0);
        gl::BindVertexArray(vao);

        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            data.len() as GLsizeiptr,
            data.as_ptr() as *const c_void,
            params.hint.into(),
        );

        let stride = GLsizei::from(params.layout.stride());
        for v in params.layout.iter() {
            let normalized = if v.normalized { gl::TRUE } else { gl::FALSE };
            gl::VertexAttribPointer(
                v.location,
                GLint::from(v.size),
                v.format.into(),
                normalized,
                stride,
                usize::from(v.offset) as *const c_void,
            );
            gl::EnableVertexAttribArray(v.location);
        }

        gl::BindVertexArray(0);
        gl::BindBuffer(gl::ARRAY_BUFFER, 0);

        if let Err(err) = check() {
            gl::DeleteVertexArrays(1, &vao);
            gl::DeleteBuffers(1, &vbo);
            return Err(err);
        }

        self.meshes.insert(handle, GLMeshData { vao, vbo, params });
        Ok(())
    }

    unsafe fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        let mesh = self
            .meshes
            .remove(&handle)
            .ok_or_else(|| Error::HandleInvalid(format!("{}", handle)))?;

        gl::DeleteVertexArrays(1, &mesh.vao);
        gl::DeleteBuffers(1, &mesh.vbo);
        check()
    }

    unsafe fn create_program(
        &mut self,
        handle: ProgramHandle,
        vs: &str,
        fs: &str,
    ) -> Result<Vec<ShaderDiagnostic>> {
        let mut diagnostics = Vec::new();

        let (vs, log) = Self::compile(ShaderStage::Vertex, vs)?;
        if let Some(log) = log {
            diagnostics.push(ShaderDiagnostic::Compile {
                stage: ShaderStage::Vertex,
                log,
            });
        }

        let (fs, log) = match Self::compile(ShaderStage::Fragment, fs) {
            Ok(v) => v,
            Err(err) => {
                gl::DeleteShader(vs);
                return Err(err);
            }
        };

        if let Some(log) = log {
            diagnostics.push(ShaderDiagnostic::Compile {
                stage: ShaderStage::Fragment,
                log,
            });
        }

        let (id, log) = Self::link(vs, fs);
        if let Some(log) = log {
            diagnostics.push(ShaderDiagnostic::Link { log });
        }

        // Once linked the stages are not needed anymore.
        gl::DetachShader(id, vs);
        gl::DeleteShader(vs);
        gl::DetachShader(id, fs);
        gl::DeleteShader(fs);
        check()?;

        self.programs.insert(handle, id);
        Ok(diagnostics)
    }

    unsafe fn delete_program(&mut self, handle: ProgramHandle) -> Result<()> {
        let id = self
            .programs
            .remove(&handle)
            .ok_or_else(|| Error::HandleInvalid(format!("{}", handle)))?;

        gl::DeleteProgram(id);
        check()
    }

    unsafe fn draw(&mut self, program: ProgramHandle, mesh: MeshHandle) -> Result<u32> {
        let id = *self
            .programs
            .get(&program)
            .ok_or_else(|| Error::HandleInvalid(format!("{}", program)))?;

        let mesh = *self
            .meshes
            .get(&mesh)
            .ok_or_else(|| Error::HandleInvalid(format!("{}", mesh)))?;

        gl::UseProgram(id);
        gl::BindVertexArray(mesh.vao);
        gl::DrawArrays(
            mesh.params.primitive.into(),
            0,
            mesh.params.num_verts as GLsizei,
        );
        check()?;

        Ok(mesh.params.primitive.assemble(mesh.params.num_verts))
    }
}

impl Drop for GLVisitor {
    fn drop(&mut self) {
        if !self.meshes.is_empty() || !self.programs.is_empty() {
            warn!(
                "{} meshes and {} programs are still alive, deleting them.",
                self.meshes.len(),
                self.programs.len()
            );
        }

        unsafe {
            for (_, v) in self.meshes.drain() {
                gl::DeleteVertexArrays(1, &v.vao);
                gl::DeleteBuffers(1, &v.vbo);
            }

            for (_, v) in self.programs.drain() {
                gl::DeleteProgram(v);
            }
        }
    }
}

/// Fails if the loader could not resolve the entry points we are going to call.
fn check_entry_points() -> Result<()> {
    let entries = [
        ("glGetString", gl::GetString::is_loaded()),
        ("glGetError", gl::GetError::is_loaded()),
        ("glViewport", gl::Viewport::is_loaded()),
        ("glClearColor", gl::ClearColor::is_loaded()),
        ("glClear", gl::Clear::is_loaded()),
        ("glGenBuffers", gl::GenBuffers::is_loaded()),
        ("glGenVertexArrays", gl::GenVertexArrays::is_loaded()),
        ("glVertexAttribPointer", gl::VertexAttribPointer::is_loaded()),
        ("glCreateShader", gl::CreateShader::is_loaded()),
        ("glCreateProgram", gl::CreateProgram::is_loaded()),
        ("glDrawArrays", gl::DrawArrays::is_loaded()),
    ];

    let missing: Vec<_> = entries
        .iter()
        .filter(|&&(_, loaded)| !loaded)
        .map(|&(name, _)| name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::Loader(format!(
            "missing entry points: {}.",
            missing.join(", ")
        )))
    }
}

unsafe fn check() -> Result<()> {
    let err = match gl::GetError() {
        gl::NO_ERROR => return Ok(()),

        gl::INVALID_ENUM => "An unacceptable value is specified for an enumerated argument.",
        gl::INVALID_VALUE => "A numeric argument is out of range.",
        gl::INVALID_OPERATION => "The specified operation is not allowed in the current state.",
        gl::INVALID_FRAMEBUFFER_OPERATION => {
            "The command is trying to render to or read from the framebuffer while the \
             currently bound framebuffer is not framebuffer complete."
        }
        gl::OUT_OF_MEMORY => "There is not enough memory left to execute the command.",
        _ => "Oops, Unknown OpenGL error.",
    };

    Err(Error::Backend(format!("[GL] {}", err)))
}
