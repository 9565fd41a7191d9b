use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::errors::*;
use crate::math::prelude::Color;

use super::super::assets::prelude::*;
use super::super::Viewport;
use super::Visitor;

/// A command received by the headless backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    UpdateViewport(Viewport),
    Clear(Color<f32>),
    CreateMesh {
        handle: MeshHandle,
        params: MeshParams,
        data: Vec<u8>,
    },
    DeleteMesh(MeshHandle),
    CreateProgram {
        handle: ProgramHandle,
        vs: String,
        fs: String,
    },
    DeleteProgram(ProgramHandle),
    Draw {
        program: ProgramHandle,
        mesh: MeshHandle,
        vertices: u32,
    },
}

/// Shared view of the commands recorded by a `HeadlessVisitor`.
pub type CommandRecorder = Rc<RefCell<Vec<Command>>>;

/// Records every command instead of talking to a GPU. Shader failures can be injected
/// to exercise the diagnostics path. Like a GL driver, drawing with a program that failed
/// to build is an error.
pub struct HeadlessVisitor {
    commands: CommandRecorder,
    meshes: HashMap<MeshHandle, MeshParams>,
    programs: HashMap<ProgramHandle, bool>,
    compile_failures: Vec<(ShaderStage, String)>,
    link_failure: Option<String>,
}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor {
            commands: Rc::new(RefCell::new(Vec::new())),
            meshes: HashMap::new(),
            programs: HashMap::new(),
            compile_failures: Vec::new(),
            link_failure: None,
        }
    }

    /// Every compile of `stage` fails with `log`.
    pub fn with_compile_failure<T: Into<String>>(mut self, stage: ShaderStage, log: T) -> Self {
        self.compile_failures.push((stage, log.into()));
        self
    }

    /// Every link fails with `log`.
    pub fn with_link_failure<T: Into<String>>(mut self, log: T) -> Self {
        self.link_failure = Some(log.into());
        self
    }

    pub fn recorder(&self) -> CommandRecorder {
        self.commands.clone()
    }

    fn push(&self, cmd: Command) {
        self.commands.borrow_mut().push(cmd);
    }
}

impl Default for HeadlessVisitor {
    fn default() -> Self {
        HeadlessVisitor::new()
    }
}

impl Visitor for HeadlessVisitor {
    unsafe fn update_viewport(&mut self, vp: Viewport) -> Result<()> {
        self.push(Command::UpdateViewport(vp));
        Ok(())
    }

    unsafe fn clear(&mut self, color: Color<f32>) -> Result<()> {
        self.push(Command::Clear(color));
        Ok(())
    }

    unsafe fn create_mesh(
        &mut self,
        handle: MeshHandle,
        params: MeshParams,
        data: &[u8],
    ) -> Result<()> {
        self.meshes.insert(handle, params);
        self.push(Command::CreateMesh {
            handle,
            params,
            data: data.to_vec(),
        });
        Ok(())
    }

    unsafe fn delete_mesh(&mut self, handle: MeshHandle) -> Result<()> {
        self.meshes.remove(&handle);
        self.push(Command::DeleteMesh(handle));
        Ok(())
    }

    unsafe fn create_program(
        &mut self,
        handle: ProgramHandle,
        vs: &str,
        fs: &str,
    ) -> Result<Vec<ShaderDiagnostic>> {
        self.push(Command::CreateProgram {
            handle,
            vs: vs.to_owned(),
            fs: fs.to_owned(),
        });

        let mut diagnostics: Vec<_> = self
            .compile_failures
            .iter()
            .map(|&(stage, ref log)| ShaderDiagnostic::Compile {
                stage,
                log: log.clone(),
            })
            .collect();

        if let Some(ref log) = self.link_failure {
            diagnostics.push(ShaderDiagnostic::Link { log: log.clone() });
        }

        self.programs.insert(handle, diagnostics.is_empty());
        Ok(diagnostics)
    }

    unsafe fn delete_program(&mut self, handle: ProgramHandle) -> Result<()> {
        self.programs.remove(&handle);
        self.push(Command::DeleteProgram(handle));
        Ok(())
    }

    unsafe fn draw(&mut self, program: ProgramHandle, mesh: MeshHandle) -> Result<u32> {
        match self.programs.get(&program) {
            Some(true) => {}
            Some(false) => {
                return Err(Error::Backend(format!(
                    "[GL] {} is not linked, the specified operation is not allowed.",
                    program
                )))
            }
            None => return Err(Error::HandleInvalid(format!("{}", program))),
        }

        let params = *self
            .meshes
            .get(&mesh)
            .ok_or_else(|| Error::HandleInvalid(format!("{}", mesh)))?;

        self.push(Command::Draw {
            program,
            mesh,
            vertices: params.num_verts,
        });

        Ok(params.primitive.assemble(params.num_verts))
    }
}
