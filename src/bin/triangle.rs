//! Draws a single orange triangle on top of the cleared window.

use std::process;

use glprimer::prelude::*;

// In normalized device coordinates.
//
//            ^
//            x  0.5
//            |
//      -0.5  |   0.5
//    --------|--------->
//       x    |    x
//
static VERTICES: [[f32; 3]; 3] = [[-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0]];

static VS: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main() {
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

static FS: &str = "#version 330 core
out vec4 FragColor;
void main() {
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

#[derive(Default)]
struct Triangle {
    mesh: Option<MeshHandle>,
    program: Option<ProgramHandle>,
}

impl Application for Triangle {
    fn on_start(&mut self, video: &mut VideoSystem) -> Result<()> {
        let params = MeshParams {
            hint: MeshHint::Static,
            layout: VertexLayout::build()
                .with(0, VertexFormat::Float, 3, false)
                .finish(),
            primitive: MeshPrimitive::Triangles,
            num_verts: VERTICES.len() as u32,
        };

        self.mesh = Some(video.create_mesh(params, as_bytes(&VERTICES))?);
        self.program = Some(video.create_program(VS, FS)?);
        Ok(())
    }

    fn on_render(&mut self, video: &mut VideoSystem) -> Result<()> {
        if let (Some(program), Some(mesh)) = (self.program, self.mesh) {
            video.draw(program, mesh)?;
        }

        Ok(())
    }

    fn on_exit(&mut self, video: &mut VideoSystem) -> Result<()> {
        if let Some(mesh) = self.mesh.take() {
            video.delete_mesh(mesh)?;
        }

        if let Some(program) = self.program.take() {
            video.delete_program(program)?;
        }

        Ok(())
    }
}

fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    let mut engine = Engine::new(&settings)?;
    engine.run(&mut Triangle::default())
}

fn main() {
    glprimer::logging::init();

    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glprimer::input::events::InputEvent;
    use glprimer::video::backends::headless::{Command, HeadlessVisitor};
    use glprimer::window::backends::HeadlessVisitor as HeadlessWindow;

    fn escape() -> Event {
        Event::InputDevice(InputEvent::KeyboardPressed { key: Key::Escape })
    }

    #[test]
    fn draws_until_escape() {
        let window = HeadlessWindow::new(Vector2::new(800, 600))
            .with_frame(vec![])
            .with_frame(vec![escape()]);
        let video = HeadlessVisitor::new();
        let recorder = video.recorder();

        let mut engine = Engine::from_parts(
            Window::from_visitor(Box::new(window)),
            VideoSystem::from_visitor(Box::new(video)),
            Settings::default().engine,
        );

        let mut app = Triangle::default();
        engine.run(&mut app).unwrap();
        assert_eq!(engine.frame(), 3);
        assert!(app.mesh.is_none());
        assert!(app.program.is_none());

        let commands = recorder.borrow();
        let (mesh, program) = match (&commands[1], &commands[2]) {
            (
                Command::CreateMesh {
                    handle,
                    params,
                    data,
                },
                Command::CreateProgram { handle: program, vs, fs },
            ) => {
                assert_eq!(params.num_verts, 3);
                assert_eq!(params.layout.stride(), 12);
                assert_eq!(data.as_slice(), as_bytes(&VERTICES));
                assert!(vs.contains("layout (location = 0) in vec3 aPos;"));
                assert!(fs.contains("vec4(1.0, 0.5, 0.2, 1.0)"));
                (*handle, *program)
            }
            other => panic!("unexpected {:?}", other),
        };

        let draws = commands
            .iter()
            .filter(|v| {
                **v == Command::Draw {
                    program,
                    mesh,
                    vertices: 3,
                }
            })
            .count();
        assert_eq!(draws, 3);

        let n = commands.len();
        assert_eq!(commands[n - 2], Command::DeleteMesh(mesh));
        assert_eq!(commands[n - 1], Command::DeleteProgram(program));
    }

    fn run_broken(video: HeadlessVisitor) -> (Engine, Vec<Command>) {
        let window = HeadlessWindow::new(Vector2::new(800, 600));
        let recorder = video.recorder();

        let params = EngineParams {
            max_frames: Some(2),
            ..EngineParams::default()
        };

        let mut engine = Engine::from_parts(
            Window::from_visitor(Box::new(window)),
            VideoSystem::from_visitor(Box::new(video)),
            params,
        );

        engine.run(&mut Triangle::default()).unwrap();
        let commands = recorder.borrow().clone();
        (engine, commands)
    }

    fn draws(commands: &[Command]) -> usize {
        commands
            .iter()
            .filter(|v| match v {
                Command::Draw { .. } => true,
                _ => false,
            })
            .count()
    }

    #[test]
    fn keeps_running_after_compile_failure() {
        let video = HeadlessVisitor::new()
            .with_compile_failure(ShaderStage::Fragment, "0:3(5): error: `FragColour' undeclared");

        let (engine, commands) = run_broken(video);
        assert_eq!(engine.frame(), 2);
        assert_eq!(engine.video.diagnostics().len(), 1);
        assert!(!engine.video.diagnostics()[0].log().is_empty());
        assert_eq!(draws(&commands), 0);

        let clear = Command::Clear(EngineParams::default().clear_color);
        assert_eq!(commands.iter().filter(|v| **v == clear).count(), 2);
    }

    #[test]
    fn keeps_running_after_link_failure() {
        let video = HeadlessVisitor::new().with_link_failure("error: undefined reference to main");

        let (engine, commands) = run_broken(video);
        assert_eq!(engine.frame(), 2);
        match engine.video.diagnostics() {
            [ShaderDiagnostic::Link { log }] => assert!(!log.is_empty()),
            other => panic!("unexpected {:?}", other),
        }

        assert_eq!(draws(&commands), 0);
        match commands.last() {
            Some(Command::DeleteProgram(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
