pub mod mesh;
pub mod shader;
pub mod vertex;

pub mod prelude {
    pub use super::mesh::{as_bytes, MeshHandle, MeshHint, MeshParams, MeshPrimitive};
    pub use super::shader::{ProgramHandle, ShaderDiagnostic, ShaderStage};
    pub use super::vertex::{VertexAttributeDesc, VertexFormat, VertexLayout, VertexLayoutBuilder};
}
