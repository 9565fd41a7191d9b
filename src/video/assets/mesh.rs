//! Immutable vertex data stored on the GPU.

use std::fmt;

use crate::errors::*;

use super::vertex::VertexLayout;

/// Handle of a vertex buffer and the vertex array describing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub(crate) u32);

impl fmt::Display for MeshHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MeshHandle({})", self.0)
    }
}

/// Hint abouts the intended update strategy of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MeshHint {
    /// The data is uploaded once and drawn many times.
    Static,
    /// The data is respecified repeatedly and drawn many times.
    Dynamic,
    /// The data is respecified about once per draw.
    Stream,
}

/// Defines how the input vertex data is used to assemble primitives.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MeshPrimitive {
    /// Separate points.
    Points,
    /// Separate lines.
    Lines,
    /// Line strips.
    LineStrip,
    /// Separate triangles.
    Triangles,
    /// Triangle strips.
    TriangleStrip,
}

impl MeshPrimitive {
    /// Number of primitives assembled from `vertices`.
    pub fn assemble(self, vertices: u32) -> u32 {
        match self {
            MeshPrimitive::Points => vertices,
            MeshPrimitive::Lines => vertices / 2,
            MeshPrimitive::LineStrip => vertices.saturating_sub(1),
            MeshPrimitive::Triangles => vertices / 3,
            MeshPrimitive::TriangleStrip => vertices.saturating_sub(2),
        }
    }
}

/// The setup parameters of mesh object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshParams {
    /// Usage hints.
    pub hint: MeshHint,
    /// How a single vertex structure looks like.
    pub layout: VertexLayout,
    /// How the input vertex data is used to assemble primitives.
    pub primitive: MeshPrimitive,
    /// The number of vertices in this mesh.
    pub num_verts: u32,
}

impl Default for MeshParams {
    fn default() -> Self {
        MeshParams {
            hint: MeshHint::Static,
            layout: VertexLayout::default(),
            primitive: MeshPrimitive::Triangles,
            num_verts: 0,
        }
    }
}

impl MeshParams {
    #[inline]
    pub fn vertex_buffer_len(&self) -> usize {
        self.num_verts as usize * self.layout.stride() as usize
    }

    pub fn validate(&self, data: &[u8]) -> Result<()> {
        if self.layout.is_empty() {
            return Err(Error::InvalidMesh("vertex layout is empty.".into()));
        }

        if self.num_verts == 0 {
            return Err(Error::InvalidMesh("mesh has no vertices.".into()));
        }

        if data.len() != self.vertex_buffer_len() {
            return Err(Error::InvalidMesh(format!(
                "expects {} bytes of vertex data, got {}.",
                self.vertex_buffer_len(),
                data.len()
            )));
        }

        Ok(())
    }
}

/// Reinterprets a slice of plain vertices as raw bytes.
pub fn as_bytes<T: Copy>(values: &[T]) -> &[u8] {
    let len = values.len() * ::std::mem::size_of::<T>();
    unsafe { ::std::slice::from_raw_parts(values.as_ptr() as *const u8, len) }
}

#[cfg(test)]
mod tests {
    use super::super::vertex::VertexFormat;
    use super::*;

    fn params() -> MeshParams {
        MeshParams {
            layout: VertexLayout::build()
                .with(0, VertexFormat::Float, 3, false)
                .finish(),
            num_verts: 3,
            ..MeshParams::default()
        }
    }

    #[test]
    fn validate() {
        let verts: [[f32; 3]; 3] = [[-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0]];
        let params = params();
        assert_eq!(params.vertex_buffer_len(), 36);
        assert!(params.validate(as_bytes(&verts)).is_ok());
        assert!(params.validate(&as_bytes(&verts)[..30]).is_err());

        let empty = MeshParams {
            num_verts: 0,
            ..params
        };
        assert!(empty.validate(&[]).is_err());

        let no_layout = MeshParams {
            num_verts: 3,
            ..MeshParams::default()
        };
        assert!(no_layout.validate(&[]).is_err());
    }

    #[test]
    fn assemble() {
        assert_eq!(MeshPrimitive::Triangles.assemble(3), 1);
        assert_eq!(MeshPrimitive::TriangleStrip.assemble(5), 3);
        assert_eq!(MeshPrimitive::LineStrip.assemble(0), 0);
        assert_eq!(MeshPrimitive::Points.assemble(7), 7);
    }
}
