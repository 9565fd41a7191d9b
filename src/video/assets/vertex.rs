//! Describes how the bytes of a vertex buffer are fed into the vertex shader inputs.

pub const MAX_VERTEX_ATTRIBUTES: usize = 8;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VertexFormat {
    Byte,
    UByte,
    Short,
    UShort,
    Float,
}

impl VertexFormat {
    /// Size in bytes of one component.
    pub fn size(self) -> u8 {
        match self {
            VertexFormat::Byte | VertexFormat::UByte => 1,
            VertexFormat::Short | VertexFormat::UShort => 2,
            VertexFormat::Float => 4,
        }
    }
}

/// A generic vertex attribute, bound to `layout (location = N)` in the vertex shader.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct VertexAttributeDesc {
    /// The shader input location.
    pub location: u32,
    /// The data type of each component of this element.
    pub format: VertexFormat,
    /// The number of components per generic vertex element.
    pub size: u8,
    /// Whether fixed-point data values should be normalized.
    pub normalized: bool,
    /// Byte offset of this element from the start of a vertex.
    pub offset: u8,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct VertexLayout {
    stride: u8,
    len: u8,
    elements: [Option<VertexAttributeDesc>; MAX_VERTEX_ATTRIBUTES],
}

impl VertexLayout {
    /// Creates a new an empty `VertexLayoutBuilder`.
    #[inline]
    pub fn build() -> VertexLayoutBuilder {
        VertexLayoutBuilder::new()
    }

    /// Stride of single vertex structure.
    #[inline]
    pub fn stride(&self) -> u8 {
        self.stride
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the attributes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &VertexAttributeDesc> {
        self.elements[..self.len as usize]
            .iter()
            .filter_map(|v| v.as_ref())
    }

    /// Returns the attribute bound to `location`.
    pub fn element(&self, location: u32) -> Option<VertexAttributeDesc> {
        self.iter().find(|v| v.location == location).cloned()
    }
}

#[derive(Debug, Default)]
pub struct VertexLayoutBuilder {
    layout: VertexLayout,
}

impl VertexLayoutBuilder {
    #[inline]
    pub fn new() -> Self {
        VertexLayoutBuilder::default()
    }

    /// Declares an attribute. Declaring the same location twice overwrites the first
    /// declaration in place.
    ///
    /// # Panics
    ///
    /// Panics if more than `MAX_VERTEX_ATTRIBUTES` locations are declared, or if `size` is
    /// not within 1..=4.
    pub fn with(
        &mut self,
        location: u32,
        format: VertexFormat,
        size: u8,
        normalized: bool,
    ) -> &mut Self {
        let len = self.layout.len as usize;
        let slot = self.layout.elements[..len]
            .iter()
            .position(|v| v.map(|v| v.location) == Some(location))
            .unwrap_or(len);

        assert!(slot < MAX_VERTEX_ATTRIBUTES, "out of vertex layout bounds.");
        assert!(
            size >= 1 && size <= 4,
            "vertex attribute has {} components, must be 1..=4.",
            size
        );

        self.layout.elements[slot] = Some(VertexAttributeDesc {
            location,
            format,
            size,
            normalized,
            offset: 0,
        });

        if slot == len {
            self.layout.len += 1;
        }

        self
    }

    /// Packs the attributes in declaration order and computes the stride.
    pub fn finish(&mut self) -> VertexLayout {
        let mut stride = 0;
        for v in self.layout.elements[..self.layout.len as usize].iter_mut() {
            if let Some(ref mut v) = *v {
                v.offset = stride;
                stride += v.size * v.format.size();
            }
        }

        self.layout.stride = stride;
        self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let layout = VertexLayout::build()
            .with(0, VertexFormat::Float, 3, false)
            .with(1, VertexFormat::UByte, 4, true)
            .with(2, VertexFormat::Float, 2, false)
            .finish();

        assert_eq!(layout.stride(), 24);
        assert_eq!(layout.element(0).unwrap().offset, 0);
        assert_eq!(layout.element(1).unwrap().offset, 12);
        assert_eq!(layout.element(2).unwrap().offset, 16);
        assert_eq!(layout.element(3), None);

        let element = layout.element(1).unwrap();
        assert_eq!(element.format, VertexFormat::UByte);
        assert_eq!(element.size, 4);
        assert_eq!(element.normalized, true);

        let locations: Vec<_> = layout.iter().map(|v| v.location).collect();
        assert_eq!(locations, vec![0, 1, 2]);
    }

    #[test]
    fn rewrite() {
        let layout = VertexLayout::build()
            .with(0, VertexFormat::Short, 1, false)
            .with(1, VertexFormat::Float, 2, false)
            .with(0, VertexFormat::Float, 3, false)
            .finish();

        assert_eq!(layout.stride(), 20);
        assert_eq!(layout.element(0).unwrap().offset, 0);
        assert_eq!(layout.element(1).unwrap().offset, 12);
        assert_eq!(layout.iter().count(), 2);
    }

    #[test]
    fn empty() {
        let layout = VertexLayout::build().finish();
        assert!(layout.is_empty());
        assert_eq!(layout.stride(), 0);
    }

    #[test]
    #[should_panic]
    fn too_many_attributes() {
        let mut builder = VertexLayout::build();
        for i in 0..(MAX_VERTEX_ATTRIBUTES as u32 + 1) {
            builder.with(i, VertexFormat::Float, 1, false);
        }
    }

    #[test]
    #[should_panic]
    fn too_many_components() {
        VertexLayout::build().with(0, VertexFormat::Float, 64, false);
    }

    #[test]
    #[should_panic]
    fn no_components() {
        VertexLayout::build().with(0, VertexFormat::Float, 0, false);
    }
}
