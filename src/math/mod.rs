//! Math types shared by the systems. Vectors come from `cgmath`.

pub mod color;

pub mod prelude {
    pub use super::color::Color;
    pub use cgmath::Vector2;
}
