use cgmath::BaseFloat;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A RGBA `Color`. Each color component is a floating point value
/// with a range from 0 to 1.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Color<S> {
    pub r: S,
    pub g: S,
    pub b: S,
    pub a: S,
}

impl<S: BaseFloat> Color<S> {
    pub fn new(r: S, g: S, b: S, a: S) -> Self {
        Color { r, g, b, a }
    }
}

// Colors are written as plain `[r, g, b, a]` arrays in settings files.
impl<S: Serialize + Copy> Serialize for Color<S> {
    fn serialize<T: Serializer>(&self, serializer: T) -> Result<T::Ok, T::Error> {
        [self.r, self.g, self.b, self.a].serialize(serializer)
    }
}

impl<'de, S: Deserialize<'de>> Deserialize<'de> for Color<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [r, g, b, a] = <[S; 4]>::deserialize(deserializer)?;
        Ok(Color { r, g, b, a })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json() {
        let color: Color<f32> = serde_json::from_str("[0.2, 0.3, 0.3, 1.0]").unwrap();
        assert_eq!(color, Color::new(0.2, 0.3, 0.3, 1.0));
        assert_eq!(
            serde_json::to_string(&Color::new(1.0f32, 1.0, 1.0, 1.0)).unwrap(),
            "[1.0,1.0,1.0,1.0]"
        );
        assert!(serde_json::from_str::<Color<f32>>("[0.2, 0.3]").is_err());
    }
}
