//! Visual attribute types shared across block styles.
//!
//! These mirror the persisted JSON shape: padding as four independent edge
//! offsets, enums serialized as lowercase tags, colors as raw CSS strings.
//! Values are structural only; nothing here checks that a color parses.

use serde::{Deserialize, Serialize};

/// Box padding in pixels, one value per edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Padding {
    /// Uniform vertical/horizontal padding.
    pub const fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Padding {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }
}

/// Font weight of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Left,
    Center,
    Right,
}

/// Vertical alignment of block content within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    Top,
    Middle,
    Bottom,
}

/// Crop shape of an avatar image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarShape {
    Circle,
    Square,
    Rounded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_serde_shape() {
        let p = Padding::symmetric(16, 24);
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"top": 16, "bottom": 16, "left": 24, "right": 24})
        );
    }

    #[test]
    fn test_enum_tags_are_lowercase() {
        assert_eq!(serde_json::to_string(&FontWeight::Normal).unwrap(), "\"normal\"");
        assert_eq!(serde_json::to_string(&VerticalAlignment::Middle).unwrap(), "\"middle\"");
        assert_eq!(serde_json::to_string(&AvatarShape::Circle).unwrap(), "\"circle\"");
        assert_eq!(serde_json::to_string(&TextAlignment::Center).unwrap(), "\"center\"");
    }
}
