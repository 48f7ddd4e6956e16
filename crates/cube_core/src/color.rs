use serde::{Deserialize, Serialize};

use crate::Face;

/// Sticker color. There is exactly one color per face, named after the
/// standard color scheme.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Color {
    /// Home color of [`Face::U`].
    White = 0,
    /// Home color of [`Face::R`].
    Red = 1,
    /// Home color of [`Face::F`].
    Green = 2,
    /// Home color of [`Face::D`].
    Yellow = 3,
    /// Home color of [`Face::L`].
    Orange = 4,
    /// Home color of [`Face::B`].
    Blue = 5,
}

impl Color {
    /// All colors, in index order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];

    /// Returns the index of the color, in the range `0..6`.
    pub const fn index(self) -> u8 {
        self as u8
    }
    /// Returns the color with the given index, or `None` if it is out of
    /// range.
    pub fn from_index(index: u8) -> Option<Color> {
        Self::ALL.get(index as usize).copied()
    }
    /// Returns the face whose center has this color.
    pub fn home_face(self) -> Face {
        Face::ALL[self.index() as usize]
    }
    /// Returns the uppercase initial of the color name.
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Blue => 'B',
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_color_index_roundtrip() {
        for color in Color::iter() {
            assert_eq!(Some(color), Color::from_index(color.index()));
            assert_eq!(color, color.home_face().home_color());
        }
        assert_eq!(None, Color::from_index(6));
    }

    #[test]
    fn test_color_names() {
        assert_eq!("orange", Color::Orange.to_string());
        assert_eq!(Ok(Color::Blue), "blue".parse());
    }
}
