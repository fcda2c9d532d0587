use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::{ops::Not, str::FromStr};

/// The color of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    #[default]
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// An iterator over both colors, white first.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        [Color::White, Color::Black].into_iter()
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// The reason why parsing [`Color`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse color, expected `white` or `black`")]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            _ => Err(ParseColorError),
        }
    }
}
