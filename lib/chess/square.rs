use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// A square on the chess board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    #[rustfmt::skip]
    const ALL: [Square; 64] = {
        use Square::*;
        [
            A1, B1, C1, D1, E1, F1, G1, H1,
            A2, B2, C2, D2, E2, F2, G2, H2,
            A3, B3, C3, D3, E3, F3, G3, H3,
            A4, B4, C4, D4, E4, F4, G4, H4,
            A5, B5, C5, D5, E5, F5, G5, H5,
            A6, B6, C6, D6, E6, F6, G6, H6,
            A7, B7, C7, D7, E7, F7, G7, H7,
            A8, B8, C8, D8, E8, F8, G8, H8,
        ]
    };

    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        Self::ALL[(r.index() * 8 + f.index()) as usize]
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        File::ALL[self.index() % 8]
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        Rank::ALL[self.index() / 8]
    }

    /// This square's index in the range `(0..64)`, from a1 to h8 rank by rank.
    #[inline(always)]
    pub fn index(&self) -> usize {
        *self as _
    }

    /// The square `df` files and `dr` ranks away, if it is on the board.
    #[inline(always)]
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        let f = File::from_index(self.file().index() + df)?;
        let r = Rank::from_index(self.rank().index() + dr)?;
        Some(Square::new(f, r))
    }

    /// An iterator over all squares, from a1 to h8 rank by rank.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square, expected a file letter followed by a rank digit")]
    InvalidLength,
    #[display(fmt = "failed to parse square, {}", _0)]
    InvalidFile(ParseFileError),
    #[display(fmt = "failed to parse square, {}", _0)]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();

        if s.chars().count() != 2 {
            return Err(ParseSquareError::InvalidLength);
        }

        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        let f = s[..i].parse().map_err(ParseSquareError::InvalidFile)?;
        let r = s[i..].parse().map_err(ParseSquareError::InvalidRank)?;
        Ok(Square::new(f, r))
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|e| de::Error::custom(format!("`{s}`: {e}")))
    }
}
