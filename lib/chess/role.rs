use crate::chess::{Color, Rank, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The type of a chess [`Piece`][`crate::chess::Piece`].
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    #[display(fmt = "Pawn")]
    Pawn,
    #[display(fmt = "Knight")]
    Knight,
    #[display(fmt = "Bishop")]
    Bishop,
    #[display(fmt = "Rook")]
    Rook,
    #[display(fmt = "Queen")]
    Queen,
    #[display(fmt = "King")]
    King,
}

impl Role {
    /// An iterator over all roles.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        use Role::*;
        [Pawn, Knight, Bishop, Rook, Queen, King].into_iter()
    }

    /// The lowercase letter that stands for this role.
    pub fn symbol(&self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    /// Whether a piece of this role can slide across several squares.
    pub fn is_slider(&self) -> bool {
        matches!(self, Role::Bishop | Role::Rook | Role::Queen)
    }

    /// Whether the geometry of a move from `whence` to `whither` fits this role.
    ///
    /// Only the shape of the move is considered, the rest of the board never is.
    /// Castling is not a king move in this sense.
    pub fn can_move(&self, side: Color, whence: Square, whither: Square) -> bool {
        let df = whither.file() - whence.file();
        let dr = whither.rank() - whence.rank();

        match self {
            Role::Pawn => {
                let step = pawn_direction(side);
                match (df.abs(), dr) {
                    (0, dr) if dr == step => true,
                    (0, dr) if dr == 2 * step => whence.rank() == pawn_home(side),
                    (1, dr) => dr == step,
                    _ => false,
                }
            }

            Role::Knight => matches!((df.abs(), dr.abs()), (1, 2) | (2, 1)),
            Role::Bishop => df != 0 && df.abs() == dr.abs(),
            Role::Rook => (df == 0) != (dr == 0),
            Role::Queen => {
                Role::Rook.can_move(side, whence, whither)
                    || Role::Bishop.can_move(side, whence, whither)
            }

            Role::King => df.abs().max(dr.abs()) == 1,
        }
    }
}

/// The number of ranks a pawn of the given color advances by in a single step.
pub(crate) fn pawn_direction(side: Color) -> i8 {
    match side {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// The rank from where a pawn of the given color may advance two squares.
pub(crate) fn pawn_home(side: Color) -> Rank {
    match side {
        Color::White => Rank::Second,
        Color::Black => Rank::Seventh,
    }
}

/// The rank where the pieces of the given color start, and where its king castles.
pub(crate) fn back_rank(side: Color) -> Rank {
    match side {
        Color::White => Rank::First,
        Color::Black => Rank::Eighth,
    }
}

/// The rank where a pawn of the given color promotes.
pub(crate) fn pawn_last(side: Color) -> Rank {
    match side {
        Color::White => Rank::Eighth,
        Color::Black => Rank::First,
    }
}

/// The reason why parsing [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece, expected one of `p, n, b, r, q, k` or its name")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "pawn" => Ok(Role::Pawn),
            "n" | "knight" => Ok(Role::Knight),
            "b" | "bishop" => Ok(Role::Bishop),
            "r" | "rook" => Ok(Role::Rook),
            "q" | "queen" => Ok(Role::Queen),
            "k" | "king" => Ok(Role::King),
            _ => Err(ParseRoleError),
        }
    }
}
