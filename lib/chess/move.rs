use crate::chess::{ParseSquareError, Role, Square};
use derive_more::{Deref, Display, Error};
use std::str::FromStr;

/// A chess move given by the square it starts from and the square it ends on.
///
/// Castling is written as the king's move, e.g. `e1g1`.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", _0, _1)]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseMoveError {
    #[display(fmt = "failed to parse move, expected two squares such as `e2 e4`")]
    InvalidFormat,
    #[display(fmt = "{}", _0)]
    InvalidSquare(ParseSquareError),
}

/// Parses two square identifiers, either separated by whitespace or joined.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<_> = s.split_whitespace().collect();

        let (whence, whither) = match tokens[..] {
            [whence, whither] => (whence, whither),
            [joined] if joined.is_ascii() && joined.len() == 4 => joined.split_at(2),
            _ => return Err(ParseMoveError::InvalidFormat),
        };

        Ok(Move(
            whence.parse().map_err(ParseMoveError::InvalidSquare)?,
            whither.parse().map_err(ParseMoveError::InvalidSquare)?,
        ))
    }
}

/// The context of a chess move that was played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deref)]
pub struct MoveContext {
    #[deref]
    pub(crate) m: Move,
    pub(crate) role: Role,
    pub(crate) capture: Option<(Role, Square)>,
    pub(crate) promotion: bool,
}

impl MoveContext {
    /// The [`Role`] of the piece moved.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The [`Role`] of the piece captured and the [`Square`] it stood on.
    pub fn capture(&self) -> Option<(Role, Square)> {
        self.capture
    }

    /// Whether this is a promotion move.
    pub fn is_promotion(&self) -> bool {
        self.promotion
    }

    /// Whether this is a castling move.
    pub fn is_castling(&self) -> bool {
        self.role() == Role::King && (self.whence().file() - self.whither().file()).abs() > 1
    }

    /// Whether this is a capture move.
    pub fn is_capture(&self) -> bool {
        self.capture().is_some()
    }

    /// Whether this is an en passant capture move.
    pub fn is_en_passant(&self) -> bool {
        self.capture().is_some_and(|(_, s)| self.whither() != s)
    }
}
