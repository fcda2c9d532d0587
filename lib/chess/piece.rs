use crate::chess::{Color, Role, Square};
use std::fmt::{self, Write};

/// A chess [piece][`Role`] of a certain [`Color`].
///
/// Besides its role and color, a piece remembers whether it has ever moved,
/// which is what decides castling eligibility.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    role: Role,
    color: Color,
    moved: bool,
}

impl Piece {
    /// Constructs a [`Piece`] that has not moved yet.
    #[inline(always)]
    pub fn new(role: Role, color: Color) -> Self {
        Piece {
            role,
            color,
            moved: false,
        }
    }

    /// This piece with the given moved flag.
    #[inline(always)]
    pub fn with_moved(self, moved: bool) -> Self {
        Piece { moved, ..self }
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this piece has completed at least one move.
    #[inline(always)]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Whether the geometry of a move fits this piece.
    ///
    /// See [`Role::can_move`].
    #[inline(always)]
    pub fn can_move(&self, whence: Square, whither: Square) -> bool {
        self.role.can_move(self.color, whence, whither)
    }

    pub(crate) fn mark_moved(&mut self) {
        self.moved = true;
    }
}

/// Uppercase for white, lowercase for black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::White => f.write_char(self.role.symbol().to_ascii_uppercase()),
            Color::Black => f.write_char(self.role.symbol()),
        }
    }
}
