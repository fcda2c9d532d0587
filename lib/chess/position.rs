use crate::chess::{Color, File, Piece, Rank, Role, Square};
use std::fmt::{self, Write};
use std::ops::Index;

/// The arrangement of pieces on the chess board.
///
/// Besides the 64 squares, a position remembers the square a pawn has just
/// jumped over, which may be captured onto en passant by the next move, and
/// the square of a pawn that was promoted by the last move, whose new role may
/// still be chosen.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    board: [Option<Piece>; 64],
    pub(crate) en_passant: Option<Square>,
    pub(crate) promotion: Option<Square>,
}

/// The standard starting position.
impl Default for Position {
    fn default() -> Self {
        use Role::*;

        let mut pos = Position::empty();
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for (f, role) in File::iter().zip(back) {
            pos.place(Square::new(f, Rank::First), Piece::new(role, Color::White));
            pos.place(Square::new(f, Rank::Second), Piece::new(Pawn, Color::White));
            pos.place(Square::new(f, Rank::Seventh), Piece::new(Pawn, Color::Black));
            pos.place(Square::new(f, Rank::Eighth), Piece::new(role, Color::Black));
        }

        pos
    }
}

impl Position {
    /// A position without any pieces.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            en_passant: None,
            promotion: None,
        }
    }

    /// The square that may be captured onto en passant, if any.
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    /// Overrides the en passant square.
    ///
    /// Meant for setting up positions, no consistency checks are performed.
    pub fn set_en_passant_square(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    /// The square of a pawn promoted by the last move, if its role can still be chosen.
    pub fn pending_promotion(&self) -> Option<Square> {
        self.promotion
    }

    /// Puts a [`Piece`] on a [`Square`], returning the piece it replaced.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.board[sq.index()].replace(piece)
    }

    /// Removes the [`Piece`] on a [`Square`], if any.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.board[sq.index()].take()
    }

    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.board[sq.index()] = piece;
    }

    /// An iterator over all pieces on the board, from a1 to h8.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|s| Some((s, self[s]?)))
    }

    /// An iterator over the pieces of a [`Color`].
    pub fn by_color(&self, c: Color) -> impl DoubleEndedIterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, p)| p.color() == c)
    }

    /// [`Square`] occupied by the king of the given color, if any.
    pub fn king(&self, side: Color) -> Option<Square> {
        self.by_color(side)
            .find(|(_, p)| p.role() == Role::King)
            .map(|(s, _)| s)
    }

    /// Whether every square strictly between two aligned squares is empty.
    pub(crate) fn is_path_clear(&self, whence: Square, whither: Square) -> bool {
        let df = (whither.file() - whence.file()).signum();
        let dr = (whither.rank() - whence.rank()).signum();

        let mut next = whence.offset(df, dr);
        while let Some(sq) = next {
            if sq == whither {
                return true;
            } else if self[sq].is_some() {
                return false;
            }

            next = sq.offset(df, dr);
        }

        false
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Position {
    type Output = Option<Piece>;

    fn index(&self, s: Square) -> &Self::Output {
        &self.board[s.index()]
    }
}

/// Renders the board as text, white at the bottom.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn labels(f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_char(' ')?;
            File::iter().try_for_each(|file| write!(f, " {file}"))
        }

        labels(f)?;
        f.write_char('\n')?;

        for r in Rank::iter().rev() {
            write!(f, "{r}")?;
            for file in File::iter() {
                match self[Square::new(file, r)] {
                    Some(p) => write!(f, " {p}")?,
                    None => f.write_str(" .")?,
                }
            }

            writeln!(f, " {r}")?;
        }

        labels(f)
    }
}
