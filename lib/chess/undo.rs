use crate::chess::{Piece, Position, Square};

/// What a move changed on the board, enough to take it back exactly.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct Undo {
    /// The square the piece moved from and the piece as it stood there.
    pub whence: (Square, Piece),
    /// The square the piece moved to and whatever stood there before.
    pub whither: (Square, Option<Piece>),
    /// A pawn captured en passant and the square it stood on.
    pub captured: Option<(Square, Piece)>,
    /// The castling rook's home square, the square it moved to, and the rook as it was.
    pub rook: Option<(Square, Square, Piece)>,
    pub en_passant: Option<Square>,
    pub promotion: Option<Square>,
}

impl Position {
    /// Takes back the move recorded by [`Undo`].
    pub(crate) fn undo(&mut self, u: Undo) {
        let (whither, replaced) = u.whither;
        let (whence, moved) = u.whence;

        self.set(whither, replaced);
        self.set(whence, Some(moved));

        if let Some((home, castled, rook)) = u.rook {
            self.set(castled, None);
            self.set(home, Some(rook));
        }

        if let Some((sq, pawn)) = u.captured {
            self.set(sq, Some(pawn));
        }

        self.en_passant = u.en_passant;
        self.promotion = u.promotion;
    }
}
