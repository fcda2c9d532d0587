use crate::chess::role::pawn_direction;
use crate::chess::{Color, Move, Position, Role, Square};

impl Position {
    /// An iterator over the squares of the pieces of color `by` that attack `sq`.
    ///
    /// Pawns attack the two squares diagonally ahead of them, whether occupied or not.
    pub fn attackers(&self, sq: Square, by: Color) -> impl Iterator<Item = Square> + '_ {
        self.by_color(by)
            .filter(move |&(s, p)| match p.role() {
                Role::Pawn => {
                    let df = (sq.file() - s.file()).abs();
                    df == 1 && sq.rank() - s.rank() == pawn_direction(by)
                }

                Role::Knight | Role::King => p.can_move(s, sq),
                _ => p.can_move(s, sq) && self.is_path_clear(s, sq),
            })
            .map(|(s, _)| s)
    }

    /// Whether `sq` is attacked by any piece of color `by`.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.attackers(sq, by).next().is_some()
    }

    /// Whether the king of the given color is attacked.
    ///
    /// A side without a king is never in check.
    pub fn is_check(&self, side: Color) -> bool {
        match self.king(side) {
            Some(k) => self.is_attacked(k, !side),
            None => false,
        }
    }

    /// An iterator over the legal moves of the given side.
    ///
    /// Castling is listed as the king's two-square move.
    pub fn moves(&self, side: Color) -> impl Iterator<Item = Move> + '_ {
        let mut scratch = self.clone();
        self.by_color(side)
            .flat_map(|(whence, _)| Square::iter().map(move |whither| Move(whence, whither)))
            .filter(move |&m| scratch.probe(m, side))
    }

    /// Whether the given side has at least one legal move.
    pub fn has_legal_move(&self, side: Color) -> bool {
        self.moves(side).next().is_some()
    }

    /// Whether the given side is in check and has no legal move.
    pub fn is_checkmate(&self, side: Color) -> bool {
        self.is_check(side) && !self.has_legal_move(side)
    }

    /// Whether the given side is not in check but has no legal move.
    pub fn is_stalemate(&self, side: Color) -> bool {
        !self.is_check(side) && !self.has_legal_move(side)
    }
}
