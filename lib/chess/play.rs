use crate::chess::role::{back_rank, pawn_direction, pawn_last};
use crate::chess::{Color, File, Move, MoveContext, Piece, Position, Role, Square, Undo};
use derive_more::{Display, Error};

/// Represents an illegal [`Move`] in a given [`Position`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "move `{}` is illegal in this position", _0)]
pub struct IllegalMove(#[error(not(source))] pub Move);

impl Position {
    /// Plays a [`Move`] for the given side if legal in this position.
    ///
    /// The position is left untouched if the move is rejected.
    pub fn play(&mut self, m: Move, side: Color) -> Result<MoveContext, IllegalMove> {
        let (mc, _) = self.apply(m, side)?;
        Ok(mc)
    }

    /// Chooses the role of the pawn promoted by the last move.
    ///
    /// Knights, bishops, rooks and queens may be chosen, anything else yields a queen.
    /// Returns `false` if there is no promotion pending on the given square.
    pub fn promote(&mut self, sq: Square, role: Role) -> bool {
        let role = match role {
            Role::Knight | Role::Bishop | Role::Rook | Role::Queen => role,
            Role::Pawn | Role::King => Role::Queen,
        };

        match (self.promotion, self[sq]) {
            (Some(s), Some(p)) if s == sq => {
                self.place(sq, Piece::new(role, p.color()).with_moved(true));
                true
            }

            _ => false,
        }
    }

    /// Whether a [`Move`] is legal for the given side in this position.
    pub fn is_legal(&self, m: Move, side: Color) -> bool {
        self.clone().probe(m, side)
    }

    /// Tries a move and takes it back, reporting whether it was legal.
    pub(crate) fn probe(&mut self, m: Move, side: Color) -> bool {
        match self.apply(m, side) {
            Err(_) => false,
            Ok((_, undo)) => {
                self.undo(undo);
                true
            }
        }
    }

    /// Plays a move if legal, returning what is needed to take it back.
    pub(crate) fn apply(
        &mut self,
        m: Move,
        side: Color,
    ) -> Result<(MoveContext, Undo), IllegalMove> {
        let (whence, whither) = (m.whence(), m.whither());

        if whence == whither {
            return Err(IllegalMove(m));
        }

        let piece = match self[whence] {
            Some(p) if p.color() == side => p,
            _ => return Err(IllegalMove(m)),
        };

        let df = whither.file() - whence.file();
        let dr = whither.rank() - whence.rank();

        if piece.role() == Role::King && dr == 0 && df.abs() == 2 {
            return self.castle(m, side);
        }

        if !piece.can_move(whence, whither) {
            return Err(IllegalMove(m));
        }

        let target = self[whither];
        if target.is_some_and(|t| t.color() == side) {
            return Err(IllegalMove(m));
        }

        let mut en_passant = None;
        let mut captured = None;

        match piece.role() {
            Role::Pawn if df == 0 => {
                if target.is_some() {
                    return Err(IllegalMove(m));
                }

                if dr.abs() == 2 {
                    match whence.offset(0, pawn_direction(side)) {
                        Some(skipped) if self[skipped].is_none() => en_passant = Some(skipped),
                        _ => return Err(IllegalMove(m)),
                    }
                }
            }

            Role::Pawn if target.is_none() => {
                if self.en_passant != Some(whither) {
                    return Err(IllegalMove(m));
                }

                let victim = Square::new(whither.file(), whence.rank());
                match self[victim] {
                    Some(p) if p.role() == Role::Pawn && p.color() != side => {
                        captured = Some((victim, p))
                    }

                    _ => return Err(IllegalMove(m)),
                }
            }

            r if r.is_slider() && !self.is_path_clear(whence, whither) => {
                return Err(IllegalMove(m));
            }

            _ => {}
        }

        let undo = Undo {
            whence: (whence, piece),
            whither: (whither, target),
            captured,
            rook: None,
            en_passant: self.en_passant,
            promotion: self.promotion,
        };

        if let Some((victim, _)) = captured {
            self.set(victim, None);
        }

        self.set(whence, None);
        self.set(whither, Some(piece));

        if self.is_check(side) {
            self.undo(undo);
            return Err(IllegalMove(m));
        }

        let promotion = piece.role() == Role::Pawn && whither.rank() == pawn_last(side);

        let mut moved = match promotion {
            true => Piece::new(Role::Queen, side),
            false => piece,
        };

        moved.mark_moved();
        self.set(whither, Some(moved));
        self.en_passant = en_passant;
        self.promotion = promotion.then_some(whither);

        let capture = match (target, captured) {
            (Some(t), _) => Some((t.role(), whither)),
            (None, Some((victim, p))) => Some((p.role(), victim)),
            (None, None) => None,
        };

        let mc = MoveContext {
            m,
            role: piece.role(),
            capture,
            promotion,
        };

        Ok((mc, undo))
    }

    /// Castles the king from its home square toward the rook on the corner of its back rank.
    fn castle(&mut self, m: Move, side: Color) -> Result<(MoveContext, Undo), IllegalMove> {
        let (whence, whither) = (m.whence(), m.whither());

        let king = match self[whence] {
            Some(p) if p.role() == Role::King && p.color() == side && !p.has_moved() => p,
            _ => return Err(IllegalMove(m)),
        };

        let back = back_rank(side);
        if whence != Square::new(File::E, back) || whither.rank() != back {
            return Err(IllegalMove(m));
        }

        let (corner, transit) = match whither.file() {
            File::G => (Square::new(File::H, back), Square::new(File::F, back)),
            File::C => (Square::new(File::A, back), Square::new(File::D, back)),
            _ => return Err(IllegalMove(m)),
        };

        if self.is_check(side) {
            return Err(IllegalMove(m));
        }

        let rook = match self[corner] {
            Some(p) if p.role() == Role::Rook && p.color() == side && !p.has_moved() => p,
            _ => return Err(IllegalMove(m)),
        };

        if !self.is_path_clear(whence, corner) {
            return Err(IllegalMove(m));
        }

        if self.is_attacked(transit, !side) || self.is_attacked(whither, !side) {
            return Err(IllegalMove(m));
        }

        let undo = Undo {
            whence: (whence, king),
            whither: (whither, None),
            captured: None,
            rook: Some((corner, transit, rook)),
            en_passant: self.en_passant,
            promotion: self.promotion,
        };

        self.set(whence, None);
        self.set(corner, None);
        self.set(whither, Some(king.with_moved(true)));
        self.set(transit, Some(rook.with_moved(true)));

        if self.is_check(side) {
            self.undo(undo);
            return Err(IllegalMove(m));
        }

        self.en_passant = None;
        self.promotion = None;

        let mc = MoveContext {
            m,
            role: Role::King,
            capture: None,
            promotion: false,
        };

        Ok((mc, undo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Square::*;
    use test_strategy::proptest;

    fn setup(pieces: &[(Square, Role, Color)]) -> Position {
        let mut pos = Position::empty();
        for &(s, r, c) in pieces {
            pos.place(s, Piece::new(r, c));
        }

        pos
    }

    fn kings() -> Vec<(Square, Role, Color)> {
        vec![(E1, Role::King, Color::White), (E8, Role::King, Color::Black)]
    }

    fn castling() -> Position {
        setup(&[
            (E1, Role::King, Color::White),
            (A1, Role::Rook, Color::White),
            (H1, Role::Rook, Color::White),
            (E8, Role::King, Color::Black),
            (A8, Role::Rook, Color::Black),
            (H8, Role::Rook, Color::Black),
        ])
    }

    #[proptest]
    fn moving_piece_onto_its_own_square_is_illegal(sq: Square, c: Color) {
        let mut pos = Position::default();
        let before = pos.clone();
        assert_eq!(pos.play(Move(sq, sq), c), Err(IllegalMove(Move(sq, sq))));
        assert_eq!(pos, before);
    }

    #[proptest]
    fn illegal_move_fails_without_changing_position(
        #[strategy(0usize..4)] n: usize,
        m: Move,
        c: Color,
    ) {
        let mut pos = Position::default();
        let opening = [Move(E2, E4), Move(D7, D5), Move(E4, E5), Move(F7, F5)];
        for (i, m) in opening.into_iter().take(n).enumerate() {
            let side = if i % 2 == 0 { Color::White } else { Color::Black };
            pos.play(m, side)?;
        }

        let before = pos.clone();
        if pos.play(m, c).is_err() {
            assert_eq!(pos, before);
        }
    }

    #[proptest]
    fn cannot_move_opponent_pieces(m: Move) {
        let mut pos = Position::default();
        if pos[m.whence()].is_some_and(|p| p.color() == Color::Black) {
            assert_eq!(pos.play(m, Color::White), Err(IllegalMove(m)));
        }
    }

    #[test]
    fn cannot_move_from_empty_square() {
        let mut pos = Position::default();
        assert_eq!(pos.play(Move(E4, E5), Color::White), Err(IllegalMove(Move(E4, E5))));
    }

    #[test]
    fn pawn_advances_one_or_two_squares_from_home() {
        let mut pos = Position::default();
        assert!(pos.play(Move(E2, E3), Color::White).is_ok());
        assert!(pos.play(Move(D7, D5), Color::Black).is_ok());
        assert!(pos.play(Move(E3, E5), Color::White).is_err());
        assert!(pos.play(Move(E3, E4), Color::White).is_ok());
        assert!(pos[E4].is_some_and(|p| p.has_moved()));
    }

    #[test]
    fn pawn_cannot_advance_onto_or_through_pieces() {
        let mut pos = Position::default();
        pos.place(E3, Piece::new(Role::Knight, Color::Black));
        pos.place(D4, Piece::new(Role::Knight, Color::Black));

        assert!(pos.play(Move(E2, E3), Color::White).is_err());
        assert!(pos.play(Move(E2, E4), Color::White).is_err());
        assert!(pos.play(Move(D2, D4), Color::White).is_err());
        assert!(pos.play(Move(D2, D3), Color::White).is_ok());
    }

    #[test]
    fn pawn_captures_diagonally_only_opposing_pieces() {
        let mut pos = Position::default();
        assert!(pos.play(Move(E2, D3), Color::White).is_err());

        pos.place(D3, Piece::new(Role::Pawn, Color::White));
        pos.place(F3, Piece::new(Role::Pawn, Color::Black));
        assert!(pos.play(Move(E2, D3), Color::White).is_err());

        let mc = pos.play(Move(E2, F3), Color::White).unwrap();
        assert_eq!(mc.capture(), Some((Role::Pawn, F3)));
        assert_eq!(pos[F3].map(|p| p.color()), Some(Color::White));
    }

    #[test]
    fn double_step_sets_en_passant_square() {
        let mut pos = Position::default();
        pos.play(Move(E2, E4), Color::White).unwrap();
        assert_eq!(pos.en_passant_square(), Some(E3));

        pos.play(Move(G8, F6), Color::Black).unwrap();
        assert_eq!(pos.en_passant_square(), None);

        pos.play(Move(D2, D3), Color::White).unwrap();
        assert_eq!(pos.en_passant_square(), None);
    }

    #[test]
    fn en_passant_captures_the_pawn_that_just_double_stepped() {
        let mut pos = Position::default();
        pos.play(Move(E2, E4), Color::White).unwrap();
        pos.play(Move(A7, A6), Color::Black).unwrap();
        pos.play(Move(E4, E5), Color::White).unwrap();
        pos.play(Move(D7, D5), Color::Black).unwrap();
        assert_eq!(pos.en_passant_square(), Some(D6));

        let mc = pos.play(Move(E5, D6), Color::White).unwrap();
        assert!(mc.is_en_passant());
        assert_eq!(mc.capture(), Some((Role::Pawn, D5)));
        assert_eq!(pos[D5], None);
        assert_eq!(pos[D6].map(|p| p.role()), Some(Role::Pawn));
        assert_eq!(pos.en_passant_square(), None);
    }

    #[test]
    fn en_passant_window_lasts_a_single_ply() {
        let mut pos = Position::default();
        pos.play(Move(E2, E4), Color::White).unwrap();
        pos.play(Move(A7, A6), Color::Black).unwrap();
        pos.play(Move(E4, E5), Color::White).unwrap();
        pos.play(Move(D7, D5), Color::Black).unwrap();
        pos.play(Move(H2, H3), Color::White).unwrap();
        pos.play(Move(A6, A5), Color::Black).unwrap();

        let before = pos.clone();
        assert_eq!(pos.play(Move(E5, D6), Color::White), Err(IllegalMove(Move(E5, D6))));
        assert_eq!(pos, before);
    }

    #[test]
    fn rejected_move_preserves_en_passant_square() {
        let mut pos = Position::default();
        pos.play(Move(E2, E4), Color::White).unwrap();

        let before = pos.clone();
        assert!(pos.play(Move(E7, E4), Color::Black).is_err());
        assert_eq!(pos.en_passant_square(), Some(E3));
        assert_eq!(pos, before);
    }

    #[test]
    fn en_passant_requires_an_opposing_pawn_behind_the_target() {
        let mut pos = setup(&kings());
        pos.place(E5, Piece::new(Role::Pawn, Color::White));
        pos.place(D5, Piece::new(Role::Knight, Color::Black));
        pos.set_en_passant_square(Some(D6));

        assert!(pos.play(Move(E5, D6), Color::White).is_err());
        assert_eq!(pos[D5].map(|p| p.role()), Some(Role::Knight));
    }

    #[test]
    fn sliding_pieces_are_blocked() {
        let mut pos = Position::default();
        assert!(pos.play(Move(A1, A3), Color::White).is_err());
        assert!(pos.play(Move(C1, E3), Color::White).is_err());
        assert!(pos.play(Move(D1, D3), Color::White).is_err());

        pos.play(Move(D2, D4), Color::White).unwrap();
        pos.play(Move(E7, E6), Color::Black).unwrap();
        assert!(pos.play(Move(C1, G5), Color::White).is_ok());
        assert!(pos.play(Move(F8, B4), Color::Black).is_ok());
    }

    #[test]
    fn pieces_cannot_capture_their_own_color() {
        let mut pos = Position::default();
        assert!(pos.play(Move(B1, D2), Color::White).is_err());
        assert!(pos.play(Move(E1, E2), Color::White).is_err());
        assert!(pos.play(Move(B1, C3), Color::White).is_ok());
    }

    #[test]
    fn knights_jump_over_pieces() {
        let mut pos = Position::default();
        assert!(pos.play(Move(G1, F3), Color::White).is_ok());
        assert!(pos.play(Move(B8, C6), Color::Black).is_ok());
    }

    #[test]
    fn king_cannot_stay_in_check() {
        let mut pos = setup(&kings());
        pos.place(E5, Piece::new(Role::Rook, Color::Black));

        let before = pos.clone();
        assert_eq!(pos.play(Move(E1, E2), Color::White), Err(IllegalMove(Move(E1, E2))));
        assert_eq!(pos, before);
        assert!(pos.play(Move(E1, D1), Color::White).is_ok());
    }

    #[test]
    fn kings_cannot_stand_next_to_each_other() {
        let mut pos = setup(&[
            (E4, Role::King, Color::White),
            (E6, Role::King, Color::Black),
        ]);

        assert!(pos.play(Move(E4, E5), Color::White).is_err());
        assert!(pos.play(Move(E4, D4), Color::White).is_ok());
    }

    #[test]
    fn pinned_piece_cannot_expose_its_king() {
        let mut pos = setup(&kings());
        pos.place(E2, Piece::new(Role::Knight, Color::White));
        pos.place(E7, Piece::new(Role::Rook, Color::Black));

        assert!(pos.play(Move(E2, C3), Color::White).is_err());
        assert_eq!(pos[E2].map(|p| p.has_moved()), Some(false));
    }

    #[test]
    fn capture_that_exposes_the_king_is_rolled_back() {
        let mut pos = setup(&kings());
        pos.place(E2, Piece::new(Role::Bishop, Color::White));
        pos.place(D3, Piece::new(Role::Knight, Color::Black));
        pos.place(E7, Piece::new(Role::Rook, Color::Black));

        let before = pos.clone();
        assert!(pos.play(Move(E2, D3), Color::White).is_err());
        assert_eq!(pos, before);
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_rolled_back() {
        let mut pos = setup(&[
            (A5, Role::King, Color::White),
            (H8, Role::King, Color::Black),
            (H5, Role::Rook, Color::Black),
            (E5, Role::Pawn, Color::White),
            (D5, Role::Pawn, Color::Black),
        ]);

        pos.set_en_passant_square(Some(D6));

        let before = pos.clone();
        assert!(pos.play(Move(E5, D6), Color::White).is_err());
        assert_eq!(pos, before);
    }

    #[test]
    fn moving_marks_the_piece_as_moved() {
        let mut pos = Position::default();
        pos.play(Move(G1, F3), Color::White).unwrap();
        assert_eq!(pos[F3].map(|p| p.has_moved()), Some(true));

        pos.play(Move(G8, F6), Color::Black).unwrap();
        pos.play(Move(F3, G1), Color::White).unwrap();
        assert_eq!(pos[G1].map(|p| p.has_moved()), Some(true));
    }

    #[test]
    fn castling_moves_king_and_rook_on_either_wing() {
        for (m, rook, side) in [
            (Move(E1, G1), (H1, F1), Color::White),
            (Move(E1, C1), (A1, D1), Color::White),
            (Move(E8, G8), (H8, F8), Color::Black),
            (Move(E8, C8), (A8, D8), Color::Black),
        ] {
            let mut pos = castling();
            let mc = pos.play(m, side).unwrap();

            assert!(mc.is_castling());
            assert_eq!(pos[m.whence()], None);
            assert_eq!(pos[rook.0], None);
            assert_eq!(pos[m.whither()], Some(Piece::new(Role::King, side).with_moved(true)));
            assert_eq!(pos[rook.1], Some(Piece::new(Role::Rook, side).with_moved(true)));
        }
    }

    #[test]
    fn castling_clears_en_passant_square() {
        let mut pos = castling();
        pos.set_en_passant_square(Some(E6));
        pos.play(Move(E1, G1), Color::White).unwrap();
        assert_eq!(pos.en_passant_square(), None);
    }

    #[test]
    fn castling_is_denied_if_king_has_moved() {
        let mut pos = castling();
        pos.place(E1, Piece::new(Role::King, Color::White).with_moved(true));

        let before = pos.clone();
        assert!(pos.play(Move(E1, G1), Color::White).is_err());
        assert!(pos.play(Move(E1, C1), Color::White).is_err());
        assert_eq!(pos, before);
    }

    #[test]
    fn castling_is_denied_after_king_returns_home() {
        let mut pos = castling();
        pos.play(Move(E1, F1), Color::White).unwrap();
        pos.play(Move(E8, F8), Color::Black).unwrap();
        pos.play(Move(F1, E1), Color::White).unwrap();
        pos.play(Move(F8, E8), Color::Black).unwrap();

        assert!(pos.play(Move(E1, C1), Color::White).is_err());
        assert!(pos.play(Move(E1, G1), Color::White).is_err());
    }

    #[test]
    fn castling_is_denied_if_rook_has_moved() {
        let mut pos = castling();
        pos.place(H1, Piece::new(Role::Rook, Color::White).with_moved(true));

        let before = pos.clone();
        assert!(pos.play(Move(E1, G1), Color::White).is_err());
        assert_eq!(pos, before);
        assert!(pos.play(Move(E1, C1), Color::White).is_ok());
    }

    #[test]
    fn castling_is_denied_without_a_rook() {
        let mut pos = castling();
        pos.remove(A1);
        assert!(pos.play(Move(E1, C1), Color::White).is_err());

        pos.place(A1, Piece::new(Role::Rook, Color::Black));
        assert!(pos.play(Move(E1, C1), Color::White).is_err());
    }

    #[test]
    fn castling_is_denied_while_in_check() {
        let mut pos = castling();
        pos.place(E4, Piece::new(Role::Rook, Color::Black));

        let before = pos.clone();
        assert!(pos.play(Move(E1, G1), Color::White).is_err());
        assert!(pos.play(Move(E1, C1), Color::White).is_err());
        assert_eq!(pos, before);
    }

    #[test]
    fn castling_is_denied_if_a_square_between_is_occupied() {
        let mut pos = castling();
        pos.place(B1, Piece::new(Role::Knight, Color::White));

        let before = pos.clone();
        assert!(pos.play(Move(E1, C1), Color::White).is_err());
        assert_eq!(pos, before);
        assert!(pos.play(Move(E1, G1), Color::White).is_ok());
    }

    #[test]
    fn castling_is_denied_for_an_unmoved_king_off_its_home_square() {
        let mut pos = setup(&[
            (E4, Role::King, Color::White),
            (H4, Role::Rook, Color::White),
            (E8, Role::King, Color::Black),
        ]);

        let before = pos.clone();
        assert_eq!(pos.play(Move(E4, G4), Color::White), Err(IllegalMove(Move(E4, G4))));
        assert_eq!(pos, before);

        let mut pos = setup(&[
            (D1, Role::King, Color::White),
            (A1, Role::Rook, Color::White),
            (E8, Role::King, Color::Black),
        ]);

        let before = pos.clone();
        assert_eq!(pos.play(Move(D1, B1), Color::White), Err(IllegalMove(Move(D1, B1))));
        assert_eq!(pos, before);
    }

    #[test]
    fn castling_is_denied_on_the_opponents_back_rank() {
        let mut pos = setup(&[
            (A4, Role::King, Color::White),
            (E1, Role::King, Color::Black),
            (H1, Role::Rook, Color::Black),
            (A1, Role::Rook, Color::Black),
        ]);

        let before = pos.clone();
        assert!(pos.play(Move(E1, G1), Color::Black).is_err());
        assert!(pos.play(Move(E1, C1), Color::Black).is_err());
        assert_eq!(pos, before);

        let mut pos = setup(&[
            (E8, Role::King, Color::White),
            (H8, Role::Rook, Color::White),
            (A4, Role::King, Color::Black),
        ]);

        assert!(pos.play(Move(E8, G8), Color::White).is_err());
    }

    #[test]
    fn castling_lands_king_and_rook_on_their_castled_squares() {
        let mut pos = castling();
        pos.play(Move(E1, C1), Color::White).unwrap();
        assert_eq!(pos[C1].map(|p| p.role()), Some(Role::King));
        assert_eq!(pos[D1].map(|p| p.role()), Some(Role::Rook));
        assert_eq!(pos[B1], None);
    }

    #[test]
    fn castling_is_denied_if_transit_square_is_attacked() {
        let mut pos = castling();
        pos.place(F4, Piece::new(Role::Rook, Color::Black));

        let before = pos.clone();
        assert!(pos.play(Move(E1, G1), Color::White).is_err());
        assert_eq!(pos, before);
        assert!(pos.play(Move(E1, C1), Color::White).is_ok());
    }

    #[test]
    fn castling_is_denied_if_destination_is_attacked() {
        let mut pos = castling();
        pos.place(C4, Piece::new(Role::Rook, Color::Black));

        let before = pos.clone();
        assert!(pos.play(Move(E1, C1), Color::White).is_err());
        assert_eq!(pos, before);
        assert!(pos.play(Move(E1, G1), Color::White).is_ok());
    }

    #[test]
    fn castling_is_allowed_if_only_the_rook_crosses_an_attacked_square() {
        let mut pos = castling();
        pos.place(B4, Piece::new(Role::Rook, Color::Black));
        assert!(pos.play(Move(E1, C1), Color::White).is_ok());
    }

    #[test]
    fn pawn_reaching_last_rank_becomes_a_queen() {
        let mut pos = setup(&kings());
        pos.place(A7, Piece::new(Role::Pawn, Color::White));

        let mc = pos.play(Move(A7, A8), Color::White).unwrap();
        assert!(mc.is_promotion());
        assert_eq!(mc.role(), Role::Pawn);
        assert_eq!(pos[A8], Some(Piece::new(Role::Queen, Color::White).with_moved(true)));
        assert_eq!(pos.pending_promotion(), Some(A8));
    }

    #[test]
    fn promoted_pawn_can_become_a_knight() {
        let mut pos = setup(&kings());
        pos.place(A7, Piece::new(Role::Pawn, Color::White));
        pos.play(Move(A7, A8), Color::White).unwrap();

        assert!(pos.promote(A8, Role::Knight));
        assert_eq!(pos[A8].map(|p| (p.role(), p.color())), Some((Role::Knight, Color::White)));
    }

    #[test]
    fn black_pawn_promotes_on_the_first_rank() {
        let mut pos = setup(&kings());
        pos.place(H2, Piece::new(Role::Pawn, Color::Black));
        pos.play(Move(H2, H1), Color::Black).unwrap();

        assert!(pos.promote(H1, Role::Rook));
        assert_eq!(pos[H1].map(|p| (p.role(), p.color())), Some((Role::Rook, Color::Black)));
    }

    #[proptest]
    fn promoting_to_pawn_or_king_yields_a_queen(#[strategy(proptest::sample::select(vec![Role::Pawn, Role::King]))] r: Role) {
        let mut pos = setup(&kings());
        pos.place(B7, Piece::new(Role::Pawn, Color::White));
        pos.play(Move(B7, B8), Color::White)?;
        pos.promote(B8, Role::Knight);

        assert!(pos.promote(B8, r));
        assert_eq!(pos[B8].map(|p| p.role()), Some(Role::Queen));
    }

    #[test]
    fn promotion_can_no_longer_be_chosen_after_the_next_move() {
        let mut pos = setup(&kings());
        pos.place(A7, Piece::new(Role::Pawn, Color::White));
        pos.play(Move(A7, A8), Color::White).unwrap();
        pos.play(Move(E8, D7), Color::Black).unwrap();

        let before = pos.clone();
        assert!(!pos.promote(A8, Role::Knight));
        assert_eq!(pos, before);
    }

    #[proptest]
    fn promote_fails_without_pending_promotion(sq: Square, r: Role) {
        let mut pos = Position::default();
        assert!(!pos.promote(sq, r));
        assert_eq!(pos, Position::default());
    }

    #[test]
    fn capturing_promotion_reports_captured_piece() {
        let mut pos = setup(&kings());
        pos.place(B7, Piece::new(Role::Pawn, Color::White));
        pos.place(A8, Piece::new(Role::Rook, Color::Black));

        let mc = pos.play(Move(B7, A8), Color::White).unwrap();
        assert!(mc.is_promotion());
        assert_eq!(mc.capture(), Some((Role::Rook, A8)));
    }

    #[proptest]
    fn probe_never_changes_position(m: Move, c: Color) {
        let mut pos = castling();
        pos.place(E2, Piece::new(Role::Pawn, Color::White));
        pos.place(D4, Piece::new(Role::Pawn, Color::Black));
        pos.place(B7, Piece::new(Role::Pawn, Color::White));

        let before = pos.clone();
        assert_eq!(pos.probe(m, c), before.clone().play(m, c).is_ok());
        assert_eq!(pos, before);
    }
}
