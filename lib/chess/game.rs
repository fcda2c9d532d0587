use crate::chess::{Color, IllegalMove, Move, MoveContext, Outcome, Position, Role};
use derive_more::Constructor;
use tracing::instrument;

/// A game of chess between two players taking turns on the same [`Position`].
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Constructor)]
pub struct Game {
    position: Position,
    turn: Color,
}

impl Game {
    /// The current [`Position`].
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The side to move next.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Plays a [`Move`] for the side to move, passing the turn if it's legal.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn play(&mut self, m: Move) -> Result<MoveContext, IllegalMove> {
        let mc = self.position.play(m, self.turn)?;
        self.turn = !self.turn;
        Ok(mc)
    }

    /// Chooses the role of the pawn promoted by the last move.
    ///
    /// See [`Position::promote`].
    pub fn promote(&mut self, role: Role) -> bool {
        match self.position.pending_promotion() {
            Some(sq) => self.position.promote(sq, role),
            None => false,
        }
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.position.is_check(self.turn)
    }

    /// The legal moves of the side to move.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.position.moves(self.turn)
    }

    /// The [`Outcome`] of the game, if it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.position.outcome(self.turn)
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Game {
    type Parameters = ();
    type Strategy = proptest::strategy::Map<
        (std::ops::Range<usize>, proptest::sample::SelectorStrategy),
        fn((usize, proptest::sample::Selector)) -> Game,
    >;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        (0..64usize, any::<proptest::sample::Selector>()).prop_map(|(plies, selector)| {
            let mut game = Game::default();

            for _ in 0..plies {
                let moves = Vec::from_iter(game.moves());
                match selector.try_select(moves) {
                    None => break,
                    Some(m) => {
                        if game.play(m).is_err() {
                            break;
                        }
                    }
                }
            }

            game
        })
    }
}
