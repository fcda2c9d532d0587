use crate::chess::{Color, Position};
use derive_more::Display;

/// One of the possible outcomes of a chess game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    #[display(fmt = "checkmate by the {_0} player")]
    Checkmate(Color),

    #[display(fmt = "stalemate")]
    Stalemate,
}

impl Outcome {
    /// Whether the outcome is a [draw] and neither side has won.
    ///
    /// [draw]: https://www.chessprogramming.org/Draw
    pub fn is_draw(&self) -> bool {
        !self.is_decisive()
    }

    /// Whether the outcome is a decisive and one of the sides has won.
    pub fn is_decisive(&self) -> bool {
        matches!(self, Outcome::Checkmate(_))
    }

    /// The winning side, if the outcome is [decisive](`Self::is_decisive`).
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Outcome::Checkmate(c) => Some(c),
            Outcome::Stalemate => None,
        }
    }
}

impl Position {
    /// The [`Outcome`] of the game if `side` is the one to move, if it has ended.
    pub fn outcome(&self, side: Color) -> Option<Outcome> {
        if self.has_legal_move(side) {
            None
        } else if self.is_check(side) {
            Some(Outcome::Checkmate(!side))
        } else {
            Some(Outcome::Stalemate)
        }
    }
}
