use crate::chess::{Color, Game, Piece, Position, Role, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A [`Piece`] standing on a [`Square`], as it is saved.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PieceRecord {
    pub square: Square,
    #[serde(rename = "type")]
    pub role: Role,
    pub color: Color,
    #[serde(default)]
    pub moved: bool,
}

/// The saved form of a game.
///
/// Records written by older versions may lack the moved flags and the en passant square,
/// in which case pieces are restored as unmoved and no en passant capture is possible.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename = "game")]
pub struct GameRecord {
    pub turn: Color,
    pub pieces: Vec<PieceRecord>,
    #[serde(default)]
    pub en_passant: Option<Square>,
}

/// The reason why a [`GameRecord`] could not be restored.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ImportError {
    #[display(fmt = "square `{_0}` holds more than one piece")]
    DuplicateSquare(#[error(not(source))] Square),

    #[display(fmt = "the {_0} player has more than one king")]
    TooManyKings(#[error(not(source))] Color),
}

impl GameRecord {
    /// Exports a [`Position`] and the side to move.
    ///
    /// A pending promotion is not saved, the promoted piece is saved as it stands.
    pub fn new(pos: &Position, turn: Color) -> Self {
        let pieces = pos
            .iter()
            .map(|(square, p)| PieceRecord {
                square,
                role: p.role(),
                color: p.color(),
                moved: p.has_moved(),
            })
            .collect();

        GameRecord {
            turn,
            pieces,
            en_passant: pos.en_passant_square(),
        }
    }

    /// Imports the [`Position`] and the side to move.
    pub fn restore(&self) -> Result<(Position, Color), ImportError> {
        let mut pos = Position::empty();

        for r in &self.pieces {
            let piece = Piece::new(r.role, r.color).with_moved(r.moved);

            if r.role == Role::King && pos.king(r.color).is_some() {
                return Err(ImportError::TooManyKings(r.color));
            } else if pos.place(r.square, piece).is_some() {
                return Err(ImportError::DuplicateSquare(r.square));
            }
        }

        pos.set_en_passant_square(self.en_passant);
        Ok((pos, self.turn))
    }
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        GameRecord::new(game.position(), game.turn())
    }
}

impl TryFrom<&GameRecord> for Game {
    type Error = ImportError;

    fn try_from(record: &GameRecord) -> Result<Self, Self::Error> {
        let (pos, turn) = record.restore()?;
        Ok(Game::new(pos, turn))
    }
}
