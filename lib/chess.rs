mod attacks;
mod color;
mod file;
mod game;
mod r#move;
mod outcome;
mod piece;
mod play;
mod position;
mod rank;
mod role;
mod square;
mod undo;

pub use color::*;
pub use file::*;
pub use game::*;
pub use outcome::*;
pub use piece::*;
pub use play::*;
pub use position::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use square::*;

pub(crate) use undo::Undo;
