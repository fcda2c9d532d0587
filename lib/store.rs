mod directory;
mod record;

pub use directory::*;
pub use record::*;

/// Trait for types that keep saved games by name.
pub trait Store {
    /// The reason why saving, loading or listing games failed.
    type Error;

    /// Saves a game under the given name, replacing any game saved under it before.
    fn save(&mut self, name: &str, record: &GameRecord) -> Result<(), Self::Error>;

    /// Loads the game saved under the given name.
    fn load(&self, name: &str) -> Result<GameRecord, Self::Error>;

    /// The names of all saved games, in order.
    fn list(&self) -> Result<Vec<String>, Self::Error>;
}
