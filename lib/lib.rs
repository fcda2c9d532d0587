/// Chess domain types.
pub mod chess;
/// Saving and restoring games.
pub mod store;
