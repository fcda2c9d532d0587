use crate::store::{GameRecord, Store};
use derive_more::{Display, Error, From};
use ron::ser::PrettyConfig;
use std::path::{Path, PathBuf};
use std::{fs, io};
use tracing::instrument;

/// The reason why [`Directory`] failed to save, load or list games.
#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    #[display(fmt = "invalid save name `{_0}`")]
    #[from(ignore)]
    InvalidName(#[error(not(source))] String),

    #[display(fmt = "{_0}")]
    Io(io::Error),

    #[display(fmt = "failed to write save file: {_0}")]
    Serialize(ron::Error),

    #[display(fmt = "failed to read save file: {_0}")]
    Deserialize(ron::de::SpannedError),
}

/// A [`Store`] that keeps each game in its own file under a root directory.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Directory {
    root: PathBuf,
}

impl Directory {
    /// The extension of save files.
    pub const EXTENSION: &'static str = "ron";

    /// Constructs a [`Directory`] rooted at the given path.
    ///
    /// The directory is only created once a game is saved.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Directory { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &str) -> Result<PathBuf, StoreError> {
        let valid = !name.trim().is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\', std::path::MAIN_SEPARATOR]);

        if valid {
            Ok(self.root.join(format!("{name}.{}", Self::EXTENSION)))
        } else {
            Err(StoreError::InvalidName(name.into()))
        }
    }
}

impl Store for Directory {
    type Error = StoreError;

    #[instrument(level = "trace", skip(self, record), err)]
    fn save(&mut self, name: &str, record: &GameRecord) -> Result<(), Self::Error> {
        let path = self.path(name)?;
        let s = ron::ser::to_string_pretty(record, PrettyConfig::default())?;
        fs::create_dir_all(&self.root)?;
        fs::write(path, s)?;
        Ok(())
    }

    #[instrument(level = "trace", skip(self), err)]
    fn load(&self, name: &str) -> Result<GameRecord, Self::Error> {
        let s = fs::read_to_string(self.path(name)?)?;
        Ok(ron::de::from_str(&s)?)
    }

    #[instrument(level = "trace", skip(self), err)]
    fn list(&self) -> Result<Vec<String>, Self::Error> {
        let entries = match fs::read_dir(&self.root) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            entries => entries?,
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|x| x == Self::EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}
