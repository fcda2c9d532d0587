use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::store::{Directory, Store};
use tracing::instrument;

/// Lists saved games.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Saves {}

impl Saves {
    #[instrument(level = "trace", skip(self, store), err)]
    pub fn execute(self, store: Directory) -> Result<(), Anyhow> {
        let names = store
            .list()
            .with_context(|| format!("failed to list saved games in `{}`", store.root().display()))?;

        for name in names {
            println!("{name}");
        }

        Ok(())
    }
}
