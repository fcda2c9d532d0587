use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;
use lib::store::Directory;

mod play;
mod saves;

#[derive(From, Subcommand)]
pub enum Applet {
    Play(play::Play),
    Saves(saves::Saves),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self, store: Directory) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => Ok(a.execute(store)?),
            Applet::Saves(a) => Ok(a.execute(store)?),
        }
    }
}
