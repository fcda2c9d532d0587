use crate::command::Command;
use crate::io::{Io, Pipe};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Game, Role};
use lib::store::{Directory, GameRecord, Store};
use std::error::Error;
use std::io::{stdin, stdout, ErrorKind};
use tracing::{debug, info, instrument, warn};

/// Plays a game of chess between two players sharing the terminal.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Resume the game saved under this name.
    #[clap(short, long)]
    load: Option<String>,
}

impl Play {
    #[instrument(level = "trace", skip(self, store), err)]
    pub fn execute(self, store: Directory) -> Result<(), Anyhow> {
        let io = Pipe::new(stdout(), stdin());
        let mut session = Session::new(io, store, Game::default());

        if let Some(name) = self.load {
            session.execute(Command::Load(name))?;
        } else {
            session.show()?;
        }

        session.run()
    }
}

/// An interactive game driven by commands read from [`Io`].
pub struct Session<I: Io, S: Store> {
    io: I,
    store: S,
    game: Game,
}

impl<I: Io, S: Store> Session<I, S>
where
    S::Error: Error + Send + Sync + 'static,
{
    pub fn new(io: I, store: S, game: Game) -> Self {
        Session { io, store, game }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads and executes commands until asked to quit or the input ends.
    #[instrument(level = "trace", skip(self), err)]
    pub fn run(&mut self) -> Result<(), Anyhow> {
        loop {
            self.send(format!("{} to move:", self.game.turn()))?;

            let line = match self.recv()? {
                None => break Ok(()),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => line,
            };

            match line.parse() {
                Ok(Command::Quit) => break Ok(()),
                Ok(cmd) => self.execute(cmd)?,
                Err(e) => self.send(e)?,
            }
        }
    }

    /// Executes a single command.
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(&mut self, cmd: Command) -> Result<(), Anyhow> {
        match cmd {
            Command::Play(m) => match self.game.play(m) {
                Err(e) => {
                    debug!(%m, "illegal move");
                    self.send(e)?;
                }

                Ok(mc) => {
                    debug!(%m, role = %mc.role(), "move played");
                    if mc.is_promotion() {
                        self.promote()?;
                    }

                    self.show()?;
                    self.report()?;
                }
            },

            Command::Save(name) => {
                let record = GameRecord::from(&self.game);
                match self.store.save(&name, &record) {
                    Ok(()) => self.send(format_args!("game saved as `{name}`"))?,
                    Err(e) => {
                        warn!(%name, error = %e, "failed to save game");
                        self.send(format_args!("failed to save `{name}`: {e}"))?;
                    }
                }
            }

            Command::Load(name) => match self.restore(&name) {
                Ok(game) => {
                    info!(%name, "game loaded");
                    self.game = game;
                    self.send(format_args!("game `{name}` loaded"))?;
                    self.show()?;
                    self.report()?;
                }

                Err(e) => {
                    warn!(%name, error = %e, "failed to load game");
                    self.send(format_args!("{e:#}"))?;
                }
            },

            Command::Saves => match self.store.list() {
                Ok(names) if names.is_empty() => self.send("no saved games")?,
                Ok(names) => {
                    for name in names {
                        self.send(name)?;
                    }
                }

                Err(e) => {
                    warn!(error = %e, "failed to list saved games");
                    self.send(format_args!("failed to list saved games: {e}"))?;
                }
            },

            Command::New => {
                self.game = Game::default();
                self.show()?;
            }

            Command::Help => self.send(Command::HELP)?,
            Command::Quit => {}
        }

        Ok(())
    }

    /// Renders the board.
    pub fn show(&mut self) -> Result<(), Anyhow> {
        let board = self.game.position().to_string();
        self.send(board)
    }

    fn restore(&self, name: &str) -> Result<Game, Anyhow> {
        let context = || format!("failed to load `{name}`");
        let record = self.store.load(name).with_context(context)?;
        Game::try_from(&record).with_context(context)
    }

    /// Asks for the role of the pawn just promoted, keeping the queen by default.
    fn promote(&mut self) -> Result<(), Anyhow> {
        self.send("promote to? [q/r/b/n]")?;

        let role = match self.recv()?.map(|s| s.parse::<Role>()) {
            Some(Ok(r @ (Role::Knight | Role::Bishop | Role::Rook))) => r,
            _ => Role::Queen,
        };

        debug!(%role, "pawn promoted");
        self.game.promote(role);
        Ok(())
    }

    /// Announces check or the end of the game for the side to move.
    fn report(&mut self) -> Result<(), Anyhow> {
        match self.game.outcome() {
            Some(o) => {
                info!(outcome = %o, "game over");
                self.send(o)?;
                self.send("type `new` to play again or `quit` to leave")
            }

            None if self.game.is_check() => {
                let turn = self.game.turn();
                self.send(format_args!("{turn} is in check"))
            }

            None => Ok(()),
        }
    }

    fn send(&mut self, msg: impl std::fmt::Display) -> Result<(), Anyhow> {
        self.io.send(&msg.to_string())?;
        self.io.flush()?;
        Ok(())
    }

    fn recv(&mut self) -> Result<Option<String>, Anyhow> {
        match self.io.recv() {
            Ok(line) => Ok(Some(line)),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mockall::mock! {
    Store {}
    impl Store for Store {
        type Error = std::io::Error;
        fn save(&mut self, name: &str, record: &GameRecord) -> Result<(), std::io::Error>;
        fn load(&self, name: &str) -> Result<GameRecord, std::io::Error>;
        fn list(&self) -> Result<Vec<String>, std::io::Error>;
    }
}
