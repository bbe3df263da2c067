use crate::io::Io;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::game::{Game, Rules};
use lib::quoridor::Action;
use std::io::{stdin, stdout, Read, Write};
use tracing::{info, instrument, warn};

/// Replays a game record read from the standard input.
///
/// Each line holds the action of the player on turn, either a pawn move such as `45`,
/// or a fence such as `v45` or `h45`. Rejected actions are reported and skipped.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Replay {
    /// The rules of the game.
    #[clap(short, long, default_value_t)]
    rules: Rules,
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::new(stdout(), stdin());
        self.replay(&mut io)
    }

    fn replay<W: Write, R: Read>(&self, io: &mut Io<W, R>) -> Result<(), Anyhow> {
        let mut game = Game::with_rules(self.rules);
        let mut line = 0;

        while let Some(record) = io.recv()? {
            line += 1;

            let record = record.trim();
            if record.is_empty() || record.starts_with('#') {
                continue;
            }

            let action: Action = record
                .parse()
                .with_context(|| format!("invalid action at line {line}"))?;

            let player = game.turn();
            match game.execute(player, action) {
                Ok(()) => info!(line, %player, %action),
                Err(e) => warn!(line, %player, %action, "{e}"),
            }
        }

        match game.winner() {
            Some(p) => io.send(format_args!("{p} wins"))?,
            None => io.send("no winner")?,
        }

        Ok(io.flush()?)
    }
}
