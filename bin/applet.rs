use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod replay;

#[derive(From, Subcommand)]
pub enum Applet {
    Replay(replay::Replay),
}

impl Default for Applet {
    fn default() -> Self {
        replay::Replay::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Replay(a) => a.execute(),
        }
    }
}
