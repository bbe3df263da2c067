use crate::quoridor::{Action, Board, Coord, Fence, IllegalFence, IllegalMove};
use crate::quoridor::{Orientation, OutOfBounds, Player};
use derive_more::{Display, Error, From};
use test_strategy::Arbitrary;
use tracing::instrument;

mod rules;

pub use rules::*;

/// The reason why a player [`Action`] was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Error, From)]
pub enum InvalidAction {
    #[display(fmt = "the game has already been won by {_0}")]
    #[from(ignore)]
    GameHasEnded(#[error(not(source))] Player),

    #[display(fmt = "it is not the turn of {_0}")]
    #[from(ignore)]
    TurnOfTheOpponent(#[error(not(source))] Player),

    #[display(fmt = "{_0} has no fences left")]
    #[from(ignore)]
    OutOfFences(#[error(not(source))] Player),

    #[display(fmt = "{_0}")]
    OutOfBounds(OutOfBounds),

    #[display(fmt = "{_0}")]
    IllegalMove(IllegalMove),

    #[display(fmt = "{_0}")]
    IllegalFence(IllegalFence),
}

/// A game of Quoridor between two players.
///
/// Keeps track of whose turn it is, how many fences each player has left and who won,
/// while [`Board`] enforces the rules of movement and fence placement.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    turn: Player,
    fences: [u8; 2],
    winner: Option<Player>,
}

impl Default for Game {
    fn default() -> Self {
        Self::with_rules(Rules::default())
    }
}

impl Game {
    /// Starts a new game with the given [`Rules`].
    pub fn with_rules(rules: Rules) -> Self {
        Game {
            board: Board::default(),
            turn: Player::One,
            fences: [rules.fences; 2],
            winner: None,
        }
    }

    /// The current state of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who is to act next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// How many fences a [`Player`] has left.
    pub fn fences(&self, player: Player) -> u8 {
        self.fences[player as usize]
    }

    /// The winner, if the game has ended.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Whether a [`Player`] has won the game.
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == Some(player)
    }

    /// Executes a player [`Action`] if valid, otherwise returns the reason why not.
    ///
    /// A rejected action leaves the game untouched, so the same player is still to act.
    #[instrument(level = "debug", skip(self), err)]
    pub fn execute(&mut self, player: Player, action: Action) -> Result<(), InvalidAction> {
        if let Some(winner) = self.winner {
            return Err(InvalidAction::GameHasEnded(winner));
        }

        if player != self.turn {
            return Err(InvalidAction::TurnOfTheOpponent(player));
        }

        match action {
            Action::Move(whither) => {
                self.board.move_pawn(player, whither)?;
                if self.board.is_in_goal_row(player) {
                    self.winner = Some(player);
                }
            }

            Action::Fence(fence) => {
                let fences = &mut self.fences[player as usize];
                if *fences == 0 {
                    return Err(InvalidAction::OutOfFences(player));
                }

                self.board.place_fence(fence)?;
                *fences -= 1;
            }
        }

        self.turn = !self.turn;

        Ok(())
    }

    /// Moves the pawn of a [`Player`] to the cell at `(column, row)`.
    pub fn move_pawn(&mut self, player: Player, whither: (i8, i8)) -> Result<(), InvalidAction> {
        let whither = Coord::try_from(whither)?;
        self.execute(player, Action::Move(whither))
    }

    /// Places a fence against the cell at `(column, row)`.
    pub fn place_fence(
        &mut self,
        player: Player,
        orientation: Orientation,
        whither: (i8, i8),
    ) -> Result<(), InvalidAction> {
        let whither = Coord::try_from(whither)?;
        self.execute(player, Action::Fence(Fence(orientation, whither)))
    }
}
