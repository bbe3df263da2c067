/// Quoridor domain types and rules.
pub mod quoridor;
/// Turn sequencing on top of the board.
pub mod game;
