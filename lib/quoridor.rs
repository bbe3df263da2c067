mod action;
mod board;
mod cell;
mod coord;
mod direction;
mod fence;
mod player;

pub use action::*;
pub use board::*;
pub use cell::*;
pub use coord::*;
pub use direction::*;
pub use fence::*;
pub use player::*;
