pub mod board;
pub mod serialization;
pub mod types;

pub use board::{Board, BOARD_SIZE};
pub use types::{Difficulty, PlayerId, Position};
