pub mod config;
pub mod game;
pub mod learning;
pub mod player;
pub mod simulation;

pub type Int = i32;
pub type UInt = u32;
/// Money is whole units throughout; the game never deals in fractions.
pub type Money = i32;

/// Board position a ship marker must reach for its investors to be paid.
pub const GOAL_POSITION: Int = 11;
/// Number of bidding rounds in one game. Ships advance after every round
/// except the last, so `GOAL_POSITION` is judged right after round 3.
pub const TOTAL_ROUNDS: UInt = 3;
