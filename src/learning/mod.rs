pub mod action;
pub mod agent;
pub mod dice;
pub mod policy;
pub mod q_table;
pub mod reward;
pub mod state;
