pub mod board;
pub mod catalog;
pub mod supply;
pub mod tile;
pub mod types;
