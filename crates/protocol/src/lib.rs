//! Shared protocol crate for the Connect Four web client.
//!
//! This crate contains:
//! - Wire events exchanged with the game server (JSON over WebSocket)
//! - Board dimensions and player slots
//! - Client configuration shared by the browser client and the asset host

mod config;
mod error;
pub mod events;

pub use config::{ClientConfig, ElementIds, Endpoint, PlayerNames};
pub use error::{ConfigError, ProtocolError};
pub use events::{ClientEvent, InitAck, InitRequest, MoveEvent, RoleTag, ServerEvent};

/// Number of columns on the board.
pub const COLUMNS: usize = 7;

/// Number of rows in each column. Row 0 is the bottom row.
pub const ROWS: usize = 6;

/// WebSocket close code sent when the game is over.
pub const NORMAL_CLOSURE: u16 = 1000;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];
}
