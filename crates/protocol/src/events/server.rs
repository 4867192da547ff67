//! Server -> Client event decoding.

use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::ProtocolError;

/// Parsed server event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// Role assignment and invite keys.
    Init(InitAck),
    /// A move was played (or replayed).
    Play(MoveEvent),
    /// Game over.
    Win {
        player: String,
        message: Option<String>,
    },
    /// The server rejected the last request, e.g. a full column.
    Error { message: String },
}

/// Body of the `init` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitAck {
    /// Join key. Not sent to spectators.
    pub join: Option<String>,
    pub watch: Option<String>,
    /// Identifier of the player who moves first.
    pub start: String,
    pub player: RoleTag,
}

/// Body of the `play` event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveEvent {
    pub player: String,
    /// Signed on the wire; range checks happen on the board.
    pub column: i64,
    pub row: i64,
    /// Number of moves played so far, including this one.
    pub moves: u64,
}

/// Role the server assigned to this connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTag {
    Player1,
    Player2,
    Spectator,
}

impl FromStr for RoleTag {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player1" => Ok(RoleTag::Player1),
            "player2" => Ok(RoleTag::Player2),
            "spectator" => Ok(RoleTag::Spectator),
            other => Err(ProtocolError::UnsupportedRole(other.to_string())),
        }
    }
}

#[derive(Deserialize)]
struct RawInit {
    #[serde(default)]
    join: Option<String>,
    #[serde(default)]
    watch: Option<String>,
    start: String,
    player: String,
}

#[derive(Deserialize)]
struct RawWin {
    player: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct RawError {
    message: String,
}

impl ServerEvent {
    /// Decode a text frame.
    ///
    /// The `type` tag is checked before any field so that an unknown event
    /// is reported as such rather than as a missing field.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(text)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::MissingType)?
            .to_string();

        match kind.as_str() {
            "init" => {
                let raw: RawInit = serde_json::from_value(value)?;
                Ok(ServerEvent::Init(InitAck {
                    join: raw.join,
                    watch: raw.watch,
                    start: raw.start,
                    player: raw.player.parse()?,
                }))
            }
            "play" => Ok(ServerEvent::Play(serde_json::from_value(value)?)),
            "win" => {
                let raw: RawWin = serde_json::from_value(value)?;
                Ok(ServerEvent::Win {
                    player: raw.player,
                    message: raw.message,
                })
            }
            "error" => {
                let raw: RawError = serde_json::from_value(value)?;
                Ok(ServerEvent::Error {
                    message: raw.message,
                })
            }
            _ => Err(ProtocolError::UnknownEventType(kind)),
        }
    }
}
