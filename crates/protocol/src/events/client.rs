//! Client -> Server events.

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Event sent by the browser to the game server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientEvent {
    /// Establishes the role of the connection. Sent once, on open.
    Init(InitRequest),
    /// Drop a piece into a column. The server picks the row.
    Play { column: usize },
}

/// Body of the `init` event. The set of fields present selects the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitRequest {
    /// Second player joining an existing game.
    Join {
        join: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        watch: Option<String>,
    },
    /// Spectator of an existing game.
    Watch { watch: String },
    /// First player starting a new game, optionally under a chosen join key.
    Host {
        #[serde(rename = "joinID")]
        join_id: Option<String>,
    },
}

impl ClientEvent {
    /// Serialize to the JSON text sent over the socket.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}
