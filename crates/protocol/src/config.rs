//! Client configuration.
//!
//! The browser client receives this as a JS object; the asset host reads it
//! from the `[client]` table of `config.toml` and injects it into the page.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Player};

/// Root client configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Stylesheet linked into the page when the board is created.
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
    #[serde(default)]
    pub players: PlayerNames,
    #[serde(default)]
    pub elements: ElementIds,
    /// Hostname to WebSocket endpoint table.
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<Endpoint>,
}

impl ClientConfig {
    /// Resolve the game server URL for the page's hostname.
    pub fn endpoint_for(&self, host: &str) -> Result<&str, ConfigError> {
        self.endpoints
            .iter()
            .find(|endpoint| endpoint.host == host)
            .map(|endpoint| endpoint.url.as_str())
            .ok_or_else(|| ConfigError::UnsupportedHost(host.to_string()))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            stylesheet: default_stylesheet(),
            players: PlayerNames::default(),
            elements: ElementIds::default(),
            endpoints: default_endpoints(),
        }
    }
}

/// Wire identifiers of the two players. Also used as the CSS class of a
/// filled cell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerNames {
    #[serde(default = "default_player1")]
    pub player1: String,
    #[serde(default = "default_player2")]
    pub player2: String,
}

impl PlayerNames {
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.player1,
            Player::Two => &self.player2,
        }
    }

    /// Map a wire identifier back to its seat.
    pub fn resolve(&self, name: &str) -> Option<Player> {
        Player::ALL.into_iter().find(|&player| self.name(player) == name)
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            player1: default_player1(),
            player2: default_player2(),
        }
    }
}

/// Ids of the page elements the client binds to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ElementIds {
    #[serde(default = "default_board_id")]
    pub board: String,
    #[serde(default = "default_status_id")]
    pub status: String,
    #[serde(default = "default_join_id")]
    pub join: String,
    #[serde(default = "default_watch_id")]
    pub watch: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            board: default_board_id(),
            status: default_status_id(),
            join: default_join_id(),
            watch: default_watch_id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Endpoint {
    pub host: String,
    pub url: String,
}

impl Endpoint {
    fn new(host: &str, url: &str) -> Self {
        Self {
            host: host.to_string(),
            url: url.to_string(),
        }
    }
}

fn default_player1() -> String {
    "red".to_string()
}
fn default_player2() -> String {
    "yellow".to_string()
}
fn default_board_id() -> String {
    "board".to_string()
}
fn default_status_id() -> String {
    "status".to_string()
}
fn default_join_id() -> String {
    "join".to_string()
}
fn default_watch_id() -> String {
    "watch".to_string()
}
fn default_stylesheet() -> String {
    "connect4.css".to_string()
}
fn default_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::new("localhost", "ws://localhost:8001/"),
        Endpoint::new("127.0.0.1", "ws://127.0.0.1:8001/"),
    ]
}
