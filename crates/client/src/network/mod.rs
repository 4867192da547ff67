// WebSocket connection and JSON event transport
use web_sys::WebSocket;
use protocol::ClientEvent;

use crate::console_log;
use crate::error::{ClientError, ClientResult};
use crate::game::Transport;

pub struct Connection {
    ws: WebSocket,
}

impl Connection {
    pub fn new(url: &str) -> ClientResult<Self> {
        let is_https = web_sys::window()
            .and_then(|w| w.location().protocol().ok())
            .map(|p| p == "https:")
            .unwrap_or(false);
        let ws_url = socket_url(url, is_https);

        console_log!("Connecting to: {}", ws_url);
        let ws = WebSocket::new(&ws_url)?;

        Ok(Self { ws })
    }

    pub fn websocket(&self) -> &WebSocket {
        &self.ws
    }
}

impl Transport for Connection {
    fn send(&mut self, event: &ClientEvent) -> ClientResult<()> {
        if self.ws.ready_state() != WebSocket::OPEN {
            return Err(ClientError::Js("WebSocket not ready".to_string()));
        }
        let text = event.encode()?;
        self.ws.send_with_str(&text)?;
        Ok(())
    }

    fn close(&mut self, code: u16) -> ClientResult<()> {
        self.ws.close_with_code(code)?;
        Ok(())
    }
}

/// Full WebSocket URL for a configured endpoint. A bare `host:port/path`
/// gets the scheme matching the page.
pub fn socket_url(url: &str, is_https: bool) -> String {
    if url.starts_with("ws://") || url.starts_with("wss://") {
        url.to_string()
    } else {
        format!("ws{}://{}", if is_https { "s" } else { "" }, url)
    }
}
