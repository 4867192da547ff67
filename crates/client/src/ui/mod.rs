// DOM manipulation outside the board: status line, invite links, alerts
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};
use protocol::{ElementIds, RoleTag};

use crate::{console_error, console_log};

/// Delay before an alert pops up, so the board repaints first.
const ALERT_DELAY_MS: i32 = 50;

pub struct UI {
    document: Document,
    ids: ElementIds,
}

impl UI {
    pub fn new(document: Document, ids: ElementIds) -> Self {
        Self { document, ids }
    }

    fn get_el(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    pub fn status_element(&self) -> Option<Element> {
        self.get_el(&self.ids.status)
    }

    pub fn set_status(&self, text: &str) {
        if let Some(el) = self.status_element() {
            el.set_text_content(Some(text));
        }
    }

    /// Point the invite links at the game. A missing key leaves its link alone.
    pub fn set_invite_links(&self, join: Option<&str>, watch: Option<&str>) {
        for (id, param, key) in [(&self.ids.join, "join", join), (&self.ids.watch, "watch", watch)] {
            let (Some(el), Some(key)) = (self.get_el(id), key) else {
                continue;
            };
            if let Err(e) = el.set_attribute("href", &invite_href(param, key)) {
                console_error!("Failed to set {} link: {:?}", param, e);
            }
        }
    }

    /// Show a modal message once the current callback has returned.
    pub fn show_message(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let message = message.to_string();
        let callback = Closure::once_into_js(move || {
            if let Some(window) = web_sys::window() {
                window.alert_with_message(&message).ok();
            }
        });
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            ALERT_DELAY_MS,
        ) {
            console_log!("Failed to schedule alert: {:?}", e);
        }
    }
}

/// Query string that opens the page as a joiner or a spectator.
pub fn invite_href(param: &str, key: &str) -> String {
    format!("?{}={}", param, String::from(js_sys::encode_uri_component(key)))
}

/// Status text after the server assigns a role.
pub fn role_status(role: RoleTag, start: &str) -> String {
    let who = match role {
        RoleTag::Player1 => "You are player 1. Send the join link to your opponent",
        RoleTag::Player2 => "You are player 2",
        RoleTag::Spectator => "You are watching",
    };
    format!("{}. {} moves first.", who, start)
}

pub fn win_status(player: &str) -> String {
    format!("Player {} wins!", player)
}
