// WASM client entry point for the Connect Four web client
// This crate renders the board, forwards clicks to the game server and
// applies the server's events to the page.

use wasm_bindgen::prelude::*;
use std::rc::Rc;
use std::cell::RefCell;
use web_sys::{window, CloseEvent, Element, Event, MessageEvent};
use protocol::ClientConfig;

// Module structure - each module handles a specific concern
mod board;    // Board model, boundary validation
mod error;    // Error types
mod game;     // Session controller, role derivation
mod input;    // Click to column mapping
mod network;  // WebSocket connection
mod render;   // Board DOM construction and mutation
mod ui;       // Status line, invite links, alerts
mod utils;    // Logging macros

pub use board::{Board, Cell};
pub use error::{BoardError, ClientError, ClientResult};
pub use game::{ConnectionState, GameView, Outcome, QueryParams, Role, SessionController, Transport};
pub use input::clicked_column;
pub use network::Connection;
pub use render::BoardRenderer;
pub use ui::UI;

type Session = SessionController<Connection, DomView>;

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// The page: board renderer plus the surrounding UI.
pub struct DomView {
    renderer: BoardRenderer,
    ui: ui::UI,
}

impl DomView {
    pub fn renderer(&self) -> &BoardRenderer {
        &self.renderer
    }
}

impl GameView for DomView {
    fn play_move(&mut self, player: &str, column: i64, row: i64, moves: u64) -> ClientResult<()> {
        self.renderer.play_move(player, column, row, moves)
    }

    fn set_status(&mut self, text: &str) {
        self.ui.set_status(text);
    }

    fn set_invite_links(&mut self, join: Option<&str>, watch: Option<&str>) {
        self.ui.set_invite_links(join, watch);
    }

    fn show_message(&mut self, message: &str) {
        self.ui.show_message(message);
    }
}

/// Build the board and connect to the game server.
///
/// `config` is a plain JS object (see `ClientConfig`); `undefined` or `null`
/// selects the defaults. Fails before rendering anything if the page's host
/// has no configured endpoint.
#[wasm_bindgen(js_name = startGame)]
pub fn start_game(config: JsValue) -> Result<(), JsValue> {
    init();

    let config: ClientConfig = if config.is_undefined() || config.is_null() {
        ClientConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };

    let window = window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;
    let location = window.location();

    let url = config
        .endpoint_for(&location.hostname()?)
        .map_err(ClientError::from)?
        .to_string();
    let role = Role::from_query(&QueryParams::from_search(&location.search()?)?);

    let board_el = document
        .get_element_by_id(&config.elements.board)
        .ok_or_else(|| ClientError::MissingElement(config.elements.board.clone()))?;
    let ui = ui::UI::new(document.clone(), config.elements.clone());
    let renderer = BoardRenderer::create(
        &document,
        &board_el,
        config.players.clone(),
        &config.stylesheet,
        ui.status_element(),
    )?;

    let connection = Connection::new(&url)?;
    let ws = connection.websocket().clone();
    let session = Rc::new(RefCell::new(SessionController::new(
        role,
        connection,
        DomView { renderer, ui },
    )));

    attach_websocket_handlers(session.clone(), &ws)?;
    attach_click_handler(session, &board_el)?;

    Ok(())
}

fn attach_websocket_handlers(session: Rc<RefCell<Session>>, ws: &web_sys::WebSocket) -> Result<(), JsValue> {
    // onopen - announce the role
    let open_session = session.clone();
    let onopen = Closure::wrap(Box::new(move |_event: JsValue| -> Result<(), JsValue> {
        console_log!("WebSocket connected");
        open_session.borrow_mut().on_open()?;
        Ok(())
    }) as Box<dyn FnMut(JsValue) -> Result<(), JsValue>>);
    ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
    onopen.forget();

    // onmessage - errors propagate to JS as uncaught exceptions
    let message_session = session.clone();
    let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| -> Result<(), JsValue> {
        let text = event
            .data()
            .as_string()
            .ok_or_else(|| ClientError::from(protocol::ProtocolError::NonTextFrame))?;
        if let Outcome::Ignored(reason) = message_session.borrow_mut().on_message(&text)? {
            console_log!("Ignored event ({}): {}", reason, text);
        }
        Ok(())
    }) as Box<dyn FnMut(MessageEvent) -> Result<(), JsValue>>);
    ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
    onmessage.forget();

    // onerror
    let onerror = Closure::wrap(Box::new(move |e: JsValue| {
        console_error!("WebSocket error: {:?}", e);
    }) as Box<dyn FnMut(JsValue)>);
    ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    // onclose - no reconnection
    let onclose = Closure::wrap(Box::new(move |event: CloseEvent| {
        console_log!("WebSocket closed: {}", event.code());
        session.borrow_mut().on_close(event.code());
    }) as Box<dyn FnMut(CloseEvent)>);
    ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
    onclose.forget();

    Ok(())
}

/// Forward clicks on the board to the session.
///
/// Spectators never get a listener. Returns whether one was attached.
pub fn attach_click_handler<T, V>(
    session: Rc<RefCell<SessionController<T, V>>>,
    board_el: &Element,
) -> Result<bool, JsValue>
where
    T: Transport + 'static,
    V: GameView + 'static,
{
    if session.borrow().role().is_spectator() {
        return Ok(false);
    }

    let closure = Closure::wrap(Box::new(move |event: Event| -> Result<(), JsValue> {
        let column = input::clicked_column(&event);
        if let Outcome::Ignored(reason) = session.borrow_mut().on_column_click(column)? {
            console_log!("Click ignored: {}", reason);
        }
        Ok(())
    }) as Box<dyn FnMut(Event) -> Result<(), JsValue>>);

    board_el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(true)
}
