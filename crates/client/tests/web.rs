//! Board rendering and page glue against a real DOM. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use client::{
    attach_click_handler, clicked_column, BoardError, BoardRenderer, Cell, ClientError,
    ClientResult, GameView, Role, SessionController, Transport, UI,
};
use protocol::{ClientEvent, ElementIds, InitRequest, Player, PlayerNames};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn setup() -> (Element, Element, BoardRenderer) {
    let document = document();
    let container = document.create_element("div").unwrap();
    let status = document.create_element("p").unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    let renderer = BoardRenderer::create(
        &document,
        &container,
        PlayerNames::default(),
        "connect4.css",
        Some(status.clone()),
    )
    .unwrap();
    (container, status, renderer)
}

fn cell(container: &Element, column: usize, row: usize) -> Element {
    container
        .query_selector(&format!(
            ".cell[data-column=\"{}\"][data-row=\"{}\"]",
            column, row
        ))
        .unwrap()
        .unwrap()
}

#[wasm_bindgen_test]
fn create_board_builds_seven_columns_of_six() {
    let (container, _, _) = setup();
    assert_eq!(container.child_element_count(), 7);

    let first = container.first_element_child().unwrap();
    assert_eq!(first.class_name(), "column");
    assert_eq!(first.get_attribute("data-column").as_deref(), Some("0"));
    assert_eq!(first.child_element_count(), 6);

    let last = container.last_element_child().unwrap();
    assert_eq!(last.get_attribute("data-column").as_deref(), Some("6"));

    let c = cell(&container, 6, 5);
    assert_eq!(c.class_name(), "cell empty");
}

#[wasm_bindgen_test]
fn create_board_links_stylesheet() {
    let (_, _, _) = setup();
    let link = document()
        .head()
        .unwrap()
        .query_selector("link[rel=\"stylesheet\"][href=\"connect4.css\"]")
        .unwrap();
    assert!(link.is_some());
}

#[wasm_bindgen_test]
fn play_move_fills_cell_and_updates_status() {
    let (container, status, mut renderer) = setup();
    renderer.play_move("yellow", 2, 0, 1).unwrap();

    let c = cell(&container, 2, 0);
    assert!(c.class_list().contains("yellow"));
    assert!(!c.class_list().contains("empty"));
    assert_eq!(renderer.board().get(2, 0), Some(Cell::Occupied(Player::Two)));
    assert_eq!(
        status.text_content().as_deref(),
        Some("Move 1: yellow played column 3")
    );
}

#[wasm_bindgen_test]
fn play_move_twice_on_same_cell_fails() {
    let (container, _, mut renderer) = setup();
    renderer.play_move("red", 0, 0, 1).unwrap();
    let err = renderer.play_move("yellow", 0, 0, 2).unwrap_err();
    assert!(matches!(
        err,
        ClientError::Board(BoardError::CellOccupied { column: 0, row: 0 })
    ));
    assert!(cell(&container, 0, 0).class_list().contains("red"));
}

#[wasm_bindgen_test]
fn play_move_rejects_bad_input_without_touching_dom() {
    let (container, status, mut renderer) = setup();

    assert!(matches!(
        renderer.play_move("pink", 0, 0, 1),
        Err(ClientError::Board(BoardError::InvalidPlayer { .. }))
    ));
    assert!(matches!(
        renderer.play_move("red", 7, 0, 1),
        Err(ClientError::Board(BoardError::ColumnOutOfRange { .. }))
    ));
    assert!(matches!(
        renderer.play_move("red", 0, -1, 1),
        Err(ClientError::Board(BoardError::RowOutOfRange { .. }))
    ));

    assert!(container.query_selector(".cell:not(.empty)").unwrap().is_none());
    assert_eq!(status.text_content().as_deref(), Some(""));
}

#[wasm_bindgen_test]
fn play_move_refused_by_dom_leaves_model_empty() {
    let document = document();
    let container = document.create_element("div").unwrap();
    let players = PlayerNames {
        player1: "dark red".to_string(),
        player2: "yellow".to_string(),
    };
    let mut renderer =
        BoardRenderer::create(&document, &container, players, "connect4.css", None).unwrap();

    // A class token may not contain whitespace.
    assert!(renderer.play_move("dark red", 1, 0, 1).is_err());
    assert_eq!(renderer.board().get(1, 0), Some(Cell::Empty));
    assert!(cell(&container, 1, 0).class_list().contains("empty"));

    renderer.play_move("yellow", 1, 0, 1).unwrap();
    assert_eq!(renderer.board().get(1, 0), Some(Cell::Occupied(Player::Two)));
}

fn click(el: &Element) {
    el.unchecked_ref::<HtmlElement>().click();
}

/// Column reported by `clicked_column` for a click on `target`, as seen by a
/// listener on `board`.
fn column_of_click(board: &Element, target: &Element) -> Option<usize> {
    let seen = Rc::new(RefCell::new(None));
    let seen_in = seen.clone();
    let listener = Closure::wrap(Box::new(move |event: Event| {
        *seen_in.borrow_mut() = Some(clicked_column(&event));
    }) as Box<dyn FnMut(Event)>);

    board
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .unwrap();
    click(target);
    board
        .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .unwrap();

    let column = seen.borrow_mut().take();
    column.expect("listener did not run")
}

#[wasm_bindgen_test]
fn click_inside_column_maps_to_that_column() {
    let (container, _, _) = setup();
    assert_eq!(column_of_click(&container, &cell(&container, 5, 1)), Some(5));

    let column_el = container.last_element_child().unwrap();
    assert_eq!(column_of_click(&container, &column_el), Some(6));

    let marker = document().create_element("span").unwrap();
    cell(&container, 2, 3).append_child(&marker).unwrap();
    assert_eq!(column_of_click(&container, &marker), Some(2));
}

#[wasm_bindgen_test]
fn click_outside_columns_maps_to_none() {
    let (container, _, _) = setup();
    let stray = document().create_element("span").unwrap();
    container.append_child(&stray).unwrap();

    assert_eq!(column_of_click(&container, &stray), None);
    assert_eq!(column_of_click(&container, &container), None);
}

fn link(id: &str, href: &str) -> Element {
    let document = document();
    let el = document.create_element("a").unwrap();
    el.set_id(id);
    el.set_attribute("href", href).unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn invite_links_point_at_the_game() {
    let join = link("invite-join", "");
    let watch = link("invite-watch", "keep");
    let ui = UI::new(
        document(),
        ElementIds {
            join: "invite-join".to_string(),
            watch: "invite-watch".to_string(),
            ..ElementIds::default()
        },
    );

    ui.set_invite_links(Some("a b"), None);
    assert_eq!(join.get_attribute("href").as_deref(), Some("?join=a%20b"));
    assert_eq!(watch.get_attribute("href").as_deref(), Some("keep"));

    ui.set_invite_links(None, Some("w/1"));
    assert_eq!(join.get_attribute("href").as_deref(), Some("?join=a%20b"));
    assert_eq!(watch.get_attribute("href").as_deref(), Some("?watch=w%2F1"));
}

#[derive(Default)]
struct SentEvents(Vec<ClientEvent>);

impl Transport for SentEvents {
    fn send(&mut self, event: &ClientEvent) -> ClientResult<()> {
        self.0.push(event.clone());
        Ok(())
    }

    fn close(&mut self, _code: u16) -> ClientResult<()> {
        Ok(())
    }
}

struct BlankView;

impl GameView for BlankView {
    fn play_move(&mut self, _player: &str, _column: i64, _row: i64, _moves: u64) -> ClientResult<()> {
        Ok(())
    }
    fn set_status(&mut self, _text: &str) {}
    fn set_invite_links(&mut self, _join: Option<&str>, _watch: Option<&str>) {}
    fn show_message(&mut self, _message: &str) {}
}

fn open_session(role: Role) -> Rc<RefCell<SessionController<SentEvents, BlankView>>> {
    let session = Rc::new(RefCell::new(SessionController::new(
        role,
        SentEvents::default(),
        BlankView,
    )));
    session.borrow_mut().on_open().unwrap();
    session
}

#[wasm_bindgen_test]
fn player_click_on_cell_sends_play() {
    let (container, _, _) = setup();
    let session = open_session(Role::Host { join_id: None });

    assert!(attach_click_handler(session.clone(), &container).unwrap());
    click(&cell(&container, 3, 4));

    assert_eq!(
        session.borrow().transport().0,
        vec![
            ClientEvent::Init(InitRequest::Host { join_id: None }),
            ClientEvent::Play { column: 3 },
        ]
    );
}

#[wasm_bindgen_test]
fn spectator_gets_no_click_listener() {
    let (container, _, _) = setup();
    let session = open_session(Role::Spectator {
        watch: "w".to_string(),
    });

    assert!(!attach_click_handler(session.clone(), &container).unwrap());
    click(&cell(&container, 3, 4));

    assert_eq!(
        session.borrow().transport().0,
        vec![ClientEvent::Init(InitRequest::Watch {
            watch: "w".to_string()
        })]
    );
}
