// Session controller: connection lifecycle and event dispatch
use protocol::{ClientEvent, InitAck, MoveEvent, ServerEvent, NORMAL_CLOSURE};

use crate::error::{ClientError, ClientResult};
use crate::ui;

mod role;

pub use role::{QueryParams, Role};

/// Status line after the connection drops without a result.
const CLOSED_STATUS: &str = "Connection closed.";

/// Outbound side of the connection.
pub trait Transport {
    fn send(&mut self, event: &ClientEvent) -> ClientResult<()>;
    fn close(&mut self, code: u16) -> ClientResult<()>;
}

/// Everything the session shows to the user.
pub trait GameView {
    /// Fill one cell; the only board mutation.
    fn play_move(&mut self, player: &str, column: i64, row: i64, moves: u64) -> ClientResult<()>;
    fn set_status(&mut self, text: &str);
    fn set_invite_links(&mut self, join: Option<&str>, watch: Option<&str>);
    fn show_message(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Active,
    Terminated,
}

impl ConnectionState {
    fn name(self) -> &'static str {
        match self {
            ConnectionState::Connecting => "connecting",
            ConnectionState::Active => "active",
            ConnectionState::Terminated => "terminated",
        }
    }
}

/// What a callback did, for the caller to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(&'static str),
}

pub struct SessionController<T, V> {
    role: Role,
    state: ConnectionState,
    transport: T,
    view: V,
}

impl<T: Transport, V: GameView> SessionController<T, V> {
    pub fn new(role: Role, transport: T, view: V) -> Self {
        Self {
            role,
            state: ConnectionState::Connecting,
            transport,
            view,
        }
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Socket opened: announce the role.
    pub fn on_open(&mut self) -> ClientResult<()> {
        if self.state != ConnectionState::Connecting {
            return Err(self.invalid_state("open"));
        }
        self.transport
            .send(&ClientEvent::Init(self.role.init_request()))?;
        self.state = ConnectionState::Active;
        Ok(())
    }

    /// Handle one inbound text frame.
    ///
    /// Decoding happens before any view update, so an unknown event leaves
    /// the page untouched.
    pub fn on_message(&mut self, text: &str) -> ClientResult<Outcome> {
        if self.state == ConnectionState::Terminated {
            return Ok(Outcome::Ignored("message after game end"));
        }

        match ServerEvent::decode(text)? {
            ServerEvent::Init(ack) => self.handle_init(ack),
            ServerEvent::Play(mv) => self.handle_play(mv)?,
            ServerEvent::Win { player, message } => self.handle_win(&player, message.as_deref())?,
            ServerEvent::Error { message } => self.view.show_message(&message),
        }
        Ok(Outcome::Applied)
    }

    /// A click on the board. `None` means the click missed every column.
    ///
    /// Legality (full column, wrong turn) is the server's call; it answers
    /// with an `error` event.
    pub fn on_column_click(&mut self, column: Option<usize>) -> ClientResult<Outcome> {
        if self.role.is_spectator() {
            return Ok(Outcome::Ignored("spectators cannot play"));
        }
        let Some(column) = column else {
            return Ok(Outcome::Ignored("click outside the columns"));
        };
        if self.state != ConnectionState::Active {
            return Ok(Outcome::Ignored("connection not active"));
        }
        self.transport.send(&ClientEvent::Play { column })?;
        Ok(Outcome::Applied)
    }

    /// Socket closed, by us after a win or by the other side.
    pub fn on_close(&mut self, _code: u16) -> Outcome {
        if self.state == ConnectionState::Terminated {
            return Outcome::Ignored("already terminated");
        }
        self.state = ConnectionState::Terminated;
        self.view.set_status(CLOSED_STATUS);
        Outcome::Applied
    }

    fn handle_init(&mut self, ack: InitAck) {
        self.view
            .set_invite_links(ack.join.as_deref(), ack.watch.as_deref());
        self.view.set_status(&ui::role_status(ack.player, &ack.start));
    }

    fn handle_play(&mut self, mv: MoveEvent) -> ClientResult<()> {
        self.view.play_move(&mv.player, mv.column, mv.row, mv.moves)
    }

    fn handle_win(&mut self, player: &str, message: Option<&str>) -> ClientResult<()> {
        let status = ui::win_status(player);
        self.view.show_message(message.unwrap_or(status.as_str()));
        self.view.set_status(&status);
        self.state = ConnectionState::Terminated;
        self.transport.close(NORMAL_CLOSURE)
    }

    fn invalid_state(&self, operation: &'static str) -> ClientError {
        ClientError::InvalidState {
            operation,
            state: self.state.name(),
        }
    }
}
