//! Client error types.

use protocol::{ConfigError, ProtocolError};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Illegal board mutation. Any of these means the client and the server
/// disagree about the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("player must be {expected1} or {expected2}, got {got}")]
    InvalidPlayer {
        got: String,
        expected1: String,
        expected2: String,
    },

    #[error("column must be between 0 and {max}, got {got}")]
    ColumnOutOfRange { got: i64, max: usize },

    #[error("row must be between 0 and {max}, got {got}")]
    RowOutOfRange { got: i64, max: usize },

    #[error("cell at column {column}, row {row} must be empty")]
    CellOccupied { column: usize, row: usize },
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{operation} is not allowed while {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    #[error("Cannot find element \"{0}\"")]
    MissingElement(String),

    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|error| String::from(error.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        ClientError::Js(message)
    }
}

impl From<ClientError> for JsValue {
    fn from(error: ClientError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
