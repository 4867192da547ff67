//! Wire events for the Connect Four protocol.
//!
//! Every message is a JSON object whose `type` field selects the event.
//! This module contains both client->server and server->client events.

mod client;
mod server;

pub use client::*;
pub use server::*;
