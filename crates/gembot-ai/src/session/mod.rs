//! Conversation session management.
//!
//! A `Session` holds the conversation history (messages) and commits a
//! turn only once the remote side has answered it.

mod chat;
mod manager;

pub use manager::Session;
