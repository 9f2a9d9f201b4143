//! Session state and configuration, independent of the terminal UI.

pub mod chat;
pub mod config;
pub mod constants;
pub mod message;
