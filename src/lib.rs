//! IntelliCourse is a terminal chat client for a course-answering service.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the chat session (transcript, input buffer, loading
//!   flag), configuration, and the fixed texts shown to the user.
//! - [`api`] defines the `{"query"}` / `{"answer"}` payloads and the HTTP
//!   backend that exchanges them.
//! - [`ui`] renders the terminal interface and runs the interactive event
//!   loop that drives user input and display updates.
//! - [`cli`] parses arguments and dispatches to the chat loop, the one-shot
//!   `ask` command, or the config editors.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
