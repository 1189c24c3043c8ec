//! A terminal chat client for a remote chatbot service.
//!
//! The crate includes a CLI tool for chatting in the terminal. It can also
//! be used as a library: [`Session`] wires a
//! [`Controller`](chatpad_core::Controller) to the HTTP backend and
//! understands the commands typed by the user.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod command;
mod input;
mod picker;
mod session;

pub use command::{Command, CommandError};
pub use input::read_line;
pub use picker::{PickError, accepts_file, pick_file};
pub use session::{Flow, Session, SessionBuilder};

/// Re-exports of [`chatpad_core`] crate.
pub mod core {
    pub use chatpad_core::*;
}
