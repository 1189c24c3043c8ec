//! The client-side state of a chat session.
//!
//! A [`Controller`] owns the conversation log, the draft input, the file
//! selected for upload, the busy flag and the last error. The presentation
//! layer calls its command methods and renders [`ConversationState`].

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod controller;
pub mod conversation;
mod locale;
mod state;

pub use controller::{Controller, ControllerBuilder};
pub use locale::Locale;
pub use state::ConversationState;
