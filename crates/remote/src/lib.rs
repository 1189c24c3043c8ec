//! The protocol between a chat front end and the remote chatbot service.
//!
//! This crate only describes what a remote backend must be able to do:
//! answer a message and accept a file. Types in this crate don't perform
//! any I/O by themselves except for loading an [`Upload`] from disk, the
//! transport lives in the implementors' crates.

#![deny(missing_docs)]

mod backend;
mod error;
mod upload;

pub use backend::*;
pub use error::*;
pub use upload::*;
