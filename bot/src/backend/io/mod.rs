//! # IO Module
//!
//! Adapter between the terminal and the domain. Translates input lines into
//! domain operations and domain results (or errors) into printable text.
//!
//! ## Key Responsibilities
//!
//! - **Parsing**: splitting a line into a command token and arguments
//! - **Dispatch**: routing each command to its handler
//! - **Error Translation**: turning every handler failure into a fixed message
//! - **Presentation**: optional terminal colors
//! - **Session Loop**: prompt, read, respond, stop on exit or Ctrl-C

pub mod repl;

pub use repl::*;
