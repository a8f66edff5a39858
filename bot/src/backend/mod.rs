//! # Backend Module
//!
//! Contains all non-terminal logic of the assistant bot.
//!
//! ```text
//! Terminal (stdin / stdout)
//!     ↓
//! IO Layer (parser, dispatch, handlers, session)
//!     ↓
//! Domain Layer (validated fields, records, address book)
//! ```
//!
//! Contacts live only in memory; there is no storage layer.

pub mod domain;
pub mod io;

use log::info;

use crate::config::BotConfig;
use io::Session;

/// Build a fresh session with an empty address book.
pub fn initialize_backend(config: BotConfig) -> Session {
    info!("Setting up address book session (color: {})", config.use_color);
    Session::new(config)
}
