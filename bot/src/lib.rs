//! Assistant bot: an interactive in-memory address book.

pub mod backend;
pub mod config;

pub use backend::initialize_backend;
pub use config::BotConfig;
