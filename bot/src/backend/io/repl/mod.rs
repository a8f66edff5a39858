//! Terminal front end: parse a line, run the matching handler, print the
//! reply.

pub mod dispatch;
pub mod handlers;
pub mod palette;
pub mod parser;
pub mod session;

pub use dispatch::{dispatch, translate_error, Outcome};
pub use handlers::Reply;
pub use palette::{Palette, Tone};
pub use parser::{parse_input, Command, ParsedInput};
pub use session::Session;
