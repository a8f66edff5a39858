//! # Domain Module
//!
//! Business logic for the address book, independent of the terminal.
//!
//! - **models**: validated fields (`Name`, `Phone`, `Birthday`) and `Record`
//! - **address_book**: the in-memory store and its queries
//! - **birthday_calendar**: next-week window used by the birthdays query
//! - **errors**: validation and command failure types
//!
//! ## Business Rules
//!
//! - Phone numbers are exactly ten decimal digits
//! - Birthdays are written as `DD.MM.YYYY` and must be real calendar dates
//! - Contact names are unique keys; adding an existing name appends phones
//! - Upcoming birthdays compare month and day only, within next Monday..=Sunday

pub mod address_book;
pub mod birthday_calendar;
pub mod errors;
pub mod models;

pub use address_book::*;
pub use birthday_calendar::*;
pub use errors::*;
