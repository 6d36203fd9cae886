//! Domain types for date handling.
//!
//! - [`Date`]: Calendar date
//! - [`Tenor`]: Signed duration in calendar units
//! - [`DateInput`]: A date, a tenor, or text resolving to either

mod date;
mod date_input;
mod tenor;

pub use date::Date;
pub use date_input::{is_date_like, DateInput, DateLike};
pub use tenor::Tenor;
