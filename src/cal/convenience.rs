//! Adds convenience functions to some structs.
//!
//! # Example
//! ```
//! # use civiltime::{Date, DatePiece};
//! use civiltime::convenience::Today;
//! let today: Date = Date::today();
//! assert!(today.year() >= 2020);
//! ```
use crate::cal::datetime::Date;
use crate::instant::Instant;

/// Adds `Date::today() -> Date`
pub trait Today {
    fn today() -> Date;
}

impl Today for Date {
    fn today() -> Date {
        Instant::now().date()
    }
}
