#![crate_name = "civiltime"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for proleptic Gregorian calendar arithmetic over a single
//! 64-bit seconds counter, with compact `%`-pattern formatting and
//! forgiving fixed-field parsers.
//!
//! # Examples
//!
//! ```
//! use civiltime::{Instant, DatePiece, parse_compact, parse_fixed_date};
//!
//! let then = Instant::ymd_hms(2024, 3, 5, 9, 5, 3);
//! assert_eq!(then.to_string(), "2024-03-05 09:05:03");
//! assert_eq!(then.format("%#d/%#m/%Y %h%P"), "5/3/2024 09am");
//! assert_eq!(parse_compact("20240305090503"), then);
//! assert_eq!(parse_fixed_date("05/03/24", "dmy2/").month(), 3);
//! assert_eq!(then.add_one_day().day(), 6);
//! ```

mod cal;
pub use cal::{DatePiece, TimePiece};
pub use cal::convenience;
pub use cal::arith::Bounds;
pub use cal::datetime::{Date, TimeOfDay, Year, Weekday, Error};
pub use cal::datetime::{is_leap, days_in_month, days_in_year};
pub use cal::fmt::custom::{DateFormat, Field, Padding, DISPLAY_FORMAT};
#[cfg(feature="parse")] pub use cal::parse::Error as ParseError;

mod instant;
pub use instant::{Instant, Display};

mod parse;
pub use parse::{parse_fixed_date, parse_fixed_time, parse_compact, to_timestamp, from_timestamp};

#[cfg(feature="serde")] mod serde_impls;

mod system;
mod util;
