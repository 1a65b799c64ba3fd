//! Proleptic Gregorian calendar calculations, which use years, months,
//! days, hours, minutes, and seconds.

pub(crate) mod datetime;
pub(crate) mod arith;
pub(crate) mod fmt;
#[cfg(feature="parse")] pub(crate) mod parse;
pub mod convenience;

use self::datetime::Weekday;


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year, from 1 to 12.
    fn month(&self) -> u32;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> u32;

    /// The day of the week, from 1 (Sunday) to 7 (Saturday).
    fn day_of_week(&self) -> u32;

    /// The day of the week, as a named weekday.
    fn weekday(&self) -> Weekday {
        // day_of_week is always within 1 ..= 7
        Weekday::from_one(self.day_of_week()).unwrap_or(Weekday::Sunday)
    }

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    fn year_of_century(&self) -> i64 { self.year().rem_euclid(100) }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day, from 0 to 23.
    fn hour(&self) -> u32;

    /// The minute of the hour.
    fn minute(&self) -> u32;

    /// The second of the minute.
    fn second(&self) -> u32;

    /// The hour on a twelve-hour clock, where both midnight and midday
    /// are 12.
    fn hour_of_half_day(&self) -> u32 {
        match self.hour() {
            0          => 12,
            h if h > 12 => h - 12,
            h          => h,
        }
    }

    /// The number of seconds that have elapsed since midnight.
    fn seconds_since_midnight(&self) -> u32 {
        self.hour() * 3600 + self.minute() * 60 + self.second()
    }
}
