//! Years, dates, times of day, and weekdays.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::ops::{Add, Deref, Sub};

use crate::cal::{DatePiece, TimePiece};
use crate::util::RangeExt;

use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        is_leap(self.0)
    }

    /// Returns the number of days in this year: 366 for leap years, and
    /// 365 for everything else.
    pub fn day_count(self) -> u32 {
        days_in_year(self.0)
    }
}

impl Deref for Year {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days in a hundred years that do not end on a multiple of
/// 400. The final century of each 400-year cycle has one more day than
/// this, which is what the century-boundary case in `Date::ymd_fields`
/// exists to handle.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;

const SECONDS_IN_HOUR: i64 = 3600;
const SECONDS_IN_MINUTE: i64 = 60;

/// The amount added to every generalized day number before it gets
/// stored, so that every date this library deals with ends up positive.
///
/// An unbiased day number of zero is the **15th of October, 1582**, the
/// first day the Gregorian calendar was in use.
pub(crate) const DAY_BIAS: i64 = 2_000_000_000;

/// The stored value of the day *before* the 1st of January of year 1,
/// which makes stored values equal to rata die numbers plus this amount.
///
/// This is an exact multiple of seven. Rata die day 1 was a Monday, so a
/// stored value that’s a multiple of seven is always a Sunday, and
/// `day_of_week` can return `1` for Sundays without any correction.
const RATA_DIE_BIAS: i64 = 1_999_422_264;

/// The largest generalized day number (before biasing) that still gets
/// accepted as a valid date.
const LARGEST_DAY_NUMBER: i64 = 2_146_905_911;

/// The smallest stored day count that still fits into an instant’s
/// seconds counter.
const SMALLEST_STORED_DAYS: i64 = i64::MIN / SECONDS_IN_DAY + 1;

/// The stored value of a date that failed to be constructed.
const INVALID_DAYS: i64 = i64::MIN;

/// The number of days in each month of a common year.
const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];


/// Returns whether the given year is a leap year in the proleptic
/// Gregorian calendar.
///
/// 1. If the year is a multiple of 400, it’s a leap year.
/// 2. Else, if the year is a multiple of 100, it’s *not* a leap year.
/// 3. Else, if the year is a multiple of 4, it’s a leap year again!
pub fn is_leap(year: i64) -> bool {
    year.rem_euclid(400) == 0 || (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0)
}

/// Returns the number of days in the given month of the given year, or
/// zero if the month number is not between 1 and 12.
pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if is_leap(year) => 29,
        1 ..= 12           => DAYS_PER_MONTH[month as usize - 1],
        _                  => 0,
    }
}

/// Returns the number of days in the given year.
pub fn days_in_year(year: i64) -> u32 {
    if is_leap(year) { 366 } else { 365 }
}


/// A **date** is a single day on the proleptic Gregorian calendar, stored
/// as a biased count of days.
///
/// Constructors never fail outright: values out of range produce the
/// *invalid* date, which can be checked for with `is_valid`. Reading the
/// fields of an invalid date is a programming error, and panics.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Date {
    days: i64,
}

impl Date {

    /// Returns the invalid date.
    pub fn invalid() -> Self {
        Self { days: INVALID_DAYS }
    }

    /// Creates a new date from the given year, month, and day fields.
    ///
    /// Passing a month outside `1 ..= 12`, or a day that isn’t in that
    /// month, returns the invalid date.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civiltime::{Date, DatePiece};
    ///
    /// let date = Date::ymd(1969, 7, 20);
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), 7);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(!Date::ymd(2100, 2, 29).is_valid());
    /// ```
    pub fn ymd(year: i64, month: u32, day: u32) -> Self {
        Self::from_stored_days(total_days(year, month, day))
    }

    /// Like `ymd`, but returns an error instead of the invalid date.
    pub fn try_ymd(year: i64, month: u32, day: u32) -> Result<Self, Error> {
        Self::ymd(year, month, day).checked()
    }

    /// Creates a new date from a week-of-month and a day-of-week, such as
    /// “the 3rd Tuesday of March”.
    ///
    /// `week` runs from 1 to 4, and `day_of_week` from 1 (Sunday) to
    /// 7 (Saturday). Anything else returns the invalid date.
    ///
    /// ```rust
    /// use civiltime::{Date, DatePiece};
    ///
    /// // The third Tuesday of January 2024.
    /// let date = Date::week_in_month(2024, 1, 3, 3);
    /// assert_eq!(date.day(), 16);
    /// ```
    pub fn week_in_month(year: i64, month: u32, week: u32, day_of_week: u32) -> Self {
        if !(month.is_within(1..13) && week.is_within(1..5) && day_of_week.is_within(1..8)) {
            return Self::invalid();
        }

        let first = Self::ymd(year, month, 1);
        if !first.is_valid() {
            return Self::invalid();
        }

        let offset = (day_of_week + 7 - first.day_of_week()) % 7;
        Self::ymd(year, month, offset + 7 * (week - 1) + 1)
    }

    /// Creates a date from an unbiased generalized day number, where day
    /// zero is the 15th of October 1582. Values past the largest usable
    /// day number return the invalid date.
    pub fn from_day_number(days: i64) -> Self {
        Self::from_stored_days(days.checked_add(DAY_BIAS))
    }

    /// Accepts a stored day count that didn’t overflow, as long as it’s
    /// within the usable range.
    fn from_stored_days(days: Option<i64>) -> Self {
        match days {
            Some(days) if days >= SMALLEST_STORED_DAYS && days - DAY_BIAS <= LARGEST_DAY_NUMBER => Self { days },
            _ => Self::invalid(),
        }
    }

    /// Returns the unbiased generalized day number of this date.
    pub fn day_number(self) -> i64 {
        self.total_days() - DAY_BIAS
    }

    /// Returns the stored (biased) number of days.
    pub fn total_days(self) -> i64 {
        assert!(self.is_valid(), "total_days called on an invalid date");
        self.days
    }

    /// Returns whether this date was successfully constructed.
    pub fn is_valid(self) -> bool {
        self.days != INVALID_DAYS
    }

    /// Returns the day of the week, where 1 is Sunday and 7 is Saturday.
    pub fn day_of_week(self) -> u32 {
        (self.total_days().rem_euclid(7) + 1) as u32
    }

    /// Decomposes this date into its year, month, and day fields.
    ///
    /// The day count gets broken down into 400-year, 100-year, and 4-year
    /// cycles, then whatever years are left over, and finally a scan
    /// through the month lengths of the year that was found.
    pub fn ymd_fields(self) -> (i64, u32, u32) {
        assert!(self.is_valid(), "ymd_fields called on an invalid date");

        // Zero-based count of days since the 1st of January of year 1.
        let (cycles, mut gdn) = split_cycles(self.days - RATA_DIE_BIAS - 1, DAYS_IN_400Y);
        let mut year = 400 * cycles;
        let mut century_boundary = false;

        if gdn > 0 {
            let (centuries, remainder) = split_cycles(gdn, DAYS_IN_100Y);
            year += 100 * centuries;
            gdn = remainder;

            // Landing exactly on a century means either the 31st of
            // December of a 400th year, or the 1st of January after a
            // common century year. Both get resolved by the month scan
            // below, starting from the 366th day.
            century_boundary = gdn == 0;

            if gdn > 0 {
                let (quads, remainder) = split_cycles(gdn, DAYS_IN_4Y);
                year += 4 * quads;
                gdn = remainder;

                let mut leftover_years = 0;
                while gdn > 365 && leftover_years < 3 {
                    year += 1;
                    gdn -= 365;
                    leftover_years += 1;
                }
            }
        }

        if century_boundary {
            gdn = 366;
        }
        else {
            year += 1;
            gdn += 1;
        }

        let mut month = 1;
        while month < 13 && gdn > days_in_month(year, month) as i64 {
            gdn -= days_in_month(year, month) as i64;
            month += 1;
        }

        if month == 13 {
            month = 1;
            year += 1;
        }

        (year, month, gdn as u32)
    }

    pub(crate) fn checked(self) -> Result<Self, Error> {
        if self.is_valid() { Ok(self) } else { Err(Error::OutOfRange) }
    }
}

impl DatePiece for Date {
    fn year(&self) -> i64 { self.ymd_fields().0 }
    fn month(&self) -> u32 { self.ymd_fields().1 }
    fn day(&self) -> u32 { self.ymd_fields().2 }
    fn day_of_week(&self) -> u32 { Date::day_of_week(*self) }
}

impl Add<i64> for Date {
    type Output = Self;

    fn add(self, days: i64) -> Self {
        if self.is_valid() { Self::from_stored_days(self.days.checked_add(days)) }
                      else { self }
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    fn sub(self, days: i64) -> Self {
        if self.is_valid() { Self::from_stored_days(self.days.checked_sub(days)) }
                      else { self }
    }
}


/// Calculates the stored number of days for a year, month, and day,
/// returning `None` if the month or day are out of range.
///
/// The days in all the years before this one are counted as
/// `365 * (y - 1)` plus the leap days: one every four years, minus one
/// every hundred, plus one every four hundred. The divisions have to
/// round towards negative infinity so years before year 1 still work.
/// Years so far out that the count overflows also return `None`.
fn total_days(year: i64, month: u32, day: u32) -> Option<i64> {
    if !month.is_within(1..13) || !day.is_within(1..days_in_month(year, month) + 1) {
        return None;
    }

    let previous = year.checked_sub(1)?;
    let days = previous.checked_mul(365)?
        .checked_add(split_cycles(previous, 4).0)?
        .checked_add(split_cycles(previous, 400).0)?
        .checked_sub(split_cycles(previous, 100).0)?;

    let days_this_year = (1 .. month).map(|m| days_in_month(year, m) as i64).sum::<i64>() + day as i64;

    days.checked_add(days_this_year)?.checked_add(RATA_DIE_BIAS)
}


/// A **time of day** is a number of seconds since midnight, from 0 up to
/// but not including 86400.
///
/// The value 86400 itself is reserved to mean *invalid*: constructing a
/// time that runs past the end of the day saturates there, rather than
/// wrapping around into the next day.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct TimeOfDay {
    seconds: i64,
}

impl TimeOfDay {

    /// Returns the invalid time of day.
    pub fn invalid() -> Self {
        Self { seconds: SECONDS_IN_DAY }
    }

    /// Returns the time at midnight.
    pub fn midnight() -> Self {
        Self { seconds: 0 }
    }

    /// Returns the time at midday.
    pub fn noon() -> Self {
        Self::hms(12, 0, 0)
    }

    /// Creates a new time of day from hour, minute, and second fields.
    /// Values that add up to a day or more give the invalid time.
    pub fn hms(hour: u32, minute: u32, second: u32) -> Self {
        let seconds = hour as i64 * SECONDS_IN_HOUR
                    + minute as i64 * SECONDS_IN_MINUTE
                    + second as i64;

        Self::from_seconds_since_midnight(seconds)
    }

    /// Like `hms`, but returns an error instead of the invalid time.
    pub fn try_hms(hour: u32, minute: u32, second: u32) -> Result<Self, Error> {
        let time = Self::hms(hour, minute, second);
        if time.is_valid() { Ok(time) } else { Err(Error::OutOfRange) }
    }

    /// Creates a new time of day from the number of seconds that have
    /// elapsed since midnight, saturating at the invalid value.
    pub fn from_seconds_since_midnight(seconds: i64) -> Self {
        Self { seconds: seconds.max(0).min(SECONDS_IN_DAY) }
    }

    /// Returns whether this is a time that actually occurs during a day.
    pub fn is_valid(self) -> bool {
        self.seconds != SECONDS_IN_DAY
    }

    /// Returns the number of seconds since midnight.
    pub fn total_seconds(self) -> i64 {
        assert!(self.is_valid(), "total_seconds called on an invalid time of day");
        self.seconds
    }
}

impl TimePiece for TimeOfDay {
    fn hour(&self) -> u32 {
        (self.total_seconds() / SECONDS_IN_HOUR) as u32
    }

    fn minute(&self) -> u32 {
        (self.total_seconds() % SECONDS_IN_HOUR / SECONDS_IN_MINUTE) as u32
    }

    fn second(&self) -> u32 {
        (self.total_seconds() % SECONDS_IN_MINUTE) as u32
    }
}


/// Split a number of days into a number of day-cycles, and the number of
/// days left over that don’t fit into a cycle. This is also used for
/// year-cycles and second-cycles.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
    Invalid,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfRange  => write!(f, "datetime field out of range"),
            Error::Invalid     => write!(f, "operation on an invalid datetime"),
        }
    }
}

impl ErrorTrait for Error {
}


/// A named day of the week.
///
/// Sunday is the first day of the week here, matching `day_of_week`
/// returning 1 for Sundays and 7 for Saturdays.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

impl Weekday {

    /// Return the weekday based on a number, with Sunday as Day 1, Monday
    /// as Day 2, and so on up to Saturday as Day 7.
    ///
    /// ```rust
    /// use civiltime::Weekday;
    /// assert_eq!(Weekday::from_one(5), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_one(0).is_err());
    /// ```
    pub fn from_one(weekday: u32) -> Result<Self, Error> {
        Ok(match weekday {
            1 => Sunday,     2 => Monday,    3 => Tuesday,
            4 => Wednesday,  5 => Thursday,  6 => Friday,
            7 => Saturday,   _ => return Err(Error::OutOfRange),
        })
    }

    /// Returns the number of this weekday, with Monday as 1 and Sunday
    /// as 7, as used by ISO-8601 week dates.
    pub fn days_from_monday_as_one(self) -> u32 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }
}
