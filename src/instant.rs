//! Exact points on a timeline.

use std::fmt;
use std::ops::{Add, Sub};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{Date, TimeOfDay, Error, split_cycles, DAY_BIAS, SECONDS_IN_DAY};
use crate::cal::fmt::custom::{DateFormat, DISPLAY_FORMAT};
use crate::system::sys_time;


/// The stored value of an instant that failed to be constructed.
const INVALID_SECONDS: i64 = 0xdead_beef;


/// An **instant** is an exact point on the timeline, with second
/// precision.
///
/// Internally, this is a single 64-bit count of seconds: the date’s
/// stored (biased) day count multiplied by the length of a day, plus the
/// seconds since midnight. The date and time-of-day are never stored on
/// their own, and get worked out again whenever they’re needed.
///
/// Invalid field combinations produce the *invalid* instant rather than
/// an error; check for it with `is_valid`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
}

impl Instant {

    /// Returns the invalid instant.
    pub fn invalid() -> Self {
        Self { seconds: INVALID_SECONDS }
    }

    /// Combines a date and a time of day. If either of them is invalid,
    /// so is the result.
    pub fn new(date: Date, time: TimeOfDay) -> Self {
        if !(date.is_valid() && time.is_valid()) {
            return Self::invalid();
        }

        date.total_days().checked_mul(SECONDS_IN_DAY)
            .and_then(|seconds| seconds.checked_add(time.total_seconds()))
            .map_or_else(Self::invalid, Self::from_raw)
    }

    /// Creates an instant from year, month, day, hour, minute, and second
    /// fields.
    ///
    /// ```rust
    /// use civiltime::{Instant, DatePiece, TimePiece};
    ///
    /// let then = Instant::ymd_hms(2024, 3, 5, 9, 5, 3);
    /// assert_eq!(then.month(), 3);
    /// assert_eq!(then.minute(), 5);
    ///
    /// assert!(!Instant::ymd_hms(2023, 2, 29, 0, 0, 0).is_valid());
    /// ```
    pub fn ymd_hms(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self::new(Date::ymd(year, month, day), TimeOfDay::hms(hour, minute, second))
    }

    /// Like `ymd_hms`, but returns an error instead of the invalid
    /// instant.
    pub fn try_ymd_hms(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self, Error> {
        let date = Date::try_ymd(year, month, day)?;
        let time = TimeOfDay::try_hms(hour, minute, second)?;
        Ok(Self::new(date, time))
    }

    /// Creates an instant on a day given by its week of the month and day
    /// of the week. See `Date::week_in_month`.
    pub fn from_week_in_month(year: i64, month: u32, week: u32, day_of_week: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self::new(Date::week_in_month(year, month, week, day_of_week), TimeOfDay::hms(hour, minute, second))
    }

    /// Creates an instant from an unbiased generalized day number and a
    /// time of day. See `Date::from_day_number`.
    pub fn from_days_hms(days: i64, hour: u32, minute: u32, second: u32) -> Self {
        Self::new(Date::from_day_number(days), TimeOfDay::hms(hour, minute, second))
    }

    /// Creates an instant directly from its stored 64-bit value.
    pub fn from_raw(seconds: i64) -> Self {
        Self { seconds }
    }

    /// Returns the stored 64-bit value, which is what gets persisted.
    pub fn raw(self) -> i64 {
        self.seconds
    }

    /// Returns the stored value as big-endian bytes.
    pub fn to_be_bytes(self) -> [u8; 8] {
        self.seconds.to_be_bytes()
    }

    /// Reads an instant back from the bytes written by `to_be_bytes`.
    pub fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self::from_raw(i64::from_be_bytes(bytes))
    }

    /// Creates a new instant set to the computer’s current time, in UTC.
    #[cfg_attr(target_os = "redox", allow(unused_unsafe))]
    pub fn now() -> Self {
        let seconds = unsafe { sys_time() };
        Self::from_unix_timestamp(seconds)
    }

    /// Returns whether this instant was successfully constructed.
    pub fn is_valid(self) -> bool {
        self.seconds != INVALID_SECONDS
    }

    /// Returns this instant, or an error if it’s the invalid one.
    pub fn checked(self) -> Result<Self, Error> {
        if self.is_valid() { Ok(self) } else { Err(Error::Invalid) }
    }

    /// Returns the total number of seconds, the same as `raw`.
    pub fn total_seconds(self) -> i64 {
        self.seconds
    }

    /// Returns the date part of this instant.
    pub fn date(self) -> Date {
        assert!(self.is_valid(), "date called on an invalid instant");
        let (days, _) = split_cycles(self.seconds, SECONDS_IN_DAY);
        Date::from_day_number(days - DAY_BIAS)
    }

    /// Returns the time-of-day part of this instant. An instant that
    /// falls exactly on a day boundary is at midnight.
    pub fn time(self) -> TimeOfDay {
        assert!(self.is_valid(), "time called on an invalid instant");
        match split_cycles(self.seconds, SECONDS_IN_DAY) {
            (_, 0)    => TimeOfDay::midnight(),
            (_, secs) => TimeOfDay::from_seconds_since_midnight(secs),
        }
    }

    /// Returns whether this instant is within five minutes of the top of
    /// an hour, on either side.
    pub fn on_the_hour(self) -> bool {
        let minute = self.minute();
        minute < 5 || minute > 55
    }

    /// Formats this instant using a `%`-pattern. Invalid instants format
    /// as the empty string.
    ///
    /// ```rust
    /// use civiltime::Instant;
    ///
    /// let then = Instant::ymd_hms(2024, 3, 5, 21, 5, 3);
    /// assert_eq!(then.format("%#m/%#d/%y %h:%M%P"), "3/5/24 09:05pm");
    /// ```
    pub fn format(self, pattern: &str) -> String {
        if self.is_valid() {
            DateFormat::parse(pattern).format(&self)
        }
        else {
            String::new()
        }
    }

    /// Returns a value that displays this instant using the given
    /// pattern, rather than `DISPLAY_FORMAT`.
    pub fn display(self, pattern: &str) -> Display<'_> {
        Display { instant: self, pattern }
    }
}

impl DatePiece for Instant {
    fn year(&self) -> i64 { self.date().year() }
    fn month(&self) -> u32 { self.date().month() }
    fn day(&self) -> u32 { self.date().day() }
    fn day_of_week(&self) -> u32 { self.date().day_of_week() }
}

impl TimePiece for Instant {
    fn hour(&self) -> u32 { self.time().hour() }
    fn minute(&self) -> u32 { self.time().minute() }
    fn second(&self) -> u32 { self.time().second() }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format(DISPLAY_FORMAT))
    }
}

/// Displays an instant with a caller-chosen pattern.
///
/// This is returned by `Instant::display`.
#[derive(Debug, Clone, Copy)]
pub struct Display<'a> {
    instant: Instant,
    pattern: &'a str,
}

impl<'a> fmt::Display for Display<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.instant.format(self.pattern))
    }
}

impl Add<i64> for Instant {
    type Output = Self;

    fn add(self, seconds: i64) -> Self {
        if !self.is_valid() {
            return self;
        }

        self.seconds.checked_add(seconds).map_or_else(Self::invalid, Self::from_raw)
    }
}

impl Sub<i64> for Instant {
    type Output = Self;

    fn sub(self, seconds: i64) -> Self {
        if !self.is_valid() {
            return self;
        }

        self.seconds.checked_sub(seconds).map_or_else(Self::invalid, Self::from_raw)
    }
}

/// The number of seconds between two instants, saturating at the
/// bounds of `i64`.
impl Sub<Instant> for Instant {
    type Output = i64;

    fn sub(self, other: Instant) -> i64 {
        self.seconds.saturating_sub(other.seconds)
    }
}
