//! Stepping through the calendar a day at a time, and converting to and
//! from Unix timestamps.

use tracing::trace;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{TimeOfDay, days_in_month, days_in_year};
use crate::instant::Instant;


/// The range of instants that day-by-day arithmetic stays within.
///
/// Stepping a day forwards from the latest instant, or backwards from the
/// earliest, gives back that same bound instead of leaving the range.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Bounds {
    pub earliest: Instant,
    pub latest: Instant,
}

impl Default for Bounds {

    /// One second into the year 1700, up to the last second of 2200.
    fn default() -> Self {
        Self {
            earliest: Instant::ymd_hms(1700,  1,  1,  0,  0,  1),
            latest:   Instant::ymd_hms(2200, 12, 31, 23, 59, 59),
        }
    }
}

impl Bounds {

    /// Creates bounds running from `earliest` up to `latest`, inclusive.
    pub fn new(earliest: Instant, latest: Instant) -> Self {
        Self { earliest, latest }
    }

    /// Returns the same time of day on the following day.
    ///
    /// ```rust
    /// use civiltime::{Bounds, Instant};
    ///
    /// let bounds = Bounds::default();
    /// let new_years_eve = Instant::ymd_hms(2023, 12, 31, 23, 0, 0);
    /// assert_eq!(bounds.add_one_day(new_years_eve), Instant::ymd_hms(2024, 1, 1, 23, 0, 0));
    /// assert_eq!(bounds.add_one_day(bounds.latest), bounds.latest);
    /// ```
    pub fn add_one_day(&self, when: Instant) -> Instant {
        if !when.is_valid() {
            return when;
        }

        if when >= self.latest {
            trace!(?when, "add_one_day clamped to the latest bound");
            return self.latest;
        }

        let (mut year, mut month, mut day) = when.date().ymd_fields();

        if day == days_in_month(year, month) {
            day = 1;
            if month == 12 {
                month = 1;
                year += 1;
            }
            else {
                month += 1;
            }
        }
        else {
            day += 1;
        }

        Instant::ymd_hms(year, month, day, when.hour(), when.minute(), when.second())
    }

    /// Returns the same time of day on the previous day.
    pub fn subtract_one_day(&self, when: Instant) -> Instant {
        if !when.is_valid() {
            return when;
        }

        if when <= self.earliest {
            trace!(?when, "subtract_one_day clamped to the earliest bound");
            return self.earliest;
        }

        let (mut year, mut month, mut day) = when.date().ymd_fields();

        if day == 1 {
            if month == 1 {
                month = 12;
                year -= 1;
            }
            else {
                month -= 1;
            }
            day = days_in_month(year, month);
        }
        else {
            day -= 1;
        }

        Instant::ymd_hms(year, month, day, when.hour(), when.minute(), when.second())
    }

    /// Returns midnight on the Sunday at the start of the week containing
    /// the given instant.
    ///
    /// This steps backwards a day at a time, which is never more than six
    /// steps. If a bound stops it early, the bound is returned.
    pub fn begin_of_week(&self, when: Instant) -> Instant {
        let mut start = when.begin_of_day();
        while start.is_valid() && start.day_of_week() > 1 {
            let previous = self.subtract_one_day(start);
            if previous == start {
                break;
            }
            start = previous;
        }
        start
    }

    /// Returns the last second of the Saturday at the end of the week
    /// containing the given instant.
    pub fn end_of_week(&self, when: Instant) -> Instant {
        let mut end = when.end_of_day();
        while end.is_valid() && end.day_of_week() < 7 {
            let next = self.add_one_day(end);
            if next == end {
                break;
            }
            end = next;
        }
        end
    }

    /// Clamps a year number to the years of the earliest and latest
    /// instants.
    pub fn clamp_year(&self, year: i64) -> i64 {
        year.max(self.earliest.year()).min(self.latest.year())
    }
}


impl Instant {

    /// Returns the same time of day on the following day, staying within
    /// the default `Bounds`.
    pub fn add_one_day(self) -> Self {
        Bounds::default().add_one_day(self)
    }

    /// Returns the same time of day on the previous day, staying within
    /// the default `Bounds`.
    pub fn subtract_one_day(self) -> Self {
        Bounds::default().subtract_one_day(self)
    }

    /// Returns midnight at the start of this instant’s day.
    pub fn begin_of_day(self) -> Self {
        if self.is_valid() { Self::new(self.date(), TimeOfDay::midnight()) }
                      else { self }
    }

    /// Returns the last second of this instant’s day.
    pub fn end_of_day(self) -> Self {
        if self.is_valid() { Self::new(self.date(), TimeOfDay::hms(23, 59, 59)) }
                      else { self }
    }

    /// Returns the start of this instant’s week, within the default
    /// `Bounds`. Weeks start on Sunday.
    pub fn begin_of_week(self) -> Self {
        Bounds::default().begin_of_week(self)
    }

    /// Returns the end of this instant’s week, within the default
    /// `Bounds`. Weeks end on Saturday.
    pub fn end_of_week(self) -> Self {
        Bounds::default().end_of_week(self)
    }

    /// Returns the number of days in this instant’s year.
    pub fn days_in_year(self) -> u32 {
        days_in_year(self.year())
    }

    /// Returns the number of seconds since midnight on the 1st of January
    /// 1970. Instants before then give zero, rather than a negative number.
    ///
    /// ```rust
    /// use civiltime::Instant;
    ///
    /// assert_eq!(Instant::ymd_hms(1970, 1, 2, 0, 0, 0).to_unix_timestamp(), 86400);
    /// assert_eq!(Instant::ymd_hms(1969, 12, 31, 23, 59, 59).to_unix_timestamp(), 0);
    /// ```
    pub fn to_unix_timestamp(self) -> i64 {
        let epoch = unix_epoch();
        if self < epoch { 0 } else { self - epoch }
    }

    /// Returns the instant that’s the given number of seconds after
    /// midnight on the 1st of January 1970, in UTC. Timestamps too large
    /// to represent give the invalid instant.
    pub fn from_unix_timestamp(seconds: i64) -> Self {
        unix_epoch() + seconds
    }
}

fn unix_epoch() -> Instant {
    Instant::ymd_hms(1970, 1, 1, 0, 0, 0)
}
