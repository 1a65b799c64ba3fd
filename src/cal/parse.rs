//! ISO-8601 parsing, for instants written as `2024-03-05T09:05:03Z`.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::cal::datetime::{Date, TimeOfDay, Weekday, Error as DateTimeError, days_in_year};
use crate::instant::Instant;
use crate::util::RangeExt;


impl FromStr for Date {
    type Err = Error<DateTimeError>;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match iso8601::date(input) {
            Ok(fields)  => fields_to_date(fields).map_err(Error::Date),
            Err(e)      => Err(Error::Parse(e)),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = Error<DateTimeError>;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match iso8601::time(input) {
            Ok(fields)  => fields_to_time(fields).map_err(Error::Date),
            Err(e)      => Err(Error::Parse(e)),
        }
    }
}

/// Parses a date and time. Any UTC offset gets subtracted, so the
/// resulting instant is in UTC.
impl FromStr for Instant {
    type Err = Error<DateTimeError>;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = match iso8601::datetime(input) {
            Ok(fields)  => fields,
            Err(e)      => return Err(Error::Parse(e)),
        };

        let date = fields_to_date(fields.date).map_err(Error::Date)?;
        let time = fields_to_time(fields.time).map_err(Error::Date)?;
        let offset = fields.time.tz_offset_hours as i64 * 3600
                   + fields.time.tz_offset_minutes as i64 * 60;

        (Self::new(date, time) - offset).checked().map_err(Error::Date)
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<Date, DateTimeError> {
    match fields {
        iso8601::Date::YMD { year, month, day } => {
            Date::try_ymd(year as i64, month, day)
        },
        iso8601::Date::Week { year, ww, d } => {
            if !(ww.is_within(1..54) && d.is_within(1..8)) {
                return Err(DateTimeError::OutOfRange);
            }

            // Week 1 is the week with the 4th of January in it.
            let jan_4 = Date::try_ymd(year as i64, 1, 4)?;
            let weekday = Weekday::from_one(jan_4.day_of_week())?;
            let week_1_monday = jan_4 - (weekday.days_from_monday_as_one() as i64 - 1);

            (week_1_monday + (7 * (ww as i64 - 1) + d as i64 - 1)).checked()
        },
        iso8601::Date::Ordinal { year, ddd } => {
            if !ddd.is_within(1 .. days_in_year(year as i64) + 1) {
                return Err(DateTimeError::OutOfRange);
            }

            let jan_1 = Date::try_ymd(year as i64, 1, 1)?;
            (jan_1 + (ddd as i64 - 1)).checked()
        },
    }
}

fn fields_to_time(fields: iso8601::Time) -> Result<TimeOfDay, DateTimeError> {
    if fields.millisecond != 0 {
        trace!(millisecond = fields.millisecond, "dropping sub-second precision");
    }

    TimeOfDay::try_hms(fields.hour, fields.minute, fields.second)
}


#[derive(PartialEq, Debug, Clone)]
pub enum Error<E: ErrorTrait> {
    Date(E),
    Parse(String),
}

impl<E: ErrorTrait> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Date(ref error)    => write!(f, "parsing resulted in an invalid date: {}", error),
            Error::Parse(ref string)  => write!(f, "parse error: {}", string),
        }
    }
}

impl<E: ErrorTrait + 'static> ErrorTrait for Error<E> {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match *self {
            Error::Date(ref error)  => Some(error),
            Error::Parse(_)         => None,
        }
    }
}
