//! Forgiving parsers for dates and times in fixed-field formats.
//!
//! None of these ever fail. Strings that don’t quite fit get clamped into
//! range or fall back to a default, and the repair is logged at the
//! `debug` level.

use tracing::debug;

use crate::cal::DatePiece;
use crate::cal::arith::Bounds;
use crate::cal::convenience::Today;
use crate::cal::datetime::{Date, TimeOfDay, days_in_month};
use crate::instant::Instant;
use crate::util::{leading_number, leading_u32, next_token};


/// Parses a date in the layout described by a five-character format.
///
/// The first three characters of `format` give the order of the day
/// (`d`), month (`m`), and year (`y`) fields. The fourth is `2` or `4`,
/// for two- or four-digit years, and the fifth is the separator between
/// fields.
///
/// Two-digit years from 50 upwards are in the 1900s, and the rest are in
/// the 2000s. The year is clamped to the default `Bounds`, and the month
/// and day to whatever exists.
///
/// ```rust
/// use civiltime::{parse_fixed_date, DatePiece};
///
/// let date = parse_fixed_date("20/03/96", "dmy2/");
/// assert_eq!((date.year(), date.month(), date.day()), (1996, 3, 20));
///
/// let date = parse_fixed_date("03-28-1996", "mdy4-");
/// assert_eq!((date.year(), date.month(), date.day()), (1996, 3, 28));
/// ```
pub fn parse_fixed_date(input: &str, format: &str) -> Date {
    Bounds::default().parse_fixed_date(input, format)
}

impl Bounds {

    /// Parses a date like `parse_fixed_date`, clamping the year to
    /// these bounds rather than the default ones.
    pub fn parse_fixed_date(&self, input: &str, format: &str) -> Date {
        let format: Vec<char> = format.chars().collect();
        if format.len() != 5 {
            debug!(input, "date format is not five characters, using today");
            return Date::today();
        }

        let today = Date::today();
        let mut day   = 1;
        let mut month = 1;
        let mut year  = today.year();

        let separator = format[4];
        let two_digit_years = format[3] == '2';

        let mut rest = input;
        for code in &format[.. 3] {
            if rest.is_empty() {
                break;
            }

            match code.to_ascii_lowercase() {
                'd' => day = leading_u32(next_token(&mut rest, separator)),
                'm' => month = leading_u32(next_token(&mut rest, separator)),
                'y' => {
                    year = leading_u32(next_token(&mut rest, separator)) as i64;
                    if two_digit_years || year < 100 {
                        year += if year >= 50 { 1900 } else { 2000 };
                    }
                },
                _ => {},
            }
        }

        let clamped_year  = self.clamp_year(year);
        let clamped_month = month.max(1).min(12);
        let clamped_day   = day.max(1).min(days_in_month(clamped_year, clamped_month));

        if (clamped_year, clamped_month, clamped_day) != (year, month, day) {
            debug!(input, year, month, day, "date fields clamped into range");
        }

        Date::ymd(clamped_year, clamped_month, clamped_day)
    }
}


/// Parses a time of day in the layout described by a four-character
/// format.
///
/// The first three characters of `format` give the order of the hour
/// (`h`), minute (`m`), and second (`s`) fields, and the fourth is the
/// separator between them. Anything after a space is a meridian: it’s PM
/// if there’s a `p` in it, and AM otherwise, which is also what it is if
/// there’s no meridian at all.
///
/// ```rust
/// use civiltime::{parse_fixed_time, TimeOfDay};
///
/// assert_eq!(parse_fixed_time("12:10 pm", "hms:"), TimeOfDay::hms(12, 10, 0));
/// assert_eq!(parse_fixed_time("12:10 am", "hms:"), TimeOfDay::hms(0, 10, 0));
/// assert_eq!(parse_fixed_time("0-10-0", "hms-"), TimeOfDay::hms(0, 10, 0));
/// ```
pub fn parse_fixed_time(input: &str, format: &str) -> TimeOfDay {
    let format: Vec<char> = format.chars().collect();
    if format.len() != 4 {
        debug!(input, "time format is not four characters, using noon");
        return TimeOfDay::noon();
    }

    let mut hour   = 12;
    let mut minute = 0;
    let mut second = 0;

    let separator = format[3];

    let mut rest = input;
    for code in &format[.. 3] {
        if rest.is_empty() {
            break;
        }

        match code.to_ascii_lowercase() {
            'h' => hour = leading_u32(next_token(&mut rest, separator)),
            'm' => minute = leading_u32(next_token(&mut rest, separator)),
            's' => second = leading_u32(next_token(&mut rest, separator)),
            _   => {},
        }
    }

    let pm = match input.find(' ') {
        Some(pos) => input[pos ..].to_lowercase().contains('p'),
        None      => false,
    };

    if pm && hour < 12 {
        hour += 12;
    }
    else if !pm && hour == 12 {
        hour = 0;
    }

    TimeOfDay::hms(hour, minute, second)
}


/// Parses a fourteen-digit `YYYYMMDDHHMMSS` string, ignoring any `;`
/// characters.
///
/// Anything that isn’t fourteen digits long has `120000` stuck on the
/// end, so a bare `YYYYMMDD` date comes out at noon. The empty string
/// gives the earliest instant of the default `Bounds`.
///
/// ```rust
/// use civiltime::{parse_compact, Instant};
///
/// assert_eq!(parse_compact("20240305090503"), Instant::ymd_hms(2024, 3, 5, 9, 5, 3));
/// assert_eq!(parse_compact("20240305"), Instant::ymd_hms(2024, 3, 5, 12, 0, 0));
/// ```
pub fn parse_compact(input: &str) -> Instant {
    if input.is_empty() {
        return Bounds::default().earliest;
    }

    let mut digits: String = input.chars().filter(|&c| c != ';').collect();
    if digits.chars().count() != 14 {
        debug!(input, "compact timestamp is not fourteen characters, defaulting to noon");
        digits.push_str("120000");
    }

    let field = |start: usize, len: usize| {
        digits.get(start .. start + len).map(leading_u32).unwrap_or(0)
    };

    Instant::ymd_hms(field(0, 4) as i64, field(4, 2), field(6, 2), field(8, 2), field(10, 2), field(12, 2))
}


/// Parses a Unix timestamp, which is in hexadecimal if it starts with
/// `0x` and in signed decimal otherwise. Input that isn’t a number reads
/// as zero.
///
/// ```rust
/// use civiltime::to_timestamp;
///
/// assert_eq!(to_timestamp("0x5e0be100"), 1_577_836_800);
/// assert_eq!(to_timestamp("1577836800"), 1_577_836_800);
/// assert_eq!(to_timestamp("-86400"), -86_400);
/// ```
pub fn to_timestamp(input: &str) -> i64 {
    if let Some(hex) = input.strip_prefix("0x") {
        return leading_number::<u64>(hex, 16) as i64;
    }

    let trimmed = input.trim_start();
    match trimmed.strip_prefix('-') {
        Some(digits) => -leading_number::<i64>(digits, 10),
        None         => leading_number::<i64>(trimmed.strip_prefix('+').unwrap_or(trimmed), 10),
    }
}

/// Renders a Unix timestamp as a decimal string.
pub fn from_timestamp(timestamp: i64) -> String {
    timestamp.to_string()
}


impl Instant {

    /// Parses a date and a time of day out of the same string with the
    /// same format, using `parse_fixed_date` and `parse_fixed_time`.
    ///
    /// A five-character date format means the time of day can’t be read,
    /// so it comes out at noon. An empty input or format gives the
    /// earliest instant of the default `Bounds`.
    pub fn from_formatted(input: &str, format: &str) -> Self {
        if input.is_empty() || format.is_empty() {
            return Bounds::default().earliest;
        }

        Self::new(parse_fixed_date(input, format), parse_fixed_time(input, format))
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::TimePiece;

    #[test]
    fn two_digit_years() {
        assert_eq!(parse_fixed_date("01/02/96", "mdy2/").year(), 1996);
        assert_eq!(parse_fixed_date("01/02/30", "mdy2/").year(), 2030);
        assert_eq!(parse_fixed_date("01/02/50", "mdy2/").year(), 1950);
        assert_eq!(parse_fixed_date("01/02/49", "mdy2/").year(), 2049);
    }

    #[test]
    fn short_years_with_four_digit_format() {
        assert_eq!(parse_fixed_date("1996-03-28", "ymd4-"), Date::ymd(1996, 3, 28));
        assert_eq!(parse_fixed_date("96-03-28", "ymd4-"), Date::ymd(1996, 3, 28));
    }

    #[test]
    fn clamping() {
        assert_eq!(parse_fixed_date("31/02/2023", "dmy4/"), Date::ymd(2023, 2, 28));
        assert_eq!(parse_fixed_date("00/13/2023", "dmy4/"), Date::ymd(2023, 12, 1));
        assert_eq!(parse_fixed_date("01/01/1492", "dmy4/"), Date::ymd(1700, 1, 1));
        assert_eq!(parse_fixed_date("01/01/3000", "dmy4/"), Date::ymd(2200, 1, 1));
    }

    #[test]
    fn custom_bounds() {
        let bounds = Bounds::new(Instant::ymd_hms(1900, 1, 1, 0, 0, 0), Instant::ymd_hms(1999, 12, 31, 0, 0, 0));
        assert_eq!(bounds.parse_fixed_date("01/01/30", "dmy2/"), Date::ymd(1999, 1, 1));
    }

    #[test]
    fn upper_case_codes() {
        assert_eq!(parse_fixed_date("1996.3.28", "YMD4."), Date::ymd(1996, 3, 28));
    }

    #[test]
    fn missing_fields_default() {
        let date = parse_fixed_date("15", "dmy4/");
        assert_eq!((date.month(), date.day()), (1, 15));
        assert_eq!(date.year(), Date::today().year());
    }

    #[test]
    fn wrong_length_date_format() {
        assert_eq!(parse_fixed_date("01/02/96", "mdy/"), Date::today());
    }

    #[test]
    fn meridians() {
        assert_eq!(parse_fixed_time("12:10 pm", "hms:"), TimeOfDay::hms(12, 10, 0));
        assert_eq!(parse_fixed_time("1:10:30 PM", "hms:"), TimeOfDay::hms(13, 10, 30));
        assert_eq!(parse_fixed_time("11:59:59 a.m.", "hms:"), TimeOfDay::hms(11, 59, 59));
        assert_eq!(parse_fixed_time("18:30", "hms:"), TimeOfDay::hms(18, 30, 0));
        assert_eq!(parse_fixed_time("12:00", "hms:"), TimeOfDay::midnight());
    }

    #[test]
    fn field_order() {
        assert_eq!(parse_fixed_time("30.15.9", "smh."), TimeOfDay::hms(9, 15, 30));
    }

    #[test]
    fn wrong_length_time_format() {
        assert_eq!(parse_fixed_time("09:05:03", "hms"), TimeOfDay::noon());
    }

    #[test]
    fn compact_with_semicolons() {
        assert_eq!(parse_compact("2024;0305;090503"), Instant::ymd_hms(2024, 3, 5, 9, 5, 3));
    }

    #[test]
    fn compact_garbage() {
        // "bad" becomes "bad120000", whose month field is 20.
        assert!(!parse_compact("bad").is_valid());
        assert_eq!(parse_compact(""), Bounds::default().earliest);
    }

    #[test]
    fn compact_date_only_is_noon() {
        let then = parse_compact("20240305");
        assert_eq!((then.hour(), then.minute(), then.second()), (12, 0, 0));
    }

    #[test]
    fn timestamps() {
        assert_eq!(to_timestamp("0xff"), 255);
        assert_eq!(to_timestamp("42abc"), 42);
        assert_eq!(to_timestamp("nope"), 0);
        assert_eq!(to_timestamp("0x"), 0);
        assert_eq!(from_timestamp(-5), "-5");
    }

    #[test]
    fn formatted() {
        let then = Instant::from_formatted("03-28-1996", "mdy4-");
        assert_eq!(then, Instant::ymd_hms(1996, 3, 28, 12, 0, 0));
        assert_eq!(Instant::from_formatted("", "mdy4-"), Bounds::default().earliest);
    }
}
