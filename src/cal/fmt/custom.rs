//! Datetime-to-string routines, driven by `%`-patterns.
//!
//! | Code  | Output                                              |
//! |-------|-----------------------------------------------------|
//! | `%d`  | day of the month, `01` to `31`                      |
//! | `%m`  | month, `01` to `12`                                 |
//! | `%y`  | year without the century, `00` to `99`              |
//! | `%Y`  | year with the century                               |
//! | `%H`  | hour on a 24-hour clock, `00` to `23`               |
//! | `%h`  | hour on a 12-hour clock, `01` to `12`               |
//! | `%M`  | minute, `00` to `59`                                |
//! | `%S`  | second, `00` to `59`                                |
//! | `%P`  | `am` or `pm`                                        |
//! | `%p`  | `a` or `p`                                          |
//! | `%Q`  | seconds since midnight                              |
//! | `%f`  | the name of the calendar in use                     |
//!
//! Putting a `#` after the `%` (as in `%#d`) drops the leading zero from
//! any of the two-digit numeric fields. Any other character after a `%`
//! is output as-is, so `%%` writes a single `%`.

use std::fmt::Write;
use std::str::CharIndices;

use pad::{PadStr, Alignment};

use crate::cal::{DatePiece, TimePiece};


/// The pattern used when displaying an instant.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What `%f` writes.
const CALENDAR_NAME: &str = "Gregorian Calendar";


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Year,
    YearOfCentury(Padding),
    Month(Padding),
    Day(Padding),

    Hour(Padding),
    HourOfHalfDay(Padding),
    Minute(Padding),
    Second(Padding),

    /// `true` for the two-letter `am`/`pm`, `false` for `a`/`p`.
    Meridian(bool),
    SecondsSinceMidnight,
    CalendarName,
}

impl<'a> Field<'a> {
    fn format<T>(&self, when: &T, w: &mut String) where T: DatePiece+TimePiece {
        match *self {
            Field::Literal(s)              => w.push_str(s),
            Field::Year                    => push_number(w, when.year()),
            Field::YearOfCentury(p)        => p.format(w, when.year_of_century()),
            Field::Month(p)                => p.format(w, when.month()),
            Field::Day(p)                  => p.format(w, when.day()),
            Field::Hour(p)                 => p.format(w, when.hour()),
            Field::HourOfHalfDay(p)        => p.format(w, when.hour_of_half_day()),
            Field::Minute(p)               => p.format(w, when.minute()),
            Field::Second(p)               => p.format(w, when.second()),
            Field::Meridian(long)          => w.push_str(meridian(when.hour(), long)),
            Field::SecondsSinceMidnight    => push_number(w, when.seconds_since_midnight()),
            Field::CalendarName            => w.push_str(CALENDAR_NAME),
        }
    }
}

fn meridian(hour: u32, long: bool) -> &'static str {
    match (hour >= 12, long) {
        (false, true)  => "am",
        (true,  true)  => "pm",
        (false, false) => "a",
        (true,  false) => "p",
    }
}

fn push_number<N: std::fmt::Display>(w: &mut String, number: N) {
    // Writing to a String can’t fail.
    let _ = write!(w, "{}", number);
}


/// Whether a numeric field gets a leading zero.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Padding {

    /// Pad to two digits with zeroes, which is the default.
    Zero,

    /// No padding, as asked for with `%#`.
    None,
}

impl Padding {
    fn format<N: std::fmt::Display>(self, w: &mut String, number: N) {
        let s = number.to_string();
        match self {
            Padding::Zero  => w.push_str(&s.pad(2, '0', Alignment::Right, false)),
            Padding::None  => w.push_str(&s),
        }
    }
}


#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DateFormat<'a> {
    pub fields: Vec<Field<'a>>,
}

impl<'a> DateFormat<'a> {
    pub fn format<T>(&self, when: &T) -> String where T: DatePiece+TimePiece {
        let mut buf = String::new();

        for field in &self.fields {
            field.format(when, &mut buf);
        }

        buf
    }

    /// Parses a `%`-pattern. This never fails: anything that isn’t a
    /// known format code gets treated as literal text.
    pub fn parse(input: &'a str) -> DateFormat<'a> {
        let mut parser = FormatParser::new(input);
        parser.parse_format_string();

        DateFormat { fields: parser.fields }
    }
}


struct FormatParser<'a> {
    iter:   CharIndices<'a>,
    fields: Vec<Field<'a>>,
    input:  &'a str,
    anchor: Option<usize>,
}

impl<'a> FormatParser<'a> {
    fn new(input: &'a str) -> FormatParser<'a> {
        FormatParser {
            iter:   input.char_indices(),
            fields: Vec::new(),
            input,
            anchor: None,
        }
    }

    fn collect_up_to_anchor(&mut self, position: Option<usize>) {
        if let Some(pos) = self.anchor {
            self.anchor = None;
            let text = match position {
                Some(new_pos) => &self.input[pos..new_pos],
                None          => &self.input[pos..],
            };
            self.fields.push(Field::Literal(text));
        }
    }

    fn parse_format_string(&mut self) {
        while let Some((pos, c)) = self.iter.next() {
            if c == '%' {
                self.collect_up_to_anchor(Some(pos));
                if let Some(field) = self.parse_code() {
                    self.fields.push(field);
                }
            }
            else if self.anchor.is_none() {
                self.anchor = Some(pos);
            }
        }

        // Finally, collect any literal characters after the last date field
        // that haven't been turned into a Literal field yet.
        self.collect_up_to_anchor(None);
    }

    // A `%` or `%#` at the very end of the input gets dropped.
    fn parse_code(&mut self) -> Option<Field<'a>> {
        let (pos, c) = self.iter.next()?;

        Some(match c {
            '#' => {
                let (pos, c) = self.iter.next()?;
                match self.numeric(c, Padding::None) {
                    Some(field) => field,
                    None        => self.literal_char(pos, c),
                }
            },
            'Y' => Field::Year,
            'P' => Field::Meridian(true),
            'p' => Field::Meridian(false),
            'Q' => Field::SecondsSinceMidnight,
            'f' => Field::CalendarName,
            _   => match self.numeric(c, Padding::Zero) {
                Some(field) => field,
                None        => self.literal_char(pos, c),
            },
        })
    }

    fn numeric(&self, c: char, padding: Padding) -> Option<Field<'a>> {
        Some(match c {
            'd' => Field::Day(padding),
            'm' => Field::Month(padding),
            'y' => Field::YearOfCentury(padding),
            'H' => Field::Hour(padding),
            'h' => Field::HourOfHalfDay(padding),
            'M' => Field::Minute(padding),
            'S' => Field::Second(padding),
            _   => return None,
        })
    }

    fn literal_char(&self, pos: usize, c: char) -> Field<'a> {
        Field::Literal(&self.input[pos .. pos + c.len_utf8()])
    }
}
