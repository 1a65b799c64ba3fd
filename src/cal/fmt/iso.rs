use std::fmt;

use crate::cal::TimePiece;
use crate::cal::datetime::{Date, TimeOfDay};
use crate::instant::Instant;
use crate::util::RangeExt;


impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "Date(invalid)");
        }

        let (year, month, day) = self.ymd_fields();
        if year.is_within(0 .. 9999) {
            write!(f, "Date({:04}-{:02}-{:02})", year, month, day)
        }
        else {
            write!(f, "Date({:+05}-{:02}-{:02})", year, month, day)
        }
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_valid() {
            write!(f, "TimeOfDay({:02}:{:02}:{:02})", self.hour(), self.minute(), self.second())
        }
        else {
            write!(f, "TimeOfDay(invalid)")
        }
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "Instant(invalid)");
        }

        // Raw values can be past the last usable day.
        let date = self.date();
        if !date.is_valid() {
            return write!(f, "Instant({})", self.raw());
        }

        let (year, month, day) = date.ymd_fields();
        write!(f, "Instant({:04}-{:02}-{:02}T{:02}:{:02}:{:02})",
               year, month, day, self.hour(), self.minute(), self.second())
    }
}


#[cfg(test)]
mod test {
    use crate::cal::datetime::{Date, TimeOfDay};
    use crate::instant::Instant;

    #[test]
    fn recently() {
        let debugged = format!("{:?}", Date::ymd(1600, 2, 28));
        assert_eq!(debugged, "Date(1600-02-28)");
    }

    #[test]
    fn just_then() {
        let debugged = format!("{:?}", Date::ymd(-753, 12, 1));
        assert_eq!(debugged, "Date(-0753-12-01)");
    }

    #[test]
    fn far_far_future() {
        let debugged = format!("{:?}", Date::ymd(10601, 1, 31));
        assert_eq!(debugged, "Date(+10601-01-31)");
    }

    #[test]
    fn midday() {
        let debugged = format!("{:?}", TimeOfDay::noon());
        assert_eq!(debugged, "TimeOfDay(12:00:00)");
    }

    #[test]
    fn ascending() {
        let debugged = format!("{:?}", Instant::ymd_hms(2009, 2, 13, 23, 31, 30));
        assert_eq!(debugged, "Instant(2009-02-13T23:31:30)");
    }

    #[test]
    fn invalid() {
        assert_eq!(format!("{:?}", Instant::invalid()), "Instant(invalid)");
        assert_eq!(format!("{:?}", Date::invalid()), "Date(invalid)");
    }
}
