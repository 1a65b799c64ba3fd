extern crate civiltime;
use civiltime::{Instant, DateFormat, DISPLAY_FORMAT};


#[test]
fn display() {
    let then = Instant::ymd_hms(2024, 3, 5, 9, 5, 3);
    assert_eq!(then.to_string(), "2024-03-05 09:05:03");
    assert_eq!(then.format(DISPLAY_FORMAT), "2024-03-05 09:05:03");
}

#[test]
fn unpadded() {
    let then = Instant::ymd_hms(2024, 3, 5, 9, 5, 3);
    assert_eq!(then.format("%#d/%#m/%y %#h:%M%P"), "5/3/24 9:05am");
}

#[test]
fn twelve_hour_clock() {
    assert_eq!(Instant::ymd_hms(2024, 3, 5, 0, 30, 0).format("%h:%M%p"), "12:30a");
    assert_eq!(Instant::ymd_hms(2024, 3, 5, 12, 30, 0).format("%h:%M%p"), "12:30p");
    assert_eq!(Instant::ymd_hms(2024, 3, 5, 13, 30, 0).format("%h:%M %P"), "01:30 pm");
}

#[test]
fn seconds_since_midnight() {
    let then = Instant::ymd_hms(2024, 3, 5, 9, 5, 3);
    assert_eq!(then.format("%Q"), "32703");
}

#[test]
fn calendar_name() {
    let then = Instant::ymd_hms(2024, 3, 5, 9, 5, 3);
    assert_eq!(then.format("%Y (%f)"), "2024 (Gregorian Calendar)");
}

#[test]
fn literals() {
    let then = Instant::ymd_hms(2024, 3, 5, 9, 5, 3);
    assert_eq!(then.format("100%% on %z"), "100% on z");
    assert_eq!(then.format("no codes"), "no codes");
}

#[test]
fn invalid_is_empty() {
    assert_eq!(Instant::invalid().format(DISPLAY_FORMAT), "");
}

#[test]
fn reusing_a_format() {
    let format = DateFormat::parse("%d.%m.%Y");
    assert_eq!(format.format(&Instant::ymd_hms(1999, 12, 31, 0, 0, 0)), "31.12.1999");
    assert_eq!(format.format(&Instant::ymd_hms(2000, 1, 1, 0, 0, 0)), "01.01.2000");
}

#[test]
fn display_adaptor() {
    let then = Instant::ymd_hms(2024, 3, 5, 9, 5, 3);
    assert_eq!(format!("[{}]", then.display("%H:%M")), "[09:05]");
}
