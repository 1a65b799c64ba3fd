extern crate civiltime;
use civiltime::{Instant, DatePiece, TimePiece};


#[test]
fn a_long_time_ago() {
    let date = Instant::from_unix_timestamp(-1_000_000_000);

    assert_eq!(date.year(),   1938);
    assert_eq!(date.month(),  4);
    assert_eq!(date.day(),    24);
    assert_eq!(date.hour(),   22);
    assert_eq!(date.minute(), 13);
    assert_eq!(date.second(), 20);
}

#[test]
fn unix_epoch() {
    let date = Instant::from_unix_timestamp(0);
    assert_eq!(date, Instant::ymd_hms(1970, 1, 1, 0, 0, 0));
    assert_eq!(date.to_unix_timestamp(), 0);
}

#[test]
fn billennium() {
    let date = Instant::from_unix_timestamp(1_000_000_000);

    assert_eq!(date.year(),   2001);
    assert_eq!(date.month(),  9);
    assert_eq!(date.day(),    9);
    assert_eq!(date.hour(),   1);
    assert_eq!(date.minute(), 46);
    assert_eq!(date.second(), 40);
}

#[test]
fn numbers() {
    let date = Instant::ymd_hms(2009, 2, 13, 23, 31, 30);
    assert_eq!(date.to_unix_timestamp(), 1_234_567_890);
}

#[test]
fn before_the_epoch_is_zero() {
    assert_eq!(Instant::from_unix_timestamp(-1_000_000_000).to_unix_timestamp(), 0);
    assert_eq!(Instant::ymd_hms(1800, 1, 1, 0, 0, 0).to_unix_timestamp(), 0);
}

#[test]
fn leap_day() {
    let date = Instant::ymd_hms(2000, 2, 29, 0, 0, 0);
    assert_eq!(date.to_unix_timestamp(), 951_782_400);
    assert_eq!(Instant::from_unix_timestamp(951_782_400), date);
}
