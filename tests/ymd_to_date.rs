extern crate civiltime;
use civiltime::{Date, DatePiece, Weekday, days_in_month};


#[test]
fn the_distant_past() {
    let date = Date::ymd(7, 4, 1);

    assert_eq!(date.year(),  7);
    assert_eq!(date.month(), 4);
    assert_eq!(date.day(),   1);
}

#[test]
fn the_distant_present() {
    let date = Date::ymd(2015, 1, 16);

    assert_eq!(date.year(),  2015);
    assert_eq!(date.month(), 1);
    assert_eq!(date.day(),   16);
}

#[test]
fn the_distant_future() {
    let date = Date::ymd(1048576, 10, 13);

    assert_eq!(date.year(),  1048576);
    assert_eq!(date.month(), 10);
    assert_eq!(date.day(),   13);
}

#[test]
fn round_trip_1700_to_2200() {
    for year in 1700 ..= 2200 {
        for month in 1 ..= 12 {
            for day in 1 ..= days_in_month(year, month) {
                assert_eq!(Date::ymd(year, month, day).ymd_fields(), (year, month, day));
            }
        }
    }
}

#[test]
fn leap_century() {
    assert_eq!(Date::ymd(2000, 2, 29).ymd_fields(), (2000, 2, 29));
    assert_eq!(Date::ymd(1600, 12, 31).ymd_fields(), (1600, 12, 31));
    assert_eq!(Date::ymd(1601, 1, 1).ymd_fields(), (1601, 1, 1));
}

#[test]
fn consecutive_days() {
    assert_eq!(Date::ymd(2000, 2, 29) + 1, Date::ymd(2000, 3, 1));
    assert_eq!(Date::ymd(2000, 1, 1) - 1, Date::ymd(1999, 12, 31));
}

#[test]
fn invalid() {
    assert!(!Date::ymd(2023, 2, 29).is_valid());
    assert!(!Date::ymd(2023, 0, 1).is_valid());
    assert!(Date::try_ymd(2023, 4, 31).is_err());
}

#[test]
fn weekdays() {
    assert_eq!(Date::ymd(2024, 1, 7).weekday(), Weekday::Sunday);
    assert_eq!(Date::ymd(1969, 7, 20).weekday(), Weekday::Sunday);
    assert_eq!(Date::ymd(2015, 9, 11).weekday(), Weekday::Friday);
    assert_eq!(Date::ymd(2000, 1, 1).day_of_week(), 7);
}

#[test]
fn third_tuesday() {
    assert_eq!(Date::week_in_month(2024, 1, 3, 3), Date::ymd(2024, 1, 16));
    assert_eq!(Date::week_in_month(2024, 9, 1, 1), Date::ymd(2024, 9, 1));
    assert_eq!(Date::week_in_month(2024, 9, 4, 7), Date::ymd(2024, 9, 28));
}
