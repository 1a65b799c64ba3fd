extern crate civiltime;
use civiltime::{Year, is_leap, days_in_month, days_in_year};


#[test]
fn year_1600() {
    assert!(Year(1600).is_leap_year());
}

#[test]
fn year_1900() {
    assert!(is_leap(1900) == false);
}

#[test]
fn year_2000() {
    assert!(is_leap(2000));
}

#[test]
fn year_2023() {
    assert!(is_leap(2023) == false);
}

#[test]
fn year_2024() {
    assert!(is_leap(2024));
}

#[test]
fn february() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(1900, 2), 28);
    assert_eq!(days_in_month(2000, 2), 29);
}

#[test]
fn other_months() {
    let lengths: Vec<u32> = (1 ..= 12).map(|m| days_in_month(2023, m)).collect();
    assert_eq!(lengths, vec![ 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31 ]);
}

#[test]
fn not_a_month() {
    assert_eq!(days_in_month(2023, 0), 0);
    assert_eq!(days_in_month(2023, 13), 0);
}

#[test]
fn year_lengths() {
    assert_eq!(days_in_year(2000), 366);
    assert_eq!(days_in_year(2100), 365);
    assert_eq!(Year(2024).day_count(), 366);
}
