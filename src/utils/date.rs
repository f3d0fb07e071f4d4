use chrono::{NaiveDateTime, Weekday};

/// Month names understood by the month filter. The source files only cover
/// January through June, so the vocabulary stops there.
pub const MONTH_NAMES: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Timestamp format used by the city CSV files ("2017-01-01 09:07:57").
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").ok()
}

/// Map a month name to its 1-based index (January=1 .. June=6).
pub fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32 + 1)
}

pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let lower = name.to_lowercase();
    DAY_NAMES
        .iter()
        .position(|d| *d == lower)
        .map(|i| weekday_from_index(i as u32))
}

/// Inverse of `Weekday::num_days_from_monday`.
pub fn weekday_from_index(idx: u32) -> Weekday {
    match idx {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

/// Title-cased English day name ("Monday", "Tuesday", ...).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
