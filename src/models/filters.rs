use super::city::City;
use super::trip::Trip;
use crate::utils::date;
use chrono::Weekday;

/// Month filter: "all" or one of January..June (the coverage of the source
/// data files), stored as a 1-based month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u32),
}

impl MonthFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Some(MonthFilter::All);
        }
        date::month_from_name(trimmed).map(MonthFilter::Month)
    }

    /// Row predicate over the derived month column.
    pub fn keeps(&self, trip: &Trip) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => trip.month == *m,
        }
    }
}

/// Day-of-week filter: "all" or a weekday name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    pub fn from_input(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Some(DayFilter::All);
        }
        date::weekday_from_name(trimmed).map(DayFilter::Day)
    }

    pub fn keeps(&self, trip: &Trip) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => trip.weekday == *d,
        }
    }
}

/// The validated (city, month, day) selection for one session. Collected
/// once, never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Filters {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}
