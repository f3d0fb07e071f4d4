use super::filters::{DayFilter, MonthFilter};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// One bikeshare ride record, as loaded from a city CSV file.
///
/// `month` and `weekday` are derived from `start_time` at construction and
/// are always populated; the optional fields depend on which columns the
/// city file provides.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub duration_secs: f64,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // Derived columns
    pub month: u32,
    pub weekday: Weekday,
}

impl Trip {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        duration_secs: f64,
        start_station: Option<String>,
        end_station: Option<String>,
        user_type: String,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            duration_secs,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
            month: start_time.month(),
            weekday: start_time.weekday(),
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "--".to_string())
    }
}

/// The in-memory trip table for one city, plus flags recording which
/// optional columns the source file actually carried.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    pub trips: Vec<Trip>,
    pub has_stations: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keep only rows whose derived month matches the filter. "All" is a no-op.
    pub fn filter_month(&mut self, filter: MonthFilter) {
        self.trips.retain(|t| filter.keeps(t));
    }

    /// Keep only rows whose derived weekday matches the filter. "All" is a no-op.
    pub fn filter_day(&mut self, filter: DayFilter) {
        self.trips.retain(|t| filter.keeps(t));
    }

    /// Positional window of up to `size` rows starting at `offset`.
    /// Past the end of the table the window is empty.
    pub fn window(&self, offset: usize, size: usize) -> &[Trip] {
        let start = offset.min(self.trips.len());
        let end = (offset + size).min(self.trips.len());
        &self.trips[start..end]
    }
}
