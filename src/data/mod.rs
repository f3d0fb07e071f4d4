//! CSV ingestion: resolve the city file, probe columns, derive month and
//! weekday, apply the month/day filters.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::filters::Filters;
use crate::models::trip::{Trip, TripTable};
use crate::utils::date;
use chrono::NaiveDateTime;
use csv::StringRecord;
use std::path::Path;

/// Column positions probed from the header row. The first three are
/// required in every city file; the rest depend on the city.
struct ColumnIndex {
    start_time: usize,
    duration: usize,
    user_type: usize,
    end_time: Option<usize>,
    start_station: Option<usize>,
    end_station: Option<usize>,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndex {
    fn probe(headers: &StringRecord) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require =
            |name: &str| find(name).ok_or_else(|| AppError::MissingColumn(name.to_string()));

        Ok(Self {
            start_time: require("Start Time")?,
            duration: require("Trip Duration")?,
            user_type: require("User Type")?,
            end_time: find("End Time"),
            start_station: find("Start Station"),
            end_station: find("End Station"),
            gender: find("Gender"),
            birth_year: find("Birth Year"),
        })
    }
}

/// Load the trip table for the selected city and apply the month and day
/// filters. The two predicates are independent, so their order does not
/// change the result.
pub fn load_city_data(cfg: &Config, filters: &Filters) -> AppResult<TripTable> {
    let path = cfg.city_file(&filters.city)?;
    if !path.exists() {
        return Err(AppError::MissingDataFile(path.display().to_string()));
    }

    let mut table = read_trips(&path)?;
    table.filter_month(filters.month);
    table.filter_day(filters.day);
    Ok(table)
}

/// Read a full city file into a TripTable, recording which optional
/// columns the file carries.
pub fn read_trips(path: &Path) -> AppResult<TripTable> {
    let mut rdr = csv::Reader::from_path(path)?;
    let headers = rdr.headers()?.clone();
    let cols = ColumnIndex::probe(&headers)?;

    let mut table = TripTable {
        has_stations: cols.start_station.is_some() && cols.end_station.is_some(),
        has_gender: cols.gender.is_some(),
        has_birth_year: cols.birth_year.is_some(),
        ..TripTable::default()
    };

    for record in rdr.records() {
        let record = record?;
        table.trips.push(parse_trip(&record, &cols)?);
    }

    Ok(table)
}

fn parse_trip(record: &StringRecord, cols: &ColumnIndex) -> AppResult<Trip> {
    let start_time = required_timestamp(record, cols.start_time, "Start Time")?;
    let duration_secs = required_f64(record, cols.duration, "Trip Duration")?;
    let user_type = field(record, cols.user_type).to_string();

    Ok(Trip::new(
        start_time,
        optional_timestamp(record, cols.end_time),
        duration_secs,
        optional_string(record, cols.start_station),
        optional_string(record, cols.end_station),
        user_type,
        optional_string(record, cols.gender),
        optional_birth_year(record, cols.birth_year),
    ))
}

fn field<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("").trim()
}

fn required_timestamp(record: &StringRecord, idx: usize, column: &str) -> AppResult<NaiveDateTime> {
    let raw = field(record, idx);
    date::parse_timestamp(raw).ok_or_else(|| AppError::Malformed {
        column: column.to_string(),
        value: raw.to_string(),
    })
}

fn required_f64(record: &StringRecord, idx: usize, column: &str) -> AppResult<f64> {
    let raw = field(record, idx);
    raw.parse::<f64>().map_err(|_| AppError::Malformed {
        column: column.to_string(),
        value: raw.to_string(),
    })
}

fn optional_string(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    let raw = field(record, idx?);
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn optional_timestamp(record: &StringRecord, idx: Option<usize>) -> Option<NaiveDateTime> {
    date::parse_timestamp(field(record, idx?))
}

/// Birth years are stored as floats in the source files ("1992.0").
/// Missing or unparsable values stay empty, the demographics reporter
/// treats them as absent.
fn optional_birth_year(record: &StringRecord, idx: Option<usize>) -> Option<i32> {
    let raw = field(record, idx?);
    raw.parse::<f64>().ok().map(|y| y as i32)
}
