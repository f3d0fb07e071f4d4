//! Statistics on the most popular stations and trip.

use crate::errors::{AppError, AppResult};
use crate::models::trip::TripTable;
use crate::utils::colors::{GREEN, RESET, YELLOW, stat_label};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start: String,
    pub end: String,
    pub pair: (String, String),
    pub pair_count: usize,
}

/// Station columns are not optional here: a city file without them ends the
/// session with a MissingColumn error.
pub fn compute(table: &TripTable) -> AppResult<StationStats> {
    if !table.has_stations {
        return Err(AppError::MissingColumn("Start Station".to_string()));
    }

    let (start, _) = super::mode(table.trips.iter().filter_map(|t| t.start_station.as_deref()))
        .ok_or(AppError::NoTrips)?;
    let (end, _) = super::mode(table.trips.iter().filter_map(|t| t.end_station.as_deref()))
        .ok_or(AppError::NoTrips)?;

    let pairs = table.trips.iter().filter_map(|t| {
        match (t.start_station.as_deref(), t.end_station.as_deref()) {
            (Some(s), Some(e)) => Some((s, e)),
            _ => None,
        }
    });
    let ((pair_start, pair_end), pair_count) = super::mode(pairs).ok_or(AppError::NoTrips)?;

    Ok(StationStats {
        start: start.to_string(),
        end: end.to_string(),
        pair: (pair_start.to_string(), pair_end.to_string()),
        pair_count,
    })
}

pub fn report(table: &TripTable) -> AppResult<()> {
    println!("\nCalculating The Most Popular Stations and Trip...\n");
    let started = Instant::now();

    let stats = compute(table)?;

    println!("\n{}", stat_label("Most Commonly Used Start Station is:"));
    println!("{GREEN}{}{RESET}", stats.start);

    println!("\n{}", stat_label("Most Commonly Used End Station is:"));
    println!("{GREEN}{}{RESET}", stats.end);

    println!("\n{}", stat_label("Most Frequent Combination of Start and End Station is:"));
    println!("{GREEN}{} -> {}{RESET}", stats.pair.0, stats.pair.1);
    println!("Count: {YELLOW}{}{RESET}", stats.pair_count);

    super::section_footer(started);
    Ok(())
}
