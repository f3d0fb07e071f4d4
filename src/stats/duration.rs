//! Statistics on the total and average trip duration.

use crate::errors::{AppError, AppResult};
use crate::models::trip::TripTable;
use crate::utils::colors::{GREEN, RESET, stat_label};
use crate::utils::formatting::secs2timedelta;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationStats {
    /// Sum of per-trip durations, truncated to whole seconds.
    pub total_secs: i64,
    /// Arithmetic mean duration, truncated to whole seconds.
    pub mean_secs: i64,
}

pub fn compute(table: &TripTable) -> AppResult<DurationStats> {
    if table.is_empty() {
        return Err(AppError::NoTrips);
    }

    let sum: f64 = table.trips.iter().map(|t| t.duration_secs).sum();
    let mean = sum / table.len() as f64;

    Ok(DurationStats {
        total_secs: sum as i64,
        mean_secs: mean as i64,
    })
}

pub fn report(table: &TripTable) -> AppResult<()> {
    println!("\nCalculating Trip Duration...\n");
    let started = Instant::now();

    let stats = compute(table)?;

    println!("\n{}", stat_label("Total Travel Time is:"));
    println!("{GREEN}{}{RESET}", secs2timedelta(stats.total_secs));

    println!("\n{}", stat_label("Mean Travel Time is:"));
    println!("{GREEN}{}{RESET}", secs2timedelta(stats.mean_secs));

    super::section_footer(started);
    Ok(())
}
