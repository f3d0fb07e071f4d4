//! Statistics on the most frequent times of travel.

use crate::errors::{AppError, AppResult};
use crate::models::trip::{Trip, TripTable};
use crate::utils::colors::{GREEN, RESET, stat_label};
use crate::utils::date;
use chrono::Weekday;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

pub fn compute(table: &TripTable) -> AppResult<TimeStats> {
    let (month, _) = mode_of(table, |t| t.month)?;
    // Weekdays tie-break in Monday-first order.
    let (day_idx, _) = mode_of(table, |t| t.weekday.num_days_from_monday())?;
    let (hour, _) = mode_of(table, |t| t.start_hour())?;

    Ok(TimeStats {
        month,
        weekday: date::weekday_from_index(day_idx),
        hour,
    })
}

fn mode_of(table: &TripTable, key: impl Fn(&Trip) -> u32) -> AppResult<(u32, usize)> {
    super::mode(table.trips.iter().map(key)).ok_or(AppError::NoTrips)
}

pub fn report(table: &TripTable) -> AppResult<()> {
    println!("\nCalculating The Most Frequent Times of Travel...\n");
    let started = Instant::now();

    let stats = compute(table)?;

    println!("\n{}", stat_label("Most Common Month is:"));
    println!("{GREEN}{}{RESET}", stats.month);

    println!("\n{}", stat_label("Most Common Day of Week is:"));
    println!("{GREEN}{}{RESET}", date::weekday_name(stats.weekday));

    println!("\n{}", stat_label("Most Common Start Hour is:"));
    println!("{GREEN}{}{RESET}", stats.hour);

    super::section_footer(started);
    Ok(())
}
