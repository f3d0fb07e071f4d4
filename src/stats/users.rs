//! Statistics on bikeshare users: type, gender and birth year.
//!
//! Gender and birth year are best-effort: city files without those columns
//! get a fixed fallback line instead of an error, and the two probes are
//! independent of each other.

use crate::errors::{AppError, AppResult};
use crate::models::trip::TripTable;
use crate::utils::colors::{GREEN, RESET, stat_label};
use crate::utils::formatting::pad_right;
use std::time::Instant;

pub const NO_GENDER_MSG: &str = "Our data does not include gender!..";
pub const NO_BIRTH_YEAR_MSG: &str = "Our data does not include year of birth!..";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

pub fn compute(table: &TripTable) -> AppResult<UserStats> {
    if table.is_empty() {
        return Err(AppError::NoTrips);
    }

    let user_types = super::value_counts(table.trips.iter().map(|t| t.user_type.clone()));

    let genders = if table.has_gender {
        Some(super::value_counts(
            table.trips.iter().filter_map(|t| t.gender.clone()),
        ))
    } else {
        None
    };

    // A column that is present but empty for every row carries no data
    // either, so it falls back the same way as an absent one.
    let years: Vec<i32> = table.trips.iter().filter_map(|t| t.birth_year).collect();
    let birth_years = if table.has_birth_year && !years.is_empty() {
        let earliest = years.iter().copied().min();
        let most_recent = years.iter().copied().max();
        let most_common = super::mode(years.iter().copied());
        match (earliest, most_recent, most_common) {
            (Some(earliest), Some(most_recent), Some((most_common, _))) => Some(BirthYearStats {
                earliest,
                most_recent,
                most_common,
            }),
            _ => None,
        }
    } else {
        None
    };

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

pub fn report(table: &TripTable) -> AppResult<()> {
    println!("\nCalculating User Stats...\n");
    let started = Instant::now();

    let stats = compute(table)?;

    println!("{}", stat_label("Counts of User Types is:"));
    print_counts(&stats.user_types);

    println!("\n{}", stat_label("Counts of Gender is:"));
    match &stats.genders {
        Some(genders) => print_counts(genders),
        None => println!("{NO_GENDER_MSG}"),
    }

    println!("\n{}", stat_label("Earliest, Most Recent and Most Common Year of Birth:"));
    match &stats.birth_years {
        Some(b) => println!(
            "Earliest: {}\nMost Recent: {}\nMost Common: {}",
            b.earliest, b.most_recent, b.most_common
        ),
        None => println!("{NO_BIRTH_YEAR_MSG}"),
    }

    super::section_footer(started);
    Ok(())
}

fn print_counts(counts: &[(String, usize)]) {
    let width = counts.iter().map(|(v, _)| v.len()).max().unwrap_or(0);
    for (value, count) in counts {
        println!("{} {GREEN}{count}{RESET}", pad_right(value, width));
    }
}
