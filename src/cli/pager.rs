//! Raw-data pager: prints successive 5-row windows of the filtered table
//! on request.

use crate::cli::prompt::Prompter;
use crate::errors::AppResult;
use crate::models::trip::{Trip, TripTable};
use crate::utils::table::Table;
use std::io::BufRead;

pub const PAGE_SIZE: usize = 5;
pub const RAW_PROMPT: &str = "\nWould you like to display raw data? Enter yes or no.";

/// Two-state loop: prompt yes/no, print the next window on "yes", stop on
/// anything else. Windows past the end of the table are empty but the loop
/// keeps prompting until the user declines.
pub fn run<R: BufRead>(p: &mut Prompter<R>, table: &TripTable) -> AppResult<()> {
    let mut offset = 0;

    while p.ask_yes(RAW_PROMPT)? {
        let rows = table.window(offset, PAGE_SIZE);
        if !rows.is_empty() {
            print!("{}", render_window(table, rows, offset));
        }
        offset += PAGE_SIZE;
    }

    Ok(())
}

/// Render one window as a fixed-width table. Columns follow what the city
/// file actually provides.
pub fn render_window(table: &TripTable, rows: &[Trip], offset: usize) -> String {
    let mut headers = vec![
        String::new(),
        "Start Time".to_string(),
        "End Time".to_string(),
        "Trip Duration".to_string(),
    ];
    if table.has_stations {
        headers.push("Start Station".to_string());
        headers.push("End Station".to_string());
    }
    headers.push("User Type".to_string());
    if table.has_gender {
        headers.push("Gender".to_string());
    }
    if table.has_birth_year {
        headers.push("Birth Year".to_string());
    }

    let data = rows
        .iter()
        .enumerate()
        .map(|(i, trip)| {
            let mut row = vec![
                (offset + i).to_string(),
                trip.start_str(),
                trip.end_str(),
                trip.duration_secs.to_string(),
            ];
            if table.has_stations {
                row.push(trip.start_station.clone().unwrap_or_else(|| "--".to_string()));
                row.push(trip.end_station.clone().unwrap_or_else(|| "--".to_string()));
            }
            row.push(trip.user_type.clone());
            if table.has_gender {
                row.push(trip.gender.clone().unwrap_or_else(|| "--".to_string()));
            }
            if table.has_birth_year {
                row.push(
                    trip.birth_year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "--".to_string()),
                );
            }
            row
        })
        .collect();

    Table::sized_to_content(headers, data).render()
}
