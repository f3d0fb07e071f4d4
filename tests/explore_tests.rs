use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{CHICAGO_CSV, bks, setup_data_dir, strip_ansi};

#[test]
fn test_explore_full_run_chicago() {
    let dir = setup_data_dir("explore_full_run");

    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(contains("Calculating The Most Frequent Times of Travel..."))
        .stdout(contains("Calculating The Most Popular Stations and Trip..."))
        .stdout(contains("Calculating Trip Duration..."))
        .stdout(contains("Calculating User Stats..."))
        .stdout(contains("This took"))
        .stdout(contains("--o--o--o"));
}

#[test]
fn test_explore_reports_expected_values() {
    let dir = setup_data_dir("explore_values");

    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Most Common Day of Week is:"))
        .stdout(contains("Monday"))
        .stdout(contains("Most Frequent Combination of Start and End Station is:"))
        .stdout(contains("A -> B"))
        .stdout(contains("Total Travel Time is:"))
        .stdout(contains("1:40:00"))
        .stdout(contains("0:10:00"))
        .stdout(contains("Subscriber"))
        .stdout(contains("Earliest: 1980"))
        .stdout(contains("Most Recent: 1995"))
        .stdout(contains("Most Common: 1990"));
}

#[test]
fn test_explore_plain_text_report_lines() {
    let dir = setup_data_dir("explore_plain");

    let assert = bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success();
    let plain = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stdout));

    assert!(plain.contains("Most Common Month is:\n1\n"));
    assert!(plain.contains("Most Common Day of Week is:\nMonday\n"));
    assert!(plain.contains("Most Common Start Hour is:\n8\n"));
    assert!(plain.contains("Counts of User Types is:\nSubscriber 7\nCustomer   3\n"));
    assert!(plain.contains("Counts of Gender is:\nMale   5\nFemale 4\n"));
}

#[test]
fn test_explore_reprompts_on_invalid_answers() {
    let dir = setup_data_dir("explore_reprompt");

    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("denver\nchicago\nall day\nall\nfunday\nmonday\nno\nno\n")
        .assert()
        .success()
        .stdout(
            contains("Which city data would you like to see: Chicago, New York City or Washington?")
                .count(2),
        )
        .stdout(contains("Most Common Start Hour is:"));
}

#[test]
fn test_explore_input_is_case_insensitive() {
    let dir = setup_data_dir("explore_case");

    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("CHICAGO\nJanuary\nMONDAY\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Most Common Month is:"));
}

#[test]
fn test_explore_shows_raw_data_pages() {
    let dir = setup_data_dir("explore_raw");

    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("chicago\nall\nall\nyes\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Would you like to display raw data? Enter yes or no."))
        .stdout(contains("Start Station"))
        .stdout(contains("2017-01-01 08:00:00"))
        .stdout(contains("2017-02-06 14:00:00"));
}

#[test]
fn test_explore_restart_runs_a_second_session() {
    let dir = setup_data_dir("explore_restart");

    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("chicago\nall\nall\nno\nyes\nnew york city\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!").count(2))
        .stdout(contains("X -> Y"));
}

#[test]
fn test_explore_missing_station_columns_fail() {
    let dir = setup_data_dir("explore_no_stations");

    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("washington\nall\nall\n")
        .assert()
        .failure()
        .stderr(contains("Missing column: Start Station"));
}

#[test]
fn test_explore_demographic_fallback_messages() {
    // Station columns present, gender and birth year absent.
    let mut path: PathBuf = env::temp_dir();
    path.push("explore_fallback_bikestats_data");
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    fs::write(
        path.join("washington.csv"),
        "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-01 07:00:00,2017-03-01 07:10:00,600.0,P,Q,Subscriber
1,2017-03-02 08:00:00,2017-03-02 08:10:00,600.0,P,Q,Customer
",
    )
    .expect("write washington.csv");
    let dir = path.to_string_lossy().to_string();

    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("washington\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Our data does not include gender!.."))
        .stdout(contains("Our data does not include year of birth!.."));
}

#[test]
fn test_explore_empty_filter_result_fails() {
    let dir = setup_data_dir("explore_empty");

    // The fixture has no June trips in Chicago.
    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("chicago\njune\nall\n")
        .assert()
        .failure()
        .stderr(contains("No trips match the selected filters"));
}

#[test]
fn test_explore_missing_data_file_fails() {
    let mut path: PathBuf = env::temp_dir();
    path.push("explore_missing_file_data");
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    let dir = path.to_string_lossy().to_string();

    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("chicago\nall\nall\n")
        .assert()
        .failure()
        .stderr(contains("Data file not found"))
        .stderr(contains("chicago.csv"));
}

#[test]
fn test_explore_closed_input_during_filters_fails() {
    let dir = setup_data_dir("explore_eof");

    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("chicago\n")
        .assert()
        .failure()
        .stderr(contains("Input stream closed"));
}

#[test]
fn test_explore_closed_input_after_stats_exits_cleanly() {
    let dir = setup_data_dir("explore_eof_after_stats");

    // EOF at the raw-data prompt counts as "no", and again at the restart
    // prompt, so the session ends without an error.
    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("chicago\nall\nall\n")
        .assert()
        .success()
        .stdout(contains("This took"));
}

#[test]
fn test_explore_malformed_duration_fails() {
    let mut path: PathBuf = env::temp_dir();
    path.push("explore_malformed_data");
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    let broken = CHICAGO_CSV.replace("600.0,A,B,Subscriber,Male,1990.0", "oops,A,B,Subscriber,Male,1990.0");
    fs::write(path.join("chicago.csv"), broken).expect("write chicago.csv");
    let dir = path.to_string_lossy().to_string();

    bks()
        .args(["--data-dir", &dir, "explore"])
        .write_stdin("chicago\nall\nall\n")
        .assert()
        .failure()
        .stderr(contains("Malformed value 'oops' in column 'Trip Duration'"));
}
