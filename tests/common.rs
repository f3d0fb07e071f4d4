#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bks() -> Command {
    cargo_bin_cmd!("bikestats")
}

/// Ten Chicago trips spread over January and February 2017.
/// January carries six trips, station pair A -> B appears four times,
/// start hour 8 five times and birth year 1990 three times.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-01 08:00:00,2017-01-01 08:10:00,600.0,A,B,Subscriber,Male,1990.0
1,2017-01-02 08:30:00,2017-01-02 08:40:00,600.0,A,B,Subscriber,Female,1990.0
2,2017-01-03 09:00:00,2017-01-03 09:05:00,300.0,A,B,Subscriber,Male,1985.0
3,2017-01-04 10:00:00,2017-01-04 10:15:00,900.0,A,C,Customer,Female,1980.0
4,2017-01-05 08:15:00,2017-01-05 08:25:00,600.0,B,C,Subscriber,Male,1995.0
5,2017-01-06 11:00:00,2017-01-06 11:10:00,600.0,C,A,Subscriber,Female,1990.0
6,2017-02-03 08:45:00,2017-02-03 08:55:00,600.0,B,B,Customer,Male,
7,2017-02-04 12:00:00,2017-02-04 12:20:00,1200.0,A,A,Subscriber,Female,1992.0
8,2017-02-05 08:05:00,2017-02-05 08:10:00,300.0,C,B,Customer,Male,1988.0
9,2017-02-06 14:00:00,2017-02-06 14:05:00,300.0,A,B,Subscriber,,1991.0
";

pub const NEW_YORK_CITY_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-06-01 09:00:00,2017-06-01 09:10:00,600.0,X,Y,Subscriber,Male,1992.0
1,2017-06-02 10:00:00,2017-06-02 10:20:00,1200.0,X,Z,Customer,Female,1988.0
2,2017-06-03 09:30:00,2017-06-03 09:40:00,600.0,Y,X,Subscriber,Male,1992.0
";

/// Washington style file: no station, gender or birth year columns.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,User Type
0,2017-03-01 07:00:00,2017-03-01 07:10:00,600.0,Subscriber
1,2017-03-02 08:00:00,2017-03-02 08:10:00,600.0,Customer
2,2017-03-03 09:00:00,2017-03-03 09:10:00,600.0,Subscriber
";

/// Create a unique data dir inside the system temp dir holding the three
/// fixture city files, removing any leftover from a previous run.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikestats_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");

    fs::write(path.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(path.join("new_york_city.csv"), NEW_YORK_CITY_CSV)
        .expect("write new_york_city.csv");
    fs::write(path.join("washington.csv"), WASHINGTON_CSV).expect("write washington.csv");

    path.to_string_lossy().to_string()
}

/// Library-level config pointing at a fixture data dir.
pub fn test_config(data_dir: &str) -> bikestats::config::Config {
    bikestats::config::Config {
        data_dir: data_dir.to_string(),
        ..Default::default()
    }
}

/// Remove ANSI color sequences so assertions can match plain text.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new("\x1b\\[[0-9;]*m").expect("ansi regex");
    re.replace_all(s, "").to_string()
}
