//! Formatting utilities used for CLI outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Render a whole number of seconds in timedelta style:
/// `1:40:00`, `1 day, 1:01:01`, `3 days, 0:00:05`.
pub fn secs2timedelta(total_secs: i64) -> String {
    let days = total_secs / 86_400;
    let rem = total_secs % 86_400;
    let hours = rem / 3_600;
    let minutes = (rem % 3_600) / 60;
    let seconds = rem % 60;

    let hms = format!("{}:{:02}:{:02}", hours, minutes, seconds);

    match days {
        0 => hms,
        1 => format!("1 day, {}", hms),
        n => format!("{} days, {}", n, hms),
    }
}
