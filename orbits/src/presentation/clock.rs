const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const YEAR: u64 = 365 * DAY;

/// Simulated time in the largest whole unit, e.g. "12 days" or "1.50 years"
pub fn format_duration(seconds: u64) -> String {
    if seconds >= YEAR {
        format!("{:.2} years", seconds as f64 / YEAR as f64)
    } else if seconds >= DAY {
        format!("{} days", seconds / DAY)
    } else if seconds >= HOUR {
        format!("{} hours", seconds / HOUR)
    } else if seconds >= MINUTE {
        format!("{} minutes", seconds / MINUTE)
    } else {
        format!("{} seconds", seconds)
    }
}
