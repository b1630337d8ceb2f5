use std::time::Duration;

pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    let millis = duration.subsec_millis();
    format!("{minutes:02}:{seconds:02}.{millis:03}")
}

/// Size in kilobytes, rounded to two decimals.
pub fn kb_from_bytes(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 * 100.0).round() / 100.0
}
