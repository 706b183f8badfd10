//! Human-readable formatting of file sizes and timestamps.

use chrono::{DateTime, Utc};

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count with base-1024 units.
///
/// Picks the largest unit in which the value is at least 1 (capped at GB),
/// rounds to two decimals and drops trailing zeros.
///
/// ```
/// use pstore_core::format_size;
///
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{scaled:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

/// Formats a timestamp as `DD/MM/YYYY, HH.MM` in UTC (Indonesian locale
/// ordering, numeric month).
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y, %H.%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_size_zero() {
        assert_eq!(format_size(0), "0 Bytes");
    }

    #[test]
    fn format_size_bytes() {
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(512), "512 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
    }

    #[test]
    fn format_size_kilobytes() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1100), "1.07 KB");
    }

    #[test]
    fn format_size_megabytes() {
        assert_eq!(format_size(1_048_576), "1 MB");
        assert_eq!(format_size(5 * 1024 * 1024 + 256 * 1024), "5.25 MB");
    }

    #[test]
    fn format_size_gigabytes() {
        assert_eq!(format_size(1024 * 1024 * 1024), "1 GB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024 / 2), "1.5 GB");
    }

    #[test]
    fn format_size_caps_at_gigabytes() {
        assert_eq!(format_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn format_date_numeric_fields() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 18, 7, 5, 0).unwrap();
        assert_eq!(format_date(ts), "18/10/2026, 07.05");
    }

    #[test]
    fn format_date_ignores_seconds() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 23, 59, 59).unwrap();
        assert_eq!(format_date(ts), "02/01/2025, 23.59");
    }
}
