//! Time utilities for log timestamps and elapsed time formatting.

use chrono::Local;
use std::time::Duration;

/// Formats the current local time according to the specified format string.
///
/// The format string follows the same syntax as `chrono::format::strftime`.
///
/// # Examples
///
/// ```
/// use cutil::time::local_now;
///
/// let formatted = local_now("%Y-%m-%d %H:%M:%S");
/// println!("Current time: {}", formatted);
/// ```
pub fn local_now(format: &str) -> String {
    Local::now().format(format).to_string()
}

/// Converts seconds to a media timestamp format with milliseconds.
///
/// For durations less than 1 hour, the format is MM:SS.mmm.
/// For durations 1 hour or more, the format is HH:MM:SS.mmm.
///
/// # Examples
///
/// ```
/// use cutil::time::seconds_to_media_timestamp_with_ms;
///
/// assert_eq!(seconds_to_media_timestamp_with_ms(123.5), "02:03.500");
/// assert_eq!(seconds_to_media_timestamp_with_ms(3661.25), "01:01:01.250");
/// ```
pub fn seconds_to_media_timestamp_with_ms(seconds: f64) -> String {
    let total_seconds = seconds as u32;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    let ms = ((seconds - total_seconds as f64) * 1000.0) as u32;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, ms)
    } else {
        format!("{:02}:{:02}.{:03}", minutes, secs, ms)
    }
}

/// Formats an elapsed duration for log lines.
///
/// Sub-second durations are shown in milliseconds, durations under a minute
/// in seconds and anything longer as a media timestamp.
///
/// # Examples
///
/// ```
/// use cutil::time::pretty_duration;
/// use std::time::Duration;
///
/// assert_eq!(pretty_duration(Duration::from_micros(12_500)), "12.50 ms");
/// assert_eq!(pretty_duration(Duration::from_millis(2_500)), "2.500 s");
/// assert_eq!(pretty_duration(Duration::from_millis(61_250)), "01:01.250");
/// ```
pub fn pretty_duration(duration: Duration) -> String {
    let seconds = duration.as_secs_f64();

    if seconds < 1.0 {
        format!("{:.2} ms", seconds * 1000.0)
    } else if seconds < 60.0 {
        format!("{:.3} s", seconds)
    } else {
        seconds_to_media_timestamp_with_ms(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_now() {
        let now = local_now("%H:%M:%S");
        assert_eq!(now.len(), 8);
        assert_eq!(now.matches(':').count(), 2);
    }

    #[test]
    fn test_seconds_to_media_timestamp_with_ms() {
        assert_eq!("02:03.500", seconds_to_media_timestamp_with_ms(123.5));
        assert_eq!("00:59.125", seconds_to_media_timestamp_with_ms(59.125));
        assert_eq!("01:00:00.000", seconds_to_media_timestamp_with_ms(3600.0));
    }

    #[test]
    fn test_pretty_duration() {
        assert_eq!(pretty_duration(Duration::ZERO), "0.00 ms");
        assert_eq!(pretty_duration(Duration::from_micros(500)), "0.50 ms");
        assert_eq!(pretty_duration(Duration::from_secs(1)), "1.000 s");
        assert_eq!(pretty_duration(Duration::from_secs(59)), "59.000 s");
        assert_eq!(pretty_duration(Duration::from_secs(3725)), "01:02:05.000");
    }
}
