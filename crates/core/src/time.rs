//! Elapsed time formatting.

/// Format whole seconds as `"{minutes}m {seconds}s"`.
///
/// # Examples
///
/// ```
/// use tui_memory_core::format_time;
///
/// assert_eq!(format_time(65), "1m 5s");
/// assert_eq!(format_time(0), "0m 0s");
/// ```
pub fn format_time(seconds: u32) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(0), "0m 0s");
        assert_eq!(format_time(59), "0m 59s");
        assert_eq!(format_time(60), "1m 0s");
        assert_eq!(format_time(65), "1m 5s");
        assert_eq!(format_time(3601), "60m 1s");
    }
}
