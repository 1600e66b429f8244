use jiff::Zoned;

/// Pattern of [`crate::ErrorInfo::date`], in `yyyy-MM-dd HH:mm:ss.SSS` notation
pub const DATE_PATTERN: &str = "yyyy-MM-dd HH:mm:ss.SSS";

/// Format a timestamp with millisecond precision in its own time zone
pub fn format_date(now: &Zoned) -> String {
    format!("{}.{:03}", now.strftime("%Y-%m-%d %H:%M:%S"), now.millisecond())
}
