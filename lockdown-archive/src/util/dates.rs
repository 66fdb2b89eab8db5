/*!
 Contains date conversion functions for `NSDate` values stored in a keyed archive.
*/

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

/// Seconds between the Unix epoch and the `NSDate` reference date, `2001-01-01T00:00:00Z`
pub const APPLE_EPOCH_OFFSET: i64 = 978_307_200;
const NANOS_PER_SECOND: f64 = 1_000_000_000.;
/// Format used when rendering dates for humans
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Convert an `NS.time` value, in seconds since `2001-01-01T00:00:00Z`, to a UTC date.
///
/// The fractional part is multiplied by 1e9 and truncated to whole nanoseconds. Returns
/// [`None`] for values that are not finite or do not fit in a [`DateTime`].
///
/// # Example:
///
/// ```
/// use lockdown_archive::util::dates::from_ns_time;
///
/// let date = from_ns_time(31536000.5).unwrap();
/// assert_eq!(date.to_rfc3339(), "2002-01-01T00:00:00.500+00:00");
/// ```
pub fn from_ns_time(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * NANOS_PER_SECOND).min(NANOS_PER_SECOND - 1.) as u32;
    let unix_seconds = (whole as i64).checked_add(APPLE_EPOCH_OFFSET)?;
    DateTime::from_timestamp(unix_seconds, nanos)
}

/// Get the date in the machine's local timezone
pub fn get_local_time(date: &DateTime<Utc>) -> DateTime<Local> {
    date.with_timezone(&Local)
}

/// Format a date for display in a report.
///
/// UTC dates render as `2021-06-12 18:03:41 UTC`. Local dates carry their offset instead of a
/// zone name, i.e. `2021-06-12 20:03:41 +02:00`.
pub fn format<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(DISPLAY_FORMAT).to_string()
}

/// Format a date as RFC 3339 in UTC, keeping only as many sub-second digits as needed
pub fn to_rfc3339(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse a date written by [`to_rfc3339`]
pub fn from_rfc3339(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}
