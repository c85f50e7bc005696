//! Conversions from canonical timezone names to UTC offsets.
use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Get the current UTC offset of `canonical_timezone`, e.g. "Africa/Lagos".
///
/// Returns `None` if the timezone name is not recognised.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Convert `date_time` to the local time of `canonical_timezone`.
pub fn to_local_time(date_time: OffsetDateTime, canonical_timezone: &str) -> Option<OffsetDateTime> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| date_time.to_offset(tz.get_offset_utc(&date_time).to_utc()))
}
