use chrono::{DateTime, Local, TimeZone, Utc};
use serde_json::Value;
use std::fmt::Display;

/// Year/month/day hour:minute:second, 24-hour clock.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Whether an `exp` claim lies in the past.
///
/// Returns `None` when `exp` is not a JSON number.
pub fn is_expired(exp: &Value) -> Option<bool> {
    is_expired_at(exp, Utc::now())
}

/// Same as [`is_expired`] against an explicit "now".
pub fn is_expired_at(exp: &Value, now: DateTime<Utc>) -> Option<bool> {
    let exp_secs = unix_seconds(exp)?;
    Some(now.timestamp_millis() as f64 > exp_secs * 1000.0)
}

/// A JSON number as seconds. Numbers past the `f64` range come back infinite.
fn unix_seconds(value: &Value) -> Option<f64> {
    let number = value.as_number()?;
    number.as_f64().or_else(|| number.to_string().parse().ok())
}

/// Render Unix seconds as a local date-time string.
///
/// Returns `None` for non-numbers and for values chrono cannot represent.
pub fn format_timestamp(ts: &Value) -> Option<String> {
    format_timestamp_in(ts, &Local)
}

/// Same as [`format_timestamp`] in an explicit time zone.
pub fn format_timestamp_in<Tz>(ts: &Value, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let millis = unix_seconds(ts)? * 1000.0;
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }

    let instant = tz.timestamp_millis_opt(millis.trunc() as i64).single()?;
    Some(instant.format(TIMESTAMP_FORMAT).to_string())
}
