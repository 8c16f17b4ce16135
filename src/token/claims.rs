//! Claim annotation for the table views.
//!
//! Registered claim names come from RFC 7519 section 4.1, header parameters
//! from RFC 7515 section 4.1. `name`, `admin` and `optr` are common private
//! claims worth labelling too.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde_json::Value;
use std::fmt::Display;

use super::json::display_value;
use super::timestamp::{format_timestamp_in, is_expired_at};

const KNOWN_CLAIMS: &[(&str, &str)] = &[
    ("alg", "Algorithm"),
    ("typ", "Type"),
    ("sub", "Subject"),
    ("iss", "Issuer"),
    ("aud", "Audience"),
    ("exp", "Expiration Time"),
    ("nbf", "Not Before"),
    ("iat", "Issued At"),
    ("jti", "JWT ID"),
    ("name", "Name"),
    ("admin", "Admin"),
    ("optr", "Operator"),
];

const TIMESTAMP_CLAIMS: &[&str] = &["exp", "nbf", "iat"];

/// Human-readable label for a well-known claim.
pub fn describe_claim(key: &str) -> Option<&'static str> {
    KNOWN_CLAIMS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, description)| *description)
}

/// How a claim's value should be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimValue {
    Text(String),
    /// `nbf` / `iat`
    Timestamp(String),
    /// `exp`
    Expiry { at: String, expired: bool },
}

impl Display for ClaimValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimValue::Text(text) | ClaimValue::Timestamp(text) => write!(f, "{text}"),
            ClaimValue::Expiry { at, expired: true } => write!(f, "{at} (expired)"),
            ClaimValue::Expiry { at, expired: false } => write!(f, "{at} (not expired)"),
        }
    }
}

/// One row of the claims table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRow {
    pub key: String,
    /// `-` for claims without a known description
    pub description: &'static str,
    pub value: ClaimValue,
}

/// Table rows for a decoded header or payload, in document order.
pub fn claim_rows(value: &Value) -> Vec<ClaimRow> {
    claim_rows_at(value, Utc::now(), &Local)
}

/// Same as [`claim_rows`] with an explicit clock and time zone.
pub fn claim_rows_at<Tz>(value: &Value, now: DateTime<Utc>, tz: &Tz) -> Vec<ClaimRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let entries: Vec<(String, &Value)> = match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .map(|(key, claim)| {
            let value = annotate(&key, claim, now, tz);
            ClaimRow {
                description: describe_claim(&key).unwrap_or("-"),
                key,
                value,
            }
        })
        .collect()
}

fn annotate<Tz>(key: &str, claim: &Value, now: DateTime<Utc>, tz: &Tz) -> ClaimValue
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if !TIMESTAMP_CLAIMS.contains(&key) || !claim.is_number() {
        return ClaimValue::Text(display_value(claim));
    }

    let Some(at) = format_timestamp_in(claim, tz) else {
        return ClaimValue::Text(display_value(claim));
    };

    match (key, is_expired_at(claim, now)) {
        ("exp", Some(expired)) => ClaimValue::Expiry { at, expired },
        _ => ClaimValue::Timestamp(at),
    }
}

/// The signing algorithm named in the header, or `Unknown`.
///
/// Missing, empty, `0`, `false` and `null` all count as unknown.
pub fn signature_algorithm(header: &Value) -> String {
    match header.get("alg") {
        Some(Value::String(alg)) if !alg.is_empty() => alg.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
        _ => "Unknown".to_string(),
    }
}
