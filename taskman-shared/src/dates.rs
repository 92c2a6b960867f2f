/// Calendar-date handling for the `date` field of a task
///
/// The date of a task is a plain calendar date with no time component.
/// Two quirks of the surrounding system leak into its wire format:
///
/// - HTML date inputs submit the empty string when cleared, so request
///   bodies may carry `"date": ""` for an unset date.
/// - Relational drivers sometimes surface DATE columns as midnight
///   instants (RFC 3339 timestamps). Naively splitting such a timestamp
///   at `T` shifts the date by one day for anyone east or west of UTC,
///   so the instant has to be read back in the local timezone.
///
/// [`calendar_date`] accepts all three shapes (`""`, `YYYY-MM-DD`,
/// RFC 3339) and [`deserialize_calendar_date`] wires that into serde so
/// both the API and the client parse task dates the same way.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer};

/// Parses a wire date value into a calendar date, resolving instants
/// against the local timezone.
///
/// Returns `None` for an empty or unrecognized value.
pub fn calendar_date(raw: &str) -> Option<NaiveDate> {
    calendar_date_in(raw, &Local)
}

/// Like [`calendar_date`], but resolves timestamps against an explicit
/// timezone. The separate entry point exists so tests can pin the zone.
pub fn calendar_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    // A DATE column surfaced as an instant: the calendar date is the one
    // the instant falls on in the given zone, not the UTC date.
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|instant| instant.with_timezone(tz).date_naive())
}

/// Serde deserializer for task date fields.
///
/// `null`, a missing field (with `#[serde(default)]`), and the empty
/// string all become `None`. A non-empty value that parses as neither a
/// calendar date nor an RFC 3339 timestamp is a deserialization error.
pub fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => calendar_date(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date value: {:?}", s))),
    }
}
