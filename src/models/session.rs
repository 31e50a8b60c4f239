// ABOUTME: Group session record for scheduled gym classes
// ABOUTME: Wire-shaped struct with audience flags and timestamp parsing helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ScheduleError;

/// Timestamp layouts the backend has been observed to emit.
///
/// Date-only values are accepted with midnight assumed so a session created
/// without a start time still lands on its calendar day.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A single scheduled class instance bookable by end users.
///
/// Descriptive fields (`title`, `coach`, `branch`) are opaque to the
/// resolver; only `session_date`, `duration`, and the audience flags drive
/// any computation. The record is a read-only snapshot per fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupSession {
    /// Unique identifier; the wire sends either a string or a number
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,

    /// Absolute session timestamp text (date plus optional time of day)
    pub session_date: String,

    /// Session length in minutes, when the backend provides one
    #[serde(alias = "duration_minutes")]
    pub duration: Option<i64>,

    /// Display title
    pub title: Option<String>,

    /// Coach name or reference
    pub coach: Option<String>,

    /// Branch or course reference
    #[serde(alias = "course")]
    pub branch: Option<String>,

    /// Women-only audience flag
    pub is_for_women: bool,

    /// Kids audience flag
    pub is_for_kids: bool,

    /// Free-of-charge flag
    pub is_free: bool,
}

impl GroupSession {
    /// Parsed start timestamp of the session.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::MalformedDate`] when `session_date` matches
    /// none of the accepted layouts. Callers inside the resolver absorb this
    /// into a skipped-record count; it never propagates further.
    pub fn start_time(&self) -> Result<NaiveDateTime, ScheduleError> {
        parse_timestamp(&self.session_date)
    }

    /// Parsed end timestamp: start plus `duration` minutes, when both parse.
    #[must_use]
    pub fn end_time(&self) -> Option<NaiveDateTime> {
        let start = self.start_time().ok()?;
        let minutes = self.duration?;
        start.checked_add_signed(Duration::minutes(minutes))
    }

    /// Whether this session falls on `date`, compared as rendered.
    ///
    /// Calendar-date membership is a string-prefix match against the
    /// `YYYY-MM-DD` form, deliberately without timezone adjustment: the
    /// session timestamp and the bucket date are both taken in the implicit
    /// frame the backend rendered them in.
    #[must_use]
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        let key = date.format("%Y-%m-%d").to_string();
        self.session_date.trim().starts_with(&key)
    }
}

/// Parse a wire timestamp, tolerating the layouts in [`TIMESTAMP_FORMATS`]
/// plus a bare `YYYY-MM-DD` date and a trailing `Z` suffix.
pub(crate) fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ScheduleError> {
    let text = raw.trim().trim_end_matches('Z');

    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(parsed);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }

    Err(ScheduleError::MalformedDate {
        value: raw.to_owned(),
    })
}

/// Accept session ids as either JSON strings or JSON numbers.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Integer(number) => number.to_string(),
        RawId::Float(number) => number.to_string(),
    })
}
