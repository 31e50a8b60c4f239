// ABOUTME: Weekly availability window record for branches and coaches
// ABOUTME: One weekday's opening hours with alias-tolerant serde field mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One weekday's open/closed window for a branch or a coach.
///
/// The branch endpoint sends `opening_hour`/`closing_hour`; the coach
/// endpoint sends `start_time`/`end_time` for the same concept. Both are
/// accepted here through serde aliases. Times arrive as `HH:MM` or
/// `HH:MM:SS` text and are normalized by the resolver, not at
/// deserialization time, so the original wire strings stay available for
/// display.
///
/// At most one window exists per weekday per entity; the resolver takes the
/// first case-insensitive weekday match and ignores any duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityWindow {
    /// Weekday name as received ("monday".."sunday", any casing), if present
    pub day_of_week: Option<String>,

    /// Opening wall-clock time text (`HH:MM` or `HH:MM:SS`)
    #[serde(alias = "start_time")]
    pub opening_hour: Option<String>,

    /// Closing wall-clock time text (`HH:MM` or `HH:MM:SS`)
    #[serde(alias = "end_time")]
    pub closing_hour: Option<String>,

    /// Explicit closed marker; when absent, closed-ness is inferred from the
    /// absence of both times
    pub is_closed: Option<bool>,
}

impl AvailabilityWindow {
    /// Weekday this window applies to, if the wire name resolves.
    ///
    /// `chrono::Weekday` parsing is case-insensitive and accepts both full
    /// names and three-letter abbreviations, which covers every spelling the
    /// backend has been observed to send.
    #[must_use]
    pub fn weekday(&self) -> Option<Weekday> {
        self.day_of_week
            .as_deref()
            .and_then(|name| name.trim().parse::<Weekday>().ok())
    }

    /// Whether this window is the entry for `day` (case-insensitive match).
    #[must_use]
    pub fn is_for_day(&self, day: Weekday) -> bool {
        self.weekday() == Some(day)
    }

    /// Whether the wire marked this window explicitly closed.
    #[must_use]
    pub fn explicitly_closed(&self) -> bool {
        self.is_closed == Some(true)
    }

    /// Whether both opening and closing times are present on the record.
    #[must_use]
    pub fn has_times(&self) -> bool {
        self.opening_hour.is_some() && self.closing_hour.is_some()
    }
}
