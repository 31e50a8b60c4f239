// ABOUTME: HH*100+MM wall-clock values for availability comparisons
// ABOUTME: Normalizes HH:MM and HH:MM:SS wire strings into comparable integers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;

/// A time of day encoded as `hours * 100 + minutes` (14:05 → 1405).
///
/// This is the comparison form the availability evaluation uses: two clock
/// values order the same way the times of day do, and the inclusive
/// `open <= now <= close` check becomes plain integer comparison. Seconds
/// are always discarded; `"08:00:00"` and `"08:00"` produce the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockValue(u32);

impl ClockValue {
    /// Build from hour and minute components.
    #[must_use]
    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours * 100 + minutes)
    }

    /// Build from a `chrono` time of day, dropping seconds.
    #[must_use]
    pub fn from_time(time: NaiveTime) -> Self {
        Self::from_hm(time.hour(), time.minute())
    }

    /// The current local time of day.
    #[must_use]
    pub fn now() -> Self {
        Self::from_time(Local::now().time())
    }

    /// Parse a wire time string (`HH:MM` or `HH:MM:SS`), truncating any
    /// seconds component before conversion.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::MalformedTime`] when the string does not
    /// yield numeric hour and minute parts.
    pub fn parse(raw: &str) -> Result<Self, ScheduleError> {
        let malformed = || ScheduleError::MalformedTime {
            value: raw.to_owned(),
        };

        let mut parts = raw.trim().splitn(3, ':');
        let hours = parts
            .next()
            .and_then(|part| part.trim().parse::<u32>().ok())
            .ok_or_else(malformed)?;
        let minutes = parts
            .next()
            .and_then(|part| part.trim().parse::<u32>().ok())
            .ok_or_else(malformed)?;

        Ok(Self::from_hm(hours, minutes))
    }

    /// The raw `HH*100+MM` integer.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Truncate a wire time string to its `HH:MM` display form, or `None` when
/// it does not parse. Used to carry the literal opening/closing strings on
/// open-state results without leaking a seconds component into the UI.
#[must_use]
pub(crate) fn display_time(raw: &str) -> Option<String> {
    ClockValue::parse(raw).ok()?;
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(3, ':');
    let hours = parts.next()?.trim();
    let minutes = parts.next()?.trim();
    Some(format!("{hours}:{minutes}"))
}
