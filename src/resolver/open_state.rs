// ABOUTME: Open-now evaluation for branch and coach availability windows
// ABOUTME: Tri-state OpenState plus the deliberately asymmetric fallback variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::clock::{display_time, ClockValue};
use crate::models::AvailabilityWindow;

/// Result of evaluating an entity's availability windows against "now".
///
/// `Open` and `ClosedNow` carry the literal opening/closing strings
/// (truncated to `HH:MM`) for display; `NoDataToday` means no window
/// matched the reference day or its times could not be read at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OpenState {
    /// Inside today's window (closing time itself still counts as open)
    Open {
        /// Opening time display string
        opens: String,
        /// Closing time display string
        closes: String,
    },

    /// A window exists today but the entity is not open right now
    ClosedNow {
        /// Opening time display string, when the wire value resolved
        opens: Option<String>,
        /// Closing time display string, when the wire value resolved
        closes: Option<String>,
        /// Whether the window wraps past midnight (closing numerically
        /// before opening). Such windows never compare as open; the flag
        /// lets callers surface the data problem instead of hiding it.
        crosses_midnight: bool,
    },

    /// No availability window matched the reference day
    NoDataToday,
}

impl OpenState {
    /// Whether the entity is open right now.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Whether any window matched the reference day at all.
    #[must_use]
    pub fn has_window_today(&self) -> bool {
        !matches!(self, Self::NoDataToday)
    }
}

/// First window matching `day`, case-insensitively. Duplicate entries for
/// the same weekday are ignored beyond the first, per the one-window-per-day
/// invariant on the wire data.
fn window_for_day(windows: &[AvailabilityWindow], day: Weekday) -> Option<&AvailabilityWindow> {
    windows.iter().find(|window| window.is_for_day(day))
}

/// Evaluate a branch's open state for `day` at clock time `now`.
///
/// Rules, in order:
/// 1. no window for `day` → [`OpenState::NoDataToday`];
/// 2. explicit `is_closed` → [`OpenState::ClosedNow`] regardless of time;
/// 3. a missing time on the matched window → `ClosedNow` (a window that
///    lists no hours is closed for the day);
/// 4. a malformed (non-numeric) time → `NoDataToday` — the branch variant
///    treats unreadable hours as absent data;
/// 5. otherwise open iff `opening <= now <= closing`, inclusive on both
///    ends: the closing minute itself still counts as open.
///
/// A window whose closing value is numerically below its opening value
/// never compares as open; it comes back as `ClosedNow` with
/// `crosses_midnight` set.
#[must_use]
pub fn branch_open_state(
    windows: &[AvailabilityWindow],
    day: Weekday,
    now: ClockValue,
) -> OpenState {
    let Some(window) = window_for_day(windows, day) else {
        return OpenState::NoDataToday;
    };

    if window.explicitly_closed() {
        return OpenState::ClosedNow {
            opens: window.opening_hour.as_deref().and_then(display_time),
            closes: window.closing_hour.as_deref().and_then(display_time),
            crosses_midnight: false,
        };
    }

    let (Some(opening_raw), Some(closing_raw)) =
        (window.opening_hour.as_deref(), window.closing_hour.as_deref())
    else {
        // Window present but one or both hours missing: closed for the day.
        return OpenState::ClosedNow {
            opens: window.opening_hour.as_deref().and_then(display_time),
            closes: window.closing_hour.as_deref().and_then(display_time),
            crosses_midnight: false,
        };
    };

    let (Some(opens), Some(closes)) = (display_time(opening_raw), display_time(closing_raw))
    else {
        // Hours present but unreadable: the branch variant reports no data.
        return OpenState::NoDataToday;
    };

    let (Ok(opening), Ok(closing)) = (ClockValue::parse(&opens), ClockValue::parse(&closes))
    else {
        return OpenState::NoDataToday;
    };

    if closing < opening {
        debug!(%opens, %closes, "availability window wraps midnight; treating as closed");
        return OpenState::ClosedNow {
            opens: Some(opens),
            closes: Some(closes),
            crosses_midnight: true,
        };
    }

    if opening <= now && now <= closing {
        OpenState::Open { opens, closes }
    } else {
        OpenState::ClosedNow {
            opens: Some(opens),
            closes: Some(closes),
            crosses_midnight: false,
        }
    }
}

/// Evaluate a branch's open state against the current local day and time.
#[must_use]
pub fn branch_open_state_now(windows: &[AvailabilityWindow]) -> OpenState {
    use chrono::{Datelike, Local};
    branch_open_state(windows, Local::now().weekday(), ClockValue::now())
}

/// Evaluate a coach's availability for `day` at clock time `now`.
///
/// Deliberately permissive where the branch variant is not: a coach with no
/// window for the day, a missing time, or an unreadable time is assumed
/// available, so a data error never hides a coach from the listing. Only an
/// explicit `is_closed` or an out-of-hours clock value answers `false`.
/// This asymmetry with [`branch_open_state`] is observed product behavior,
/// kept as-is rather than unified.
#[must_use]
pub fn coach_is_available(windows: &[AvailabilityWindow], day: Weekday, now: ClockValue) -> bool {
    let Some(window) = window_for_day(windows, day) else {
        return true;
    };

    if window.explicitly_closed() {
        return false;
    }

    let (Some(opening_raw), Some(closing_raw)) =
        (window.opening_hour.as_deref(), window.closing_hour.as_deref())
    else {
        return true;
    };

    let (Ok(opening), Ok(closing)) = (ClockValue::parse(opening_raw), ClockValue::parse(closing_raw))
    else {
        // Unreadable hours: assume available rather than hide the coach.
        return true;
    };

    opening <= now && now <= closing
}

/// Evaluate a coach's availability against the current local day and time.
#[must_use]
pub fn coach_is_available_now(windows: &[AvailabilityWindow]) -> bool {
    use chrono::{Datelike, Local};
    coach_is_available(windows, Local::now().weekday(), ClockValue::now())
}
