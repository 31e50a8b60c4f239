// ABOUTME: Week schedule aggregate combining window, buckets, and category tallies
// ABOUTME: The derived view-state the weekly calendar screen renders directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::buckets::{bucket_sessions_by_date, SessionBuckets};
use super::categories::{categorize_sessions_within, SessionCategories};
use super::week::WeekWindow;
use crate::models::GroupSession;

/// Everything the weekly calendar screen needs for one week offset:
/// the seven dates, the per-date session buckets, and the audience tallies
/// restricted to sessions inside the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// The Monday-first week window
    pub week: WeekWindow,
    /// Sessions bucketed onto the seven dates
    pub buckets: SessionBuckets,
    /// Audience partition of the in-window sessions
    pub categories: SessionCategories,
}

/// Resolve the full weekly view-state for the week containing `today`
/// shifted by `offset` weeks. Pure; see [`resolve_week_schedule`] for the
/// local-clock wrapper.
#[must_use]
pub fn resolve_week_schedule_from(
    sessions: &[GroupSession],
    today: NaiveDate,
    offset: i64,
) -> WeekSchedule {
    let week = WeekWindow::containing(today, offset);
    let buckets = bucket_sessions_by_date(sessions, &week);
    let categories = categorize_sessions_within(sessions, week.dates());
    WeekSchedule {
        week,
        buckets,
        categories,
    }
}

/// Resolve the weekly view-state for the current local week shifted by
/// `offset` weeks.
#[must_use]
pub fn resolve_week_schedule(sessions: &[GroupSession], offset: i64) -> WeekSchedule {
    resolve_week_schedule_from(sessions, chrono::Local::now().date_naive(), offset)
}
