// ABOUTME: Calendar-date bucketing of group sessions for the weekly and daily views
// ABOUTME: Prefix-matched membership, timestamp-sorted buckets, skipped-record accounting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::week::WeekWindow;
use crate::models::GroupSession;

/// Sessions falling on one calendar date, sorted by start timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    /// The calendar date this bucket covers
    pub date: NaiveDate,
    /// Sessions on that date, ascending by full timestamp
    pub sessions: Vec<GroupSession>,
}

/// Date-bucketed sessions plus the count of records that could not be
/// placed because their timestamp was unreadable.
///
/// The weekly form always holds exactly 7 buckets (possibly empty); the
/// single-date convenience form holds 1. `skipped` exists for telemetry and
/// test visibility: a malformed record disappears from every bucket but is
/// never lost silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBuckets {
    /// One bucket per requested date, in request order
    pub days: Vec<DayBucket>,
    /// Number of input sessions excluded for an unparseable `session_date`
    pub skipped: usize,
}

impl SessionBuckets {
    /// Bucket for `date`, when it is one of the requested dates.
    #[must_use]
    pub fn for_date(&self, date: NaiveDate) -> Option<&DayBucket> {
        self.days.iter().find(|bucket| bucket.date == date)
    }

    /// Total number of sessions placed across all buckets.
    #[must_use]
    pub fn total_sessions(&self) -> usize {
        self.days.iter().map(|bucket| bucket.sessions.len()).sum()
    }
}

/// Bucket sessions onto a set of calendar dates.
///
/// Membership is a string-prefix match of `session_date` against each
/// date's `YYYY-MM-DD` form, deliberately without timezone adjustment.
/// Records whose timestamp fails to parse entirely are skipped from every
/// bucket and counted once.
fn bucket_onto_dates(sessions: &[GroupSession], dates: &[NaiveDate]) -> SessionBuckets {
    let mut skipped = 0usize;
    let mut parsed = Vec::with_capacity(sessions.len());

    for session in sessions {
        match session.start_time() {
            Ok(start) => parsed.push((session, start)),
            Err(error) => {
                warn!(session_id = %session.id, %error, "skipping session with unreadable timestamp");
                skipped += 1;
            }
        }
    }

    let days = dates
        .iter()
        .map(|&date| {
            let mut members: Vec<_> = parsed
                .iter()
                .filter(|(session, _)| session.falls_on(date))
                .collect();
            // Stable sort keeps equal-timestamp sessions in input order.
            members.sort_by_key(|(_, start)| *start);
            DayBucket {
                date,
                sessions: members
                    .into_iter()
                    .map(|(session, _)| (*session).clone())
                    .collect(),
            }
        })
        .collect();

    SessionBuckets { days, skipped }
}

/// Bucket the full session list onto the seven dates of `week`.
///
/// Sessions dated outside the window land in no bucket and are not counted
/// as skipped; only unreadable timestamps are.
#[must_use]
pub fn bucket_sessions_by_date(sessions: &[GroupSession], week: &WeekWindow) -> SessionBuckets {
    bucket_onto_dates(sessions, week.dates())
}

/// Single-date convenience bucketing used by the daily-schedule view.
///
/// Same shape, matching, ordering, and skip accounting as the weekly form,
/// restricted to one date.
#[must_use]
pub fn bucket_sessions_for_date(sessions: &[GroupSession], date: NaiveDate) -> SessionBuckets {
    bucket_onto_dates(sessions, &[date])
}
