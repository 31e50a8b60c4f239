// ABOUTME: Audience-flag categorization of group sessions for badges and tallies
// ABOUTME: Partitions sessions into women-only, kids-only, free-only, and standard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::GroupSession;

/// Display-badge category of a session, derived from its audience flags.
///
/// The three named categories require their flag to be set *exclusively*;
/// any overlap (for example women-only and free both set) falls through to
/// `Standard`. The raw flags stay on the record, so this precedence only
/// governs badges and tallies, not the underlying data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceCategory {
    /// Women-only flag set, nothing else
    WomenOnly,
    /// Kids flag set, nothing else
    KidsOnly,
    /// Free flag set, nothing else
    FreeOnly,
    /// No flag, or more than one flag
    Standard,
}

impl AudienceCategory {
    /// Category of a single session under the exclusive-flag precedence.
    #[must_use]
    pub fn of(session: &GroupSession) -> Self {
        match (session.is_for_women, session.is_for_kids, session.is_free) {
            (true, false, false) => Self::WomenOnly,
            (false, true, false) => Self::KidsOnly,
            (false, false, true) => Self::FreeOnly,
            _ => Self::Standard,
        }
    }
}

/// Per-category session counts for summary badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    /// Number of women-only sessions
    pub women_only: usize,
    /// Number of kids-only sessions
    pub kids_only: usize,
    /// Number of free-only sessions
    pub free_only: usize,
    /// Number of standard sessions (no flag or overlapping flags)
    pub standard: usize,
}

/// Order-preserving partition of sessions by [`AudienceCategory`].
///
/// The four partitions are disjoint and together contain every input
/// session exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCategories {
    /// Sessions badged women-only
    pub women_only: Vec<GroupSession>,
    /// Sessions badged kids-only
    pub kids_only: Vec<GroupSession>,
    /// Sessions badged free
    pub free_only: Vec<GroupSession>,
    /// Everything else, overlapping-flag sessions included
    pub standard: Vec<GroupSession>,
}

impl SessionCategories {
    /// Sizes of the four partitions.
    #[must_use]
    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            women_only: self.women_only.len(),
            kids_only: self.kids_only.len(),
            free_only: self.free_only.len(),
            standard: self.standard.len(),
        }
    }

    /// Total sessions across all partitions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.women_only.len() + self.kids_only.len() + self.free_only.len() + self.standard.len()
    }
}

/// Partition sessions by audience category, preserving input order within
/// each partition.
#[must_use]
pub fn categorize_sessions(sessions: &[GroupSession]) -> SessionCategories {
    let mut categories = SessionCategories::default();
    for session in sessions {
        let partition = match AudienceCategory::of(session) {
            AudienceCategory::WomenOnly => &mut categories.women_only,
            AudienceCategory::KidsOnly => &mut categories.kids_only,
            AudienceCategory::FreeOnly => &mut categories.free_only,
            AudienceCategory::Standard => &mut categories.standard,
        };
        partition.push(session.clone());
    }
    categories
}

/// Partition only the sessions falling on one of `dates` (weekly summary
/// tallies). Sessions outside the date set, or with an unreadable
/// timestamp, are left out entirely.
#[must_use]
pub fn categorize_sessions_within(
    sessions: &[GroupSession],
    dates: &[NaiveDate],
) -> SessionCategories {
    let in_range: Vec<GroupSession> = sessions
        .iter()
        .filter(|session| dates.iter().any(|&date| session.falls_on(date)))
        .cloned()
        .collect();
    categorize_sessions(&in_range)
}
