// ABOUTME: Pure schedule derivations consumed by the PulseFit booking screens
// ABOUTME: Re-exports week windows, open-state evaluation, bucketing, and categorization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

//! # Schedule Resolver
//!
//! Every screen that shows opening hours, a weekly calendar, or audience
//! badges calls into this module instead of re-deriving date arithmetic
//! inline. All functions are total over their inputs: malformed remote data
//! degrades to `NoDataToday`, an assume-available answer, or a skipped-record
//! count, never an error or a panic (see [`crate::errors`]).
//!
//! The primitives take explicit "today"/"now" arguments so they stay pure
//! and testable; thin `*_now` / `for_offset` wrappers supply the local
//! wall clock for callers that want it.

mod buckets;
mod categories;
mod clock;
mod open_state;
mod week;
mod week_schedule;

pub use buckets::{bucket_sessions_by_date, bucket_sessions_for_date, DayBucket, SessionBuckets};
pub use categories::{
    categorize_sessions, categorize_sessions_within, AudienceCategory, CategoryCounts,
    SessionCategories,
};
pub use clock::ClockValue;
pub use open_state::{
    branch_open_state, branch_open_state_now, coach_is_available, coach_is_available_now, OpenState,
};
pub use week::WeekWindow;
pub use week_schedule::{resolve_week_schedule, resolve_week_schedule_from, WeekSchedule};
