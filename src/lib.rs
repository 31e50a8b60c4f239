// ABOUTME: Schedule resolution core for the PulseFit gym booking platform
// ABOUTME: Pure, stateless derivation of open-state, week windows, and session buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

#![deny(unsafe_code)]

//! # PulseFit Schedule
//!
//! Foundation crate providing the schedule-resolution logic shared by the
//! PulseFit booking screens: branch and coach opening hours, weekly class
//! calendars, and audience-tag summaries. Every public function is a pure
//! computation over records fetched from the REST collaborator; the crate
//! performs no I/O, holds no shared state, and never panics on remote data.
//!
//! ## Modules
//!
//! - **models**: wire-shaped records (`AvailabilityWindow`, `GroupSession`)
//! - **resolver**: week windows, open-state evaluation, session bucketing
//!   and audience categorization
//! - **errors**: parse-failure taxonomy absorbed at the resolver boundary
//! - **context**: explicit login session state passed to the network layer

/// Parse-failure taxonomy for untrusted schedule data
pub mod errors;

/// Wire-shaped data records supplied by the REST collaborator
pub mod models;

/// Pure schedule derivations consumed by the booking screens
pub mod resolver;

/// Explicit login session state (no ambient globals)
pub mod context;

pub use context::SessionContext;
pub use errors::ScheduleError;
pub use models::{AvailabilityWindow, GroupSession};
pub use resolver::{
    branch_open_state, bucket_sessions_by_date, bucket_sessions_for_date, categorize_sessions,
    categorize_sessions_within, coach_is_available, resolve_week_schedule, AudienceCategory,
    CategoryCounts, ClockValue, DayBucket, OpenState, SessionBuckets, SessionCategories,
    WeekSchedule, WeekWindow,
};
