// ABOUTME: Parse-failure taxonomy for untrusted schedule data
// ABOUTME: Defines ScheduleError, absorbed into fallback states at the resolver boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

//! Error types for schedule data parsing.
//!
//! The resolver treats every input as possibly-incomplete remote data, so no
//! error here crosses the public boundary as an `Err` or a panic. The branch
//! open-state evaluation maps failures to [`NoDataToday`], the coach variant
//! assumes availability, and session bucketing skips and counts the record.
//!
//! [`NoDataToday`]: crate::resolver::OpenState::NoDataToday

/// Failures produced while interpreting wire-supplied schedule fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A wall-clock time string could not be reduced to hours and minutes
    #[error("Malformed time of day: {value:?}")]
    MalformedTime {
        /// The offending time string as received from the wire
        value: String,
    },

    /// A session timestamp could not be parsed in any accepted form
    #[error("Malformed session timestamp: {value:?}")]
    MalformedDate {
        /// The offending timestamp string as received from the wire
        value: String,
    },
}
