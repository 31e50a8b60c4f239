// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging init plus window and session record helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::fn_params_excessive_bools
)]
//! Shared test utilities for `pulsefit-schedule`

use std::sync::Once;

use pulsefit_schedule::models::{AvailabilityWindow, GroupSession};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG environment variable controls test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Availability window fixture with branch-style field names
pub fn window(day: &str, opens: &str, closes: &str) -> AvailabilityWindow {
    AvailabilityWindow {
        day_of_week: Some(day.to_owned()),
        opening_hour: Some(opens.to_owned()),
        closing_hour: Some(closes.to_owned()),
        is_closed: None,
    }
}

/// Minimal session fixture on a given timestamp
pub fn session(id: &str, session_date: &str) -> GroupSession {
    GroupSession {
        id: id.to_owned(),
        session_date: session_date.to_owned(),
        ..GroupSession::default()
    }
}

/// Session fixture with explicit audience flags
pub fn flagged_session(id: &str, women: bool, kids: bool, free: bool) -> GroupSession {
    GroupSession {
        id: id.to_owned(),
        session_date: "2025-06-02T10:00:00".to_owned(),
        is_for_women: women,
        is_for_kids: kids,
        is_free: free,
        ..GroupSession::default()
    }
}
