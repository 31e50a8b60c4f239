// ABOUTME: Integration tests for branch and coach open-state evaluation
// ABOUTME: Covers inclusive boundaries, fallback asymmetry, and midnight-crossing windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Weekday;
use common::window;
use pulsefit_schedule::models::AvailabilityWindow;
use pulsefit_schedule::resolver::{
    branch_open_state, coach_is_available, ClockValue, OpenState,
};

#[test]
fn open_within_hours_and_inclusive_on_both_boundaries() {
    common::init_test_logging();
    let windows = vec![window("monday", "08:00", "22:00")];

    for now in [
        ClockValue::from_hm(8, 0),   // opening minute
        ClockValue::from_hm(14, 30),
        ClockValue::from_hm(22, 0),  // closing minute still counts as open
    ] {
        let state = branch_open_state(&windows, Weekday::Mon, now);
        assert!(state.is_open(), "expected open at {now:?}");
    }
}

#[test]
fn closed_just_outside_the_window() {
    let windows = vec![window("monday", "08:00", "22:00")];

    for now in [ClockValue::from_hm(7, 59), ClockValue::from_hm(22, 1)] {
        let state = branch_open_state(&windows, Weekday::Mon, now);
        assert_eq!(
            state,
            OpenState::ClosedNow {
                opens: Some("08:00".to_owned()),
                closes: Some("22:00".to_owned()),
                crosses_midnight: false,
            }
        );
    }
}

#[test]
fn open_state_carries_display_strings() {
    let windows = vec![window("monday", "08:00", "22:00")];
    let state = branch_open_state(&windows, Weekday::Mon, ClockValue::from_hm(9, 0));
    assert_eq!(
        state,
        OpenState::Open {
            opens: "08:00".to_owned(),
            closes: "22:00".to_owned(),
        }
    );
}

#[test]
fn seconds_in_wire_times_are_ignored() {
    let with_seconds = vec![window("monday", "08:00:00", "22:00:00")];
    let without = vec![window("monday", "08:00", "22:00")];

    for now in [
        ClockValue::from_hm(7, 59),
        ClockValue::from_hm(8, 0),
        ClockValue::from_hm(22, 0),
        ClockValue::from_hm(22, 1),
    ] {
        assert_eq!(
            branch_open_state(&with_seconds, Weekday::Mon, now),
            branch_open_state(&without, Weekday::Mon, now),
        );
    }
}

#[test]
fn no_window_for_the_day_is_no_data() {
    assert_eq!(
        branch_open_state(&[], Weekday::Mon, ClockValue::from_hm(10, 0)),
        OpenState::NoDataToday
    );

    let other_days = vec![window("tuesday", "08:00", "22:00")];
    assert_eq!(
        branch_open_state(&other_days, Weekday::Mon, ClockValue::from_hm(10, 0)),
        OpenState::NoDataToday
    );
}

#[test]
fn coach_with_no_data_is_assumed_available() {
    // Asymmetric on purpose: the branch variant answers NoDataToday for the
    // same inputs, the coach variant must not hide the coach.
    assert!(coach_is_available(&[], Weekday::Mon, ClockValue::from_hm(10, 0)));

    let malformed = vec![window("monday", "soon", "later")];
    assert!(coach_is_available(&malformed, Weekday::Mon, ClockValue::from_hm(10, 0)));
    assert_eq!(
        branch_open_state(&malformed, Weekday::Mon, ClockValue::from_hm(10, 0)),
        OpenState::NoDataToday
    );
}

#[test]
fn coach_window_evaluates_with_inclusive_boundaries() {
    let windows = vec![window("monday", "08:00", "22:00")];
    assert!(coach_is_available(&windows, Weekday::Mon, ClockValue::from_hm(8, 0)));
    assert!(coach_is_available(&windows, Weekday::Mon, ClockValue::from_hm(22, 0)));
    assert!(!coach_is_available(&windows, Weekday::Mon, ClockValue::from_hm(7, 59)));
    assert!(!coach_is_available(&windows, Weekday::Mon, ClockValue::from_hm(22, 1)));
}

#[test]
fn explicit_closed_flag_wins_regardless_of_time() {
    let windows = vec![AvailabilityWindow {
        is_closed: Some(true),
        ..window("monday", "08:00", "22:00")
    }];

    let state = branch_open_state(&windows, Weekday::Mon, ClockValue::from_hm(12, 0));
    assert!(!state.is_open());
    assert!(state.has_window_today());
    assert!(!coach_is_available(&windows, Weekday::Mon, ClockValue::from_hm(12, 0)));
}

#[test]
fn window_without_times_is_closed_for_branches_available_for_coaches() {
    let windows = vec![AvailabilityWindow {
        day_of_week: Some("monday".to_owned()),
        ..AvailabilityWindow::default()
    }];

    let state = branch_open_state(&windows, Weekday::Mon, ClockValue::from_hm(12, 0));
    assert_eq!(
        state,
        OpenState::ClosedNow {
            opens: None,
            closes: None,
            crosses_midnight: false,
        }
    );
    assert!(coach_is_available(&windows, Weekday::Mon, ClockValue::from_hm(12, 0)));
}

#[test]
fn day_name_matching_is_case_insensitive() {
    let windows = vec![window("MONDAY", "08:00", "22:00")];
    assert!(branch_open_state(&windows, Weekday::Mon, ClockValue::from_hm(9, 0)).is_open());
}

#[test]
fn coach_wire_aliases_feed_the_same_evaluation() {
    let windows: Vec<AvailabilityWindow> = serde_json::from_str(
        r#"[{"day_of_week": "monday", "start_time": "09:00:00", "end_time": "17:00:00"}]"#,
    )
    .unwrap();

    assert!(coach_is_available(&windows, Weekday::Mon, ClockValue::from_hm(9, 0)));
    assert!(!coach_is_available(&windows, Weekday::Mon, ClockValue::from_hm(17, 1)));
}

#[test]
fn midnight_crossing_window_never_opens_and_is_flagged() {
    let windows = vec![window("friday", "22:00", "02:00")];

    for now in [
        ClockValue::from_hm(23, 0), // inside the intended late-night range
        ClockValue::from_hm(1, 0),  // inside the intended early-morning range
        ClockValue::from_hm(12, 0),
    ] {
        let state = branch_open_state(&windows, Weekday::Fri, now);
        assert_eq!(
            state,
            OpenState::ClosedNow {
                opens: Some("22:00".to_owned()),
                closes: Some("02:00".to_owned()),
                crosses_midnight: true,
            },
            "at {now:?}"
        );
    }

    // The coach comparison shares the limitation, without the flag.
    assert!(!coach_is_available(&windows, Weekday::Fri, ClockValue::from_hm(23, 0)));
}

#[test]
fn first_matching_window_wins_over_duplicates() {
    let windows = vec![
        window("monday", "08:00", "12:00"),
        window("monday", "14:00", "22:00"),
    ];

    assert!(branch_open_state(&windows, Weekday::Mon, ClockValue::from_hm(9, 0)).is_open());
    // The duplicate afternoon window is ignored.
    assert!(!branch_open_state(&windows, Weekday::Mon, ClockValue::from_hm(15, 0)).is_open());
}

#[test]
fn repeated_evaluation_is_byte_identical() {
    let windows = vec![window("monday", "08:00", "22:00")];
    let now = ClockValue::from_hm(9, 30);

    let first = serde_json::to_vec(&branch_open_state(&windows, Weekday::Mon, now)).unwrap();
    let second = serde_json::to_vec(&branch_open_state(&windows, Weekday::Mon, now)).unwrap();
    assert_eq!(first, second);
}
