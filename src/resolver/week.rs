// ABOUTME: Monday-first week window arithmetic for the schedule screens
// ABOUTME: WeekWindow holds exactly seven consecutive dates for a signed week offset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Seven consecutive calendar dates, Monday first, for some week offset.
///
/// The invariant (exactly 7 strictly consecutive dates starting on a
/// Monday) holds by construction: the only constructors are
/// [`WeekWindow::containing`] and its local-clock wrapper
/// [`WeekWindow::for_offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    days: [NaiveDate; 7],
}

impl WeekWindow {
    /// Week window for the week containing `today`, shifted by `offset`
    /// weeks (0 = the week of `today`, negative = past, positive = future).
    ///
    /// The Monday on or before `today` is found by subtracting
    /// `weekday_index - 1` days, with Sunday counted as day 7 so a Sunday
    /// steps back six days rather than forward one.
    #[must_use]
    pub fn containing(today: NaiveDate, offset: i64) -> Self {
        let weekday_index = i64::from(today.weekday().number_from_monday());
        let monday = today - Duration::days(weekday_index - 1) + Duration::weeks(offset);

        let mut days = [monday; 7];
        for (position, day) in days.iter_mut().enumerate() {
            *day = monday + Duration::days(position as i64);
        }
        Self { days }
    }

    /// Week window for the current local week, shifted by `offset` weeks.
    #[must_use]
    pub fn for_offset(offset: i64) -> Self {
        Self::containing(Local::now().date_naive(), offset)
    }

    /// The seven dates, Monday first.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate; 7] {
        &self.days
    }

    /// First day of the window (always a Monday).
    #[must_use]
    pub fn monday(&self) -> NaiveDate {
        self.days[0]
    }

    /// Last day of the window (always a Sunday).
    #[must_use]
    pub fn sunday(&self) -> NaiveDate {
        self.days[6]
    }

    /// Date of the given weekday within this window.
    #[must_use]
    pub fn date_of(&self, day: Weekday) -> NaiveDate {
        self.days[day.num_days_from_monday() as usize]
    }

    /// Whether `date` falls inside this window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.monday() && date <= self.sunday()
    }

    /// Iterate the seven dates in order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }
}

impl IntoIterator for &WeekWindow {
    type Item = NaiveDate;
    type IntoIter = std::array::IntoIter<NaiveDate, 7>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}
