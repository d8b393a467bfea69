//! Hour-of-day and day-of-week message histograms.
//!
//! Both histograms have a fixed domain: every bucket is present in the
//! result even at zero count, so chart consumers never see sparse maps.
//! Fixed-size arrays make that structural rather than something each
//! builder has to remember to zero-fill.

use chrono::{Datelike, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Weekday display names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Message counts per hour of day, domain 0–23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HourHistogram([usize; 24]);

impl HourHistogram {
    /// Returns the count for one hour.
    ///
    /// Panics if `hour > 23`.
    pub fn get(&self, hour: u32) -> usize {
        self.0[hour as usize]
    }

    /// Iterates `(hour, count)` pairs in hour order, all 24 present.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.0.iter().enumerate().map(|(hour, &count)| (hour as u32, count))
    }

    /// Total messages across all hours.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

/// Message counts per weekday, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekdayHistogram([usize; 7]);

impl WeekdayHistogram {
    /// Returns the count for one weekday.
    pub fn get(&self, day: Weekday) -> usize {
        self.0[day.num_days_from_monday() as usize]
    }

    /// Iterates `(name, count)` pairs from Monday to Sunday, all 7 present.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        WEEKDAY_NAMES.iter().copied().zip(self.0.iter().copied())
    }

    /// Total messages across all weekdays.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

/// Buckets messages by `timestamp.hour()`.
pub fn hour_histogram(messages: &[Message]) -> HourHistogram {
    let mut counts = [0usize; 24];
    for msg in messages {
        counts[msg.timestamp.hour() as usize] += 1;
    }
    HourHistogram(counts)
}

/// Buckets messages by weekday.
pub fn weekday_histogram(messages: &[Message]) -> WeekdayHistogram {
    let mut counts = [0usize; 7];
    for msg in messages {
        counts[msg.timestamp.weekday().num_days_from_monday() as usize] += 1;
    }
    WeekdayHistogram(counts)
}
