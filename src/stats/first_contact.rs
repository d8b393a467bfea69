//! First-contact attribution: who spoke first on each calendar day.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::message::Message;

/// Per-participant count of calendar days on which that participant sent
/// the day's first message.
pub type FirstContactCounts = BTreeMap<String, usize>;

/// Credits, for each calendar date present in the stream, the sender of
/// that date's earliest message with one "first contact".
///
/// The time ordering is computed on a private copy; the caller's slice
/// keeps its file order for the other consumers. The sort is stable, so
/// two messages sharing a timestamp resolve in favor of the one earlier
/// in the file.
///
/// The sum of all counts equals the number of distinct calendar dates in
/// the stream.
///
/// # Example
///
/// ```rust
/// use chatlens::parser::ChatParser;
/// use chatlens::stats::first_contacts;
///
/// let raw = "notice\n\
///            [01/01/2021, 23:50:00] Alice: still up?\n\
///            [02/01/2021, 00:10:00] Bob: barely\n\
///            [02/01/2021, 08:00:00] Alice: morning";
/// let messages = ChatParser::new().parse_str(raw)?;
///
/// let counts = first_contacts(&messages);
/// assert_eq!(counts["Alice"], 1); // Jan 1
/// assert_eq!(counts["Bob"], 1); // Jan 2, 00:10 beats 08:00
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn first_contacts(messages: &[Message]) -> FirstContactCounts {
    let mut by_time: Vec<&Message> = messages.iter().collect();
    by_time.sort_by_key(|msg| msg.timestamp);

    let mut counts = FirstContactCounts::new();
    let mut seen_dates: BTreeSet<NaiveDate> = BTreeSet::new();

    for msg in by_time {
        if seen_dates.insert(msg.date()) {
            *counts.entry(msg.sender.clone()).or_insert(0) += 1;
        }
    }

    counts
}
