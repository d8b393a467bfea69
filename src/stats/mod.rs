//! Aggregation engine: statistics derived from the parsed message stream.
//!
//! The three components consume the same read-only message slice and have
//! no dependency on each other; each produces a plain mapping keyed by
//! participant name or bucket label. None of them mutates the input —
//! [`first_contact`] sorts a private copy where it needs time order.

pub mod first_contact;
pub mod participants;
pub mod temporal;

pub use first_contact::{FirstContactCounts, first_contacts};
pub use participants::{ParticipantStats, ParticipantSummary, participant_stats};
pub use temporal::{
    HourHistogram, WEEKDAY_NAMES, WeekdayHistogram, hour_histogram, weekday_histogram,
};
