//! # Chatlens
//!
//! A Rust library for computing summary statistics from WhatsApp TXT chat
//! exports.
//!
//! ## Overview
//!
//! Chatlens runs a two-stage pipeline over a single exported conversation:
//!
//! 1. **Parsing** — [`parser::ChatParser`] reconstructs logical
//!    [`Message`]s from the raw export text, handling multi-line message
//!    bodies, the leading encryption notice, and records with a malformed
//!    or missing sender name.
//! 2. **Aggregation** — the [`stats`] components derive per-participant
//!    counts, word totals and averages, "first contact of the day"
//!    attribution, and hour-of-day / day-of-week histograms.
//!
//! [`report::ChatReport`] bundles the aggregates and produces the bar-chart
//! datasets and tables the CLI renders.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::parser::ChatParser;
//! use chatlens::report::ChatReport;
//!
//! fn main() -> chatlens::Result<()> {
//!     let raw = "Messages to this chat are now secured with end-to-end encryption.\n\
//!                [01/01/2021, 09:00:00] Alice: happy new year\n\
//!                [01/01/2021, 09:05:00] Bob: you too!";
//!
//!     let messages = ChatParser::new().parse_str(raw)?;
//!     assert_eq!(messages.len(), 2);
//!
//!     let report = ChatReport::build(&messages)?;
//!     assert_eq!(report.participants["Alice"].message_count, 1);
//!     assert_eq!(report.first_contacts["Alice"], 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`ChatParser`](parser::ChatParser), raw text to messages
//! - [`config`] — [`ParserConfig`](config::ParserConfig) and the export
//!   format's named constants
//! - [`stats`] — the three aggregation components
//!   - [`stats::participants`] — message/word counts and averages
//!   - [`stats::first_contact`] — who spoke first on each calendar day
//!   - [`stats::temporal`] — hour and weekday histograms
//! - [`report`] — [`ChatReport`](report::ChatReport),
//!   [`BarChart`](report::BarChart), [`Table`](report::Table)
//! - [`export`] — CSV/JSON writers (feature-gated)
//! - [`cli`] — CLI argument types
//! - [`error`] — [`ChatlensError`], [`Result`]
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod message;
pub mod parser;
pub mod report;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::config::ParserConfig;
    pub use crate::parser::ChatParser;

    // Aggregation
    pub use crate::stats::{
        FirstContactCounts, HourHistogram, ParticipantStats, ParticipantSummary,
        WeekdayHistogram, first_contacts, hour_histogram, participant_stats, weekday_histogram,
    };

    // Report assembly and rendering
    pub use crate::report::{BarChart, ChatReport, Table};
}
