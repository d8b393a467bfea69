//! The parsed message type.
//!
//! [`Message`] is the value record the parser produces and every
//! aggregation component consumes. It is immutable once constructed:
//! the parser builds the full sequence, downstream components only read.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2021, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 30, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "good morning everyone");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.word_count(), 3);
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single parsed chat entry.
///
/// # Invariants
///
/// - `sender` is never empty and never contains the export format's field
///   separators (`] ` or `: `).
/// - `timestamp` is always a valid parsed date-time; the parser fails the
///   whole run on an unparseable record rather than constructing a
///   placeholder.
///
/// The timestamp is a [`NaiveDateTime`]: export timestamps are local
/// wall-clock times with no zone marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, in the export's local time.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    ///
    /// May contain newlines: continuation lines of a multi-line message
    /// are already joined by the parser.
    pub body: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date the message was sent on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Word count of the body, split on single spaces.
    ///
    /// The split is exact, not whitespace-class based: consecutive spaces
    /// produce empty "words" and an empty body counts as one word. This
    /// mirrors how the statistics define message length.
    pub fn word_count(&self) -> usize {
        self.body.split(' ').count()
    }
}
