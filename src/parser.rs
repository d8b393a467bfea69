//! Line-oriented parser for WhatsApp TXT chat exports.
//!
//! Records are delimited by a newline followed by `[`, so continuation
//! lines of a multi-line message carry no header and stay attached to
//! their record through the split. The fragment before the first delimiter
//! is discarded unconditionally: it is either the leading encryption
//! notice or the chat's very first message, and reconstructing it is a
//! documented limitation of the format, not something this parser papers
//! over.
//!
//! A record whose sender-name pattern fails to match does NOT fail the
//! run: it inherits the last resolved sender. That carries multi-line
//! messages whose header got mangled, at the cost of masking genuinely
//! malformed records; see the note on [`ChatParser::parse_str`].
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ChatParser;
//!
//! let raw = "Messages to this chat are now secured with end-to-end encryption.\n\
//!            [01/01/2021, 10:00:00] Alice: hi\n\
//!            how are you\n\
//!            [01/01/2021, 10:01:00] Bob: good";
//!
//! let messages = ChatParser::new().parse_str(raw)?;
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].body, "hi\nhow are you");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::config::{
    BODY_SEPARATOR, HEADER_TERMINATOR, ParserConfig, RECORD_DELIMITER, SENDER_PATTERN,
};
use crate::error::{ChatlensError, Result};
use crate::message::Message;

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parser::ChatParser;
///
/// let parser = ChatParser::new();
/// let messages = parser.parse("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub struct ChatParser {
    config: ParserConfig,
    sender_re: Regex,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            sender_re: Regex::new(SENDER_PATTERN).unwrap(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let raw = fs::read_to_string(path)?;
        self.parse_str(&raw)
    }

    /// Parses export text into messages, in source order.
    ///
    /// Any unparseable timestamp or missing `: ` separator aborts the run.
    /// A missing sender name is NOT an error while a previous record has
    /// resolved one — the record is attributed to that sender. Whether
    /// that lenience should instead fail is an open policy question; it is
    /// kept because real exports rely on it for mangled multi-line
    /// headers.
    pub fn parse_str(&self, raw: &str) -> Result<Vec<Message>> {
        let mut messages = Vec::new();
        let mut last_sender: Option<String> = None;

        // skip(1): the fragment before the first delimiter has no header.
        for fragment in raw.split(RECORD_DELIMITER).skip(1) {
            let message = self.parse_fragment(fragment, &mut last_sender)?;
            messages.push(message);
        }

        Ok(messages)
    }

    /// Parses one record fragment, threading the last resolved sender.
    fn parse_fragment(&self, fragment: &str, last_sender: &mut Option<String>) -> Result<Message> {
        // Header runs up to the first `] `; without one, the whole fragment
        // reaches the timestamp parser and fails there.
        let (header, rest) = fragment
            .split_once(HEADER_TERMINATOR)
            .unwrap_or((fragment, ""));

        let timestamp = NaiveDateTime::parse_from_str(header, &self.config.date_format)
            .map_err(|e| ChatlensError::parse(format!("invalid timestamp: {e}"), fragment))?;

        let sender = match self.sender_re.find(rest).map(|m| m.as_str()) {
            Some(name) if !name.trim().is_empty() => {
                *last_sender = Some(name.to_string());
                name.to_string()
            }
            _ => last_sender.clone().ok_or_else(|| {
                ChatlensError::parse(
                    "record has no sender name and no earlier record resolved one",
                    fragment,
                )
            })?,
        };

        // Everything after the FIRST `: `; later occurrences belong to the
        // body.
        let (_, body) = rest.split_once(BODY_SEPARATOR).ok_or_else(|| {
            ChatlensError::parse("missing `: ` separator between sender and body", fragment)
        })?;

        Ok(Message::new(timestamp, sender, body))
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}
