//! Parser configuration and the export format's named constants.
//!
//! The export format's delimiters and patterns live here as named
//! constants rather than inline literals, so a future format variant is a
//! configuration change. Only the date format is configurable today;
//! the separators are structural to the record grammar.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ParserConfig;
//! use chatlens::parser::ChatParser;
//!
//! let config = ParserConfig::new().with_date_format("%d/%m/%Y, %H:%M");
//! let parser = ChatParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Record delimiter: every record after the first begins at a newline
/// followed by an opening bracket.
pub const RECORD_DELIMITER: &str = "\n[";

/// Terminates the timestamp header of a record.
pub const HEADER_TERMINATOR: &str = "] ";

/// Separates the sender name from the message body.
pub const BODY_SEPARATOR: &str = ": ";

/// chrono format for the export's `DD/MM/YYYY, HH:MM:SS` timestamps.
pub const DATE_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Sender names are the leading run of ASCII letters, digits, and
/// whitespace after the timestamp header. The first character outside
/// that set (normally the `:` of the body separator) ends the name.
pub const SENDER_PATTERN: &str = r"^[A-Za-z0-9\s]+";

/// Configuration for chat export parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::{DATE_FORMAT, ParserConfig};
///
/// let config = ParserConfig::new();
/// assert_eq!(config.date_format, DATE_FORMAT);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// chrono format string for record timestamps (default: [`DATE_FORMAT`]).
    pub date_format: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_format: DATE_FORMAT.to_string(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timestamp format.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }
}
