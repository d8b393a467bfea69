//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all
//! error cases in the library.
//!
//! # Error Handling Philosophy
//!
//! Chatlens is a one-shot analysis tool: a chat export is either fully
//! valid or externally corrupted, so format errors abort the run and no
//! partial results are produced. A degenerate export (zero messages) is
//! reported as [`ChatlensError::EmptyChat`], distinct from format errors,
//! because downstream averages are undefined on an empty stream.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing exports)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A record in the export could not be parsed.
    ///
    /// Raised for an unparseable timestamp, a missing `: ` separator, or a
    /// record with no resolvable sender. Fatal for the whole run.
    #[error("malformed record starting {fragment:?}: {reason}")]
    Parse {
        /// What was wrong with the record
        reason: String,
        /// Leading part of the offending fragment, for context
        fragment: String,
    },

    /// The export parsed cleanly but contained no messages.
    #[error("no messages found in the export; nothing to analyse")]
    EmptyChat,

    /// CSV writing error.
    #[cfg(feature = "csv-export")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-export")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a parse error, keeping a truncated copy of the offending
    /// fragment for the error message.
    pub fn parse(reason: impl Into<String>, fragment: &str) -> Self {
        const CONTEXT_CHARS: usize = 48;
        let mut context: String = fragment.chars().take(CONTEXT_CHARS).collect();
        if fragment.chars().count() > CONTEXT_CHARS {
            context.push('…');
        }
        ChatlensError::Parse {
            reason: reason.into(),
            fragment: context,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatlensError::Parse { .. })
    }

    /// Returns `true` if this is the degenerate empty-chat error.
    pub fn is_empty_chat(&self) -> bool {
        matches!(self, ChatlensError::EmptyChat)
    }
}

// ============================================================================
// Tests
// ============================================================================
