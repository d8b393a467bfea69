//! Per-participant message and word statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Per-participant statistics, keyed by sender name.
///
/// A `BTreeMap` keeps iteration deterministic, so rendered tables and
/// serialized reports are byte-identical across runs.
pub type ParticipantStats = BTreeMap<String, ParticipantSummary>;

/// Counts and averages for one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantSummary {
    /// Number of messages sent.
    pub message_count: usize,

    /// Total words over all messages, by the naive single-space split
    /// (see [`Message::word_count`]).
    pub total_words: usize,

    /// Mean words per message, rounded to two decimal places.
    pub average_words: f64,
}

/// Computes message counts, word totals, and average message length for
/// every participant in the stream.
///
/// # Example
///
/// ```rust
/// use chatlens::parser::ChatParser;
/// use chatlens::stats::participant_stats;
///
/// let raw = "notice\n\
///            [01/01/2021, 09:00:00] Alice: one two three\n\
///            [01/01/2021, 09:01:00] Alice: one two three four five";
/// let messages = ChatParser::new().parse_str(raw)?;
///
/// let stats = participant_stats(&messages);
/// assert_eq!(stats["Alice"].message_count, 2);
/// assert_eq!(stats["Alice"].total_words, 8);
/// assert_eq!(stats["Alice"].average_words, 4.0);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn participant_stats(messages: &[Message]) -> ParticipantStats {
    let mut totals: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

    for msg in messages {
        let entry = totals.entry(msg.sender()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += msg.word_count();
    }

    totals
        .into_iter()
        .map(|(sender, (message_count, total_words))| {
            let average = if message_count == 0 {
                0.0
            } else {
                round2(total_words as f64 / message_count as f64)
            };
            (
                sender.to_string(),
                ParticipantSummary {
                    message_count,
                    total_words,
                    average_words: average,
                },
            )
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(sender: &str, body: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Message::new(ts, sender, body)
    }

    #[test]
    fn test_counts_and_totals() {
        let messages = vec![
            msg("Alice", "one two three"),
            msg("Bob", "hello"),
            msg("Alice", "four"),
        ];
        let stats = participant_stats(&messages);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats["Alice"].message_count, 2);
        assert_eq!(stats["Alice"].total_words, 4);
        assert_eq!(stats["Bob"].message_count, 1);
        assert_eq!(stats["Bob"].total_words, 1);
    }

    #[test]
    fn test_average_two_decimal_rounding() {
        // 3 + 5 words over 2 messages -> exactly 4.0
        let messages = vec![msg("Alice", "a b c"), msg("Alice", "a b c d e")];
        assert_eq!(participant_stats(&messages)["Alice"].average_words, 4.0);

        // 1 + 1 + 2 words over 3 messages -> 1.333... rounds to 1.33
        let messages = vec![msg("Bob", "a"), msg("Bob", "a"), msg("Bob", "a b")];
        assert_eq!(participant_stats(&messages)["Bob"].average_words, 1.33);
    }

    #[test]
    fn test_empty_body_counts_one_word() {
        let messages = vec![msg("Alice", "")];
        let stats = participant_stats(&messages);
        assert_eq!(stats["Alice"].total_words, 1);
        assert_eq!(stats["Alice"].average_words, 1.0);
    }

    #[test]
    fn test_message_count_conservation() {
        let messages = vec![
            msg("Alice", "x"),
            msg("Bob", "y"),
            msg("Alice", "z"),
            msg("Carol", "w"),
        ];
        let stats = participant_stats(&messages);
        let total: usize = stats.values().map(|s| s.message_count).sum();
        assert_eq!(total, messages.len());
    }

    #[test]
    fn test_empty_stream_yields_empty_stats() {
        assert!(participant_stats(&[]).is_empty());
    }
}
