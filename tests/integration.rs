//! Integration tests running the full parse → aggregate pipeline over a
//! realistic export.

use chatlens::parser::ChatParser;
use chatlens::report::ChatReport;
use chatlens::stats::{first_contacts, hour_histogram, participant_stats, weekday_histogram};
use std::fs;

/// Three participants across three days (1 March 2021 was a Monday), with
/// a leading encryption notice, a multi-line message, an embedded `: ` in
/// a body, and one equal-timestamp pair.
fn sample_export() -> &'static str {
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.\n\
     [01/03/2021, 08:15:00] Alice Smith: morning!\n\
     [01/03/2021, 08:16:30] Bob: morning\n\
     how did the demo go?\n\
     [01/03/2021, 09:05:12] Alice Smith: really well\n\
     they want a follow-up: next week\n\
     [02/03/2021, 07:45:00] Bob: coffee later?\n\
     [02/03/2021, 07:45:00] Alice Smith: yes\n\
     [03/03/2021, 22:10:41] Charlie99: anyone awake"
}

fn parse_sample() -> Vec<chatlens::Message> {
    ChatParser::new().parse_str(sample_export()).unwrap()
}

#[test]
fn parses_one_message_per_fragment_minus_discarded() {
    let messages = parse_sample();
    let fragments = sample_export().split("\n[").count();
    assert_eq!(messages.len(), fragments - 1);
    assert_eq!(messages.len(), 6);
}

#[test]
fn multiline_bodies_joined_and_attributed() {
    let messages = parse_sample();
    assert_eq!(messages[1].sender, "Bob");
    assert_eq!(messages[1].body, "morning\nhow did the demo go?");
    assert_eq!(messages[2].body, "really well\nthey want a follow-up: next week");
}

#[test]
fn participant_stats_match_hand_computed_values() {
    let stats = participant_stats(&parse_sample());

    assert_eq!(stats["Alice Smith"].message_count, 3);
    assert_eq!(stats["Alice Smith"].total_words, 9);
    assert_eq!(stats["Alice Smith"].average_words, 3.0);

    assert_eq!(stats["Bob"].message_count, 2);
    assert_eq!(stats["Bob"].total_words, 7);
    assert_eq!(stats["Bob"].average_words, 3.5);

    assert_eq!(stats["Charlie99"].message_count, 1);
    assert_eq!(stats["Charlie99"].average_words, 2.0);
}

#[test]
fn message_counts_sum_to_parsed_total() {
    let messages = parse_sample();
    let stats = participant_stats(&messages);
    let total: usize = stats.values().map(|s| s.message_count).sum();
    assert_eq!(total, messages.len());
}

#[test]
fn first_contacts_cover_every_date_once() {
    let messages = parse_sample();
    let counts = first_contacts(&messages);

    // Day 2 opens with an equal-timestamp pair; Bob is earlier in the file.
    assert_eq!(counts["Alice Smith"], 1);
    assert_eq!(counts["Bob"], 1);
    assert_eq!(counts["Charlie99"], 1);

    let total: usize = counts.values().sum();
    assert_eq!(total, 3); // three distinct calendar dates
}

#[test]
fn histograms_conserve_message_count() {
    let messages = parse_sample();
    let hours = hour_histogram(&messages);
    let weekdays = weekday_histogram(&messages);

    assert_eq!(hours.total(), messages.len());
    assert_eq!(weekdays.total(), messages.len());

    assert_eq!(hours.get(8), 2);
    assert_eq!(hours.get(7), 2);
    assert_eq!(hours.get(9), 1);
    assert_eq!(hours.get(22), 1);
    assert_eq!(hours.get(0), 0);

    assert_eq!(weekdays.get(chrono::Weekday::Mon), 3);
    assert_eq!(weekdays.get(chrono::Weekday::Tue), 2);
    assert_eq!(weekdays.get(chrono::Weekday::Wed), 1);
    assert_eq!(weekdays.get(chrono::Weekday::Sun), 0);
}

#[test]
fn report_pipeline_is_idempotent() {
    let messages_a = parse_sample();
    let messages_b = parse_sample();
    assert_eq!(messages_a, messages_b);

    let report_a = ChatReport::build(&messages_a).unwrap();
    let report_b = ChatReport::build(&messages_b).unwrap();
    assert_eq!(report_a, report_b);

    // Rendered output is byte-identical too.
    assert_eq!(
        report_a.stats_table().to_string(),
        report_b.stats_table().to_string()
    );
    assert_eq!(
        report_a.weekday_table().to_string(),
        report_b.weekday_table().to_string()
    );
    assert_eq!(
        report_a.hourly_chart().render(40),
        report_b.hourly_chart().render(40)
    );
}

#[test]
fn parse_from_file_matches_parse_str() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    fs::write(&path, sample_export()).unwrap();

    let from_file = ChatParser::new().parse(&path).unwrap();
    assert_eq!(from_file, parse_sample());
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = ChatParser::new()
        .parse("does/not/exist.txt".as_ref())
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn stats_table_includes_first_contact_row() {
    let report = ChatReport::build(&parse_sample()).unwrap();
    let table = report.stats_table();

    assert_eq!(
        table.headers,
        vec!["Metric", "Alice Smith", "Bob", "Charlie99"]
    );
    let labels: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "num_sent_messages",
            "total_words_sent",
            "average_len_message",
            "first_contact_count"
        ]
    );
}
