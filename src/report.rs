//! Report assembly: chart datasets and tables over the aggregates.
//!
//! [`ChatReport`] runs the three aggregation components over a parsed
//! message stream and derives the structures the rendering side consumes:
//! three [`BarChart`] datasets and two [`Table`]s. Rendering itself is
//! plain text — aligned columns for tables, proportional bars for charts.

use std::fmt;

use serde::Serialize;

use crate::error::{ChatlensError, Result};
use crate::message::Message;
use crate::stats::{
    FirstContactCounts, HourHistogram, ParticipantStats, WeekdayHistogram, first_contacts,
    hour_histogram, participant_stats, weekday_histogram,
};

/// All derived statistics for one conversation.
///
/// Aggregates are keyed with ordered maps / fixed arrays, so iterating a
/// report — and therefore rendering or serializing it — is deterministic:
/// the same input yields byte-identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReport {
    /// Message/word counts and averages per participant.
    pub participants: ParticipantStats,

    /// Days on which each participant sent the day's first message.
    pub first_contacts: FirstContactCounts,

    /// Messages per hour of day (0–23).
    pub hourly: HourHistogram,

    /// Messages per weekday, Monday first.
    pub weekdays: WeekdayHistogram,
}

impl ChatReport {
    /// Runs all aggregations over an already-parsed message stream.
    ///
    /// Fails with [`ChatlensError::EmptyChat`] when the stream is empty —
    /// the one degenerate input the aggregation layer reports itself,
    /// since averages are undefined on zero messages.
    pub fn build(messages: &[Message]) -> Result<Self> {
        if messages.is_empty() {
            return Err(ChatlensError::EmptyChat);
        }

        Ok(Self {
            participants: participant_stats(messages),
            first_contacts: first_contacts(messages),
            hourly: hour_histogram(messages),
            weekdays: weekday_histogram(messages),
        })
    }

    // =========================================================================
    // Chart datasets
    // =========================================================================

    /// First contacts per participant.
    pub fn first_contact_chart(&self) -> BarChart {
        BarChart {
            title: "Number of First Contacts VS User".to_string(),
            x_label: "Name of User".to_string(),
            y_label: "Number of First Contacts".to_string(),
            labels: self.first_contacts.keys().cloned().collect(),
            values: self.first_contacts.values().copied().collect(),
        }
    }

    /// Messages per day of week, Monday first.
    pub fn weekday_chart(&self) -> BarChart {
        let (labels, values) = self
            .weekdays
            .iter()
            .map(|(name, count)| (name.to_string(), count))
            .unzip();
        BarChart {
            title: "Number of Messages VS Day of Week".to_string(),
            x_label: "Day of Week".to_string(),
            y_label: "Number of Messages".to_string(),
            labels,
            values,
        }
    }

    /// Messages per hour of day, 0–23.
    pub fn hourly_chart(&self) -> BarChart {
        let (labels, values) = self
            .hourly
            .iter()
            .map(|(hour, count)| (format!("{hour:02}"), count))
            .unzip();
        BarChart {
            title: "Number of Messages VS Hour of Day".to_string(),
            x_label: "Hour of Day (24hr)".to_string(),
            y_label: "Number of Messages".to_string(),
            labels,
            values,
        }
    }

    // =========================================================================
    // Tables
    // =========================================================================

    /// Participant statistics plus first-contact counts.
    ///
    /// Rows are metrics, columns are participants. A participant who never
    /// opened a day shows a first-contact count of 0.
    pub fn stats_table(&self) -> Table {
        let mut headers = vec!["Metric".to_string()];
        headers.extend(self.participants.keys().cloned());

        let mut messages_row = vec!["num_sent_messages".to_string()];
        let mut words_row = vec!["total_words_sent".to_string()];
        let mut average_row = vec!["average_len_message".to_string()];
        let mut first_contact_row = vec!["first_contact_count".to_string()];

        for (name, summary) in &self.participants {
            messages_row.push(summary.message_count.to_string());
            words_row.push(summary.total_words.to_string());
            average_row.push(format!("{:.2}", summary.average_words));
            first_contact_row.push(
                self.first_contacts
                    .get(name)
                    .copied()
                    .unwrap_or(0)
                    .to_string(),
            );
        }

        Table {
            headers,
            rows: vec![messages_row, words_row, average_row, first_contact_row],
        }
    }

    /// Total messages sent per day of the week.
    pub fn weekday_table(&self) -> Table {
        Table {
            headers: vec!["Day of Week".to_string(), "Total Messages Sent".to_string()],
            rows: self
                .weekdays
                .iter()
                .map(|(name, count)| vec![name.to_string(), count.to_string()])
                .collect(),
        }
    }
}

/// A labeled dataset for one bar chart: parallel label/value columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    /// Chart title.
    pub title: String,
    /// Label of the category axis.
    pub x_label: String,
    /// Label of the value axis.
    pub y_label: String,
    /// One label per bar, in display order.
    pub labels: Vec<String>,
    /// One value per bar, parallel to `labels`.
    pub values: Vec<usize>,
}

impl BarChart {
    /// Renders the chart as horizontal text bars, the largest value scaled
    /// to `width` cells.
    pub fn render(&self, width: usize) -> String {
        let max = self.values.iter().copied().max().unwrap_or(0);
        let label_width = self
            .labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        for (label, &value) in self.labels.iter().zip(&self.values) {
            let bar_len = if max == 0 { 0 } else { value * width / max };
            out.push_str(&format!(
                "  {label:>label_width$} | {} {value}\n",
                "█".repeat(bar_len)
            ));
        }
        out
    }
}

/// A plain table: a header row plus data rows of equal width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Column headers.
    pub headers: Vec<String>,
    /// Data rows; every row has one cell per header.
    pub rows: Vec<Vec<String>>,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        write_row(f, &self.headers, &widths)?;
        let dashes: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        write_row(f, &dashes, &widths)?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_row<S: AsRef<str>>(f: &mut fmt::Formatter<'_>, cells: &[S], widths: &[usize]) -> fmt::Result {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, "  ")?;
        }
        write!(f, "{:<width$}", cell.as_ref(), width = widths[i])?;
    }
    writeln!(f)
}
