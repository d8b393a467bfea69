//! Command-line interface definition using clap.

use clap::Parser;

/// Summary statistics and terminal charts for WhatsApp chat exports.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --no-charts
    chatlens chat.txt --stats-csv stats.csv --weekday-csv weekdays.csv
    chatlens chat.txt --json report.json")]
pub struct Args {
    /// Path to the exported chat .txt file
    pub input: String,

    /// Print tables only, skip the bar charts
    #[arg(long)]
    pub no_charts: bool,

    /// Write the participant statistics table to this CSV file
    #[cfg(feature = "csv-export")]
    #[arg(long, value_name = "PATH")]
    pub stats_csv: Option<String>,

    /// Write the weekday totals table to this CSV file
    #[cfg(feature = "csv-export")]
    #[arg(long, value_name = "PATH")]
    pub weekday_csv: Option<String>,

    /// Write the full report as JSON to this file
    #[cfg(feature = "json-export")]
    #[arg(long, value_name = "PATH")]
    pub json: Option<String>,
}
