//! Export writers for derived tables and reports.
//!
//! - `csv-export` — any [`Table`] as a CSV file, header row first.
//! - `json-export` — the whole [`ChatReport`] as pretty-printed JSON.

#[cfg(any(feature = "csv-export", feature = "json-export"))]
use std::fs::File;
#[cfg(any(feature = "csv-export", feature = "json-export"))]
use std::path::Path;

#[cfg(any(feature = "csv-export", feature = "json-export"))]
use crate::error::Result;
#[cfg(feature = "json-export")]
use crate::report::ChatReport;
#[cfg(feature = "csv-export")]
use crate::report::Table;

/// Writes a table to CSV, headers first.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::export::write_table_csv;
/// use chatlens::parser::ChatParser;
/// use chatlens::report::ChatReport;
///
/// let messages = ChatParser::new().parse("chat.txt".as_ref())?;
/// let report = ChatReport::build(&messages)?;
/// write_table_csv(&report.weekday_table(), "weekdays.csv".as_ref())?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[cfg(feature = "csv-export")]
pub fn write_table_csv(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new().from_writer(file);

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the full report as pretty-printed JSON.
#[cfg(feature = "json-export")]
pub fn write_json_report(report: &ChatReport, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}
