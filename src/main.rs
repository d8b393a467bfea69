//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::parser::ChatParser;
use chatlens::report::ChatReport;

/// Scale of the widest terminal bar, in cells.
const CHART_WIDTH: usize = 40;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    println!("💬 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!();

    println!("⏳ Parsing chat export...");
    let parse_start = Instant::now();
    let parser = ChatParser::new();
    let messages = parser.parse(Path::new(&args.input))?;
    println!(
        "   Found {} messages ({:.2}s)",
        messages.len(),
        parse_start.elapsed().as_secs_f64()
    );

    println!("📊 Computing statistics...");
    let report = ChatReport::build(&messages)?;

    println!();
    println!("{}", report.stats_table());
    println!("{}", report.weekday_table());

    if !args.no_charts {
        for chart in [
            report.first_contact_chart(),
            report.weekday_chart(),
            report.hourly_chart(),
        ] {
            println!("{}", chart.render(CHART_WIDTH));
        }
    }

    #[cfg(feature = "csv-export")]
    if let Some(ref path) = args.stats_csv {
        chatlens::export::write_table_csv(&report.stats_table(), Path::new(path))?;
        println!("💾 Stats table saved to {}", path);
    }

    #[cfg(feature = "csv-export")]
    if let Some(ref path) = args.weekday_csv {
        chatlens::export::write_table_csv(&report.weekday_table(), Path::new(path))?;
        println!("💾 Weekday table saved to {}", path);
    }

    #[cfg(feature = "json-export")]
    if let Some(ref path) = args.json {
        chatlens::export::write_json_report(&report, Path::new(path))?;
        println!("💾 JSON report saved to {}", path);
    }

    println!();
    println!(
        "✅ Done! {} participants, {} messages analysed in {:.2}s",
        report.participants.len(),
        messages.len(),
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
