//! Offline diary CSV conversion
//!
//! Usage:
//!   diary-csv export <entries.json> [out.csv]
//!   diary-csv import <in.csv>

use tracing_subscriber::EnvFilter;

use food_diary::config::DiaryConfig;
use food_diary::csv_io::{entries_to_csv, import_csv};
use food_diary::tools::diary_csv::{read_csv_file, read_entries_file};

const USAGE: &str = "usage: diary-csv export <entries.json> [out.csv] | diary-csv import <in.csv>";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("food_diary=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = DiaryConfig::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["export", input] | ["export", input, _] => {
            let entries = read_entries_file(input)?;
            let csv = entries_to_csv(&entries, &config);
            match args.get(2) {
                Some(output) => {
                    std::fs::write(output, &csv)?;
                    eprintln!("Wrote {} entries to {}", entries.len(), output);
                }
                None => println!("{}", csv),
            }
        }
        ["import", input] => {
            let text = read_csv_file(input)?;
            let result = import_csv(&text, &config)?;
            let report = serde_json::json!({
                "imported": result.rights.len(),
                "failed": result.lefts.len(),
                "errors": result.lefts.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
                "entries": result.rights,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}
