//! Skyload CLI - Convert drone operations CSV files to JSON
//!
//! ```bash
//! skyload                              # Convert the fixed data layout
//! skyload --input-dir csv --output-dir out
//! ```
//!
//! Reads `pilot_roster.csv`, `drone_fleet.csv` and `missions.csv` from the
//! input directory and writes `pilots.json`, `drones.json` and
//! `missions.json` to the output directory, overwriting previous runs.

use clap::Parser;
use skyload::{run, ConvertConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skyload")]
#[command(about = "Convert drone operations CSV files to JSON", long_about = None)]
struct Cli {
    /// Directory holding the input CSV files
    #[arg(long, default_value = "CSV_data_files")]
    input_dir: PathBuf,

    /// Directory receiving the JSON output files
    #[arg(long, default_value = "data")]
    output_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let config = ConvertConfig {
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        ..ConvertConfig::default()
    };

    match run(&config) {
        Ok(_) => {
            println!("\n🎉 All CSV files converted successfully!");
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}
