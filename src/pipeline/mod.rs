//! Conversion orchestration.
//!
//! Runs read -> normalize -> write for each configured dataset in sequence.
//! The datasets are independent, but a failure in any one halts the run
//! immediately: later datasets are not attempted, and outputs already
//! written stay in place.

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, PipelineResult};
use crate::parser::read_csv_file;
use crate::schema::{RecordSchema, DRONE, MISSION, PILOT};
use crate::transform::normalize_row;
use crate::writer::write_records;

/// One input/output pairing with its field table.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Input filename, resolved against [`ConvertConfig::input_dir`].
    pub input_file: String,
    /// Output filename, resolved against [`ConvertConfig::output_dir`].
    pub output_file: String,
    /// Field table driving normalization.
    pub schema: RecordSchema,
}

impl Dataset {
    pub fn new(input_file: &str, output_file: &str, schema: RecordSchema) -> Self {
        Self {
            input_file: input_file.to_string(),
            output_file: output_file.to_string(),
            schema,
        }
    }
}

/// Pipeline configuration.
///
/// Everything the run needs is carried here explicitly, so tests can point
/// the pipeline at temporary directories instead of the real data layout.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Directory holding the input CSV files.
    pub input_dir: PathBuf,
    /// Directory receiving the JSON output files.
    pub output_dir: PathBuf,
    /// Datasets to convert, in execution order.
    pub datasets: Vec<Dataset>,
}

impl Default for ConvertConfig {
    /// The fixed drone-operations layout: `CSV_data_files/` in, `data/` out,
    /// pilots then drones then missions.
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("CSV_data_files"),
            output_dir: PathBuf::from("data"),
            datasets: vec![
                Dataset::new("pilot_roster.csv", "pilots.json", PILOT),
                Dataset::new("drone_fleet.csv", "drones.json", DRONE),
                Dataset::new("missions.csv", "missions.json", MISSION),
            ],
        }
    }
}

/// Outcome of one dataset conversion.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    /// Plural entity name ("pilots").
    pub entity: String,
    /// Number of records written.
    pub records: usize,
    /// Where the output document landed.
    pub output_path: PathBuf,
}

/// Run every configured dataset in sequence, printing a summary line per
/// dataset. Halts on the first failure.
pub fn run(config: &ConvertConfig) -> PipelineResult<Vec<DatasetSummary>> {
    let mut summaries = Vec::with_capacity(config.datasets.len());

    for dataset in &config.datasets {
        let summary = convert_dataset(config, dataset)?;
        println!(
            "✅ Parsed {} {} → {}",
            summary.records,
            summary.entity,
            summary.output_path.display()
        );
        summaries.push(summary);
    }

    Ok(summaries)
}

/// Convert a single dataset: read rows, normalize each against the schema,
/// write the full collection as one JSON array.
pub fn convert_dataset(
    config: &ConvertConfig,
    dataset: &Dataset,
) -> PipelineResult<DatasetSummary> {
    let input_path = config.input_dir.join(&dataset.input_file);
    let output_path = config.output_dir.join(&dataset.output_file);

    let read = read_csv_file(&input_path).map_err(|source| PipelineError::Csv {
        path: display(&input_path),
        source,
    })?;

    let mut records: Vec<Value> = Vec::with_capacity(read.rows.len());
    for (idx, row) in read.rows.iter().enumerate() {
        // Row numbers are 1-based over the kept (non-empty) data rows
        let record =
            normalize_row(row, &dataset.schema).map_err(|source| PipelineError::Transform {
                path: display(&input_path),
                row: idx + 1,
                source,
            })?;
        records.push(record);
    }

    let count = write_records(&records, &output_path).map_err(|source| PipelineError::Write {
        path: display(&output_path),
        source,
    })?;

    Ok(DatasetSummary {
        entity: dataset.schema.plural.to_string(),
        records: count,
        output_path,
    })
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
