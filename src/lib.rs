//! # Skyload - drone operations CSV to JSON conversion
//!
//! Skyload reads the three drone-operations roster files (pilots, drones,
//! missions), normalizes their fields, and writes JSON arrays for the
//! downstream planning app.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV Files  │────▶│   Parser    │────▶│  Transform  │────▶│ JSON Arrays │
//! │  (3 fixed)  │     │  (raw rows) │     │  (schemas)  │     │  (2-space)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use skyload::{run, ConvertConfig};
//!
//! fn main() {
//!     let summaries = run(&ConvertConfig::default()).unwrap();
//!     println!("Converted {} datasets", summaries.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`schema`] - Declarative per-dataset field tables
//! - [`parser`] - Delimited-text row reading
//! - [`transform`] - Schema-driven row normalization
//! - [`writer`] - Atomic JSON array output
//! - [`pipeline`] - Sequential orchestration

// Core modules
pub mod error;
pub mod schema;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod writer;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, PipelineError, TransformError, WriteError};

// =============================================================================
// Re-exports - Schemas
// =============================================================================

pub use schema::{FieldKind, FieldSpec, RecordSchema, DRONE, MISSION, PILOT};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{detect_delimiter, parse_rows, read_csv_file, ReadResult};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::normalize_row;

// =============================================================================
// Re-exports - Writer
// =============================================================================

pub use writer::write_records;

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{convert_dataset, run, ConvertConfig, Dataset, DatasetSummary};
