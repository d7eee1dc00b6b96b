#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Clean record construction.
pub mod builder;
/// Command-line entry point shared by the binary.
pub mod cli;
/// Synthesizer configuration types.
pub mod config;
/// Centralized constants: schema vocabularies, defect rates, and defaults.
pub mod constants;
/// Per-field corruption policy table.
pub mod corruption;
/// Record schema and value types.
pub mod data;
/// Row-level defect injection.
pub mod defects;
mod hash;
/// Realistic fake value providers.
pub mod provider;
/// Run summaries of injected defects.
pub mod report;
/// Record sinks (CSV and in-memory).
pub mod sink;
/// Orchestration of the build, corrupt, inject, emit loop.
pub mod synthesizer;
/// Shared type aliases.
pub mod types;
/// Sampling and formatting helpers.
pub mod utils;

mod errors;

pub use builder::RecordBuilder;
pub use config::{DefectRates, RngMode, SynthesizerConfig};
pub use corruption::{CorruptionPolicy, FieldPolicy, Trigger};
pub use data::{Field, FieldValue, SalesRecord};
pub use defects::{RowDefects, RowOutcome};
pub use errors::SynthError;
pub use provider::{FakerProvider, ValueProvider};
pub use report::SynthesisReport;
pub use sink::{CsvSink, MemorySink, RecordSink};
pub use synthesizer::{Emission, Synthesizer};
pub use types::{Cell, OrderId, PolicyLabel, Seed};
