// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod archive;
pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod fetcher;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use archive::{ArchiveContents, ArchiveReader};
pub use config::{Config, ExtractConfig, FetchConfig};
pub use error::{HarvestError, Result};
pub use exporter::CsvExporter;
pub use extractor::{Attribution, ChangelogParser, NameNormalizer, TextCleaner, split_attribution};
pub use fetcher::{ArchiveFetcher, FetchOutcome, FetchStats};
pub use models::{FeatureRecord, RawDocument, VersionSpec};
pub use pipeline::{ExtractPipeline, ExtractReport, ProgressTracker, RunStats};
