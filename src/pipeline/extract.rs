// file: src/pipeline/extract.rs
// description: extraction orchestration across all downloaded archives
// reference: sequential per-archive processing with per-boundary error handling

use crate::archive::ArchiveReader;
use crate::config::Config;
use crate::error::Result;
use crate::exporter::CsvExporter;
use crate::extractor::{ChangelogParser, NameNormalizer};
use crate::models::FeatureRecord;
use crate::pipeline::progress::{ProgressTracker, RunStats};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct ExtractReport {
    pub stats: RunStats,
    pub output_path: PathBuf,
}

/// Walks the configured versions newest-first, parses every document in each
/// archive, and writes the aggregated records. Per-archive and per-document
/// failures are contained; only the final serialization can fail the run.
pub struct ExtractPipeline {
    config: Config,
    colored: bool,
}

impl ExtractPipeline {
    pub fn new(config: Config, colored: bool) -> Self {
        Self { config, colored }
    }

    pub fn run(&self) -> Result<ExtractReport> {
        let reader = ArchiveReader::new();
        let parser = ChangelogParser::new();
        let normalizer = NameNormalizer::new();
        let exporter = CsvExporter::new(&self.config.extract.output_path);

        let mut tracker = ProgressTracker::with_color(self.config.versions.len(), self.colored);
        let mut records: Vec<FeatureRecord> = Vec::new();

        for spec in &self.config.versions {
            let archive_path = spec.archive_path(&self.config.fetch.download_dir);

            if !archive_path.exists() {
                warn!(
                    "No archive for version {} at {}, run `fetch` first",
                    spec.label,
                    archive_path.display()
                );
                tracker.version_skipped(&spec.label);
                continue;
            }

            let contents = match reader.read_documents(&spec.label, &archive_path) {
                Ok(contents) => contents,
                Err(e) => {
                    error!("{}", e);
                    tracker.version_skipped(&spec.label);
                    continue;
                }
            };

            tracker.add_documents(contents.documents.len(), contents.documents_skipped);

            let mut version_records = 0;
            for document in &contents.documents {
                let mut extracted = parser.parse(document);

                if self.config.extract.normalize_names {
                    for record in &mut extracted {
                        record.developer = normalizer.normalize(&record.developer);
                    }
                }

                version_records += extracted.len();
                records.extend(extracted);
            }

            info!(
                "Version {}: {} documents, {} records",
                spec.label,
                contents.documents.len(),
                version_records
            );
            tracker.add_records(version_records);
            tracker.version_processed(&spec.label);
        }

        // Fatal from here on: no output means the run failed
        let output_path = exporter.write(&records)?;

        let stats = tracker.finish();
        print_statistics(&records);

        Ok(ExtractReport { stats, output_path })
    }
}

/// Top-count summaries in the spirit of the fetch/extract console reports.
fn print_statistics(records: &[FeatureRecord]) {
    if records.is_empty() {
        return;
    }

    print_top("Top categories", records.iter().map(|r| r.category.as_str()));
    print_top("Top developers", records.iter().map(|r| r.developer.as_str()));
    print_top("Top funders", records.iter().map(|r| r.funder.as_str()));
}

fn print_top<'a>(title: &str, values: impl Iterator<Item = &'a str>) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        if !value.is_empty() {
            *counts.entry(value).or_default() += 1;
        }
    }

    if counts.is_empty() {
        return;
    }

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    println!("\n{}:", title);
    for (value, count) in ranked.into_iter().take(10) {
        println!("  {:>4}  {}", count, value);
    }
}
