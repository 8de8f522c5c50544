// file: src/exporter/csv.rs
// description: atomic csv serialization of extracted feature records
// reference: https://docs.rs/csv

use crate::error::{HarvestError, Result};
use crate::models::FeatureRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

const HEADER: [&str; 6] = [
    "Version",
    "Release Date",
    "Category",
    "Feature",
    "Developer",
    "Funder",
];

/// Writes the aggregated record sequence as UTF-8 CSV with the fixed header
/// `Version, Release Date, Category, Feature, Developer, Funder`.
///
/// Writing is all-or-nothing: records are serialized to a temporary file next
/// to the target and renamed over it only after a successful flush, so a
/// failed run never clobbers the output of a previous one.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_path: PathBuf,
}

impl CsvExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn write(&self, records: &[FeatureRecord]) -> Result<PathBuf> {
        let parent = match self.output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let temp = NamedTempFile::new_in(&parent)?;

        {
            // Header written explicitly so an empty record set still produces
            // a valid file
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(temp.as_file());
            writer
                .write_record(HEADER)
                .map_err(|e| HarvestError::OutputWrite(e.to_string()))?;
            for record in records {
                writer
                    .serialize(record)
                    .map_err(|e| HarvestError::OutputWrite(e.to_string()))?;
            }
            writer
                .flush()
                .map_err(|e| HarvestError::OutputWrite(e.to_string()))?;
        }

        temp.persist(&self.output_path)
            .map_err(|e| HarvestError::OutputWrite(e.to_string()))?;

        info!(
            "Wrote {} records to {}",
            records.len(),
            self.output_path.display()
        );
        Ok(self.output_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_records() -> Vec<FeatureRecord> {
        vec![
            FeatureRecord {
                version: "3.44".to_string(),
                release_date: "June 2025".to_string(),
                category: "Vector".to_string(),
                feature: "Improved rendering speed".to_string(),
                developer: "Alice".to_string(),
                funder: "Acme Corp".to_string(),
            },
            FeatureRecord {
                version: "3.42".to_string(),
                release_date: String::new(),
                category: "Labels, \"quotes\" and commas".to_string(),
                feature: "Curved labels, with commas".to_string(),
                developer: String::new(),
                funder: String::new(),
            },
        ]
    }

    #[test]
    fn test_header_row_is_fixed() {
        let temp = TempDir::new().unwrap();
        let exporter = CsvExporter::new(temp.path().join("out.csv"));
        exporter.write(&sample_records()).unwrap();

        let content = fs::read_to_string(temp.path().join("out.csv")).unwrap();
        assert!(content.starts_with("Version,Release Date,Category,Feature,Developer,Funder\n"));
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let temp = TempDir::new().unwrap();
        let exporter = CsvExporter::new(temp.path().join("out.csv"));
        let records = sample_records();
        let path = exporter.write(&records).unwrap();

        let mut reader = csv::Reader::from_path(path).unwrap();
        let read_back: Vec<FeatureRecord> = reader
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert_eq!(read_back, records);
    }

    #[test]
    fn test_overwrite_replaces_previous_output() {
        let temp = TempDir::new().unwrap();
        let exporter = CsvExporter::new(temp.path().join("out.csv"));

        exporter.write(&sample_records()).unwrap();
        exporter.write(&sample_records()[..1]).unwrap();

        let mut reader = csv::Reader::from_path(temp.path().join("out.csv")).unwrap();
        assert_eq!(reader.deserialize::<FeatureRecord>().count(), 1);
    }

    #[test]
    fn test_empty_record_set_still_writes_header() {
        let temp = TempDir::new().unwrap();
        let exporter = CsvExporter::new(temp.path().join("out.csv"));
        exporter.write(&[]).unwrap();

        let content = fs::read_to_string(temp.path().join("out.csv")).unwrap();
        assert_eq!(content.trim(), "Version,Release Date,Category,Feature,Developer,Funder");
    }
}
