// file: src/archive/reader.rs
// description: markdown document enumeration from downloaded zip bundles
// reference: https://docs.rs/zip

use crate::error::{HarvestError, Result};
use crate::models::RawDocument;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};
use zip::ZipArchive;

/// Documents successfully decoded from one archive, plus how many entries had
/// to be skipped. Skips stay inside the archive boundary; only a bundle that
/// cannot be opened at all surfaces as an error to the caller.
#[derive(Debug)]
pub struct ArchiveContents {
    pub documents: Vec<RawDocument>,
    pub documents_skipped: usize,
}

pub struct ArchiveReader;

impl ArchiveReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_documents(&self, version_label: &str, path: &Path) -> Result<ArchiveContents> {
        let file = File::open(path).map_err(|e| HarvestError::ArchiveRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut archive = ZipArchive::new(file).map_err(|e| HarvestError::ArchiveRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut documents = Vec::new();
        let mut documents_skipped = 0;

        for index in 0..archive.len() {
            let mut entry = match archive.by_index(index) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping corrupt entry #{} in {}: {}", index, path.display(), e);
                    documents_skipped += 1;
                    continue;
                }
            };

            if !entry.is_file() || !entry.name().ends_with(".md") {
                continue;
            }

            let name = entry.name().to_string();

            let mut bytes = Vec::with_capacity(entry.size() as usize);
            if let Err(e) = entry.read_to_end(&mut bytes) {
                warn!("Skipping unreadable document {} in {}: {}", name, path.display(), e);
                documents_skipped += 1;
                continue;
            }

            // Strict decoding: a document that is not valid UTF-8 is dropped,
            // its siblings are unaffected
            match String::from_utf8(bytes) {
                Ok(content) => {
                    debug!("Read document {} ({} bytes)", name, content.len());
                    documents.push(RawDocument::new(version_label, name, content));
                }
                Err(e) => {
                    let parse_error = HarvestError::DocumentParse {
                        document: name,
                        message: e.to_string(),
                    };
                    warn!("{}", parse_error);
                    documents_skipped += 1;
                }
            }
        }

        Ok(ArchiveContents {
            documents,
            documents_skipped,
        })
    }
}

impl Default for ArchiveReader {
    fn default() -> Self {
        Self::new()
    }
}
