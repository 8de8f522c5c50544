// file: src/fetcher/download.rs
// description: idempotent changelog archive downloads with bounded retry
// reference: https://docs.rs/reqwest

use crate::config::FetchConfig;
use crate::error::{HarvestError, Result};
use crate::models::VersionSpec;
use std::fs;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Downloaded,
    Skipped,
}

#[derive(Debug, Clone, Default)]
pub struct FetchStats {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl FetchStats {
    pub fn attempted(&self) -> usize {
        self.downloaded + self.failed
    }
}

/// Downloads one archive per configured version into the download directory.
/// Re-running is a no-op for versions whose archive already exists, so fetch
/// runs are idempotent and independent from extraction runs.
pub struct ArchiveFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl ArchiveFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Sequentially fetches every version in list order. Per-version failures
    /// are logged and counted, never propagated; only an unusable download
    /// directory aborts the run.
    pub async fn fetch_all(&self, versions: &[VersionSpec]) -> Result<FetchStats> {
        fs::create_dir_all(&self.config.download_dir)?;
        info!("Download directory: {}", self.config.download_dir.display());

        let mut stats = FetchStats::default();

        for spec in versions {
            match self.fetch_one(spec).await {
                Ok(FetchOutcome::Downloaded) => {
                    stats.downloaded += 1;
                    info!("Downloaded archive for version {}", spec.label);
                }
                Ok(FetchOutcome::Skipped) => {
                    stats.skipped += 1;
                    debug!("Archive for version {} already present", spec.label);
                }
                Err(e) => {
                    stats.failed += 1;
                    warn!("Skipping version {}: {}", spec.label, e);
                }
            }
        }

        Ok(stats)
    }

    pub async fn fetch_one(&self, spec: &VersionSpec) -> Result<FetchOutcome> {
        let destination = spec.archive_path(&self.config.download_dir);

        if destination.exists() {
            return Ok(FetchOutcome::Skipped);
        }

        let mut last_error = String::new();

        for attempt in 1..=self.config.retries {
            match self.download(spec).await {
                Ok(bytes) => {
                    self.store(&bytes, spec)?;
                    return Ok(FetchOutcome::Downloaded);
                }
                Err(e) => {
                    last_error = e.to_string();
                    debug!(
                        "Attempt {}/{} for version {} failed: {}",
                        attempt, self.config.retries, spec.label, last_error
                    );
                    if attempt < self.config.retries {
                        tokio::time::sleep(Duration::from_secs(1 << attempt.min(4))).await;
                    }
                }
            }
        }

        Err(HarvestError::Retrieval {
            version: spec.label.clone(),
            message: last_error,
        })
    }

    async fn download(&self, spec: &VersionSpec) -> Result<Vec<u8>> {
        let response = self.client.get(&spec.url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        debug!("Fetched {} bytes from {}", bytes.len(), spec.url);
        Ok(bytes.to_vec())
    }

    /// Writes to a temporary file in the download directory, then renames into
    /// place, so a partial download never satisfies the idempotence check.
    fn store(&self, bytes: &[u8], spec: &VersionSpec) -> Result<()> {
        let destination = spec.archive_path(&self.config.download_dir);

        let mut temp = NamedTempFile::new_in(&self.config.download_dir)?;
        temp.write_all(bytes)?;
        temp.flush()?;
        temp.persist(&destination).map_err(|e| HarvestError::Retrieval {
            version: spec.label.clone(),
            message: format!("could not store archive: {}", e),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fetch_config(dir: &TempDir) -> FetchConfig {
        FetchConfig {
            download_dir: dir.path().to_path_buf(),
            timeout_secs: 5,
            retries: 1,
            user_agent: "changelog_harvest/test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_existing_archive_skipped_without_network() {
        let temp = TempDir::new().unwrap();
        // Unroutable URL: the test only passes if no request is made
        let spec = VersionSpec::new("3.44", "http://192.0.2.1/unreachable.zip");
        fs::write(spec.archive_path(temp.path()), b"existing").unwrap();

        let fetcher = ArchiveFetcher::new(fetch_config(&temp)).unwrap();
        let outcome = fetcher.fetch_one(&spec).await.unwrap();

        assert_eq!(outcome, FetchOutcome::Skipped);
        assert_eq!(fs::read(spec.archive_path(temp.path())).unwrap(), b"existing");
    }

    #[test]
    fn test_store_is_atomic_rename() {
        let temp = TempDir::new().unwrap();
        let spec = VersionSpec::new("3.42", "http://example.invalid/archive.zip");

        let fetcher = ArchiveFetcher::new(fetch_config(&temp)).unwrap();
        fetcher.store(b"zip bytes", &spec).unwrap();

        let destination = spec.archive_path(temp.path());
        assert_eq!(fs::read(&destination).unwrap(), b"zip bytes");
        // No stray temp files left behind
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path() != destination)
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_reports_retrieval_error() {
        let temp = TempDir::new().unwrap();
        let spec = VersionSpec::new("3.40", "http://localhost:1/never-there.zip");

        let fetcher = ArchiveFetcher::new(fetch_config(&temp)).unwrap();
        let result = fetcher.fetch_one(&spec).await;

        assert!(matches!(result, Err(HarvestError::Retrieval { .. })));
        assert!(!spec.archive_path(temp.path()).exists());
    }
}
