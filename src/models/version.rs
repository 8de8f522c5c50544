// file: src/models/version.rs
// description: static release identity and deterministic archive naming
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One supported QGIS release: a version label and the changelog bundle URL.
/// The configured list is immutable for the lifetime of a run; both pipelines
/// receive it as plain data and never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VersionSpec {
    pub label: String,
    pub url: String,
}

impl VersionSpec {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Archive file name derived from the version label. The same name is used
    /// by the fetcher when storing and by the extractor when locating, which is
    /// what decouples the two pipelines.
    pub fn archive_file_name(&self) -> String {
        format!("qgis_{}_changelog.zip", self.label)
    }

    pub fn archive_path(&self, download_dir: &Path) -> PathBuf {
        download_dir.join(self.archive_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_file_name() {
        let spec = VersionSpec::new("3.44", "https://changelog.qgis.org/en/qgis/version/3.44/md/");
        assert_eq!(spec.archive_file_name(), "qgis_3.44_changelog.zip");
    }

    #[test]
    fn test_archive_path_under_download_dir() {
        let spec = VersionSpec::new("3.0.0", "https://example.org/3.0.0/md/");
        let path = spec.archive_path(Path::new("downloads"));
        assert_eq!(path, Path::new("downloads/qgis_3.0.0_changelog.zip"));
    }
}
