// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{HarvestError, Result};
use crate::models::VersionSpec;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Changelog pages are published per release under a fixed URL shape.
const CHANGELOG_URL_BASE: &str = "https://changelog.qgis.org/en/qgis/version";

/// Labels of every release with a published changelog bundle, newest first.
/// Output ordering follows this list, so keep it sorted by release recency.
const VERSION_LABELS: [&str; 23] = [
    "3.44", "3.42", "3.40", "3.38", "3.36", "3.34", "3.32", "3.30", "3.28", "3.26", "3.24", "3.22",
    "3.20", "3.18", "3.16", "3.14", "3.12", "3.10", "3.8", "3.6", "3.4", "3.2", "3.0.0",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub versions: Vec<VersionSpec>,
    pub fetch: FetchConfig,
    pub extract: ExtractConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    pub download_dir: PathBuf,
    pub timeout_secs: u64,
    pub retries: u32,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractConfig {
    pub output_path: PathBuf,
    pub normalize_names: bool,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CHANGELOG_HARVEST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            versions: VERSION_LABELS
                .iter()
                .map(|label| {
                    VersionSpec::new(*label, format!("{}/{}/md/", CHANGELOG_URL_BASE, label))
                })
                .collect(),
            fetch: FetchConfig {
                download_dir: PathBuf::from("qgis_downloads"),
                timeout_secs: 60,
                retries: 3,
                user_agent: format!("changelog_harvest/{}", env!("CARGO_PKG_VERSION")),
            },
            extract: ExtractConfig {
                output_path: PathBuf::from("qgis_features_extracted.csv"),
                normalize_names: true,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.versions.is_empty() {
            return Err(HarvestError::Config(
                "at least one version must be configured".to_string(),
            ));
        }

        for spec in &self.versions {
            if spec.label.trim().is_empty() {
                return Err(HarvestError::Config(
                    "version labels must be non-empty".to_string(),
                ));
            }
            if !spec.url.starts_with("http") {
                return Err(HarvestError::Config(format!(
                    "version {} has a non-http url: {}",
                    spec.label, spec.url
                )));
            }
        }

        if self.fetch.retries == 0 {
            return Err(HarvestError::Config(
                "retries must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_covers_all_releases() {
        let config = Config::default_config();
        assert_eq!(config.versions.len(), 23);
        // Newest first, spanning 3.0.0 through 3.44.
        assert_eq!(config.versions[0].label, "3.44");
        assert_eq!(config.versions.last().unwrap().label, "3.0.0");
    }

    #[test]
    fn test_default_config_urls_follow_changelog_shape() {
        let config = Config::default_config();
        for spec in &config.versions {
            assert!(spec.url.contains(&format!("/version/{}/md/", spec.label)));
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default_config().validate().is_ok());
    }

    #[test]
    fn test_empty_versions_rejected() {
        let mut config = Config::default_config();
        config.versions.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_retries_rejected() {
        let mut config = Config::default_config();
        config.fetch.retries = 0;
        assert!(config.validate().is_err());
    }
}
