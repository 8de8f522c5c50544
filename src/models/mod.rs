// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod record;
pub mod version;

pub use document::RawDocument;
pub use record::FeatureRecord;
pub use version::VersionSpec;
