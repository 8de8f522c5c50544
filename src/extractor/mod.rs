// file: src/extractor/mod.rs
// description: extractor module exports
// reference: internal module structure

pub mod attribution;
pub mod changelog;
pub mod cleaner;
pub mod normalizer;
pub mod patterns;

pub use attribution::{Attribution, split_attribution};
pub use changelog::ChangelogParser;
pub use cleaner::TextCleaner;
pub use normalizer::NameNormalizer;
