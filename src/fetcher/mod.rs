// file: src/fetcher/mod.rs
// description: fetcher module exports
// reference: internal module structure

pub mod download;

pub use download::{ArchiveFetcher, FetchOutcome, FetchStats};
