// file: src/archive/mod.rs
// description: archive module exports
// reference: internal module structure

pub mod reader;

pub use reader::{ArchiveContents, ArchiveReader};
