// file: src/exporter/mod.rs
// description: exporter module exports
// reference: internal module structure

pub mod csv;

pub use csv::CsvExporter;
