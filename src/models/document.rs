// file: src/models/document.rs
// description: raw text document model carried between archive reading and extraction
// reference: internal data structures

/// One text blob pulled out of a changelog archive. Lives only for the duration
/// of extracting a single archive.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Label of the release this document was bundled with.
    pub version_label: String,
    /// Entry name inside the archive, kept for log messages.
    pub name: String,
    pub content: String,
}

impl RawDocument {
    pub fn new(
        version_label: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            version_label: version_label.into(),
            name: name.into(),
            content: content.into(),
        }
    }
}
