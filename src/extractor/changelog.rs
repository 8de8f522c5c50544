// file: src/extractor/changelog.rs
// description: per-document changelog parsing into feature records
// reference: QGIS changelog layouts, 3.0 through 3.44

use crate::extractor::attribution::split_attribution;
use crate::extractor::cleaner::TextCleaner;
use crate::extractor::patterns::{
    BULLET, FEATURE_HEADING, HEADING, ISO_DATE, LONG_DATE, RELEASE_DATE_LABEL, TRAILING_DEVELOPED,
    TRAILING_FUNDED, is_plausible_iso_date,
};
use crate::models::{FeatureRecord, RawDocument};

/// Release date must appear near the top of a document to count as preamble.
const DATE_SCAN_LINES: usize = 40;

/// Turns one changelog document into zero or more feature records.
///
/// Two layouts coexist across releases and are handled together:
/// - bullet lists under category headings, with attribution carried inline as
///   a parenthetical or trailing clause;
/// - `### Feature: <name>` blocks followed by
///   `##### This feature was funded by <funder>` /
///   `##### This feature was developed by <developer>` trailers.
///
/// Parsing a line never fails; at worst a record degrades to bare feature text
/// with empty attribution, or a non-feature line is skipped.
pub struct ChangelogParser {
    cleaner: TextCleaner,
}

impl ChangelogParser {
    pub fn new() -> Self {
        Self {
            cleaner: TextCleaner::new(),
        }
    }

    pub fn parse(&self, document: &RawDocument) -> Vec<FeatureRecord> {
        let release_date = self.find_release_date(&document.content);

        let mut records = Vec::new();
        let mut category = String::new();
        // Index of the open feature block record. The record is pushed the
        // moment its heading appears, so output order always follows document
        // order; trailers credit it in place until the block closes.
        let mut open_block: Option<usize> = None;

        for line in document.content.lines() {
            if let Some(heading) = heading_text(line) {
                if let Some(captures) = FEATURE_HEADING.captures(heading) {
                    open_block = None;
                    let feature = self.cleaner.clean(&captures[1]);
                    if !feature.is_empty() {
                        let mut record = FeatureRecord::new(&document.version_label, feature);
                        record.release_date = release_date.clone();
                        record.category = category.clone();
                        records.push(record);
                        open_block = Some(records.len() - 1);
                    }
                } else if self.absorb_block_trailer(open_block, &mut records, heading) {
                    // trailer credited the open block, nothing else to do
                } else {
                    open_block = None;
                    category = self.cleaner.clean(heading);
                }
                continue;
            }

            if let Some(captures) = BULLET.captures(line) {
                let content = captures[1].trim();
                if content.is_empty() {
                    continue;
                }

                let (feature_text, attribution) = split_attribution(content);
                let feature = self.cleaner.clean(&feature_text);
                if feature.is_empty() {
                    continue;
                }

                let mut record = FeatureRecord::new(&document.version_label, feature);
                record.release_date = release_date.clone();
                record.category = category.clone();
                record.developer = self.cleaner.clean(&attribution.developer);
                record.funder = self.cleaner.clean(&attribution.funder);
                records.push(record);
                continue;
            }

            // Plain prose inside a feature block may still carry the trailer
            self.absorb_block_trailer(open_block, &mut records, line);
        }

        records
    }

    /// Funded-by / developed-by trailer lines attach to the open feature block
    /// instead of becoming categories.
    fn absorb_block_trailer(
        &self,
        open_block: Option<usize>,
        records: &mut [FeatureRecord],
        text: &str,
    ) -> bool {
        let Some(record) = open_block.and_then(|index| records.get_mut(index)) else {
            return false;
        };
        let mut absorbed = false;

        if let Some(captures) = TRAILING_FUNDED.captures(text)
            && record.funder.is_empty()
            && captures.get(0).map(|m| m.start()) == Some(0)
        {
            record.funder = self.cleaner.clean(&captures[1]);
            absorbed = true;
        }

        if let Some(captures) = TRAILING_DEVELOPED.captures(text)
            && record.developer.is_empty()
            && captures.get(0).map(|m| m.start()) == Some(0)
        {
            record.developer = self.cleaner.clean(&captures[1]);
            absorbed = true;
        }

        absorbed
    }

    /// Preamble scan for the release date: a labelled line wins, then the
    /// first generic date-like line within the scan window.
    fn find_release_date(&self, content: &str) -> String {
        for line in content.lines().take(DATE_SCAN_LINES) {
            if let Some(captures) = RELEASE_DATE_LABEL.captures(line) {
                return self.cleaner.clean(&captures[1]);
            }
        }

        for line in content.lines().take(DATE_SCAN_LINES) {
            if let Some(found) = LONG_DATE.find(line) {
                return found.as_str().to_string();
            }
            if is_plausible_iso_date(line) {
                if let Some(found) = ISO_DATE.find(line) {
                    return found.as_str().to_string();
                }
            }
        }

        String::new()
    }
}

impl Default for ChangelogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A line is a heading when it carries a heading marker, even behind a bullet
/// marker: the heading marker takes precedence.
fn heading_text(line: &str) -> Option<&str> {
    if let Some(captures) = HEADING.captures(line) {
        return captures.get(1).map(|m| m.as_str());
    }

    if let Some(captures) = BULLET.captures(line) {
        let content = captures.get(1)?;
        if content.as_str().trim_start().starts_with('#') {
            return HEADING
                .captures(content.as_str())
                .and_then(|c| c.get(1))
                .map(|m| m.as_str());
        }
    }

    None
}
