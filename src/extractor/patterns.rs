// file: src/extractor/patterns.rs
// description: compiled regex patterns for changelog structure and attribution cues
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Document structure
    pub static ref HEADING: Regex = Regex::new(
        r"^\s*#{1,6}\s+(.+?)\s*$"
    ).expect("HEADING regex is valid");

    pub static ref BULLET: Regex = Regex::new(
        r"^\s*[-*+]\s+(.*)$"
    ).expect("BULLET regex is valid");

    // A heading of the form `### Feature: Improved rendering` opens a feature
    // block in the post-3.0 changelog layout.
    pub static ref FEATURE_HEADING: Regex = Regex::new(
        r"(?i)^feature:\s*(.+)$"
    ).expect("FEATURE_HEADING regex is valid");

    // Release metadata
    pub static ref RELEASE_DATE_LABEL: Regex = Regex::new(
        r"(?i)(?:release date|released)\s*:\s*(.+)"
    ).expect("RELEASE_DATE_LABEL regex is valid");

    pub static ref ISO_DATE: Regex = Regex::new(
        r"\b(\d{4})-(\d{2})-(\d{2})\b"
    ).expect("ISO_DATE regex is valid");

    pub static ref LONG_DATE: Regex = Regex::new(
        r"(?i)\b(?:\d{1,2}(?:st|nd|rd|th)?\s+(?:January|February|March|April|May|June|July|August|September|October|November|December),?\s+\d{4}|(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:st|nd|rd|th)?,?\s+\d{4})\b"
    ).expect("LONG_DATE regex is valid");

    // Attribution cues, checked in priority order by the attribution splitter
    pub static ref FUNDED_BY: Regex = Regex::new(
        r"(?i)(?:funded|sponsored)\s+by\s+(.+)"
    ).expect("FUNDED_BY regex is valid");

    pub static ref DEVELOPED_BY: Regex = Regex::new(
        r"(?i)(?:implemented|developed)\s+by\s+(.+)"
    ).expect("DEVELOPED_BY regex is valid");

    pub static ref FUNDER_CUE: Regex = Regex::new(
        r"(?i)\b(?:funded|sponsored)\b"
    ).expect("FUNDER_CUE regex is valid");

    // Trailing clauses outside parentheses, e.g. `... Funded by Acme` or the
    // original changelog trailer `This feature was funded by Acme`.
    pub static ref TRAILING_FUNDED: Regex = Regex::new(
        r"(?i)[-–,.;:]?\s*(?:this feature was\s+)?(?:funded|sponsored)\s+by\s+(.+?)\s*$"
    ).expect("TRAILING_FUNDED regex is valid");

    pub static ref TRAILING_DEVELOPED: Regex = Regex::new(
        r"(?i)[-–,.;:]?\s*(?:this feature was\s+)?(?:implemented|developed)\s+by\s+(.+?)\s*$"
    ).expect("TRAILING_DEVELOPED regex is valid");

    // Markup cleanup
    pub static ref HTML_TAG: Regex = Regex::new(
        r"<[^>]+>"
    ).expect("HTML_TAG regex is valid");

    pub static ref RESIDUAL_BRACKETS: Regex = Regex::new(
        r"[\[\]]"
    ).expect("RESIDUAL_BRACKETS regex is valid");

    pub static ref MULTI_SPACE: Regex = Regex::new(
        r"\s+"
    ).expect("MULTI_SPACE regex is valid");
}

/// Validates a fully numeric date candidate so strings like `2018-13-45` are
/// not reported as release dates.
pub fn is_plausible_iso_date(text: &str) -> bool {
    if let Some(captures) = ISO_DATE.captures(text) {
        let year: i32 = captures[1].parse().unwrap_or(0);
        let month: u32 = captures[2].parse().unwrap_or(0);
        let day: u32 = captures[3].parse().unwrap_or(0);
        return chrono::NaiveDate::from_ymd_opt(year, month, day).is_some();
    }
    false
}
