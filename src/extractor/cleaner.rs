// file: src/extractor/cleaner.rs
// description: inline markup stripping for extracted text fields
// reference: https://docs.rs/pulldown-cmark

use crate::extractor::patterns::{HTML_TAG, MULTI_SPACE, RESIDUAL_BRACKETS};
use pulldown_cmark::{Event, Parser};

/// Reduces a Markdown fragment to plain text: emphasis markers, inline code
/// ticks and link targets disappear, link text survives. Applied to every
/// field before a record is emitted.
pub struct TextCleaner;

impl TextCleaner {
    pub fn new() -> Self {
        Self
    }

    pub fn clean(&self, fragment: &str) -> String {
        let mut text = String::with_capacity(fragment.len());

        for event in Parser::new(fragment) {
            match event {
                Event::Text(chunk) | Event::Code(chunk) => text.push_str(&chunk),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                // Raw HTML carries no prose worth keeping
                _ => {}
            }
        }

        let text = HTML_TAG.replace_all(&text, "");
        let text = RESIDUAL_BRACKETS.replace_all(&text, "");
        MULTI_SPACE.replace_all(&text, " ").trim().to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
