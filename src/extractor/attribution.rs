// file: src/extractor/attribution.rs
// description: ordered chain of attribution matchers for feature lines
// reference: changelog attribution phrasings across QGIS 3.x releases

use crate::extractor::patterns::{
    DEVELOPED_BY, FUNDED_BY, FUNDER_CUE, TRAILING_DEVELOPED, TRAILING_FUNDED,
};

/// Developer/funder text pulled off a feature line. Both fields are best-effort
/// and may stay empty; the feature itself is never dropped for lack of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribution {
    pub developer: String,
    pub funder: String,
}

impl Attribution {
    pub fn is_empty(&self) -> bool {
        self.developer.is_empty() && self.funder.is_empty()
    }
}

/// Splits a feature line into its feature text and attribution, trying in
/// priority order:
/// 1. an outermost balanced trailing parenthetical, split into clauses;
/// 2. a trailing `funded by` / `developed by` clause outside parentheses.
///
/// Unbalanced parentheses leave the attribution empty and the full line as
/// feature text. Classification of a single cue-less phrase defaults to
/// Developer, mirroring how the changelogs usually credit people.
pub fn split_attribution(line: &str) -> (String, Attribution) {
    let trimmed = line.trim();

    if trimmed.ends_with(')') {
        return match trailing_parenthetical(trimmed) {
            ParenScan::Balanced { start } => {
                let inner = &trimmed[start + 1..trimmed.len() - 1];
                (trim_feature(&trimmed[..start]), classify_clauses(inner))
            }
            ParenScan::Unbalanced => (trimmed.to_string(), Attribution::default()),
        };
    }

    trailing_clauses(trimmed)
}

/// Feature text keeps no punctuation left over from a peeled attribution.
fn trim_feature(text: &str) -> String {
    text.trim().trim_end_matches(['.', ',']).trim().to_string()
}

enum ParenScan {
    Balanced { start: usize },
    Unbalanced,
}

/// Reverse depth scan for the `(` matching the final `)`. Any leftover
/// imbalance elsewhere on the line also counts as unbalanced, per the policy
/// of matching only a well-formed outermost pair.
fn trailing_parenthetical(line: &str) -> ParenScan {
    let mut depth = 0i32;
    let mut start = None;

    for (idx, ch) in line.char_indices().rev() {
        match ch {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    start = Some(idx);
                    break;
                }
            }
            _ => {}
        }
    }

    match start {
        Some(start) if paren_balanced(&line[..start]) => ParenScan::Balanced { start },
        _ => ParenScan::Unbalanced,
    }
}

fn paren_balanced(text: &str) -> bool {
    let mut depth = 0i32;
    for ch in text.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}

/// Splits the parenthetical content on clause separators that sit outside any
/// nested parentheses, then assigns each clause via keyword cues.
fn classify_clauses(inner: &str) -> Attribution {
    let mut attribution = Attribution::default();

    for clause in split_top_level(inner) {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }

        if let Some(captures) = FUNDED_BY.captures(clause) {
            fill_first(&mut attribution.funder, captures[1].trim());
        } else if let Some(captures) = DEVELOPED_BY.captures(clause) {
            fill_first(&mut attribution.developer, captures[1].trim());
        } else if FUNDER_CUE.is_match(clause) {
            fill_first(&mut attribution.funder, clause);
        } else if let Some(rest) = strip_by_prefix(clause) {
            fill_first(&mut attribution.developer, rest);
        } else {
            // No cue at all: a bare name credits the developer
            fill_first(&mut attribution.developer, clause);
        }
    }

    attribution
}

fn split_top_level(inner: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut depth = 0i32;
    let mut clause_start = 0;

    for (idx, ch) in inner.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' | ';' if depth == 0 => {
                clauses.push(&inner[clause_start..idx]);
                clause_start = idx + 1;
            }
            _ => {}
        }
    }
    clauses.push(&inner[clause_start..]);
    clauses
}

fn strip_by_prefix(clause: &str) -> Option<&str> {
    let lower = clause.to_lowercase();
    lower
        .starts_with("by ")
        .then(|| clause[3..].trim())
        .filter(|rest| !rest.is_empty())
}

fn fill_first(slot: &mut String, value: &str) {
    if slot.is_empty() {
        *slot = value.to_string();
    }
}

/// Attribution given as a trailing clause rather than a parenthetical, e.g.
/// `Better labels. Funded by Acme`. The funder clause is peeled off first
/// since it conventionally comes last.
fn trailing_clauses(line: &str) -> (String, Attribution) {
    let mut attribution = Attribution::default();
    let mut feature = line;

    if let Some(captures) = TRAILING_FUNDED.captures(feature) {
        let whole = captures.get(0).expect("match has a full capture");
        attribution.funder = captures[1].trim().to_string();
        feature = &feature[..whole.start()];
    }

    if let Some(captures) = TRAILING_DEVELOPED.captures(feature) {
        let whole = captures.get(0).expect("match has a full capture");
        attribution.developer = captures[1].trim().to_string();
        feature = &feature[..whole.start()];
    }

    (trim_feature(feature), attribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_developer_and_funder_split() {
        let (feature, attribution) =
            split_attribution("Improved rendering speed (implemented by Alice, funded by Acme Corp)");
        assert_eq!(feature, "Improved rendering speed");
        assert_eq!(attribution.developer, "Alice");
        assert_eq!(attribution.funder, "Acme Corp");
    }

    #[test]
    fn test_bare_name_defaults_to_developer() {
        let (feature, attribution) = split_attribution("Added new symbol renderer (Bob)");
        assert_eq!(feature, "Added new symbol renderer");
        assert_eq!(attribution.developer, "Bob");
        assert_eq!(attribution.funder, "");
    }

    #[test]
    fn test_no_attribution_at_all() {
        let (feature, attribution) = split_attribution("Fixed crash on startup");
        assert_eq!(feature, "Fixed crash on startup");
        assert!(attribution.is_empty());
    }

    #[test]
    fn test_funder_keyword_heuristic() {
        let (_, attribution) = split_attribution("Faster exports (funded by QGIS.org)");
        assert_eq!(attribution.funder, "QGIS.org");
        assert_eq!(attribution.developer, "");

        let (_, attribution) = split_attribution("Faster exports (sponsored by the user group)");
        assert_eq!(attribution.funder, "the user group");
    }

    #[test]
    fn test_bare_by_prefix_is_developer() {
        let (_, attribution) = split_attribution("New grid options (by Carol)");
        assert_eq!(attribution.developer, "Carol");
        assert_eq!(attribution.funder, "");
    }

    #[test]
    fn test_ambiguous_foundation_lands_in_developer() {
        // Known best-effort limitation: `by the X Foundation` reads as a
        // developer credit because it carries no funding keyword.
        let (_, attribution) = split_attribution("Raster provider rework (by the Mapping Foundation)");
        assert_eq!(attribution.developer, "the Mapping Foundation");
        assert_eq!(attribution.funder, "");
    }

    #[test]
    fn test_nested_parentheses_outermost_pair() {
        let (feature, attribution) =
            split_attribution("Faster joins (implemented by Alice (Kartoza), funded by Acme)");
        assert_eq!(feature, "Faster joins");
        assert_eq!(attribution.developer, "Alice (Kartoza)");
        assert_eq!(attribution.funder, "Acme");
    }

    #[test]
    fn test_unbalanced_parentheses_leave_attribution_empty() {
        let (feature, attribution) = split_attribution("Odd line (implemented by Alice))");
        assert_eq!(feature, "Odd line (implemented by Alice))");
        assert!(attribution.is_empty());

        let (feature, attribution) = split_attribution("Odd line ((implemented by Alice)");
        assert_eq!(feature, "Odd line ((implemented by Alice)");
        assert!(attribution.is_empty());
    }

    #[test]
    fn test_punctuation_trimmed_before_parenthetical() {
        let (feature, attribution) = split_attribution("Better labels. (Bob)");
        assert_eq!(feature, "Better labels");
        assert_eq!(attribution.developer, "Bob");
    }

    #[test]
    fn test_trailing_funded_clause() {
        let (feature, attribution) = split_attribution("Better labels. Funded by Acme");
        assert_eq!(feature, "Better labels");
        assert_eq!(attribution.funder, "Acme");
        assert_eq!(attribution.developer, "");
    }

    #[test]
    fn test_trailing_developed_and_funded_clauses() {
        let (feature, attribution) =
            split_attribution("Better labels. Implemented by Bob, funded by Acme");
        assert_eq!(feature, "Better labels");
        assert_eq!(attribution.developer, "Bob");
        assert_eq!(attribution.funder, "Acme");
    }

    #[test]
    fn test_semicolon_clause_separator() {
        let (_, attribution) = split_attribution("Tile cache (developed by Dan; funded by Acme)");
        assert_eq!(attribution.developer, "Dan");
        assert_eq!(attribution.funder, "Acme");
    }

    #[test]
    fn test_first_match_wins_per_field() {
        let (_, attribution) = split_attribution("Multi credit (implemented by Alice, developed by Bob)");
        assert_eq!(attribution.developer, "Alice");
    }
}
