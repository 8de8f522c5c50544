// file: src/extractor/normalizer.rs
// description: contributor name normalization for the developer field
// reference: recurring contributor spellings across QGIS changelogs

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// Company tags appended to personal credits, e.g. `Alice (Kartoza)`.
    static ref COMPANY_TAG: Regex = Regex::new(
        r"(?i)\s*\((?:north road|north|lutra(?:\s+consulting)?|opengis\.ch|kartoza|oslandia|faunalia|www\.[^)]+|https?://[^)]+)\)"
    ).expect("COMPANY_TAG regex is valid");

    static ref OSLANDIA_PREFIX: Regex = Regex::new(
        r"(?i)^oslandia\s*-\s*"
    ).expect("OSLANDIA_PREFIX regex is valid");

    static ref COLLABORATION_SUFFIX: Regex = Regex::new(
        r"(?i)\s+in collaboration with.*$"
    ).expect("COLLABORATION_SUFFIX regex is valid");

    /// First-name-only credits mapped to the contributor they refer to.
    /// Applied only to single-token names so `Martin Smith` stays untouched.
    static ref FIRST_NAME_ALIASES: HashMap<&'static str, &'static str> = HashMap::from([
        ("nyall", "Nyall Dawson"),
        ("mathieu", "Mathieu Pellerin"),
        ("alessandro", "Alessandro Pasotti"),
        ("alexander", "Alexander Bruy"),
        ("alex", "Alexander Bruy"),
        ("even", "Even Rouault"),
        ("loic", "Loïc Bartoletti"),
        ("loïc", "Loïc Bartoletti"),
        ("martin", "Martin Dobias"),
        ("matthias", "Matthias Kuhn"),
        ("julien", "Julien Cabieces"),
        ("paul", "Paul Blottiere"),
        ("sandro", "Sandro Santilli"),
        ("salvatore", "Salvatore Larosa"),
        ("denis", "Denis Rouzaud"),
        ("etienne", "Étienne Trimaille"),
        ("étienne", "Étienne Trimaille"),
        ("andrea", "Andrea Giudiceandrea"),
        ("ismail", "Ismail Sunni"),
        ("nathan", "Nathan Woodrow"),
        ("matteo", "Matteo Ghetta"),
        ("marco", "Marco Bernasocchi"),
        ("jef-n", "Jürgen Fischer"),
    ]);
}

/// Canonicalizes the many spellings the changelogs use for the same
/// contributor. Best-effort by nature; unknown names pass through cleaned.
pub struct NameNormalizer;

impl NameNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, name: &str) -> String {
        let name = name.trim();
        if name.is_empty() {
            return String::new();
        }

        let lower = name.to_lowercase();

        // Organization substrings win outright, whatever surrounds them
        if lower.contains("opengis") {
            return "OPENGIS.ch".to_string();
        }
        if lower.contains("kartoza") {
            return "Kartoza".to_string();
        }
        if lower.contains("lutra") {
            return "Lutra Consulting".to_string();
        }
        if lower.contains("juergen") || lower.contains("jürgen") {
            return "Jürgen Fischer".to_string();
        }

        let name = COMPANY_TAG.replace_all(name, "");
        let name = OSLANDIA_PREFIX.replace(&name, "");
        let name = COLLABORATION_SUFFIX.replace(&name, "");
        let name = name.trim().trim_end_matches('/').trim().trim_end_matches(',');

        if name.is_empty() {
            return String::new();
        }

        let lower = name.to_lowercase();
        if lower == "north road" {
            // North Road is Nyall Dawson's consultancy
            return "Nyall Dawson".to_string();
        }

        if !lower.contains(char::is_whitespace)
            && let Some(full) = FIRST_NAME_ALIASES.get(lower.as_str())
        {
            return (*full).to_string();
        }

        name.to_string()
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_name_aliases() {
        let normalizer = NameNormalizer::new();
        assert_eq!(normalizer.normalize("Nyall"), "Nyall Dawson");
        assert_eq!(normalizer.normalize("mathieu"), "Mathieu Pellerin");
        assert_eq!(normalizer.normalize("jef-n"), "Jürgen Fischer");
        assert_eq!(normalizer.normalize("Etienne"), "Étienne Trimaille");
    }

    #[test]
    fn test_multi_token_names_not_aliased() {
        let normalizer = NameNormalizer::new();
        assert_eq!(normalizer.normalize("Martin Smith"), "Martin Smith");
        assert_eq!(normalizer.normalize("Nyall Dawson"), "Nyall Dawson");
    }

    #[test]
    fn test_company_tag_stripped() {
        let normalizer = NameNormalizer::new();
        assert_eq!(normalizer.normalize("Alice (North Road)"), "Alice");
        assert_eq!(normalizer.normalize("Bob (https://example.com)"), "Bob");
    }

    #[test]
    fn test_organization_substrings() {
        let normalizer = NameNormalizer::new();
        assert_eq!(normalizer.normalize("the Kartoza team"), "Kartoza");
        assert_eq!(normalizer.normalize("Lutra Consulting UK"), "Lutra Consulting");
        assert_eq!(normalizer.normalize("dev@opengis.ch"), "OPENGIS.ch");
    }

    #[test]
    fn test_north_road_is_nyall() {
        let normalizer = NameNormalizer::new();
        assert_eq!(normalizer.normalize("North Road"), "Nyall Dawson");
    }

    #[test]
    fn test_oslandia_prefix_and_collaboration_suffix() {
        let normalizer = NameNormalizer::new();
        assert_eq!(normalizer.normalize("OSLANDIA - Paul Blottiere"), "Paul Blottiere");
        assert_eq!(
            normalizer.normalize("Denis Rouzaud in collaboration with others"),
            "Denis Rouzaud"
        );
    }

    #[test]
    fn test_empty_stays_empty() {
        let normalizer = NameNormalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("  "), "");
        assert_eq!(normalizer.normalize("(Oslandia)"), "");
    }

    #[test]
    fn test_unknown_names_pass_through() {
        let normalizer = NameNormalizer::new();
        assert_eq!(normalizer.normalize("Grace Hopper"), "Grace Hopper");
    }
}
