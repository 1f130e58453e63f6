// File: crates/langviz-core/src/languages.rs
// Summary: Language metadata table (display colors, badge colors, logo slugs) loaded from JSON.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use skia_safe as skia;
use tracing::warn;

use crate::types::{parse_hex_color, DEFAULT_LANGUAGE_COLOR};

/// Presentation metadata for one language, as stored in `languages.json`.
/// All fields are optional; missing ones fall back to neutral defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LanguageMeta {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub badge_color: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Lookup result, tagged so callers can tell a real entry from a fallback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MetaLookup<'a> {
    Known(&'a LanguageMeta),
    Unknown,
}

/// Language metadata keyed by display name (`"Rust"`, `"C#"`, ...).
#[derive(Clone, Debug, Default)]
pub struct LanguageTable {
    entries: HashMap<String, LanguageMeta>,
}

impl LanguageTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_map(entries: HashMap<String, LanguageMeta>) -> Self {
        Self { entries }
    }

    /// Load the table from a JSON file. A missing or malformed file logs a
    /// warning and yields an empty table; charts then render with fallback
    /// colors and text row labels.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read language metadata, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str::<HashMap<String, LanguageMeta>>(&contents) {
            Ok(entries) => Self { entries },
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not parse language metadata, using defaults");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, language: &str) -> MetaLookup<'_> {
        match self.entries.get(language) {
            Some(meta) => MetaLookup::Known(meta),
            None => MetaLookup::Unknown,
        }
    }

    /// Fill color for a language's bars and wedges. Unknown languages and
    /// malformed hex values come out neutral gray.
    pub fn display_color(&self, language: &str) -> skia::Color {
        let hex = match self.lookup(language) {
            MetaLookup::Known(meta) => meta.color.as_deref().unwrap_or(DEFAULT_LANGUAGE_COLOR),
            MetaLookup::Unknown => DEFAULT_LANGUAGE_COLOR,
        };
        parse_hex_color(hex).unwrap_or(skia::Color::from_argb(255, 0x88, 0x88, 0x88))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(language: &str, meta: LanguageMeta) -> LanguageTable {
        let mut map = HashMap::new();
        map.insert(language.to_string(), meta);
        LanguageTable::from_map(map)
    }

    #[test]
    fn lookup_distinguishes_known_from_unknown() {
        let table = table_with("Rust", LanguageMeta {
            color: Some("#dea584".into()),
            badge_color: Some("dea584".into()),
            logo: Some("rust".into()),
        });
        assert!(matches!(table.lookup("Rust"), MetaLookup::Known(_)));
        assert_eq!(table.lookup("Fortran"), MetaLookup::Unknown);
    }

    #[test]
    fn display_color_parses_and_falls_back() {
        let table = table_with("Rust", LanguageMeta {
            color: Some("#dea584".into()),
            ..Default::default()
        });
        assert_eq!(table.display_color("Rust"), skia::Color::from_argb(255, 0xde, 0xa5, 0x84));
        let gray = skia::Color::from_argb(255, 0x88, 0x88, 0x88);
        assert_eq!(table.display_color("Fortran"), gray);

        let junk = table_with("Odd", LanguageMeta { color: Some("chartreuse".into()), ..Default::default() });
        assert_eq!(junk.display_color("Odd"), gray);
    }

    #[test]
    fn load_tolerates_missing_and_malformed_files() {
        let missing = LanguageTable::load("definitely/not/here/languages.json");
        assert!(missing.is_empty());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("languages.json");
        std::fs::write(&path, "{ this is not json").unwrap();
        assert!(LanguageTable::load(&path).is_empty());

        std::fs::write(&path, r##"{"Go": {"color": "#00ADD8", "logo": "go"}}"##).unwrap();
        let table = LanguageTable::load(&path);
        assert_eq!(table.len(), 1);
        assert_eq!(table.display_color("Go"), skia::Color::from_argb(255, 0x00, 0xad, 0xd8));
    }
}
