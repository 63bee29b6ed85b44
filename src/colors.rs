use crate::error::{OrgmapError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Built-in chart colors for the recognized languages, matching the palette
/// GitHub uses for its language bars.
pub const BUILTIN_COLORS: &[(&str, &str)] = &[
    ("C", "#555555"),
    ("C#", "#178600"),
    ("C++", "#f34b7d"),
    ("CSS", "#663399"),
    ("Go", "#00ADD8"),
    ("HTML", "#e34c26"),
    ("Java", "#b07219"),
    ("JavaScript", "#f1e05a"),
    ("Kotlin", "#A97BFF"),
    ("PHP", "#4F5D95"),
    ("Python", "#3572A5"),
    ("Ruby", "#701516"),
    ("Rust", "#dea584"),
    ("Shell", "#89e051"),
    ("Swift", "#F05138"),
    ("TypeScript", "#3178c6"),
    ("XML", "#0060ac"),
    ("YAML", "#cb171e"),
];

/// Language-to-color lookup used by the chart renderer. Either the built-in
/// palette or a user-supplied JSON map; unknown languages fall back to a
/// color derived from the language name, so repeated runs agree.
#[derive(Debug, Clone)]
pub struct ColorTable {
    map: HashMap<String, String>,
}

impl ColorTable {
    pub fn builtin() -> Self {
        Self {
            map: BUILTIN_COLORS
                .iter()
                .map(|(language, color)| (language.to_string(), color.to_string()))
                .collect(),
        }
    }

    /// Loads a `{"Language": "#rrggbb", ...}` JSON file. Missing or malformed
    /// files are errors; the caller decides whether that is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .map_err(|e| OrgmapError::ColorConfig(format!("reading '{}': {e}", path.display())))?;
        let map: HashMap<String, String> = serde_json::from_str(&data)
            .map_err(|e| OrgmapError::ColorConfig(format!("parsing '{}': {e}", path.display())))?;
        Ok(Self { map })
    }

    pub fn color_for(&self, language: &str) -> String {
        self.map
            .get(language)
            .cloned()
            .unwrap_or_else(|| fallback_color(language))
    }
}

/// FNV-1a hash of the language name folded to 24 bits. Deterministic across
/// runs, unlike a random draw.
fn fallback_color(language: &str) -> String {
    let mut hash: u32 = 0x811c9dc5;
    for byte in language.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    format!("#{:06x}", hash & 0x00ff_ffff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_table_covers_known_languages() {
        let table = ColorTable::builtin();
        assert_eq!(table.color_for("Go"), "#00ADD8");
        assert_eq!(table.color_for("Python"), "#3572A5");
    }

    #[test]
    fn fallback_color_is_deterministic_and_well_formed() {
        let table = ColorTable::builtin();
        let first = table.color_for("Brainfuck");
        let second = table.color_for("Brainfuck");
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
        assert!(first.starts_with('#'));
        assert!(first[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_languages_get_different_fallbacks() {
        assert_ne!(fallback_color("Zig"), fallback_color("Nim"));
    }

    #[test]
    fn loads_color_map_from_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r##"{{"Go": "#123456", "Zig": "#abcdef"}}"##).unwrap();
        let table = ColorTable::load(file.path()).unwrap();
        assert_eq!(table.color_for("Go"), "#123456");
        assert_eq!(table.color_for("Zig"), "#abcdef");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(ColorTable::load(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = ColorTable::load(Path::new("/nonexistent/colors.json"));
        assert!(err.is_err());
    }
}
