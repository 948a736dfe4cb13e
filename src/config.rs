// WHY: engine settings shared by the library and the CLI, loadable from a JSON file

use crate::language::LanguageHint;
use crate::normalizer::PatternCategory;
use crate::number_words::NumberScale;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the normalization engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Language used when a caller does not pass one explicitly
    pub default_language: LanguageHint,
    /// Grouping for English cardinals outside rupee amounts
    pub english_scale: NumberScale,
    /// Categories whose rules are never run
    pub disabled_categories: Vec<PatternCategory>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            default_language: LanguageHint::English,
            english_scale: NumberScale::Western,
            disabled_categories: Vec::new(),
        }
    }
}

impl NormalizerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid normalizer configuration")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn is_enabled(&self, category: PatternCategory) -> bool {
        !self.disabled_categories.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = NormalizerConfig::from_json_str(r#"{"english_scale": "indian"}"#)
            .expect("Valid config should parse");
        assert_eq!(config.english_scale, NumberScale::Indian);
        assert_eq!(config.default_language, LanguageHint::English);
        assert!(config.disabled_categories.is_empty());
    }

    #[test]
    fn test_disabled_categories() {
        let config = NormalizerConfig::from_json_str(
            r#"{"default_language": "auto", "disabled_categories": ["vehicle-number", "email"]}"#,
        )
        .expect("Valid config should parse");
        assert_eq!(config.default_language, LanguageHint::Auto);
        assert!(!config.is_enabled(PatternCategory::VehicleNumber));
        assert!(!config.is_enabled(PatternCategory::Email));
        assert!(config.is_enabled(PatternCategory::Date));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(NormalizerConfig::from_json_str("{ not json").is_err());
        assert!(NormalizerConfig::from_json_str(r#"{"english_scale": "roman"}"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("numspeak.json");
        std::fs::write(&path, r#"{"default_language": "hi"}"#).expect("Failed to write config");

        let config = NormalizerConfig::load(&path).expect("Config should load");
        assert_eq!(config.default_language, LanguageHint::Hindi);

        let missing = NormalizerConfig::load(temp_dir.path().join("missing.json"));
        assert!(missing.is_err());
    }
}
