// WHY: public normalization API; detection and verbalisation are composed here and
// the output text is rebuilt from the original in a single forward pass

pub mod detector;
pub mod reading;
pub mod rules;
pub mod verbalize;

use crate::config::NormalizerConfig;
use crate::language::{detect_language, Language, LanguageHint};
use anyhow::Result;
use detector::{CharCounter, PatternDetector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use tracing::{debug, warn};
use verbalize::Speaker;

/// Kind of span a rule recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternCategory {
    Email,
    Date,
    Duration,
    Time,
    Phone,
    Pincode,
    IdCode,
    Currency,
    Percentage,
    Ratio,
    Range,
    Measurement,
    Alphanumeric,
    VehicleNumber,
    AlphanumericId,
    Decimal,
    Ordinal,
    Number,
}

impl PatternCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternCategory::Email => "email",
            PatternCategory::Date => "date",
            PatternCategory::Duration => "duration",
            PatternCategory::Time => "time",
            PatternCategory::Phone => "phone",
            PatternCategory::Pincode => "pincode",
            PatternCategory::IdCode => "id-code",
            PatternCategory::Currency => "currency",
            PatternCategory::Percentage => "percentage",
            PatternCategory::Ratio => "ratio",
            PatternCategory::Range => "range",
            PatternCategory::Measurement => "measurement",
            PatternCategory::Alphanumeric => "alphanumeric",
            PatternCategory::VehicleNumber => "vehicle-number",
            PatternCategory::AlphanumericId => "alphanumeric-id",
            PatternCategory::Decimal => "decimal",
            PatternCategory::Ordinal => "ordinal",
            PatternCategory::Number => "number",
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of a match in the original text, as byte and character offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
    pub char_start: usize,
    pub char_end: usize,
}

/// A replaced span together with what replaced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPattern {
    pub category: PatternCategory,
    pub original: String,
    pub replacement: String,
    pub span: SourceSpan,
}

/// A recognised span before conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPattern {
    pub category: PatternCategory,
    pub text: String,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationRequest {
    pub text: String,
    #[serde(default)]
    pub language: LanguageHint,
    #[serde(default)]
    pub show_patterns: bool,
}

impl NormalizationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: LanguageHint::default(),
            show_patterns: false,
        }
    }

    pub fn with_language(mut self, language: LanguageHint) -> Self {
        self.language = language;
        self
    }

    pub fn with_patterns(mut self, show_patterns: bool) -> Self {
        self.show_patterns = show_patterns;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationResult {
    /// Normalized text
    pub text: String,
    /// Replaced spans in source order; empty unless requested
    pub patterns: Vec<MatchedPattern>,
    /// Language the text was spoken in
    pub language: Language,
    pub changed: bool,
}

impl NormalizationResult {
    /// The input passed through untouched
    pub fn unchanged(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            patterns: Vec::new(),
            language,
            changed: false,
        }
    }
}

/// Rule-driven text normalizer. Built once, then shared read-only.
#[derive(Debug)]
pub struct TextNormalizer {
    config: NormalizerConfig,
    detector: PatternDetector,
}

impl TextNormalizer {
    pub fn new() -> Result<Self> {
        Self::with_config(NormalizerConfig::default())
    }

    pub fn with_config(config: NormalizerConfig) -> Result<Self> {
        let detector = PatternDetector::from_config(&config)?;
        Ok(Self { config, detector })
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn detect_language(&self, text: &str) -> Language {
        detect_language(text)
    }

    pub fn normalize(&self, request: &NormalizationRequest) -> NormalizationResult {
        let text = request.text.as_str();
        let language = request.language.resolve(text);
        if text.is_empty() {
            return NormalizationResult::unchanged(String::new(), language);
        }

        let accepted = self.detector.detect(text);
        if accepted.is_empty() {
            return NormalizationResult::unchanged(text, language);
        }

        let speaker = Speaker::new(language, self.config.english_scale);
        let mut counter = CharCounter::new(text);
        let mut output = String::with_capacity(text.len() * 2);
        let mut patterns = Vec::new();
        let mut cursor = 0usize;

        for candidate in accepted {
            let original = &text[candidate.span.clone()];
            let replacement = speaker.speak(&candidate.reading);
            debug!(
                category = candidate.category.as_str(),
                original,
                replacement = replacement.as_str(),
                "Replacing pattern"
            );

            output.push_str(&text[cursor..candidate.span.start]);
            output.push_str(&replacement);
            cursor = candidate.span.end;

            if request.show_patterns {
                patterns.push(MatchedPattern {
                    category: candidate.category,
                    original: original.to_string(),
                    replacement,
                    span: counter.span(&candidate.span),
                });
            }
        }
        output.push_str(&text[cursor..]);

        let changed = output != text;
        NormalizationResult {
            text: output,
            patterns,
            language,
            changed,
        }
    }

    pub fn normalize_text(&self, text: &str, language: LanguageHint) -> String {
        self.normalize(&NormalizationRequest::new(text).with_language(language))
            .text
    }

    pub fn normalize_batch<S: AsRef<str>>(&self, texts: &[S], language: LanguageHint) -> Vec<String> {
        texts
            .iter()
            .map(|t| self.normalize_text(t.as_ref(), language))
            .collect()
    }

    /// Recognised spans without converting them
    pub fn detect_patterns(&self, text: &str) -> Vec<DetectedPattern> {
        let mut counter = CharCounter::new(text);
        self.detector
            .detect(text)
            .into_iter()
            .map(|candidate| DetectedPattern {
                category: candidate.category,
                text: text[candidate.span.clone()].to_string(),
                span: counter.span(&candidate.span),
            })
            .collect()
    }
}

static SHARED: OnceLock<Option<TextNormalizer>> = OnceLock::new();

fn shared() -> Option<&'static TextNormalizer> {
    SHARED
        .get_or_init(|| match TextNormalizer::new() {
            Ok(normalizer) => Some(normalizer),
            Err(e) => {
                warn!("Normalizer unavailable, passing text through: {:#}", e);
                None
            }
        })
        .as_ref()
}

/// Normalize `text` with the default rule set.
///
/// Never fails: if the rule table could not be built the text is returned
/// unchanged.
///
/// # Example
/// ```
/// use numspeak::{normalize, LanguageHint};
/// let result = normalize("Pay ₹500 now", LanguageHint::English, false);
/// assert_eq!(result.text, "Pay five hundred rupees now");
/// ```
pub fn normalize(text: &str, language: LanguageHint, show_patterns: bool) -> NormalizationResult {
    match shared() {
        Some(normalizer) => normalizer.normalize(&NormalizationRequest {
            text: text.to_string(),
            language,
            show_patterns,
        }),
        None => NormalizationResult::unchanged(text, language.resolve(text)),
    }
}

/// Rebuild normalized text from the original and its replaced spans.
/// `None` if the spans are out of order, overlap, or do not match the original.
pub fn splice(original: &str, patterns: &[MatchedPattern]) -> Option<String> {
    let mut output = String::with_capacity(original.len());
    let mut cursor = 0usize;
    for pattern in patterns {
        let span = pattern.span;
        if span.start < cursor || original.get(span.start..span.end)? != pattern.original {
            return None;
        }
        output.push_str(original.get(cursor..span.start)?);
        output.push_str(&pattern.replacement);
        cursor = span.end;
    }
    output.push_str(original.get(cursor..)?);
    Some(output)
}
