//! Text normalization for speech synthesis: numeric and symbolic spans (dates,
//! times, currency, phone numbers, IDs, measurements, ...) are rewritten as
//! spoken words in English or Hindi.

pub mod batch;
pub mod config;
pub mod incremental;
pub mod interactive;
pub mod language;
pub mod normalizer;
pub mod number_words;
pub mod reader;

// Re-export the normalization API
pub use config::NormalizerConfig;
pub use language::{detect_language, Language, LanguageHint};
pub use normalizer::{
    normalize, splice, DetectedPattern, MatchedPattern, NormalizationRequest,
    NormalizationResult, PatternCategory, SourceSpan, TextNormalizer,
};
pub use number_words::{NumberScale, Numeral};

// Re-export batch utilities
pub use incremental::{generate_output_path, output_exists, output_is_complete};
