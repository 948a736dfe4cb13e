// WHY: output language selection, including script and Hinglish cue detection for Auto hints

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language the normalized text is spoken in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[serde(alias = "en")]
    English,
    #[serde(alias = "hi")]
    Hindi,
}

impl Language {
    /// Two-letter language code
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Caller's language preference; `Auto` defers to [`detect_language`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LanguageHint {
    #[default]
    #[serde(alias = "en")]
    #[value(name = "en", alias = "english")]
    English,
    #[serde(alias = "hi")]
    #[value(name = "hi", alias = "hindi")]
    Hindi,
    #[value(name = "auto")]
    Auto,
}

impl LanguageHint {
    /// Resolve the hint against the text it applies to
    pub fn resolve(self, text: &str) -> Language {
        match self {
            LanguageHint::English => Language::English,
            LanguageHint::Hindi => Language::Hindi,
            LanguageHint::Auto => detect_language(text),
        }
    }
}

impl From<Language> for LanguageHint {
    fn from(language: Language) -> Self {
        match language {
            Language::English => LanguageHint::English,
            Language::Hindi => LanguageHint::Hindi,
        }
    }
}

/// Romanised Hindi words that mark Hinglish text. Words that are also
/// everyday English ("me", "pay") are left out.
const HINGLISH_CUES: &[&str] = &[
    "hai", "hain", "tha", "thi", "mera", "meri", "mere", "maine", "apna", "apni",
    "kya", "kyun", "nahi", "nahin", "rupaye", "rupaiye", "paise", "baj", "baje",
    "bajkar", "kiya", "kiye", "liye", "bahut", "bhut", "aaj", "kal", "abhi", "aur",
    "ka", "ki", "ke", "ko", "se", "ne", "par", "yeh", "ye", "woh", "aap", "tum",
    "hum", "karna", "karo", "kitna", "kitne", "wala", "wali", "diya", "gaya",
];

const ENGLISH_CUES: &[&str] = &[
    "the", "is", "are", "was", "were", "a", "an", "at", "on", "in", "of", "to",
    "for", "with", "and", "my", "your", "it", "this", "that", "be", "will",
    "please", "from", "by",
];

fn is_devanagari_letter(ch: char) -> bool {
    // U+0966..=U+096F are digits, U+0964/U+0965 are dandas
    matches!(ch, '\u{0900}'..='\u{097F}') && !matches!(ch, '\u{0964}'..='\u{096F}')
}

/// Choose English or Hindi for text whose language was not given.
///
/// Devanagari letters outnumbering Latin letters selects Hindi. Otherwise
/// whole-word Hinglish cues are weighed against English function words and
/// Hindi wins only with strictly more cues. Ties resolve to English.
pub fn detect_language(text: &str) -> Language {
    let mut devanagari = 0usize;
    let mut latin = 0usize;
    for ch in text.chars() {
        if is_devanagari_letter(ch) {
            devanagari += 1;
        } else if ch.is_ascii_alphabetic() {
            latin += 1;
        }
    }

    if devanagari > latin {
        return Language::Hindi;
    }
    if latin == 0 {
        return Language::English;
    }

    let mut hinglish = 0usize;
    let mut english = 0usize;
    for word in text
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
    {
        let word = word.to_ascii_lowercase();
        if HINGLISH_CUES.contains(&word.as_str()) {
            hinglish += 1;
        } else if ENGLISH_CUES.contains(&word.as_str()) {
            english += 1;
        }
    }

    if hinglish > english {
        Language::Hindi
    } else {
        Language::English
    }
}
