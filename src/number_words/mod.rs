// WHY: language-parameterised number-to-words conversion shared by every pattern reading

pub mod english;
pub mod hindi;

use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Grouping used for English cardinals. Hindi always groups by lakh and crore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberScale {
    /// thousand, million, billion
    #[default]
    Western,
    /// thousand, lakh, crore
    Indian,
}

/// Value of an ASCII or Devanagari (U+0966..=U+096F) digit
pub fn digit_value(ch: char) -> Option<u8> {
    match ch {
        '0'..='9' => Some(ch as u8 - b'0'),
        '\u{0966}'..='\u{096F}' => Some((ch as u32 - 0x0966) as u8),
        _ => None,
    }
}

/// Collect the digits of `text` as ASCII, dropping everything else
pub fn parse_digits(text: &str) -> String {
    text.chars()
        .filter_map(digit_value)
        .map(|d| char::from(b'0' + d))
        .collect()
}

/// Parse the digits of `text` as an integer; `None` when empty or past `u64`
pub fn parse_u64(text: &str) -> Option<u64> {
    let ascii = parse_digits(text);
    if ascii.is_empty() {
        return None;
    }
    ascii.parse().ok()
}

pub fn digit_word(d: u8, lang: Language) -> &'static str {
    match lang {
        Language::English => english::digit(d),
        Language::Hindi => hindi::digit(d),
    }
}

/// Read every digit in `text` one at a time; other characters are skipped
pub fn digits(text: &str, lang: Language) -> String {
    text.chars()
        .filter_map(digit_value)
        .map(|d| digit_word(d, lang))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn cardinal(n: u64, lang: Language) -> String {
    match lang {
        Language::English => english::cardinal(n),
        Language::Hindi => hindi::cardinal(n),
    }
}

/// Cardinal honouring the English scale choice
pub fn scaled_cardinal(n: u64, lang: Language, scale: NumberScale) -> String {
    match (lang, scale) {
        (Language::English, NumberScale::Indian) => english::indian_cardinal(n),
        _ => cardinal(n, lang),
    }
}

/// English cardinal grouped by lakh and crore
pub fn indian_cardinal(n: u64) -> String {
    english::indian_cardinal(n)
}

pub fn ordinal(n: u64, lang: Language) -> String {
    match lang {
        Language::English => english::ordinal(n),
        Language::Hindi => hindi::ordinal(n),
    }
}

pub fn year(y: u32, lang: Language) -> String {
    match lang {
        Language::English => english::year(y),
        Language::Hindi => hindi::year(y),
    }
}

pub fn point_word(lang: Language) -> &'static str {
    match lang {
        Language::English => "point",
        Language::Hindi => "दशमलव",
    }
}

/// A decimal numeral kept as digit strings so nothing is lost to floats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    /// ASCII integer digits, group separators removed
    pub integer: String,
    /// ASCII fractional digits, empty for whole numbers
    pub fraction: String,
}

impl Numeral {
    /// Parse `1,234.56`, `12,34,567`, `९.५` and friends. Anything other than
    /// digits, commas in the integer part and one decimal point is rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text, None),
        };

        if int_part.is_empty() || !int_part.chars().all(|c| c == ',' || digit_value(c).is_some()) {
            return None;
        }
        let integer = parse_digits(int_part);
        if integer.is_empty() {
            return None;
        }

        let fraction = match frac_part {
            Some(f) => {
                if f.is_empty() || !f.chars().all(|c| digit_value(c).is_some()) {
                    return None;
                }
                parse_digits(f)
            }
            None => String::new(),
        };

        Some(Self { integer, fraction })
    }

    pub fn whole(n: u64) -> Self {
        Self {
            integer: n.to_string(),
            fraction: String::new(),
        }
    }

    pub fn integer_value(&self) -> Option<u64> {
        self.integer.parse().ok()
    }

    pub fn is_one(&self) -> bool {
        self.integer_value() == Some(1) && self.fraction.is_empty()
    }

    pub fn to_f64(&self) -> f64 {
        let text = if self.fraction.is_empty() {
            self.integer.clone()
        } else {
            format!("{}.{}", self.integer, self.fraction)
        };
        text.parse().unwrap_or(f64::INFINITY)
    }
}

/// Integer part as a cardinal (digit by digit past `u64`), then the
/// fractional digits one at a time after "point"/"दशमलव".
pub fn numeral(value: &Numeral, lang: Language, scale: NumberScale) -> String {
    let mut words = match value.integer_value() {
        Some(n) => scaled_cardinal(n, lang, scale),
        None => digits(&value.integer, lang),
    };
    if !value.fraction.is_empty() {
        words.push(' ');
        words.push_str(point_word(lang));
        words.push(' ');
        words.push_str(&digits(&value.fraction, lang));
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devanagari_digits() {
        assert_eq!(digit_value('७'), Some(7));
        assert_eq!(digit_value('०'), Some(0));
        assert_eq!(digit_value('x'), None);
        assert_eq!(parse_digits("११०००१"), "110001");
        assert_eq!(parse_u64("१२"), Some(12));
        assert_eq!(parse_u64(""), None);
    }

    #[test]
    fn test_digit_by_digit() {
        assert_eq!(digits("+91-98", Language::English), "nine one nine eight");
        assert_eq!(digits("110", Language::Hindi), "एक एक शून्य");
    }

    #[test]
    fn test_numeral_parsing() {
        let n = Numeral::parse("1,234.56").unwrap();
        assert_eq!(n.integer, "1234");
        assert_eq!(n.fraction, "56");
        assert_eq!(Numeral::parse("12,34,567").unwrap().integer_value(), Some(1_234_567));
        assert_eq!(Numeral::parse("९.५").unwrap().fraction, "5");
        assert!(Numeral::parse("1.").is_none());
        assert!(Numeral::parse("1.2.3").is_none());
        assert!(Numeral::parse("abc").is_none());
        assert!(Numeral::parse("1").unwrap().is_one());
        assert!(!Numeral::parse("1.5").unwrap().is_one());
    }

    #[test]
    fn test_numeral_words() {
        let n = Numeral::parse("25.5").unwrap();
        assert_eq!(numeral(&n, Language::English, NumberScale::Western), "twenty-five point five");
        assert_eq!(numeral(&n, Language::Hindi, NumberScale::Western), "पच्चीस दशमलव पांच");

        let big = Numeral::parse("150000").unwrap();
        assert_eq!(
            numeral(&big, Language::English, NumberScale::Indian),
            "one lakh fifty thousand"
        );
        assert_eq!(
            numeral(&big, Language::English, NumberScale::Western),
            "one hundred and fifty thousand"
        );
    }

    #[test]
    fn test_numbers_beyond_u64_are_read_digit_by_digit() {
        let n = Numeral::parse("123456789012345678901234").unwrap();
        assert!(n.integer_value().is_none());
        let words = numeral(&n, Language::English, NumberScale::Western);
        assert!(words.starts_with("one two three four"));
    }
}
