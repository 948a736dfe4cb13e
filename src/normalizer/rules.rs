// WHY: the rule table lives in one place so precedence can be read top to bottom
// Patterns use a few placeholders expanded at compile time; regex-automata has no
// lookaround, so the original's lookbehind/lookahead constraints are guards.

use super::PatternCategory;
use anyhow::{Context, Result};
use regex_automata::meta::Regex;

/// How a match is turned into a typed reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Email,
    /// `day`, `month`, `year` groups, all numeric
    NumericDate,
    /// `day`, optional `suffix`, `month` name, `year`
    NamedDate,
    /// same groups, spoken month first
    MonthFirstDate,
    /// `hour`, `minute`, optional `second`, optional `meridiem`
    ClockTime,
    /// `hour`, optional `minute`
    HinglishTime,
    Phone,
    /// `label`, `number`; everything before `number` is kept verbatim
    LabelledDigits,
    /// `unit`, `amount`
    Currency,
    /// `value`, `unit`
    Quantity,
    Ratio,
    /// `from`, `to`, optional `unit`
    Range,
    /// `label`, `number`, optional `suffix`
    Labelled,
    Vehicle,
    MixedId,
    /// `value`
    Decimal,
    /// `value`
    Ordinal,
    /// `value`
    Number,
}

/// Context checks applied around a raw match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    None,
    /// the character before the match is not a letter or digit
    NotAfterAlphanumeric,
    /// the match is followed by whitespace, end of text or `.,;!?`
    BeforeBoundary,
}

impl Guard {
    pub fn allows(self, text: &str, start: usize, end: usize) -> bool {
        match self {
            Guard::None => true,
            Guard::NotAfterAlphanumeric => text[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric()),
            Guard::BeforeBoundary => text[end..]
                .chars()
                .next()
                .map_or(true, |c| c.is_whitespace() || matches!(c, '.' | ',' | ';' | '!' | '?')),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: PatternCategory,
    pub priority: u8,
    pub shape: Shape,
    pub guard: Guard,
    pub pattern: &'static str,
}

const fn rule(
    category: PatternCategory,
    priority: u8,
    shape: Shape,
    pattern: &'static str,
) -> Rule {
    Rule { category, priority, shape, guard: Guard::None, pattern }
}

const fn guarded(
    category: PatternCategory,
    priority: u8,
    shape: Shape,
    guard: Guard,
    pattern: &'static str,
) -> Rule {
    Rule { category, priority, shape, guard, pattern }
}

use PatternCategory as C;

/// Rule table, highest priority first. Within a priority, earlier entries win
/// ties on equal spans.
pub const RULES: &[Rule] = &[
    rule(C::Email, 15, Shape::Email, r"\b[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}\b"),
    // 12-11-2026, 12/11/26, 12.11.2026
    rule(C::Date, 10, Shape::NumericDate,
        r"\b(?P<day>\d{1,2})[/.\-](?P<month>\d{1,2})[/.\-](?P<year>\d{4}|\d{2})\b"),
    // 2026-11-12
    rule(C::Date, 10, Shape::NumericDate,
        r"\b(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})\b"),
    // 15 January 2024, 15th of Jan. 2024, 13Nov,2025
    rule(C::Date, 10, Shape::NamedDate,
        r"\b(?P<day>\d{1,2})(?P<suffix>st|nd|rd|th)?\s*(?:of\s+)?(?P<month><MONTH>)\.?,?\s*(?P<year>\d{4})\b"),
    // January 15th 2024, Jan 15, 2024
    rule(C::Date, 10, Shape::MonthFirstDate,
        r"\b(?P<month><MONTH>)\.?\s+(?P<day>\d{1,2})(?P<suffix>st|nd|rd|th)?(?:,\s*|\s+)(?P<year>\d{4})\b"),
    rule(C::Duration, 10, Shape::Quantity,
        r"\b(?P<value><NUM>)\s*(?P<unit>hours?|hrs?)\b"),
    rule(C::Time, 9, Shape::ClockTime,
        r"\b(?P<hour>\d{1,2}):(?P<minute>\d{2})(?::(?P<second>\d{2}))?(?:\s*<MER>|\b)"),
    rule(C::Time, 9, Shape::ClockTime,
        r"\b(?P<hour>\d{1,2})\.(?P<minute>\d{2})\s*<MER>"),
    rule(C::Time, 9, Shape::ClockTime,
        r"\b(?P<hour>\d{1,2})\s*<MER>"),
    // 5 baj kar 30 min, 5 baje kar 30 minute
    rule(C::Time, 9, Shape::HinglishTime,
        r"\b(?P<hour>\d{1,2})\s*baje?\s*kar\s*(?P<minute>\d{1,2})\s*(?:minutes?|mins?)\b"),
    rule(C::Time, 9, Shape::HinglishTime,
        r"\b(?P<hour>\d{1,2})\s*baje?\b"),
    rule(C::Phone, 8, Shape::Phone,
        r"\+\d{1,3}(?:[\-.\s]?\d{2,5}){1,4}\b"),
    rule(C::Phone, 8, Shape::Phone,
        r"(?:\(\d{3,5}\)\s*|\b\d{3,5}[\-.\s])\d{3,4}[\-.\s]?\d{4}\b"),
    rule(C::Phone, 8, Shape::Phone, r"\b0?\d{10}\b"),
    rule(C::Pincode, 8, Shape::LabelledDigits,
        r"(?P<label>\bpin\s*code\b|\bpincode\b|\bpin\b|पिन\s*कोड|पिनकोड)\D{0,10}(?P<number>\d{6})\b"),
    rule(C::IdCode, 8, Shape::LabelledDigits,
        r"(?P<label>\baadhaa?r\b|आधार)\D{0,20}(?P<number>\d{4}\s?\d{4}\s?\d{4})\b"),
    rule(C::IdCode, 8, Shape::LabelledDigits,
        r"(?P<label>\botp\b|ओटीपी|\bpin\b|पिन)\D{0,10}(?P<number>\d{3,8})\b"),
    guarded(C::Currency, 7, Shape::Currency, Guard::NotAfterAlphanumeric,
        r"(?P<unit>rs\.?|inr|usd|eur|gbp|₹|\$|€|£)\s*(?P<amount><AMT>(?:\.\d+)?)\b"),
    rule(C::Currency, 7, Shape::Currency,
        r"\b(?P<amount><AMT>(?:\.\d+)?)\s*(?P<unit>dollars?|rupees?|rupaye|rupaiye|rupay|euros?|pounds?|cents?|paise)\b"),
    guarded(C::Currency, 7, Shape::Currency, Guard::BeforeBoundary,
        r"\b(?P<amount><AMT>(?:\.\d+)?)\s*(?P<unit>[₹$€£])"),
    rule(C::Currency, 7, Shape::Currency,
        r"\b(?P<amount><AMT>(?:\.\d+)?)\s*(?P<unit>rs|inr|usd|eur|gbp)\b"),
    rule(C::Percentage, 6, Shape::Quantity,
        r"\b(?P<value><NUM>)\s*(?P<unit>%|percent\b|per\s+cent\b)"),
    rule(C::Ratio, 6, Shape::Ratio, r"\b\d+(?:\s*:\s*\d+)+\b"),
    rule(C::Range, 6, Shape::Range,
        r"\b(?P<from><NUM>)\s*[\-–]\s*(?P<to><NUM>)(?:\s*(?P<unit><UNIT>)\b|\s*(?P<percent>%)|\b)"),
    rule(C::Measurement, 6, Shape::Quantity,
        r"\b(?P<value><NUM>)\s*(?P<unit><UNIT>)\b"),
    rule(C::Alphanumeric, 5, Shape::Labelled,
        r"\b(?P<label>room|section|gate|floor|block|unit|flat|plot|platform|sector|seat|house)\s+(?P<number>\d+)(?P<suffix>[a-z])?\b"),
    rule(C::VehicleNumber, 5, Shape::Vehicle,
        r"\b[a-z]{2}-?\d{2}-?[a-z]{1,3}-?\d{1,4}\b"),
    rule(C::AlphanumericId, 4, Shape::MixedId, r"\b[a-z]+\d[a-z0-9]*\b"),
    rule(C::Decimal, 4, Shape::Decimal, r"\b(?P<value><AMT>\.\d+)\b"),
    rule(C::Ordinal, 3, Shape::Ordinal, r"\b(?P<value>\d+)(?:st|nd|rd|th)\b"),
    rule(C::Number, 1, Shape::Number, r"\b(?P<value><AMT>)\b"),
];

const PLACEHOLDERS: &[(&str, &str)] = &[
    // plain, Western grouped, Indian grouped
    ("<AMT>", r"(?:\d{1,3}(?:,\d{3})+|\d{1,2}(?:,\d{2})+,\d{3}|\d+)"),
    ("<NUM>", r"(?:\d{1,3}(?:,\d{3})+|\d{1,2}(?:,\d{2})+,\d{3}|\d+)(?:\.\d+)?"),
    ("<MONTH>", r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?"),
    ("<MER>", r"(?P<meridiem>[ap])(?:\.m\.|m\b)"),
    ("<UNIT>", r"kilometers?|kilometres?|kilograms?|grams?|meters?|metres?|litres?|liters?|kmph|km/h|kph|mph|kgs?|mg|km|cm|mm|ml|°\s?c|°\s?f|hours?|hrs?|minutes?|mins?|seconds?|secs?|h|g|m|l"),
];

/// Expand placeholders and the digit classes. `\d` covers ASCII and
/// Devanagari digits only, `\D` is its complement.
pub fn expand_pattern(pattern: &str) -> String {
    let mut expanded = pattern.to_string();
    for (name, body) in PLACEHOLDERS {
        expanded = expanded.replace(name, body);
    }
    let expanded = expanded
        .replace(r"\D", "[^0-9०-९]")
        .replace(r"\d", "[0-9०-९]");
    format!("(?i){expanded}")
}

/// A rule with its regex built
#[derive(Debug)]
pub struct CompiledRule {
    pub rule: Rule,
    pub regex: Regex,
}

pub fn compile(rule: &Rule) -> Result<CompiledRule> {
    let regex = Regex::new(&expand_pattern(rule.pattern)).with_context(|| {
        format!("Failed to compile {} rule: {}", rule.category.as_str(), rule.pattern)
    })?;
    Ok(CompiledRule { rule: *rule, regex })
}
