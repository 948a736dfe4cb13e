// WHY: matches are interpreted into typed readings before any words are produced,
// so invalid values (month 13, minute 75) are rejected while detection can still fall back

use super::rules::Shape;
use crate::number_words::{parse_digits, parse_u64, Numeral};
use regex_automata::util::captures::Captures;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Rupee,
    Dollar,
    Euro,
    Pound,
}

impl Currency {
    /// Currency named by a symbol, code or word. The flag is set for
    /// minor-unit words such as "paise" and "cents".
    pub fn from_token(token: &str) -> Option<(Self, bool)> {
        let token = token.trim().trim_end_matches('.').to_lowercase();
        let found = match token.as_str() {
            "₹" | "rs" | "inr" | "rupee" | "rupees" | "rupaye" | "rupaiye" | "rupay" => (Currency::Rupee, false),
            "paise" => (Currency::Rupee, true),
            "$" | "usd" | "dollar" | "dollars" => (Currency::Dollar, false),
            "cent" | "cents" => (Currency::Dollar, true),
            "€" | "eur" | "euro" | "euros" => (Currency::Euro, false),
            "£" | "gbp" | "pound" | "pounds" => (Currency::Pound, false),
            _ => return None,
        };
        Some(found)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Kilogram,
    Gram,
    Milligram,
    Meter,
    Centimeter,
    Millimeter,
    Kilometer,
    Liter,
    Milliliter,
    Celsius,
    Fahrenheit,
    Hour,
    Minute,
    Second,
    KilometerPerHour,
    MilePerHour,
}

impl Unit {
    pub fn parse(token: &str) -> Option<Self> {
        let token: String = token
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        let unit = match token.as_str() {
            "%" | "percent" => Unit::Percent,
            "kg" | "kgs" | "kilogram" | "kilograms" => Unit::Kilogram,
            "g" | "gram" | "grams" => Unit::Gram,
            "mg" => Unit::Milligram,
            "m" | "meter" | "meters" | "metre" | "metres" => Unit::Meter,
            "cm" => Unit::Centimeter,
            "mm" => Unit::Millimeter,
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Unit::Kilometer,
            "l" | "liter" | "liters" | "litre" | "litres" => Unit::Liter,
            "ml" => Unit::Milliliter,
            "°c" => Unit::Celsius,
            "°f" => Unit::Fahrenheit,
            "h" | "hr" | "hrs" | "hour" | "hours" => Unit::Hour,
            "min" | "mins" | "minute" | "minutes" => Unit::Minute,
            "sec" | "secs" | "second" | "seconds" => Unit::Second,
            "kmph" | "km/h" | "kph" => Unit::KilometerPerHour,
            "mph" => Unit::MilePerHour,
            _ => return None,
        };
        Some(unit)
    }
}

/// Typed interpretation of a matched span
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Email(String),
    Date {
        day: u32,
        month: u32,
        year: u32,
        ordinal_day: bool,
        month_first: bool,
    },
    Time {
        hour: u32,
        minute: u32,
        second: Option<u32>,
        meridiem: Option<Meridiem>,
        hinglish: bool,
    },
    /// Phone numbers, ID codes and pincodes. `label` is kept verbatim.
    Digits { label: String, digits: String },
    Money {
        currency: Currency,
        major: u64,
        minor: u32,
    },
    /// Amounts with more fractional digits than the minor unit holds
    FractionalMoney { currency: Currency, amount: Numeral },
    Quantity { value: Numeral, unit: Unit },
    Ratio(Vec<u64>),
    Range {
        from: Numeral,
        to: Numeral,
        unit: Option<Unit>,
    },
    Labelled {
        label: String,
        number: u64,
        suffix: Option<char>,
    },
    Vehicle(String),
    MixedId(String),
    Decimal(Numeral),
    Ordinal(u64),
    Number(Numeral),
}

/// Named-group access over one regex match
pub struct Groups<'t> {
    text: &'t str,
    caps: &'t Captures,
}

impl<'t> Groups<'t> {
    pub fn new(text: &'t str, caps: &'t Captures) -> Self {
        Self { text, caps }
    }

    pub fn get(&self, name: &str) -> Option<&'t str> {
        self.caps
            .get_group_by_name(name)
            .map(|span| &self.text[span.range()])
    }

    pub fn start_of(&self, name: &str) -> Option<usize> {
        self.caps.get_group_by_name(name).map(|span| span.start)
    }
}

const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_valid_day(day: u32, month: u32) -> bool {
    (1..=12).contains(&month) && day >= 1 && day <= DAYS_IN_MONTH[(month - 1) as usize]
}

/// Month number from an English month name or abbreviation
pub fn month_from_name(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_ascii_lowercase();
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    MONTHS
        .iter()
        .position(|m| *m == prefix)
        .map(|i| i as u32 + 1)
}

/// Two-digit years up to 30 are this century, the rest the last
fn expand_year(raw: &str) -> Option<u32> {
    let digits = parse_digits(raw);
    let value: u32 = digits.parse().ok()?;
    match digits.len() {
        2 if value <= 30 => Some(2000 + value),
        2 => Some(1900 + value),
        4 => Some(value),
        _ => None,
    }
}

fn small(raw: Option<&str>) -> Option<u32> {
    parse_u64(raw?).and_then(|v| u32::try_from(v).ok())
}

fn interpret_date(groups: &Groups, ordinal_day: bool, month_first: bool) -> Option<Reading> {
    let day = small(groups.get("day"))?;
    let month = match groups.get("month")? {
        m if m.chars().all(|c| crate::number_words::digit_value(c).is_some()) => small(Some(m))?,
        m => month_from_name(m)?,
    };
    let year = expand_year(groups.get("year")?)?;
    if !is_valid_day(day, month) {
        return None;
    }
    Some(Reading::Date {
        day,
        month,
        year,
        ordinal_day,
        month_first,
    })
}

fn interpret_clock(groups: &Groups) -> Option<Reading> {
    let hour = small(groups.get("hour"))?;
    let minute = match groups.get("minute") {
        Some(m) => small(Some(m))?,
        None => 0,
    };
    let second = match groups.get("second") {
        Some(s) => Some(small(Some(s))?),
        None => None,
    };
    let meridiem = groups.get("meridiem").map(|m| {
        if m.eq_ignore_ascii_case("a") {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    });

    if minute >= 60 || second.map_or(false, |s| s >= 60) {
        return None;
    }
    let hour_ok = match meridiem {
        Some(_) => (1..=12).contains(&hour),
        None => hour <= 23,
    };
    if !hour_ok {
        return None;
    }

    Some(Reading::Time {
        hour,
        minute,
        second,
        meridiem,
        hinglish: false,
    })
}

fn interpret_hinglish(groups: &Groups) -> Option<Reading> {
    let hour = small(groups.get("hour"))?;
    let minute = match groups.get("minute") {
        Some(m) => small(Some(m))?,
        None => 0,
    };
    if hour > 23 || minute >= 60 {
        return None;
    }
    Some(Reading::Time {
        hour,
        minute,
        second: None,
        meridiem: None,
        hinglish: true,
    })
}

fn interpret_money(groups: &Groups) -> Option<Reading> {
    let (currency, minor_unit) = Currency::from_token(groups.get("unit")?)?;
    let amount = Numeral::parse(groups.get("amount")?)?;
    let whole = amount.integer_value()?;

    if minor_unit {
        // "50 paise", "99 cents"
        if !amount.fraction.is_empty() || whole >= 100 {
            return None;
        }
        return Some(Reading::Money {
            currency,
            major: 0,
            minor: whole as u32,
        });
    }

    let minor = match amount.fraction.len() {
        0 => 0,
        1 => amount.fraction.parse::<u32>().ok()? * 10,
        2 => amount.fraction.parse::<u32>().ok()?,
        // $5.999 is read as a decimal amount
        _ => return Some(Reading::FractionalMoney { currency, amount }),
    };
    Some(Reading::Money {
        currency,
        major: whole,
        minor,
    })
}

fn interpret_labelled_digits(text: &str, span: &Range<usize>, groups: &Groups) -> Option<Reading> {
    let number_start = groups.start_of("number")?;
    let label = text.get(span.start..number_start)?.trim_end().to_string();
    let digits = parse_digits(groups.get("number")?);
    if digits.is_empty() {
        return None;
    }
    Some(Reading::Digits { label, digits })
}

/// Interpret a match of `shape` covering `text[span]`. `None` means the
/// match does not hold a usable value and is discarded.
pub fn interpret(shape: Shape, text: &str, span: &Range<usize>, groups: &Groups) -> Option<Reading> {
    let matched = text.get(span.clone())?;
    match shape {
        Shape::Email => Some(Reading::Email(matched.to_string())),
        Shape::NumericDate => interpret_date(groups, false, false),
        Shape::NamedDate => interpret_date(groups, groups.get("suffix").is_some(), false),
        Shape::MonthFirstDate => interpret_date(groups, groups.get("suffix").is_some(), true),
        Shape::ClockTime => interpret_clock(groups),
        Shape::HinglishTime => interpret_hinglish(groups),
        Shape::Phone => {
            let digits = parse_digits(matched);
            if digits.len() < 7 {
                return None;
            }
            Some(Reading::Digits {
                label: String::new(),
                digits,
            })
        }
        Shape::LabelledDigits => interpret_labelled_digits(text, span, groups),
        Shape::Currency => interpret_money(groups),
        Shape::Quantity => Some(Reading::Quantity {
            value: Numeral::parse(groups.get("value")?)?,
            unit: Unit::parse(groups.get("unit")?)?,
        }),
        Shape::Ratio => {
            let values = matched
                .split(':')
                .map(|part| parse_u64(part.trim()))
                .collect::<Option<Vec<_>>>()?;
            Some(Reading::Ratio(values))
        }
        Shape::Range => {
            let from = Numeral::parse(groups.get("from")?)?;
            let to = Numeral::parse(groups.get("to")?)?;
            if from.to_f64() > to.to_f64() {
                return None;
            }
            let unit = match (groups.get("unit"), groups.get("percent")) {
                (Some(unit), _) => Some(Unit::parse(unit)?),
                (None, Some(_)) => Some(Unit::Percent),
                (None, None) => None,
            };
            Some(Reading::Range { from, to, unit })
        }
        Shape::Labelled => Some(Reading::Labelled {
            label: groups.get("label")?.to_string(),
            number: parse_u64(groups.get("number")?)?,
            suffix: groups.get("suffix").and_then(|s| s.chars().next()),
        }),
        Shape::Vehicle => Some(Reading::Vehicle(matched.to_string())),
        Shape::MixedId => Some(Reading::MixedId(matched.to_string())),
        Shape::Decimal => Some(Reading::Decimal(Numeral::parse(groups.get("value")?)?)),
        Shape::Ordinal => Some(Reading::Ordinal(parse_u64(groups.get("value")?)?)),
        Shape::Number => Some(Reading::Number(Numeral::parse(groups.get("value")?)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_tokens() {
        assert_eq!(Currency::from_token("Rs."), Some((Currency::Rupee, false)));
        assert_eq!(Currency::from_token("₹"), Some((Currency::Rupee, false)));
        assert_eq!(Currency::from_token("rupaye"), Some((Currency::Rupee, false)));
        assert_eq!(Currency::from_token("USD"), Some((Currency::Dollar, false)));
        assert_eq!(Currency::from_token("cents"), Some((Currency::Dollar, true)));
        assert_eq!(Currency::from_token("£"), Some((Currency::Pound, false)));
        assert_eq!(Currency::from_token("yen"), None);
    }

    #[test]
    fn test_unit_tokens() {
        assert_eq!(Unit::parse("°C"), Some(Unit::Celsius));
        assert_eq!(Unit::parse("° F"), Some(Unit::Fahrenheit));
        assert_eq!(Unit::parse("per cent"), Some(Unit::Percent));
        assert_eq!(Unit::parse("KM/H"), Some(Unit::KilometerPerHour));
        assert_eq!(Unit::parse("hrs"), Some(Unit::Hour));
        assert_eq!(Unit::parse("furlong"), None);
    }

    #[test]
    fn test_calendar_validation() {
        assert!(is_valid_day(29, 2));
        assert!(!is_valid_day(30, 2));
        assert!(!is_valid_day(31, 4));
        assert!(!is_valid_day(12, 13));
        assert!(!is_valid_day(0, 1));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_from_name("January"), Some(1));
        assert_eq!(month_from_name("sept"), Some(9));
        assert_eq!(month_from_name("Nov"), Some(11));
        assert_eq!(month_from_name("no"), None);
    }

    #[test]
    fn test_two_digit_years() {
        assert_eq!(expand_year("26"), Some(2026));
        assert_eq!(expand_year("30"), Some(2030));
        assert_eq!(expand_year("98"), Some(1998));
        assert_eq!(expand_year("२०२६"), Some(2026));
        assert_eq!(expand_year("202"), None);
    }
}
