// WHY: turns validated readings into spoken words; infallible because detection
// already rejected anything that cannot be spoken

use super::reading::{Currency, Meridiem, Reading, Unit};
use crate::language::Language;
use crate::number_words::{self, digit_value, NumberScale, Numeral};

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August",
    "September", "October", "November", "December",
];

const MONTHS_HI: [&str; 12] = [
    "जनवरी", "फ़रवरी", "मार्च", "अप्रैल", "मई", "जून", "जुलाई", "अगस्त",
    "सितंबर", "अक्टूबर", "नवंबर", "दिसंबर",
];

/// Speaks readings in one language
#[derive(Debug, Clone, Copy)]
pub struct Speaker {
    pub lang: Language,
    pub scale: NumberScale,
}

impl Speaker {
    pub fn new(lang: Language, scale: NumberScale) -> Self {
        Self { lang, scale }
    }

    fn is_hindi(&self) -> bool {
        self.lang == Language::Hindi
    }

    fn cardinal(&self, n: u64) -> String {
        number_words::scaled_cardinal(n, self.lang, self.scale)
    }

    fn numeral(&self, value: &Numeral) -> String {
        number_words::numeral(value, self.lang, self.scale)
    }

    fn digits(&self, text: &str) -> String {
        number_words::digits(text, self.lang)
    }

    pub fn speak(&self, reading: &Reading) -> String {
        match reading {
            Reading::Email(address) => self.email(address),
            Reading::Date {
                day,
                month,
                year,
                ordinal_day,
                month_first,
            } => self.date(*day, *month, *year, *ordinal_day, *month_first),
            Reading::Time {
                hour,
                minute,
                second,
                meridiem,
                hinglish,
            } => self.time(*hour, *minute, *second, *meridiem, *hinglish),
            Reading::Digits { label, digits } => {
                if label.is_empty() {
                    self.digits(digits)
                } else {
                    format!("{} {}", label, self.digits(digits))
                }
            }
            Reading::Money {
                currency,
                major,
                minor,
            } => self.money(*currency, *major, *minor),
            Reading::FractionalMoney { currency, amount } => {
                let (unit, _) = currency_words(*currency, self.lang, amount.is_one(), false);
                format!("{} {}", self.numeral(amount), unit)
            }
            Reading::Quantity { value, unit } => {
                format!("{} {}", self.numeral(value), self.unit(*unit, value.is_one()))
            }
            Reading::Ratio(values) => {
                let joiner = if self.is_hindi() { " अनुपात " } else { " is to " };
                values
                    .iter()
                    .map(|v| self.cardinal(*v))
                    .collect::<Vec<_>>()
                    .join(joiner)
            }
            Reading::Range { from, to, unit } => {
                let connector = if self.is_hindi() { "से" } else { "to" };
                let mut words = format!("{} {} {}", self.numeral(from), connector, self.numeral(to));
                if let Some(unit) = unit {
                    words.push(' ');
                    words.push_str(self.unit(*unit, false));
                }
                words
            }
            Reading::Labelled {
                label,
                number,
                suffix,
            } => {
                let label: &str = match hindi_label(label) {
                    Some(hindi) if self.is_hindi() => hindi,
                    _ => label,
                };
                let mut words = format!("{} {}", label, self.cardinal(*number));
                if let Some(suffix) = suffix {
                    words.push(' ');
                    words.extend(suffix.to_uppercase());
                }
                words
            }
            Reading::Vehicle(plate) => plate
                .chars()
                .filter_map(|c| match digit_value(c) {
                    Some(d) => Some(number_words::digit_word(d, self.lang).to_string()),
                    None if c.is_alphabetic() => Some(c.to_uppercase().collect()),
                    None => None,
                })
                .collect::<Vec<_>>()
                .join(" "),
            Reading::MixedId(id) => self.mixed(id),
            Reading::Decimal(value) | Reading::Number(value) => self.numeral(value),
            Reading::Ordinal(n) => number_words::ordinal(*n, self.lang),
        }
    }

    fn date(&self, day: u32, month: u32, year: u32, ordinal_day: bool, month_first: bool) -> String {
        let index = (month.clamp(1, 12) - 1) as usize;
        let day_words = if ordinal_day {
            number_words::ordinal(u64::from(day), self.lang)
        } else {
            number_words::cardinal(u64::from(day), self.lang)
        };
        let year_words = number_words::year(year, self.lang);

        if self.is_hindi() {
            // Hindi keeps day-first order
            return format!("{} {} {}", day_words, MONTHS_HI[index], year_words);
        }
        if month_first {
            format!("{} {} {}", MONTHS_EN[index], day_words, year_words)
        } else {
            format!("{} {} {}", day_words, MONTHS_EN[index], year_words)
        }
    }

    fn time(
        &self,
        hour: u32,
        minute: u32,
        second: Option<u32>,
        meridiem: Option<Meridiem>,
        hinglish: bool,
    ) -> String {
        // 24-hour clock readings carry an implied meridiem
        let (hour, meridiem) = match (meridiem, hinglish, hour) {
            (Some(m), _, h) => (h, Some(m)),
            (None, true, h) => (h, None),
            (None, false, 0) => (12, Some(Meridiem::Am)),
            (None, false, h) if h >= 13 => (h - 12, Some(Meridiem::Pm)),
            (None, false, h) => (h, None),
        };
        let hour_words = number_words::cardinal(u64::from(hour), self.lang);

        if self.is_hindi() {
            let mut words = match minute {
                0 => format!("{} बजे", hour_words),
                m => format!(
                    "{} बजकर {} मिनट",
                    hour_words,
                    number_words::cardinal(u64::from(m), self.lang)
                ),
            };
            if let Some(s) = second {
                words.push_str(&format!(
                    " {} सेकंड",
                    number_words::cardinal(u64::from(s), self.lang)
                ));
            }
            return match meridiem {
                Some(Meridiem::Am) => format!("सुबह {}", words),
                Some(Meridiem::Pm) => format!("शाम {}", words),
                None => words,
            };
        }

        let mut words = match minute {
            0 if meridiem.is_none() || second.is_some() => format!("{} o'clock", hour_words),
            0 => hour_words,
            m if m < 10 => format!("{} oh {}", hour_words, number_words::english::cardinal(u64::from(m))),
            m => format!("{} {}", hour_words, number_words::english::cardinal(u64::from(m))),
        };
        if let Some(s) = second {
            let unit = if s == 1 { "second" } else { "seconds" };
            words.push_str(&format!(" and {} {}", number_words::english::cardinal(u64::from(s)), unit));
        }
        match meridiem {
            Some(Meridiem::Am) => format!("{} a m", words),
            Some(Meridiem::Pm) => format!("{} p m", words),
            None => words,
        }
    }

    fn money(&self, currency: Currency, major: u64, minor: u32) -> String {
        let (major_unit, minor_unit) = currency_words(currency, self.lang, major == 1, minor == 1);
        // rupee amounts are always grouped by lakh and crore
        let amount = |n: u64| match (self.lang, currency) {
            (Language::English, Currency::Rupee) => number_words::indian_cardinal(n),
            _ => self.cardinal(n),
        };
        let minor_words = || format!("{} {}", amount(u64::from(minor)), minor_unit);

        if major == 0 && minor > 0 {
            return minor_words();
        }
        let major_words = format!("{} {}", amount(major), major_unit);
        if minor == 0 {
            return major_words;
        }
        let and = if self.is_hindi() { "और" } else { "and" };
        format!("{} {} {}", major_words, and, minor_words())
    }

    fn unit(&self, unit: Unit, singular: bool) -> &'static str {
        let (plural, one, hindi) = unit_words(unit);
        match (self.lang, singular) {
            (Language::Hindi, true) if unit == Unit::Hour => "घंटा",
            (Language::Hindi, _) => hindi,
            (Language::English, true) => one,
            (Language::English, false) => plural,
        }
    }

    /// Letter runs are kept, digit runs read digit by digit, `@` and `.` spoken
    fn email(&self, address: &str) -> String {
        let mut tokens: Vec<String> = Vec::new();
        let mut word = String::new();
        let mut digit_run = String::new();

        let flush = |tokens: &mut Vec<String>, word: &mut String, digit_run: &mut String| {
            if !word.is_empty() {
                tokens.push(std::mem::take(word));
            }
            if !digit_run.is_empty() {
                tokens.push(self.digits(digit_run));
                digit_run.clear();
            }
        };

        for c in address.chars() {
            match c {
                '@' | '.' => {
                    flush(&mut tokens, &mut word, &mut digit_run);
                    let spoken = if c == '@' { "at" } else { "dot" };
                    tokens.push(spoken.to_string());
                }
                c if digit_value(c).is_some() => {
                    if !word.is_empty() {
                        tokens.push(std::mem::take(&mut word));
                    }
                    digit_run.push(c);
                }
                c => {
                    if !digit_run.is_empty() {
                        tokens.push(self.digits(&digit_run));
                        digit_run.clear();
                    }
                    word.push(c);
                }
            }
        }
        flush(&mut tokens, &mut word, &mut digit_run);
        tokens.join(" ")
    }

    /// `bfrs02904` becomes `bfrs zero two nine zero four`
    fn mixed(&self, id: &str) -> String {
        let mut tokens: Vec<String> = Vec::new();
        let mut letters = String::new();
        for c in id.chars() {
            match digit_value(c) {
                Some(d) => {
                    if !letters.is_empty() {
                        tokens.push(std::mem::take(&mut letters));
                    }
                    tokens.push(number_words::digit_word(d, self.lang).to_string());
                }
                None => letters.push(c),
            }
        }
        if !letters.is_empty() {
            tokens.push(letters);
        }
        tokens.join(" ")
    }
}

fn hindi_label(label: &str) -> Option<&'static str> {
    let label = match label.to_lowercase().as_str() {
        "room" => "कमरा",
        "floor" => "मंजिल",
        "gate" => "गेट",
        "section" => "सेक्शन",
        "block" => "ब्लॉक",
        "flat" => "फ्लैट",
        "platform" => "प्लेटफॉर्म",
        "sector" => "सेक्टर",
        "house" => "मकान",
        _ => return None,
    };
    Some(label)
}

/// Plural, singular and Hindi names of a unit
fn unit_words(unit: Unit) -> (&'static str, &'static str, &'static str) {
    match unit {
        Unit::Percent => ("percent", "percent", "प्रतिशत"),
        Unit::Kilogram => ("kilograms", "kilogram", "किलोग्राम"),
        Unit::Gram => ("grams", "gram", "ग्राम"),
        Unit::Milligram => ("milligrams", "milligram", "मिलीग्राम"),
        Unit::Meter => ("meters", "meter", "मीटर"),
        Unit::Centimeter => ("centimeters", "centimeter", "सेंटीमीटर"),
        Unit::Millimeter => ("millimeters", "millimeter", "मिलीमीटर"),
        Unit::Kilometer => ("kilometers", "kilometer", "किलोमीटर"),
        Unit::Liter => ("liters", "liter", "लीटर"),
        Unit::Milliliter => ("milliliters", "milliliter", "मिलीलीटर"),
        Unit::Celsius => ("degrees Celsius", "degree Celsius", "डिग्री सेल्सियस"),
        Unit::Fahrenheit => ("degrees Fahrenheit", "degree Fahrenheit", "डिग्री फारेनहाइट"),
        Unit::Hour => ("hours", "hour", "घंटे"),
        Unit::Minute => ("minutes", "minute", "मिनट"),
        Unit::Second => ("seconds", "second", "सेकंड"),
        Unit::KilometerPerHour => ("kilometers per hour", "kilometer per hour", "किलोमीटर प्रति घंटा"),
        Unit::MilePerHour => ("miles per hour", "mile per hour", "मील प्रति घंटा"),
    }
}

fn currency_words(
    currency: Currency,
    lang: Language,
    major_one: bool,
    minor_one: bool,
) -> (&'static str, &'static str) {
    match lang {
        Language::Hindi => match currency {
            Currency::Rupee => (if major_one { "रुपया" } else { "रुपये" }, "पैसे"),
            Currency::Dollar => ("डॉलर", "सेंट"),
            Currency::Euro => ("यूरो", "सेंट"),
            Currency::Pound => ("पाउंड", "पेंस"),
        },
        Language::English => {
            let (major, minor) = match currency {
                Currency::Rupee => (("rupee", "rupees"), ("paisa", "paise")),
                Currency::Dollar => (("dollar", "dollars"), ("cent", "cents")),
                Currency::Euro => (("euro", "euros"), ("cent", "cents")),
                Currency::Pound => (("pound", "pounds"), ("penny", "pence")),
            };
            (
                if major_one { major.0 } else { major.1 },
                if minor_one { minor.0 } else { minor.1 },
            )
        }
    }
}
