// WHY: English number words with British "and" and both Western and Indian scale systems

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
    "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const WESTERN_SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

const INDIAN_SCALES: [(u64, &str); 3] = [
    (10_000_000, "crore"),
    (100_000, "lakh"),
    (1_000, "thousand"),
];

pub(crate) fn digit(d: u8) -> &'static str {
    ONES[usize::from(d % 10)]
}

fn below_hundred(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        ones => format!("{}-{}", tens, ONES[ones as usize]),
    }
}

fn below_thousand(n: u64) -> String {
    debug_assert!(n < 1000);
    let hundreds = n / 100;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, _) => below_hundred(rest),
        (h, 0) => format!("{} hundred", ONES[h as usize]),
        (h, r) => format!("{} hundred and {}", ONES[h as usize], below_hundred(r)),
    }
}

/// Walk the scale table largest first; the group counts themselves are
/// spelled recursively so "twelve hundred crore" style counts still read.
fn with_scales(n: u64, scales: &[(u64, &str)]) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut rest = n;
    for &(size, name) in scales {
        if rest >= size {
            let count = rest / size;
            let count_words = if count >= 1000 {
                with_scales(count, scales)
            } else {
                below_thousand(count)
            };
            parts.push(format!("{} {}", count_words, name));
            rest %= size;
        }
    }

    if rest > 0 {
        // "one thousand and five", but "one thousand two hundred"
        if !parts.is_empty() && rest < 100 {
            parts.push(format!("and {}", below_hundred(rest)));
        } else {
            parts.push(below_thousand(rest));
        }
    }

    parts.join(" ")
}

/// Cardinal words on the Western scale: thousand, million, billion, ...
pub fn cardinal(n: u64) -> String {
    with_scales(n, &WESTERN_SCALES)
}

/// Cardinal words on the Indian scale: thousand, lakh, crore
pub fn indian_cardinal(n: u64) -> String {
    with_scales(n, &INDIAN_SCALES)
}

fn ordinal_word(word: &str) -> String {
    match word {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        w if w.ends_with('y') => format!("{}ieth", &w[..w.len() - 1]),
        w => format!("{}th", w),
    }
}

/// Turn the last word of a cardinal into its ordinal form
pub(crate) fn ordinalize(words: &str) -> String {
    let split_at = words.rfind([' ', '-']).map(|i| i + 1).unwrap_or(0);
    let (head, last) = words.split_at(split_at);
    format!("{}{}", head, ordinal_word(last))
}

pub fn ordinal(n: u64) -> String {
    ordinalize(&cardinal(n))
}

/// Years are read in pairs: 2026 is "twenty twenty-six", 1900 is
/// "nineteen hundred", 2005 is "twenty oh five". Round thousands and
/// anything outside 1000..=9999 fall back to the cardinal.
pub fn year(y: u32) -> String {
    if !(1000..=9999).contains(&y) || y % 1000 == 0 {
        return cardinal(u64::from(y));
    }
    let high = u64::from(y / 100);
    let low = u64::from(y % 100);
    match low {
        0 => format!("{} hundred", below_hundred(high)),
        1..=9 => format!("{} oh {}", below_hundred(high), ONES[low as usize]),
        _ => format!("{} {}", below_hundred(high), below_hundred(low)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_cardinals() {
        assert_eq!(cardinal(0), "zero");
        assert_eq!(cardinal(7), "seven");
        assert_eq!(cardinal(19), "nineteen");
        assert_eq!(cardinal(40), "forty");
        assert_eq!(cardinal(42), "forty-two");
        assert_eq!(cardinal(99), "ninety-nine");
    }

    #[test]
    fn test_hundreds_use_british_and() {
        assert_eq!(cardinal(100), "one hundred");
        assert_eq!(cardinal(125), "one hundred and twenty-five");
        assert_eq!(cardinal(500), "five hundred");
        assert_eq!(cardinal(1005), "one thousand and five");
        assert_eq!(cardinal(1200), "one thousand two hundred");
        assert_eq!(cardinal(21000), "twenty-one thousand");
    }

    #[test]
    fn test_large_western_scales() {
        assert_eq!(cardinal(1_000_000), "one million");
        assert_eq!(
            cardinal(2_500_300),
            "two million five hundred thousand three hundred"
        );
        assert_eq!(
            cardinal(u64::MAX),
            "eighteen quintillion four hundred and forty-six quadrillion seven hundred and forty-four trillion seventy-three billion seven hundred and nine million five hundred and fifty-one thousand six hundred and fifteen"
        );
    }

    #[test]
    fn test_indian_scale() {
        assert_eq!(indian_cardinal(500), "five hundred");
        assert_eq!(indian_cardinal(21000), "twenty-one thousand");
        assert_eq!(indian_cardinal(150_000), "one lakh fifty thousand");
        assert_eq!(indian_cardinal(25_00_000), "twenty-five lakh");
        assert_eq!(indian_cardinal(1_00_00_000), "one crore");
        assert_eq!(
            indian_cardinal(2_50_075),
            "two lakh fifty thousand and seventy-five"
        );
        assert_eq!(indian_cardinal(1200_00_00_000), "one thousand two hundred crore");
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal(1), "first");
        assert_eq!(ordinal(2), "second");
        assert_eq!(ordinal(3), "third");
        assert_eq!(ordinal(4), "fourth");
        assert_eq!(ordinal(12), "twelfth");
        assert_eq!(ordinal(15), "fifteenth");
        assert_eq!(ordinal(20), "twentieth");
        assert_eq!(ordinal(22), "twenty-second");
        assert_eq!(ordinal(103), "one hundred and third");
        assert_eq!(ordinal(1000), "one thousandth");
    }

    #[test]
    fn test_years_read_in_pairs() {
        assert_eq!(year(2026), "twenty twenty-six");
        assert_eq!(year(1998), "nineteen ninety-eight");
        assert_eq!(year(1900), "nineteen hundred");
        assert_eq!(year(2005), "twenty oh five");
        assert_eq!(year(2000), "two thousand");
        assert_eq!(year(999), "nine hundred and ninety-nine");
    }
}
