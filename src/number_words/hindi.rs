// WHY: Hindi numbers are irregular below one hundred, so the full table is spelled out

const BELOW_HUNDRED: [&str; 100] = [
    "शून्य", "एक", "दो", "तीन", "चार", "पांच", "छह", "सात", "आठ", "नौ",
    "दस", "ग्यारह", "बारह", "तेरह", "चौदह", "पंद्रह", "सोलह", "सत्रह", "अठारह", "उन्नीस",
    "बीस", "इक्कीस", "बाईस", "तेईस", "चौबीस", "पच्चीस", "छब्बीस", "सत्ताईस", "अट्ठाईस", "उनतीस",
    "तीस", "इकतीस", "बत्तीस", "तैंतीस", "चौंतीस", "पैंतीस", "छत्तीस", "सैंतीस", "अड़तीस", "उनतालीस",
    "चालीस", "इकतालीस", "बयालीस", "तैंतालीस", "चवालीस", "पैंतालीस", "छियालीस", "सैंतालीस", "अड़तालीस", "उनचास",
    "पचास", "इक्यावन", "बावन", "तिरपन", "चौवन", "पचपन", "छप्पन", "सत्तावन", "अट्ठावन", "उनसठ",
    "साठ", "इकसठ", "बासठ", "तिरसठ", "चौंसठ", "पैंसठ", "छियासठ", "सड़सठ", "अड़सठ", "उनहत्तर",
    "सत्तर", "इकहत्तर", "बहत्तर", "तिहत्तर", "चौहत्तर", "पचहत्तर", "छिहत्तर", "सतहत्तर", "अठहत्तर", "उनासी",
    "अस्सी", "इक्यासी", "बयासी", "तिरासी", "चौरासी", "पचासी", "छियासी", "सतासी", "अट्ठासी", "नवासी",
    "नब्बे", "इक्यानवे", "बानवे", "तिरानवे", "चौरानवे", "पचानवे", "छियानवे", "सत्तानवे", "अट्ठानवे", "निन्यानवे",
];

const SCALES: [(u64, &str); 6] = [
    (100_000_000_000, "खरब"),
    (1_000_000_000, "अरब"),
    (10_000_000, "करोड़"),
    (100_000, "लाख"),
    (1_000, "हज़ार"),
    (100, "सौ"),
];

pub(crate) fn digit(d: u8) -> &'static str {
    BELOW_HUNDRED[usize::from(d % 10)]
}

pub fn cardinal(n: u64) -> String {
    if n < 100 {
        return BELOW_HUNDRED[n as usize].to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut rest = n;
    for &(size, name) in &SCALES {
        if rest >= size {
            parts.push(format!("{} {}", cardinal(rest / size), name));
            rest %= size;
        }
    }
    if rest > 0 {
        parts.push(BELOW_HUNDRED[rest as usize].to_string());
    }
    parts.join(" ")
}

pub fn ordinal(n: u64) -> String {
    match n {
        1 => "पहला".to_string(),
        2 => "दूसरा".to_string(),
        3 => "तीसरा".to_string(),
        4 => "चौथा".to_string(),
        6 => "छठा".to_string(),
        _ => format!("{}वां", cardinal(n)),
    }
}

/// 2000-2099 read as plain numbers, other four-digit years in hundreds
/// ("उन्नीस सौ अट्ठानवे").
pub fn year(y: u32) -> String {
    if (2000..=2099).contains(&y) || !(1000..=9999).contains(&y) || y % 1000 == 0 {
        return cardinal(u64::from(y));
    }
    let high = u64::from(y / 100);
    match u64::from(y % 100) {
        0 => format!("{} सौ", cardinal(high)),
        low => format!("{} सौ {}", cardinal(high), cardinal(low)),
    }
}
