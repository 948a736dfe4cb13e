// WHY: end-to-end checks of the public normalize API over whole sentences, in both
// languages, including the properties every output must keep

use numspeak::{
    normalize, splice, Language, LanguageHint, NormalizationRequest, NormalizerConfig,
    PatternCategory, TextNormalizer,
};

const SENTENCES: &[&str] = &[
    "The meeting is on 12-11-2026 at 2:30pm",
    "Call me at +91-9876543210",
    "The price is ₹500 or $50",
    "Today's temperature is 25.5°C",
    "Discount: 25% off on items worth $99.99",
    "He came 1st in the race",
    "My employee id is bfrs02904",
    "Range is 125-140 km per full charge",
    "Aadhaar number is 1234 5678 9012",
    "Your OTP is 456789",
    "Fast charge takes 1.5 hours",
    "Vehicle DL01CA1234 was parked in Room 123",
    "Mix the paint 3:1 by volume",
    "Write to x09@gmail.com before 15 January 2024",
    "I paid 150 rs.",
    "Cost is 5 usd. Thanks!",
    "Room 12/11/2026 is booked.",
    "Gate 5 12-11-2026, then home.",
    "The form says 31/02/2024, which is wrong.",
    "Odd price $5.999!",
    "Due Jan 5,2024.",
    "Count 123456789012345678901234567890 stars?",
];

const SENTENCE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';'];

fn has_ascii_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

#[test]
fn test_text_without_digits_is_unchanged() {
    let normalizer = TextNormalizer::new().expect("Failed to build normalizer");
    for text in [
        "Hello, world!",
        "नमस्ते दुनिया",
        "No numbers: just words, punctuation & symbols like $ and %.",
        "",
    ] {
        for hint in [LanguageHint::English, LanguageHint::Hindi, LanguageHint::Auto] {
            let result = normalizer.normalize(&NormalizationRequest::new(text).with_language(hint));
            assert_eq!(result.text, text);
            assert!(!result.changed);
            assert!(result.patterns.is_empty());
        }
    }
}

#[test]
fn test_sentences_lose_all_digits() {
    let normalizer = TextNormalizer::new().expect("Failed to build normalizer");
    for sentence in SENTENCES {
        for hint in [LanguageHint::English, LanguageHint::Hindi] {
            let output = normalizer.normalize_text(sentence, hint);
            assert!(
                !has_ascii_digit(&output),
                "digits left in {output:?} from {sentence:?}"
            );
        }
    }
}

#[test]
fn test_normalizing_twice_changes_nothing() {
    let normalizer = TextNormalizer::new().expect("Failed to build normalizer");
    for sentence in SENTENCES {
        for hint in [LanguageHint::English, LanguageHint::Hindi] {
            let once = normalizer.normalize_text(sentence, hint);
            let twice = normalizer.normalize_text(&once, hint);
            assert_eq!(once, twice, "second pass changed {sentence:?}");
        }
    }
}

#[test]
fn test_patterns_splice_back_into_output() {
    for sentence in SENTENCES {
        let result = normalize(sentence, LanguageHint::English, true);
        assert!(result.changed, "nothing replaced in {sentence:?}");
        assert_eq!(splice(sentence, &result.patterns), Some(result.text.clone()));

        let mut previous_end = 0;
        for pattern in &result.patterns {
            assert!(pattern.span.start >= previous_end, "overlapping spans in {sentence:?}");
            assert_eq!(&sentence[pattern.span.start..pattern.span.end], pattern.original);
            assert!(pattern.span.char_start <= pattern.span.char_end);
            previous_end = pattern.span.end;
        }
    }
}

#[test]
fn test_punctuation_outside_patterns_survives() {
    for sentence in SENTENCES {
        for hint in [LanguageHint::English, LanguageHint::Hindi] {
            let result = normalize(sentence, hint, true);
            for pattern in &result.patterns {
                assert!(
                    !pattern.original.ends_with(SENTENCE_PUNCTUATION),
                    "{:?} swallowed trailing punctuation in {sentence:?}",
                    pattern.original
                );
            }
            if let Some(last) = sentence.chars().last().filter(|c| SENTENCE_PUNCTUATION.contains(c)) {
                assert!(
                    result.text.ends_with(last),
                    "lost final {last:?}: {:?}",
                    result.text
                );
            }
        }
    }
}

#[test]
fn test_edge_sentences() {
    let normalizer = TextNormalizer::new().expect("Failed to build normalizer");
    let en = |text: &str| normalizer.normalize_text(text, LanguageHint::English);

    assert_eq!(en("I paid 150 rs."), "I paid one hundred and fifty rupees.");
    assert_eq!(en("Cost is 5 usd. Thanks!"), "Cost is five dollars. Thanks!");
    assert_eq!(
        en("Room 12/11/2026 is booked."),
        "Room twelve November twenty twenty-six is booked."
    );
    assert_eq!(en("Odd price $5.999!"), "Odd price five point nine nine nine dollars!");
    assert_eq!(en("Due Jan 5,2024."), "Due January five twenty twenty-four.");
    assert!(!en("The form says 31/02/2024, which is wrong.").contains("February"));
    assert!(en("Count 123456789012345678901234567890 stars?")
        .starts_with("Count one two three four five six seven eight nine zero one"));
}

#[test]
fn test_meeting_sentence_in_both_languages() {
    let english = normalize("Meeting at 2:30pm on 12/11/2026", LanguageHint::English, true);
    assert_eq!(
        english.text,
        "Meeting at two thirty p m on twelve November twenty twenty-six"
    );
    let categories: Vec<PatternCategory> = english.patterns.iter().map(|p| p.category).collect();
    assert_eq!(categories, vec![PatternCategory::Time, PatternCategory::Date]);

    let hindi = normalize("Meeting at 2:30pm on 12/11/2026", LanguageHint::Hindi, false);
    assert_eq!(hindi.language, Language::Hindi);
    assert!(hindi.text.contains("शाम दो बजकर तीस मिनट"));
    assert!(hindi.text.contains("बारह नवंबर दो हज़ार छब्बीस"));
    assert!(hindi.patterns.is_empty());
}

#[test]
fn test_currency_sentence() {
    let result = normalize("The price is ₹500 or $50", LanguageHint::English, true);
    assert_eq!(result.text, "The price is five hundred rupees or fifty dollars");
    assert!(result
        .patterns
        .iter()
        .all(|p| p.category == PatternCategory::Currency));
    assert_eq!(result.patterns.len(), 2);
}

#[test]
fn test_auto_detects_devanagari() {
    let result = normalize("मेरा नंबर 9876543210 है", LanguageHint::Auto, false);
    assert_eq!(result.language, Language::Hindi);
    assert!(result.text.starts_with("मेरा नंबर नौ आठ सात"));
    assert!(result.text.ends_with(" है"));
}

#[test]
fn test_disabled_category_is_left_alone() {
    let config = NormalizerConfig::from_json_str(r#"{"disabled_categories": ["currency"]}"#)
        .expect("Failed to parse config");
    let normalizer = TextNormalizer::with_config(config).expect("Failed to build normalizer");

    let detected = normalizer.detect_patterns("Pay ₹500 in 5 days");
    assert!(detected.iter().all(|p| p.category != PatternCategory::Currency));
    assert!(!normalizer
        .normalize_text("Pay ₹500 in 5 days", LanguageHint::English)
        .contains("rupees"));
}

#[test]
fn test_batch_preserves_order() {
    let normalizer = TextNormalizer::new().expect("Failed to build normalizer");
    let inputs = ["5 kg", "no digits", "25%"];
    let outputs = normalizer.normalize_batch(&inputs, LanguageHint::English);
    assert_eq!(
        outputs,
        vec![
            "five kilograms".to_string(),
            "no digits".to_string(),
            "twenty-five percent".to_string(),
        ]
    );
}

#[test]
fn test_result_serializes_to_json() {
    let result = normalize("Room 123", LanguageHint::English, true);
    let json = serde_json::to_value(&result).expect("Failed to serialize result");
    assert_eq!(json["text"], "Room one hundred and twenty-three");
    assert_eq!(json["language"], "english");
    assert_eq!(json["changed"], true);
    assert_eq!(json["patterns"][0]["original"], "Room 123");
}
