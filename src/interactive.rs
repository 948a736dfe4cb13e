// WHY: line-oriented tester for trying sentences against both languages; generic over
// reader and writer so sessions can be driven from tests without a terminal

use crate::language::{Language, LanguageHint};
use crate::normalizer::TextNormalizer;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Built-in sentences covering every common category
pub const SAMPLE_TEXTS: &[&str] = &[
    "The meeting is on 12-11-2026 at 2:30pm",
    "Call me at +91-9876543210",
    "The price is ₹500 or $50",
    "Room 123, Floor 5",
    "Today's temperature is 25.5°C",
    "Discount: 25% off on items worth $99.99",
    "He came 1st in the race",
    "My employee id is bfrs02904",
    "My phone number is 9999303854",
    "Down payment is Rs 21000",
    "Weekly EMI is Rs 4500",
    "Range is 125-140 km per full charge",
    "Aadhaar number is 1234 5678 9012",
    "Your OTP is 456789",
    "ATM PIN is 110001",
    "Fast charge takes 1.5 hours",
    "Normal charge takes 3 hours",
];

const HELP: &str = "Commands:
  <text>          normalize text in the selected language(s)
  auto <text>     detect the language, then normalize
  d <text>        show detected patterns only
  lang en|hi|both select output language
  samples         run the built-in sample sentences
  help            show this help
  quit | q        exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Empty,
    Quit,
    Help,
    Samples,
    /// `None` selects both languages
    SetLanguage(Option<Language>),
    InvalidLanguage(String),
    Auto(String),
    Detect(String),
    Convert(String),
}

/// Split `line` into a lowercase keyword and its argument
fn keyword(line: &str) -> (String, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word.to_lowercase(), rest.trim()),
        None => (line.to_lowercase(), ""),
    }
}

pub fn parse_command(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Empty;
    }

    let (word, rest) = keyword(line);
    match (word.as_str(), rest) {
        ("quit" | "q" | "exit", "") => ReplCommand::Quit,
        ("help", "") => ReplCommand::Help,
        ("samples", "") => ReplCommand::Samples,
        ("lang", choice) => match choice.to_lowercase().as_str() {
            "en" | "english" => ReplCommand::SetLanguage(Some(Language::English)),
            "hi" | "hindi" => ReplCommand::SetLanguage(Some(Language::Hindi)),
            "both" => ReplCommand::SetLanguage(None),
            other => ReplCommand::InvalidLanguage(other.to_string()),
        },
        ("auto", text) => ReplCommand::Auto(text.to_string()),
        ("d", text) => ReplCommand::Detect(text.to_string()),
        _ => ReplCommand::Convert(line.to_string()),
    }
}

/// Render `text` in the chosen language, or both when `language` is `None`
pub fn render_conversion(normalizer: &TextNormalizer, text: &str, language: Option<Language>) -> String {
    let mut out = format!("  Original: {text}\n");
    let languages: &[Language] = match language {
        Some(Language::English) => &[Language::English],
        Some(Language::Hindi) => &[Language::Hindi],
        None => &[Language::English, Language::Hindi],
    };
    for lang in languages {
        let label = match lang {
            Language::English => "English:",
            Language::Hindi => "Hindi:  ",
        };
        let normalized = normalizer.normalize_text(text, LanguageHint::from(*lang));
        out.push_str(&format!("  {label} {normalized}\n"));
    }
    out
}

pub fn render_detection(normalizer: &TextNormalizer, text: &str) -> String {
    let patterns = normalizer.detect_patterns(text);
    let mut out = format!("Detected {} pattern(s):\n", patterns.len());
    for p in patterns {
        out.push_str(&format!(
            "  {:15} | '{}' at {}-{}\n",
            p.category.as_str(),
            p.text,
            p.span.char_start,
            p.span.char_end
        ));
    }
    out
}

pub fn render_samples(normalizer: &TextNormalizer, language: Option<Language>) -> String {
    SAMPLE_TEXTS
        .iter()
        .map(|sample| render_conversion(normalizer, sample, language))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the REPL until `quit` or end of input
pub async fn run<R, W>(normalizer: &TextNormalizer, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut language: Option<Language> = None;
    let mut lines = input.lines();

    output.write_all(format!("{HELP}\n\n").as_bytes()).await?;
    loop {
        output.write_all(b">>> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            output.write_all(b"\nBye.\n").await?;
            break;
        };

        let reply = match parse_command(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => {
                output.write_all(b"Bye.\n").await?;
                break;
            }
            ReplCommand::Help => format!("{HELP}\n"),
            ReplCommand::Samples => render_samples(normalizer, language),
            ReplCommand::SetLanguage(choice) => {
                language = choice;
                match choice {
                    Some(lang) => format!("Output language set to: {}\n", lang.code()),
                    None => "Output language set to: both\n".to_string(),
                }
            }
            ReplCommand::InvalidLanguage(other) => {
                format!("Unknown language '{other}'. Use: lang en | lang hi | lang both\n")
            }
            ReplCommand::Auto(text) if text.is_empty() => "Usage: auto <text>\n".to_string(),
            ReplCommand::Auto(text) => {
                let detected = normalizer.detect_language(&text);
                let normalized = normalizer.normalize_text(&text, LanguageHint::Auto);
                format!("  Original: {text}\n  Auto ({}): {normalized}\n", detected.code())
            }
            ReplCommand::Detect(text) if text.is_empty() => "Usage: d <text>\n".to_string(),
            ReplCommand::Detect(text) => render_detection(normalizer, &text),
            ReplCommand::Convert(text) => render_conversion(normalizer, &text, language),
        };
        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   "), ReplCommand::Empty);
        assert_eq!(parse_command("Q"), ReplCommand::Quit);
        assert_eq!(parse_command("lang hi"), ReplCommand::SetLanguage(Some(Language::Hindi)));
        assert_eq!(parse_command("lang both"), ReplCommand::SetLanguage(None));
        assert_eq!(
            parse_command("lang fr"),
            ReplCommand::InvalidLanguage("fr".to_string())
        );
        assert_eq!(parse_command("auto mera 5 rupaye"), ReplCommand::Auto("mera 5 rupaye".to_string()));
        assert_eq!(parse_command("d 5 kg"), ReplCommand::Detect("5 kg".to_string()));
        // a sentence that merely starts with a keyword-like word
        assert_eq!(
            parse_command("help me with 5 kg"),
            ReplCommand::Convert("help me with 5 kg".to_string())
        );
        assert_eq!(parse_command("Call 911"), ReplCommand::Convert("Call 911".to_string()));
    }

    #[tokio::test]
    async fn test_session() {
        let normalizer = TextNormalizer::new().unwrap();
        let input = "lang en\nPay $50\nd 25%\nquit\nnever read\n";
        let mut output: Vec<u8> = Vec::new();

        run(&normalizer, input.as_bytes(), &mut output).await.unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Output language set to: en"));
        assert!(transcript.contains("English: Pay fifty dollars"));
        assert!(!transcript.contains("Hindi:   Pay"));
        assert!(transcript.contains("percentage"));
        assert!(transcript.ends_with("Bye.\n"));
        assert!(!transcript.contains("never read"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let normalizer = TextNormalizer::new().unwrap();
        let mut output: Vec<u8> = Vec::new();
        run(&normalizer, "5 kg".as_bytes(), &mut output).await.unwrap();
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("English: five kilograms"));
        assert!(transcript.contains("Hindi:   पांच किलोग्राम"));
    }

    #[test]
    fn test_samples_cover_both_languages() {
        let normalizer = TextNormalizer::new().unwrap();
        let rendered = render_samples(&normalizer, None);
        assert_eq!(rendered.matches("Original:").count(), SAMPLE_TEXTS.len());
        assert!(rendered.contains("English: The price is five hundred rupees or fifty dollars"));
        assert!(rendered.contains("Hindi:   The price is पांच सौ रुपये or पचास डॉलर"));
    }
}
