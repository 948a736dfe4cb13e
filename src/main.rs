use anyhow::Result;
use clap::{Parser, Subcommand};
use numspeak::batch::{self, BatchConfig};
use numspeak::config::NormalizerConfig;
use numspeak::interactive;
use numspeak::reader::read_all;
use numspeak::{Language, LanguageHint, NormalizationRequest, TextNormalizer};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "numspeak")]
#[command(about = "Speak numbers, dates, currency and IDs as words for TTS (English and Hindi)")]
#[command(version)]
struct Cli {
    /// JSON normalizer configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log progress at info level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize text given as arguments, or stdin when none is given
    Normalize {
        text: Vec<String>,

        /// Output language (defaults to the configured language)
        #[arg(long, value_enum)]
        lang: Option<LanguageHint>,

        /// List every replaced span
        #[arg(long)]
        show_patterns: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List recognised patterns without converting them
    Detect {
        #[arg(required = true)]
        text: Vec<String>,

        #[arg(long)]
        json: bool,
    },
    /// Run the built-in sample sentences
    Samples {
        /// Only this language; both when omitted
        #[arg(long, value_enum)]
        lang: Option<LanguageHint>,
    },
    /// Line-by-line interactive tester
    Interactive,
    /// Normalize files into <stem>_normalized.txt next to each input
    Batch {
        /// Files or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        #[arg(long, value_enum)]
        lang: Option<LanguageHint>,

        /// Overwrite even complete outputs
        #[arg(long)]
        overwrite_all: bool,

        /// Abort on first error
        #[arg(long)]
        fail_fast: bool,

        /// Suppress console progress bar
        #[arg(long)]
        no_progress: bool,

        /// Stats output file path
        #[arg(long, default_value = "run_stats.json")]
        stats_out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // logs go to stderr so stdout stays clean for normalized text
    let level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?cli, "Parsed CLI arguments");

    let config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file does not exist: {}", path.display());
            }
            NormalizerConfig::load(path)?
        }
        None => NormalizerConfig::default(),
    };
    let default_language = config.default_language;
    let normalizer = TextNormalizer::with_config(config)?;

    match cli.command {
        Command::Normalize {
            text,
            lang,
            show_patterns,
            json,
        } => {
            let language = lang.unwrap_or(default_language);
            let inputs = if text.is_empty() {
                read_all(tokio::io::stdin())
                    .await?
                    .lines()
                    .map(str::to_string)
                    .collect()
            } else {
                vec![text.join(" ")]
            };

            for input in inputs {
                let request = NormalizationRequest::new(input)
                    .with_language(language)
                    .with_patterns(show_patterns || json);
                let result = normalizer.normalize(&request);

                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                    continue;
                }
                println!("{}", result.text);
                if show_patterns {
                    for p in &result.patterns {
                        println!(
                            "  {:15} | '{}' -> '{}' at {}-{}",
                            p.category.as_str(),
                            p.original,
                            p.replacement,
                            p.span.char_start,
                            p.span.char_end
                        );
                    }
                }
            }
        }
        Command::Detect { text, json } => {
            let text = text.join(" ");
            if json {
                let patterns = normalizer.detect_patterns(&text);
                println!("{}", serde_json::to_string_pretty(&patterns)?);
            } else {
                print!("{}", interactive::render_detection(&normalizer, &text));
            }
        }
        Command::Samples { lang } => {
            let language = match lang {
                Some(LanguageHint::English) => Some(Language::English),
                Some(LanguageHint::Hindi) => Some(Language::Hindi),
                Some(LanguageHint::Auto) | None => None,
            };
            println!("{}", interactive::render_samples(&normalizer, language));
        }
        Command::Interactive => {
            interactive::run(&normalizer, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
        }
        Command::Batch {
            inputs,
            lang,
            overwrite_all,
            fail_fast,
            no_progress,
            stats_out,
        } => {
            let files = batch::expand_inputs(&inputs)?;
            if files.is_empty() {
                anyhow::bail!("No input files matched: {}", inputs.join(", "));
            }
            info!("Processing {} input files", files.len());

            let batch_config = BatchConfig {
                language: lang.unwrap_or(default_language),
                overwrite_all,
                fail_fast,
                show_progress: !no_progress,
                ..Default::default()
            };
            let stats = batch::process_files(&normalizer, &files, &batch_config).await?;
            batch::write_stats(&stats, &stats_out).await?;

            println!("numspeak v{} - batch complete", env!("CARGO_PKG_VERSION"));
            println!(
                "  Processed: {}, skipped: {}, failed: {}",
                stats.files_processed, stats.files_skipped, stats.files_failed
            );
            println!("  Patterns replaced: {}", stats.total_patterns_replaced);
            println!("  Stats written to: {}", stats_out.display());

            if stats.files_failed > 0 {
                anyhow::bail!("{} file(s) failed", stats.files_failed);
            }
        }
    }

    Ok(())
}
