// WHY: file-level driver for the CLI batch command; each input is normalized line by line
// into a sibling output file and every outcome is recorded in JSON run statistics

use crate::incremental::{is_output_file, output_is_complete, write_complete_output};
use crate::language::LanguageHint;
use crate::normalizer::{NormalizationRequest, TextNormalizer};
use crate::reader::{AsyncFileReader, ReaderConfig};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub language: LanguageHint,
    /// Rewrite outputs that are already complete
    pub overwrite_all: bool,
    /// Stop at the first failing file
    pub fail_fast: bool,
    pub show_progress: bool,
    pub buffer_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            language: LanguageHint::English,
            overwrite_all: false,
            fail_fast: false,
            show_progress: true,
            buffer_size: 8192,
        }
    }
}

/// Outcome of one input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileStats {
    pub path: String,
    pub output_path: Option<String>,
    pub lines_processed: u64,
    pub chars_processed: u64,
    /// Spans replaced across all lines
    pub patterns_replaced: u64,
    pub processing_time_ms: u64,
    pub chars_per_sec: f64,
    /// success, skipped or failed
    pub status: String,
    pub error: Option<String>,
}

impl FileStats {
    fn skipped(path: &Path) -> Self {
        Self {
            path: path.display().to_string(),
            output_path: None,
            lines_processed: 0,
            chars_processed: 0,
            patterns_replaced: 0,
            processing_time_ms: 0,
            chars_per_sec: 0.0,
            status: "skipped".to_string(),
            error: None,
        }
    }

    fn failed(path: &Path, error: String, elapsed_ms: u64) -> Self {
        Self {
            status: "failed".to_string(),
            error: Some(error),
            processing_time_ms: elapsed_ms,
            ..Self::skipped(path)
        }
    }
}

/// Totals for a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Seconds since the Unix epoch when the run started
    pub run_start: u64,
    pub total_processing_time_ms: u64,
    pub total_lines_processed: u64,
    pub total_chars_processed: u64,
    pub total_patterns_replaced: u64,
    pub overall_chars_per_sec: f64,
    pub files_processed: u64,
    pub files_skipped: u64,
    pub files_failed: u64,
    pub file_stats: Vec<FileStats>,
}

fn chars_per_sec(chars: u64, elapsed_ms: u64) -> f64 {
    if elapsed_ms > 0 {
        chars as f64 / (elapsed_ms as f64 / 1000.0)
    } else {
        // sub-millisecond runs still report a rate
        chars as f64 * 1000.0
    }
}

/// Resolve each input as a literal file or a glob pattern. Outputs of earlier
/// runs are excluded and duplicates removed; order follows the inputs.
pub fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for input in inputs {
        let literal = Path::new(input);
        let matched: Vec<PathBuf> = if literal.is_file() {
            vec![literal.to_path_buf()]
        } else {
            let mut found = Vec::new();
            for entry in glob::glob(input).with_context(|| format!("Invalid input pattern: {input}"))? {
                match entry {
                    Ok(path) if path.is_file() => found.push(path),
                    Ok(_) => {}
                    Err(e) => warn!("Skipping unreadable glob entry: {}", e),
                }
            }
            if found.is_empty() {
                warn!("No files matched input: {}", input);
            }
            found
        };

        for path in matched {
            if !is_output_file(&path) && !files.contains(&path) {
                files.push(path);
            }
        }
    }
    Ok(files)
}

/// Normalize one file into its sibling output
pub async fn process_file(
    normalizer: &TextNormalizer,
    path: &Path,
    config: &BatchConfig,
) -> Result<FileStats> {
    if !config.overwrite_all && output_is_complete(path).await {
        info!("Skipping {}: output already complete", path.display());
        return Ok(FileStats::skipped(path));
    }

    let start_time = Instant::now();
    let reader = AsyncFileReader::new(ReaderConfig {
        fail_fast: true,
        buffer_size: config.buffer_size,
    });
    let (lines, read_stats) = reader.read_lines(path).await?;

    let mut patterns_replaced = 0u64;
    let mut normalized = Vec::with_capacity(lines.len());
    for line in &lines {
        let request = NormalizationRequest::new(line.as_str())
            .with_language(config.language)
            .with_patterns(true);
        let result = normalizer.normalize(&request);
        patterns_replaced += result.patterns.len() as u64;
        normalized.push(result.text);
    }

    let output_path = write_complete_output(path, &normalized)
        .await
        .with_context(|| format!("Failed to write output for {}", path.display()))?;

    let elapsed_ms = start_time.elapsed().as_millis() as u64;
    info!(
        "Normalized {}: {} lines, {} patterns in {}ms",
        path.display(),
        read_stats.lines_read,
        patterns_replaced,
        elapsed_ms
    );

    Ok(FileStats {
        path: path.display().to_string(),
        output_path: Some(output_path.display().to_string()),
        lines_processed: read_stats.lines_read,
        chars_processed: read_stats.chars_read,
        patterns_replaced,
        processing_time_ms: elapsed_ms,
        chars_per_sec: chars_per_sec(read_stats.chars_read, elapsed_ms),
        status: "success".to_string(),
        error: None,
    })
}

/// Process files one after another. Failures are recorded in the stats
/// unless `fail_fast` is set.
pub async fn process_files(
    normalizer: &TextNormalizer,
    files: &[PathBuf],
    config: &BatchConfig,
) -> Result<RunStats> {
    let run_start = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let start_time = Instant::now();

    let progress = if config.show_progress {
        let bar = ProgressBar::new(files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=> ");
        bar.set_style(style);
        Some(bar)
    } else {
        None
    };

    let mut file_stats = Vec::with_capacity(files.len());
    for path in files {
        if let Some(bar) = &progress {
            bar.set_message(path.display().to_string());
        }

        let file_start = Instant::now();
        match process_file(normalizer, path, config).await {
            Ok(stats) => file_stats.push(stats),
            Err(e) => {
                if config.fail_fast {
                    if let Some(bar) = &progress {
                        bar.abandon();
                    }
                    return Err(e.context(format!("Processing failed for {}", path.display())));
                }
                warn!("Failed to process {}: {:#}", path.display(), e);
                file_stats.push(FileStats::failed(
                    path,
                    format!("{e:#}"),
                    file_start.elapsed().as_millis() as u64,
                ));
            }
        }

        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    let total_ms = start_time.elapsed().as_millis() as u64;
    let count = |status: &str| file_stats.iter().filter(|s| s.status == status).count() as u64;
    let total_chars: u64 = file_stats.iter().map(|s| s.chars_processed).sum();

    Ok(RunStats {
        run_start,
        total_processing_time_ms: total_ms,
        total_lines_processed: file_stats.iter().map(|s| s.lines_processed).sum(),
        total_chars_processed: total_chars,
        total_patterns_replaced: file_stats.iter().map(|s| s.patterns_replaced).sum(),
        overall_chars_per_sec: chars_per_sec(total_chars, total_ms),
        files_processed: count("success"),
        files_skipped: count("skipped"),
        files_failed: count("failed"),
        file_stats,
    })
}

pub async fn write_stats(stats: &RunStats, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write stats to {}", path.display()))?;
    Ok(())
}
