// WHY: batch inputs are read line by line with buffered async I/O so each line can be
// normalized independently; read failures are reported per file instead of aborting

use anyhow::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tracing::{debug, warn};

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Return an error instead of partial results on the first failure
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for one read
#[derive(Debug, Clone, Default)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub chars_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Reads text inputs line by line
pub struct AsyncFileReader {
    config: ReaderConfig,
}

impl AsyncFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read every line of `file_path`. Without `fail_fast`, open and decode
    /// errors come back as partial lines plus `read_error` in the stats.
    pub async fn read_lines<P: AsRef<Path>>(&self, file_path: P) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();
        let mut stats = ReadStats {
            file_path: path.display().to_string(),
            ..Default::default()
        };

        debug!("Reading input file: {}", path.display());

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open file {}: {}", path.display(), e);
                return self.fail(error_msg, Vec::new(), stats, start_time);
            }
        };

        let mut lines = BufReader::with_capacity(self.config.buffer_size, file).lines();
        let mut result_lines = Vec::new();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    stats.bytes_read += line.len() as u64 + 1;
                    stats.chars_read += line.chars().count() as u64;
                    stats.lines_read += 1;
                    result_lines.push(line);
                }
                Ok(None) => break,
                Err(e) => {
                    let error_msg = format!(
                        "UTF-8 decoding error in {} at line {}: {}",
                        path.display(),
                        stats.lines_read + 1,
                        e
                    );
                    return self.fail(error_msg, result_lines, stats, start_time);
                }
            }
        }

        stats.duration_ms = start_time.elapsed().as_millis() as u64;
        debug!(
            "Read {}: {} lines, {} chars in {}ms",
            path.display(),
            stats.lines_read,
            stats.chars_read,
            stats.duration_ms
        );
        Ok((result_lines, stats))
    }

    fn fail(
        &self,
        error_msg: String,
        lines: Vec<String>,
        mut stats: ReadStats,
        start_time: std::time::Instant,
    ) -> Result<(Vec<String>, ReadStats)> {
        warn!("{}", error_msg);
        if self.config.fail_fast {
            return Err(anyhow::anyhow!(error_msg));
        }
        stats.duration_ms = start_time.elapsed().as_millis() as u64;
        stats.read_error = Some(error_msg);
        Ok((lines, stats))
    }
}

/// Read all of `source` (stdin for the CLI) as UTF-8 text
pub async fn read_all<R: AsyncRead + Unpin>(mut source: R) -> Result<String> {
    let mut text = String::new();
    source.read_to_string(&mut text).await?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs;

    async fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
        let file_path = dir.join(name);
        fs::write(&file_path, content).await.expect("Failed to write test file");
        file_path
    }

    #[tokio::test]
    async fn test_read_lines_with_devanagari() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncFileReader::new(ReaderConfig::default());
        let file_path = create_test_file(
            temp_dir.path(),
            "input.txt",
            "Pay ₹500\nमेरा नंबर है\n".as_bytes(),
        )
        .await;

        let (lines, stats) = reader.read_lines(&file_path).await.unwrap();

        assert_eq!(lines, vec!["Pay ₹500", "मेरा नंबर है"]);
        assert_eq!(stats.lines_read, 2);
        assert_eq!(stats.chars_read, 8 + 12);
        assert!(stats.bytes_read > stats.chars_read);
        assert!(stats.read_error.is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncFileReader::new(ReaderConfig::default());

        let (lines, stats) = reader
            .read_lines(temp_dir.path().join("missing.txt"))
            .await
            .unwrap();
        assert!(lines.is_empty());
        assert!(stats.read_error.is_some());

        let strict = AsyncFileReader::new(ReaderConfig {
            fail_fast: true,
            ..Default::default()
        });
        assert!(strict.read_lines(temp_dir.path().join("missing.txt")).await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_utf8_keeps_partial_lines() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncFileReader::new(ReaderConfig::default());
        let file_path = create_test_file(temp_dir.path(), "bad.txt", b"ok line\n\xff\xfe bad\n").await;

        let (lines, stats) = reader.read_lines(&file_path).await.unwrap();
        assert_eq!(lines, vec!["ok line"]);
        assert!(stats.read_error.unwrap().contains("line 2"));
    }

    #[tokio::test]
    async fn test_small_buffer() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncFileReader::new(ReaderConfig {
            fail_fast: false,
            buffer_size: 16,
        });
        let content = "1".repeat(100) + "\n" + &"2".repeat(100);
        let file_path = create_test_file(temp_dir.path(), "long.txt", content.as_bytes()).await;

        let (lines, _) = reader.read_lines(&file_path).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].len(), 100);
    }

    #[tokio::test]
    async fn test_read_all() {
        let text = read_all("line one\nline two".as_bytes()).await.unwrap();
        assert_eq!(text, "line one\nline two");
    }
}
