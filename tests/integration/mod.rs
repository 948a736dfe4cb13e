// Integration test utilities and common code
// WHY: batch and CLI tests share the same temp-dir layout and output naming

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding input files for a batch run
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create an input file, with parent directories as needed
    pub fn create_input_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Output path written for `source_path`, computed independently of the crate
    pub fn expected_output_path<P: AsRef<Path>>(&self, source_path: P) -> PathBuf {
        let mut output_path = source_path.as_ref().to_path_buf();
        let file_stem = output_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");
        output_path.set_file_name(format!("{file_stem}_normalized.txt"));
        output_path
    }

    pub fn read_output<P: AsRef<Path>>(&self, source_path: P) -> Result<String, std::io::Error> {
        fs::read_to_string(self.expected_output_path(source_path))
    }

    /// Output without trailing newline, as left by an interrupted run
    pub fn create_partial_output<P: AsRef<Path>>(&self, source_path: P, content: &str) -> PathBuf {
        let output_path = self.expected_output_path(source_path);
        fs::write(&output_path, content.trim_end_matches('\n'))
            .expect("Failed to write partial output");
        output_path
    }

    pub fn create_complete_output<P: AsRef<Path>>(&self, source_path: P, content: &str) -> PathBuf {
        let output_path = self.expected_output_path(source_path);
        let content = if content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{content}\n")
        };
        fs::write(&output_path, content).expect("Failed to write complete output");
        output_path
    }

    pub fn glob(&self, pattern: &str) -> String {
        self.root_path.join(pattern).display().to_string()
    }
}
