// WHY: batch runs skip inputs whose normalized output is already complete; an output
// is complete once it ends with a newline, which the writer always adds last

use std::io;
use std::path::{Path, PathBuf};

const OUTPUT_SUFFIX: &str = "_normalized.txt";

/// `notes/day1.txt` becomes `notes/day1_normalized.txt`
pub fn generate_output_path(source_path: &Path) -> PathBuf {
    let mut output_path = source_path.to_path_buf();
    let file_stem = output_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    output_path.set_file_name(format!("{file_stem}{OUTPUT_SUFFIX}"));
    output_path
}

/// True for files this tool wrote, so globs do not feed outputs back in
pub fn is_output_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or(false, |n| n.ends_with(OUTPUT_SUFFIX))
}

pub fn output_exists<P: AsRef<Path>>(source_path: P) -> bool {
    generate_output_path(source_path.as_ref()).exists()
}

/// Output exists and ends with a trailing newline
pub async fn output_is_complete<P: AsRef<Path>>(source_path: P) -> bool {
    let output_path = generate_output_path(source_path.as_ref());
    match tokio::fs::read(&output_path).await {
        Ok(bytes) => bytes.last() == Some(&b'\n'),
        Err(_) => false,
    }
}

pub async fn read_output<P: AsRef<Path>>(source_path: P) -> Result<String, io::Error> {
    tokio::fs::read_to_string(generate_output_path(source_path.as_ref())).await
}

/// Write normalized lines next to the source, terminated by a newline
pub async fn write_complete_output<P: AsRef<Path>>(
    source_path: P,
    lines: &[String],
) -> Result<PathBuf, io::Error> {
    let output_path = generate_output_path(source_path.as_ref());
    let mut content = lines.join("\n");
    content.push('\n');
    tokio::fs::write(&output_path, content).await?;
    Ok(output_path)
}
