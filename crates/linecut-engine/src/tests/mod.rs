use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to `filename` inside a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn write_temp_file(filename: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    (dir, file_path)
}
