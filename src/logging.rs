//! Log setup
//!
//! The terminal belongs to the UI, so logs go to a file. The level defaults to
//! `info` and can be changed with `RUST_LOG`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Default log location: `~/.cache/gamestore/gamestore.log` on Linux
pub fn default_log_path() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "gamestore")?;
    Some(project_dirs.cache_dir().join("gamestore.log"))
}

/// Opens the log file for appending, creating parent directories
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global tracing subscriber writing to `path`
///
/// Returns an error if the file cannot be opened; the caller may carry on
/// without logging.
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_parents() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("logs").join("gamestore.log");

        open_log_file(&path).expect("Should open log file");

        assert!(path.exists());
    }

    #[test]
    fn test_default_log_path_names_project() {
        if let Some(path) = default_log_path() {
            let path = path.to_string_lossy();
            assert!(path.contains("gamestore"));
            assert!(path.ends_with("gamestore.log"));
        }
    }
}
