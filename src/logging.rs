//! File logging setup.
//!
//! The terminal is owned by the game while it runs, so log records go to a
//! file. `RUST_LOG` picks the filter, defaulting to `info`.

use directories::ProjectDirs;
use env_logger::{Env, Target};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

const LOG_FILE_NAME: &str = "flappy.log";

/// `<data_local_dir>/flappy.log` for this platform, if a home directory exists.
pub fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "flappy").map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Route the global logger to `path`, appending.
pub fn init(path: &Path) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_file_name() {
        if let Some(path) = default_log_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
        }
    }

    #[test]
    fn test_init_fails_on_unwritable_path() {
        // A directory cannot be opened as a log file
        let dir = std::env::temp_dir();
        assert!(init(&dir).is_err());
    }
}
