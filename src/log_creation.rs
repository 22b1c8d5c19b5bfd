//! this file sets up a single log file, `logs/gutenberg.log`, next to the executable
//! (or inside the configured directory) and routes every `tracing` event into it.
//!
//! when the file can not be created the events go to stderr instead.
use once_cell::sync::OnceCell;
use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::{env, io};
use tracing_subscriber::EnvFilter;

static LOGGER: OnceCell<()> = OnceCell::new();
pub const LOG_FILE: &str = "gutenberg.log";

fn default_log_dir() -> io::Result<PathBuf> {
    let exe_path = env::current_exe()?;
    let parent = exe_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(parent.join("logs"))
}

fn create_log_file(log_dir: Option<&Path>) -> io::Result<File> {
    let log_dir = match log_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_log_dir()?,
    };
    if !log_dir.exists() {
        // creates the logs directory
        create_dir_all(&log_dir)?;
    }
    File::create(log_dir.join(LOG_FILE))
}

/// installs the global subscriber once; later calls are no-ops.
pub fn init_logging(log_dir: Option<&Path>) {
    LOGGER.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        let installed = match create_log_file(log_dir) {
            Ok(file) => builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            Err(e) => {
                eprintln!("could not create log file ({e}), logging to stderr");
                builder.with_writer(io::stderr).try_init()
            }
        };
        if let Err(e) = installed {
            eprintln!("logging already initialized: {e}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_created_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("logs");
        create_log_file(Some(&nested)).unwrap();
        assert!(nested.join(LOG_FILE).is_file());
    }
}
