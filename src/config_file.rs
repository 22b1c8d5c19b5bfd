use crate::{BookError, CResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional settings read from a toml file; every key may be left out.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub database: Option<PathBuf>,
    pub top_words: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub log_dir: Option<PathBuf>,
}

pub fn parse_config(contents: &str) -> CResult<FileConfig> {
    toml::from_str::<FileConfig>(contents).map_err(|e| BookError::Config(e.to_string()))
}

pub fn load_config_from_file(file_path: &Path) -> CResult<FileConfig> {
    let contents = fs::read_to_string(file_path).map_err(|e| {
        BookError::Config(format!("failed to read {}: {}", file_path.display(), e))
    })?;
    parse_config(&contents)
        .map_err(|e| BookError::Config(format!("failed to parse {}: {}", file_path.display(), e)))
}
