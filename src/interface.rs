use crate::{
    cached_books, load_config_from_file, run_gui, BookError, CResult, FileConfig,
    DEFAULT_TOP_WORDS,
};
use clap::{command, crate_authors, value_parser, Arg, ArgMatches};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const HELP: &str = r#"
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading}
    {usage}

{all-args}{after-help}
"#;

pub const DEFAULT_DB_NAME: &str = "book.db";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: PathBuf, // sqlite file holding the books and their words
    pub top_words: usize,  // how many words are kept per book
    pub timeout: u64,      // seconds allowed for each http request
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DB_NAME),
            top_words: DEFAULT_TOP_WORDS,
            timeout: DEFAULT_TIMEOUT_SECS,
            log_dir: None,
        }
    }
}

impl Config {
    pub fn get_database(&self) -> &Path {
        &self.database
    }
    pub fn get_top_words(&self) -> usize {
        self.top_words
    }
    pub fn get_timeout(&self) -> u64 {
        self.timeout
    }

    /// values present in the file replace the current ones.
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if let Some(db) = file.database {
            self.database = db;
        }
        if let Some(n) = file.top_words {
            self.top_words = n;
        }
        if let Some(t) = file.timeout_secs {
            self.timeout = t;
        }
        if file.log_dir.is_some() {
            self.log_dir = file.log_dir;
        }
        self
    }
}

fn build_command() -> clap::Command {
    command!()
        .author(crate_authors!())
        .about("Gutenberg book search and word frequency tool")
        .help_template(HELP)
        .next_line_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .num_args(1)
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .long_help("toml file with database, top_words, timeout_secs and log_dir keys; command line flags win over it."),
        )
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .num_args(1)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .long_help("sqlite file where books and their word frequencies are cached (default: book.db)"),
        )
        .arg(
            Arg::new("top")
                .short('n')
                .long("top")
                .num_args(1)
                .value_name("NUMBER")
                .value_parser(value_parser!(usize))
                .long_help("number of most frequent words kept for every downloaded book (default: 10)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .num_args(1)
                .value_name("SECONDS")
                .value_parser(value_parser!(u64))
                .long_help("time allowed for each download request before it is abandoned (default: 30)"),
        )
}

pub fn get_args() -> CResult<Config> {
    config_from_matches(&build_command().get_matches())
}

/// same as [`get_args`] but over an explicit argument list.
pub fn parse_args<I, T>(args: I) -> CResult<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_command()
        .try_get_matches_from(args)
        .map_err(|e| BookError::Config(e.to_string()))?;
    config_from_matches(&matches)
}

fn config_from_matches(matches: &ArgMatches) -> CResult<Config> {
    let mut config = Config::default();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        config = config.merge_file(load_config_from_file(path)?);
    }
    if let Some(db) = matches.get_one::<PathBuf>("database") {
        config.database = db.clone();
    }
    if let Some(n) = matches.get_one::<usize>("top") {
        config.top_words = *n;
    }
    if let Some(t) = matches.get_one::<u64>("timeout") {
        config.timeout = *t;
    }
    Ok(config)
}

pub fn run(config: Config) -> CResult<()> {
    match cached_books(&config) {
        Ok(n) => info!("{} books cached in {}", n, config.get_database().display()),
        Err(e) => warn!("could not open {}: {}", config.get_database().display(), e),
    }
    run_gui(config)
}
