#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use gutenberg_words::{get_args, init_logging, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match get_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(config.log_dir.as_deref());
    if let Err(e) = run(config) {
        tracing::error!("{e}");
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
