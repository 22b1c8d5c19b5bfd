//! # Gutenberg Book Search and Word Frequency Tool
//!
//! This project is a small desktop application that downloads a book from
//! [Project Gutenberg](https://www.gutenberg.org), counts its most frequent words and caches
//! the result in a local sqlite database so the book can be looked up again by title.
//!
//! ## Features
//!
//! - Download a book from its Gutenberg page url (e.g. `https://www.gutenberg.org/ebooks/2701`).
//! - Rank the most frequent words of four letters or more.
//! - Store every book once; downloading it again replaces its words.
//! - Search stored books by any part of their title, ignoring case.
//!
//! ## Usage
//!
//! Start the binary and use the form. The command line only configures it:
//!
//! | Option                      | Description                                              | Default Value |
//! |-----------------------------|----------------------------------------------------------|---------------|
//! | `-c, --config <FILE>`       | toml file with `database`, `top_words`, `timeout_secs`, `log_dir` | N/A  |
//! | `-d, --database <PATH>`     | sqlite file for the cached books.                        | `book.db`     |
//! | `-n, --top <NUMBER>`        | words kept per book.                                     | 10            |
//! | `-t, --timeout <SECONDS>`   | time allowed for each download request.                  | 30            |
//!
//! ### Example
//!
//! ```bash
//! ./gutenberg-words -d ~/books.db -n 20
//! ```
//!
//! Logs are written to `logs/gutenberg.log` next to the executable; set `RUST_LOG` to change
//! the level.
//!
//! ## License
//!
//! This project is licensed under the MIT License. See `LICENSE` for more details.
mod error;
pub use error::{BookError, CResult};
mod interface;
pub use interface::{get_args, parse_args, run, Config, DEFAULT_DB_NAME, DEFAULT_TIMEOUT_SECS};
mod config_file;
pub use config_file::*;
mod database;
pub use database::*;
mod page_utils;
pub use page_utils::*;
mod book_process;
pub use book_process::*;
mod gui;
pub use gui::{run_gui, WINDOW_TITLE};
mod log_creation;
pub use log_creation::*;
