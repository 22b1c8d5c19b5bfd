use crate::{
    build_client, count_books, extract_book_page, fetch_book_text, fetch_page, find_book,
    get_top_words, open_database, store_book, valid_url_format, word_frequencies, Book,
    BookError, BookPage, CResult, Config, WordCount,
};
use reqwest::{Client, Url};
use std::fmt::Write;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Book),
    NotFound,
}

/// Downloads the book behind a Gutenberg page url, ranks its words and caches them.
pub async fn download_and_store(config: Config, url: &str) -> CResult<Book> {
    let page_url = valid_url_format(url)?;
    let client = build_client(config.get_timeout())?;

    let book_page = read_book_page(&client, &page_url)
        .await
        .map_err(|e| BookError::Extract(Box::new(e)))?;
    let text = fetch_book_text(&client, book_page.get_text_url()).await?;

    let top_words = config.get_top_words();
    let book = tokio::task::spawn_blocking(move || -> CResult<Book> {
        let words = get_top_words(&text, top_words);
        let mut conn = open_database(config.get_database())?;
        store_book(&mut conn, &book_page.title, &words)?;
        Ok(Book::new(book_page.title, words))
    })
    .await??;
    info!("downloaded and stored '{}' from {}", book.get_title(), page_url);
    Ok(book)
}

async fn read_book_page(client: &Client, page_url: &Url) -> CResult<BookPage> {
    let page = fetch_page(client, page_url).await?;
    extract_book_page(page_url, &page)
}

/// Looks up a previously stored book whose title contains `query`, ignoring case.
pub fn search_local(config: &Config, query: &str) -> CResult<SearchOutcome> {
    let query = query.trim();
    if query.is_empty() {
        return Err(BookError::Input("Please enter a book title.".into()));
    }
    let conn = open_database(config.get_database())?;
    let outcome = match find_book(&conn, query)? {
        Some(title) => {
            let words = word_frequencies(&conn, &title)?;
            SearchOutcome::Found(Book::new(title, words))
        }
        None => SearchOutcome::NotFound,
    };
    info!("local search for '{}': {:?}", query, outcome_title(&outcome));
    Ok(outcome)
}

/// number of cached books, logged at startup.
pub fn cached_books(config: &Config) -> CResult<usize> {
    let conn = open_database(config.get_database())?;
    count_books(&conn)
}

fn outcome_title(outcome: &SearchOutcome) -> Option<&str> {
    match outcome {
        SearchOutcome::Found(book) => Some(book.get_title()),
        SearchOutcome::NotFound => None,
    }
}

fn write_words(out: &mut String, words: &[WordCount]) {
    for w in words {
        let _ = writeln!(out, "{}: {}", w.word, w.frequency);
    }
}

pub fn render_download(book: &Book) -> String {
    let mut out = format!("Book Title: {}\n\n", book.get_title());
    write_words(&mut out, book.get_words());
    out
}

pub fn render_search(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Found(book) => {
            let mut out = format!("Top words for '{}':\n\n", book.get_title());
            write_words(&mut out, book.get_words());
            out
        }
        SearchOutcome::NotFound => "Book was not found".to_string(),
    }
}
