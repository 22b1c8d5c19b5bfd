use crate::{CResult, WordCount};
use rusqlite::{params, Connection};
use tracing::info;

/// Replaces whatever is stored under `title` with the given words.
///
/// the book row and all of its word rows are written in one transaction.
pub fn store_book(conn: &mut Connection, title: &str, words: &[WordCount]) -> CResult<()> {
    let tx = conn.transaction()?;
    tx.execute(
        "INSERT OR REPLACE INTO books (title) VALUES (?1)",
        params![title],
    )?;
    tx.execute(
        "DELETE FROM word_frequencies WHERE book_title = ?1",
        params![title],
    )?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO word_frequencies (book_title, word, frequency) VALUES (?1, ?2, ?3)",
        )?;
        for w in words {
            stmt.execute(params![title, w.word, w.frequency as i64])?;
        }
    }
    tx.commit()?;
    info!("stored '{}' with {} words", title, words.len());
    Ok(())
}

/// first stored title (in storage order) containing `query`, ignoring case.
pub fn find_book(conn: &Connection, query: &str) -> CResult<Option<String>> {
    let needle = query.trim().to_lowercase();
    let mut stmt = conn.prepare("SELECT title FROM books ORDER BY rowid")?;
    let titles = stmt.query_map([], |row| row.get::<_, String>(0))?;
    for title in titles {
        let title = title?;
        if title.to_lowercase().contains(&needle) {
            return Ok(Some(title));
        }
    }
    Ok(None)
}

/// the words stored for `title`, in the order they were stored.
pub fn word_frequencies(conn: &Connection, title: &str) -> CResult<Vec<WordCount>> {
    let mut stmt = conn.prepare(
        "SELECT word, frequency FROM word_frequencies WHERE book_title = ?1 ORDER BY rowid",
    )?;
    let rows = stmt.query_map(params![title], |row| {
        let frequency: i64 = row.get(1)?;
        Ok(WordCount::new(row.get::<_, String>(0)?, frequency as usize))
    })?;
    let words = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(words)
}

pub fn count_books(conn: &Connection) -> CResult<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |r| r.get(0))?;
    Ok(count as usize)
}
