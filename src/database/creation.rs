use crate::CResult;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

static QUERIES: [&str; 2] = [
    "CREATE TABLE IF NOT EXISTS books (
        title TEXT PRIMARY KEY
    );",
    "CREATE TABLE IF NOT EXISTS word_frequencies (
        book_title TEXT,
        word TEXT,
        frequency INTEGER,
        FOREIGN KEY(book_title) REFERENCES books(title)
    );",
];

/// opens the database file, creating it and its tables when they do not exist yet.
///
/// the connection is meant to live for a single operation and is closed on drop.
pub fn open_database(path: impl AsRef<Path>) -> CResult<Connection> {
    let path = path.as_ref();
    let conn = Connection::open(path)?;
    create_schema(&conn)?;
    debug!("opened book database at {}", path.display());
    Ok(conn)
}

fn create_schema(connection: &Connection) -> CResult<()> {
    for query in QUERIES {
        connection.execute(query, [])?;
    }
    Ok(())
}
