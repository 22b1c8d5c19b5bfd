use thiserror::Error;

pub type CResult<T> = Result<T, BookError>;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to extract text URL and title: {0}")]
    Extract(Box<BookError>),
    #[error("Plain text file not found on page.")]
    MissingTextLink,
    #[error("plain text link has no href attribute")]
    MissingHref,
    #[error("book text is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("{0}")]
    Input(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("window error: {0}")]
    Gui(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
