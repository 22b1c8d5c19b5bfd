use super::CResult;
use crate::BookError;
use reqwest::Url;

/// placeholder used when the book page carries no title heading.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

pub fn valid_url_format(url: &str) -> CResult<Url> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(BookError::Input("Please enter a URL.".into()));
    }
    let parsed = Url::parse(trimmed)?;
    Ok(parsed)
}

/// What the book page tells us: where the plain text lives and what the book is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPage {
    pub text_url: Url,
    pub title: String,
}

impl BookPage {
    pub fn get_text_url(&self) -> &Url {
        &self.text_url
    }
    pub fn get_title(&self) -> &str {
        &self.title
    }
}
