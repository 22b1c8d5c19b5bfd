//! book page parser: pulls the title heading and the plain text download link out of a
//! Gutenberg "ebook" page and resolves that link against the page url.
use super::{BookPage, CResult, UNKNOWN_TITLE};
use crate::BookError;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Url;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"h1[itemprop="name"]"#).expect("valid title selector"));
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("valid anchor selector"));
static PLAIN_TEXT_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Plain Text UTF-8").expect("valid link label pattern"));

/// Extracts the book title and the absolute url of its plain text file.
///
/// Fails with [`BookError::MissingTextLink`] when no anchor is labelled "Plain Text UTF-8".
/// Only anchors whose content is a single string are considered, so a label mixed with
/// other markup (`<a>Plain Text UTF-8 <img></a>`) is skipped.
pub fn extract_book_page(page_url: &Url, html: &str) -> CResult<BookPage> {
    let document = Html::parse_document(html);
    let title = find_title(&document);

    let link = document
        .select(&ANCHOR_SELECTOR)
        .find(|a| single_string(*a).is_some_and(|s| PLAIN_TEXT_LABEL.is_match(s)))
        .ok_or(BookError::MissingTextLink)?;
    let href = link.value().attr("href").ok_or(BookError::MissingHref)?;
    let text_url = page_url.join(href)?;
    debug!("resolved plain text link {} -> {}", href, text_url);

    Ok(BookPage { text_url, title })
}

fn find_title(document: &Html) -> String {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|h1| element_text(&h1).trim().to_string())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect()
}

/// the lone string inside an element, looking through single-child wrappers like `<span>`.
fn single_string(element: ElementRef<'_>) -> Option<&str> {
    let mut children = element.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match only.value() {
        Node::Text(text) => Some(&**text),
        Node::Element(_) => ElementRef::wrap(only).and_then(single_string),
        _ => None,
    }
}
