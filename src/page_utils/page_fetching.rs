use super::CResult;
use reqwest::{Client, Url};
use tokio::time::Duration;
use tracing::info;

pub fn build_client(timeout_secs: u64) -> CResult<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("gutenberg-words/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// downloads the html of the book page.
pub async fn fetch_page(client: &Client, url: &Url) -> CResult<String> {
    let response = client.get(url.as_str()).send().await?.error_for_status()?;
    let page = response.text().await?;
    info!("fetched book page {} ({} bytes)", url, page.len());
    Ok(page)
}

/// downloads the plain text file, which must be valid UTF-8.
pub async fn fetch_book_text(client: &Client, url: &Url) -> CResult<String> {
    let response = client.get(url.as_str()).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    let text = String::from_utf8(bytes.to_vec())?;
    info!("fetched book text {} ({} bytes)", url, text.len());
    Ok(text)
}
