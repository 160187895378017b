//! URL construction helpers for the OMDb API.
//!
//! OMDb authenticates with an `apikey` query parameter, so raw request
//! URLs are secrets; everything that lands in logs or error messages goes
//! through `redacted` first.

use url::Url;

use crate::error::{OmdbError, OmdbResult};
use crate::models::OmdbConfig;

/// Build a lookup-by-title URL.
pub fn build_title_url(config: &OmdbConfig, title: &str) -> OmdbResult<Url> {
    let api_key = config.api_key.as_deref().ok_or(OmdbError::MissingApiKey)?;

    let mut url = config.base_url.clone();
    url.set_query(Some(&format!(
        "apikey={}&type=movie&t={}",
        urlencoding::encode(api_key),
        urlencoding::encode(title.trim())
    )));
    Ok(url)
}

/// The URL as a string with the API key masked.
pub fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let query: Vec<String> = url
        .query_pairs()
        .map(|(key, value)| {
            if key == "apikey" {
                format!("{key}=***")
            } else {
                format!("{key}={}", urlencoding::encode(&value))
            }
        })
        .collect();
    masked.set_query(Some(&query.join("&")));
    masked.to_string()
}
