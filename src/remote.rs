// SPDX-License-Identifier: MPL-2.0
//! Asynchronous retrieval of the remote image.
//!
//! The fetch is fire-and-forget: the caller hands the result back to the
//! update loop, which drops failures without retrying or surfacing them.
//! The rest of the screen never depends on the image actually arriving.

use crate::error::Result;
use crate::media::{self, ImageData};

/// The moon image shown when no `--url` override is given.
pub const DEFAULT_IMAGE_URL: &str =
    "https://vignette.wikia.nocookie.net/melifaro/images/6/6f/Moon-Vector-PNG.png/revision/latest?cb=20170608195222&path-prefix=ru";

/// Fetch `url` and decode the response body as an image.
///
/// Runs on the executor, never on the UI thread; the decoded result
/// re-enters the update loop as a message.
///
/// # Errors
///
/// Returns [`Error::Http`](crate::error::Error::Http) on network failure or
/// a non-success status, and [`Error::Decode`](crate::error::Error::Decode)
/// when the body is not a supported image format.
pub async fn fetch_image(url: String) -> Result<ImageData> {
    let response = reqwest::get(&url).await?.error_for_status()?;
    let bytes = response.bytes().await?;

    media::decode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn fetch_invalid_url_returns_http_error() {
        match fetch_image("not a url".to_string()).await {
            Err(Error::Http(message)) => assert!(!message.is_empty()),
            other => panic!("expected Http error for invalid url, got {other:?}"),
        }
    }

    #[test]
    fn default_url_is_https() {
        assert!(DEFAULT_IMAGE_URL.starts_with("https://"));
    }
}
