// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors produced while fetching and decoding the remote image.
///
/// The application swallows these by design (a missing image never blocks
/// the entrance animation or the caption), but the loading functions still
/// report them so the discard policy lives in one place.
#[derive(Debug, Clone)]
pub enum Error {
    /// Network failure or non-success HTTP status.
    Http(String),
    /// Response bytes could not be decoded as an image.
    Decode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_error() {
        let err = Error::Http("connection refused".to_string());
        assert_eq!(format!("{}", err), "HTTP Error: connection refused");
    }

    #[test]
    fn display_formats_decode_error() {
        let err = Error::Decode("bad magic bytes".to_string());
        assert_eq!(format!("{}", err), "Decode Error: bad magic bytes");
    }

    #[test]
    fn from_image_error_produces_decode_variant() {
        let io_error = std::io::Error::other("truncated");
        let image_error = image_rs::ImageError::IoError(io_error);
        let err: Error = image_error.into();
        match err {
            Error::Decode(message) => assert!(message.contains("truncated")),
            other => panic!("expected Decode variant, got {other:?}"),
        }
    }
}
