// SPDX-License-Identifier: MPL-2.0
//! Decoding of fetched bytes into a displayable image.

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;

/// A decoded image ready for display, along with its pixel dimensions.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Decode encoded image bytes (PNG, JPEG, etc.) into an [`ImageData`].
///
/// # Errors
///
/// Returns [`Error::Decode`](crate::error::Error::Decode) when the bytes are
/// not a supported image format.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();

    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}
