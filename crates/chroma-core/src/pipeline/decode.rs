//! Image decoding with content-based format detection.

use image::{ImageReader, RgbImage};
use std::path::Path;

use crate::error::ItemError;

/// Decodes input files into RGB pixel buffers.
pub struct ImageDecoder;

impl ImageDecoder {
    /// Decode the file at `path` into an 8-bit RGB pixel buffer.
    ///
    /// The format is detected from file content rather than the
    /// extension, so a misnamed image still decodes. Unreadable, missing,
    /// or non-image files fail with [`ItemError::Decode`]; the caller is
    /// expected to count the failure and move on.
    pub fn decode(path: &Path) -> Result<RgbImage, ItemError> {
        let reader = ImageReader::open(path)
            .map_err(|e| Self::decode_error(path, e.to_string()))?
            .with_guessed_format()
            .map_err(|e| Self::decode_error(path, e.to_string()))?;

        let image = reader
            .decode()
            .map_err(|e| Self::decode_error(path, e.to_string()))?;

        Ok(image.to_rgb8())
    }

    fn decode_error(path: &Path, message: String) -> ItemError {
        ItemError::Decode {
            path: path.to_path_buf(),
            message,
        }
    }
}
