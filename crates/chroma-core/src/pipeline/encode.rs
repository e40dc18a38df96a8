//! JPEG encoding and output writing.

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::OutputConfig;
use crate::error::ItemError;

/// Encodes pixel buffers as JPEG and writes them to disk.
///
/// The output format is fixed: every file is written as JPEG no matter
/// what the destination name's extension says.
pub struct JpegWriter {
    quality: u8,
}

impl JpegWriter {
    /// Create a writer with the configured JPEG quality.
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            quality: config.jpeg_quality.clamp(1, 100),
        }
    }

    /// Encode `image` and write it to `dest`.
    ///
    /// Fails with [`ItemError::Write`] when the destination cannot be
    /// created (e.g. its parent directory does not exist) or encoding
    /// fails; the caller counts the failure and continues.
    pub fn encode_and_write(&self, image: &RgbImage, dest: &Path) -> Result<(), ItemError> {
        let file = File::create(dest).map_err(|e| Self::write_error(dest, e.to_string()))?;
        let mut writer = BufWriter::new(file);

        let encoder = JpegEncoder::new_with_quality(&mut writer, self.quality);
        image
            .write_with_encoder(encoder)
            .map_err(|e| Self::write_error(dest, e.to_string()))?;

        writer
            .flush()
            .map_err(|e| Self::write_error(dest, e.to_string()))
    }

    fn write_error(path: &Path, message: String) -> ItemError {
        ItemError::Write {
            path: path.to_path_buf(),
            message,
        }
    }
}
