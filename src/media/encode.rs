//! Image loading and base64 encoding for API payloads.

use std::io::Cursor;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::ImageFormat;

use crate::error::{Error, Result};

/// Load an image, normalize it to RGB JPEG, and return it as a base64
/// data URL suitable for a chat-completion image part.
///
/// Re-encoding to JPEG keeps the payload small and sidesteps formats the
/// model server may not accept (animated GIF, RGBA PNG).
pub fn encode_image_as_data_url(path: &Path) -> Result<String> {
    let img = image::open(path)
        .map_err(|e| Error::ImageEncoding(format!("{}: {}", path.display(), e)))?;

    let rgb = img.to_rgb8();

    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, ImageFormat::Jpeg)
        .map_err(|e| Error::ImageEncoding(format!("{}: {}", path.display(), e)))?;

    let encoded = BASE64.encode(buffer.into_inner());
    Ok(format!("data:image/jpeg;base64,{}", encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn test_encodes_valid_image() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pixel.png");
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.save(&path).unwrap();

        let data_url = encode_image_as_data_url(&path).unwrap();
        assert!(data_url.starts_with("data:image/jpeg;base64,"));
        assert!(data_url.len() > "data:image/jpeg;base64,".len());
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("not_an_image.png");
        std::fs::write(&path, b"plain text").unwrap();

        assert!(encode_image_as_data_url(&path).is_err());
        assert!(encode_image_as_data_url(&tmp.path().join("missing.png")).is_err());
    }
}
