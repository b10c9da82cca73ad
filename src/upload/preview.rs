/// Preview derivation for selected files
///
/// Decodes the picked bytes and downscales them so the detection screen can
/// render them cheaply. The original bytes are never modified; they are what
/// gets uploaded.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use tracing::{debug, warn};

use crate::state::data::Preview;

/// Longest edge of a generated preview, in pixels
const PREVIEW_SIZE: u32 = 768;

/// Derive a preview off the UI thread
pub async fn derive_preview(bytes: Vec<u8>) -> Result<Preview, String> {
    // Decoding and resizing are CPU-bound
    tokio::task::spawn_blocking(move || derive_preview_blocking(&bytes))
        .await
        .map_err(|e| format!("Task join error: {}", e))
}

/// Blocking version of preview derivation.
///
/// Bytes that do not decode still yield a preview (without dimensions):
/// nothing is validated here, a bad file only fails at analysis time.
pub fn derive_preview_blocking(bytes: &[u8]) -> Preview {
    match image::load_from_memory(bytes) {
        Ok(img) => {
            let img = if img.width() > PREVIEW_SIZE || img.height() > PREVIEW_SIZE {
                img.resize(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Triangle)
            } else {
                img
            };
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            debug!("Preview ready: {}x{}", width, height);

            Preview {
                handle: Handle::from_rgba(width, height, rgba.into_raw()),
                dimensions: Some((width, height)),
            }
        }
        Err(e) => {
            warn!("Selected file is not a decodable image: {}", e);
            Preview {
                handle: Handle::from_bytes(bytes.to_vec()),
                dimensions: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([34, 139, 34]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_small_image_keeps_size() {
        let preview = derive_preview_blocking(&png(40, 30));
        assert_eq!(preview.dimensions, Some((40, 30)));
        assert!(preview.is_decoded());
    }

    #[test]
    fn test_large_image_is_downscaled() {
        let preview = derive_preview_blocking(&png(1600, 800));
        let (width, height) = preview.dimensions.unwrap();

        assert_eq!(width, PREVIEW_SIZE);
        assert_eq!(height, PREVIEW_SIZE / 2);
    }

    #[test]
    fn test_non_image_still_previews() {
        let preview = derive_preview_blocking(b"definitely not an image");
        assert!(!preview.is_decoded());
    }

    #[tokio::test]
    async fn test_async_derivation() {
        let preview = derive_preview(png(10, 10)).await.unwrap();
        assert_eq!(preview.dimensions, Some((10, 10)));
    }
}
