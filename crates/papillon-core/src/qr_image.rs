//! QR symbols: reading a payload out of a picture and drawing one back.
//!
//! Decoding keeps the first symbol found in the image. Drawing produces a
//! block-character rendition for terminals, two module rows per text line,
//! with light modules drawn as filled blocks so the symbol scans on a dark
//! background.

use std::path::Path;

use image::{DynamicImage, ImageError, RgbImage};
use log::debug;
use qrism::{reader::detect_qr, QRBuilder};

use crate::error::{PapillonError, Result};

const UPPER_HALF: char = '▀';
const LOWER_HALF: char = '▄';
const FULL: char = '█';

/// Reads the payload of the first QR symbol in the image at `path`.
///
/// # Errors
///
/// Returns `PapillonError::FileSystem` if the file cannot be read and
/// `PapillonError::QrImage` if it is not an image or holds no readable
/// symbol.
pub fn decode_file(path: &Path) -> Result<String> {
    let image = image::open(path).map_err(|e| match e {
        ImageError::IoError(source) => PapillonError::FileSystem {
            path: path.to_path_buf(),
            source,
        },
        other => PapillonError::qr_image(format!(
            "Failed to open image {}: {other}",
            path.display()
        )),
    })?;
    decode_image(&image)
}

/// Reads the payload of the first QR symbol in `image`.
pub fn decode_image(image: &DynamicImage) -> Result<String> {
    let mut detected = detect_qr(image);
    let symbol = detected
        .symbols()
        .first_mut()
        .ok_or_else(|| PapillonError::qr_image("No QR code found in the image"))?;

    let (_metadata, message) = symbol
        .decode()
        .map_err(|e| PapillonError::qr_image(format!("Failed to decode QR code: {e}")))?;
    debug!("Decoded QR symbol of {} byte(s)", message.len());
    Ok(message)
}

/// Encodes `data` as a QR image, `module_size` pixels per module, quiet zone
/// included.
pub fn encode_image(data: &str, module_size: u32) -> Result<RgbImage> {
    let qr = QRBuilder::new(data.as_bytes())
        .build()
        .map_err(|e| PapillonError::qr_image(format!("Failed to encode QR code: {e}")))?;
    Ok(qr.to_image(module_size))
}

/// Draws `data` as a QR symbol made of block characters.
pub fn render_blocks(data: &str) -> Result<String> {
    let image = encode_image(data, 1)?;
    let (width, height) = image.dimensions();
    let light = |x: u32, y: u32| y >= height || image.get_pixel(x, y).0[0] >= 128;

    let mut output = String::with_capacity(((width + 1) * height.div_ceil(2)) as usize);
    for y in (0..height).step_by(2) {
        for x in 0..width {
            let cell = match (light(x, y), light(x, y + 1)) {
                (true, true) => FULL,
                (true, false) => UPPER_HALF,
                (false, true) => LOWER_HALF,
                (false, false) => ' ',
            };
            output.push(cell);
        }
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_image_decodes_back() {
        let image = encode_image("CANTINE-0042", 4).unwrap();
        let decoded = decode_image(&DynamicImage::ImageRgb8(image)).unwrap();
        assert_eq!(decoded, "CANTINE-0042");
    }

    #[test]
    fn test_blank_image_has_no_symbol() {
        let blank = RgbImage::from_pixel(64, 64, image::Rgb([255, 255, 255]));
        let err = decode_image(&DynamicImage::ImageRgb8(blank)).unwrap_err();
        assert!(matches!(err, PapillonError::QrImage { .. }));
        assert_eq!(err.to_string(), "QR image error: No QR code found in the image");
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let err = decode_file(&temp_dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, PapillonError::FileSystem { .. }));
    }

    #[test]
    fn test_render_blocks_is_square_with_quiet_zone() {
        let image = encode_image("0042", 1).unwrap();
        let (width, height) = image.dimensions();
        let blocks = render_blocks("0042").unwrap();

        let lines: Vec<&str> = blocks.lines().collect();
        assert_eq!(lines.len() as u32, height.div_ceil(2));
        assert!(lines
            .iter()
            .all(|line| line.chars().count() as u32 == width));

        // The quiet zone is light, so the first line is fully drawn
        assert!(lines[0].chars().all(|c| c == FULL));
        assert!(blocks.contains(' ') || blocks.contains(UPPER_HALF) || blocks.contains(LOWER_HALF));
    }
}
