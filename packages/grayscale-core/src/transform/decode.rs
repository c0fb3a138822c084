use crate::constants::MAX_PIXELS;
use crate::errors::TransformError;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

/// 画像バイト列をデコードする
///
/// フォーマットは内容から推測する（拡張子や Content-Type は使わない）
pub fn decode_image(input: &[u8]) -> Result<DynamicImage, TransformError> {
    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| TransformError::Decode(e.to_string()))?;

    let Some(format) = reader.format() else {
        return Err(TransformError::Decode(
            "unrecognized image format".to_string(),
        ));
    };

    // ピクセルを確保する前にヘッダだけで寸法を検証する
    let (width, height) = read_dimensions(input, format)?;
    validate_source_dimensions(width, height)?;

    tracing::debug!(format = ?format, width, height, bytes = input.len(), "decoding image");

    reader
        .decode()
        .map_err(|e| TransformError::Decode(e.to_string()))
}

/// ヘッダから寸法のみを読み取る（ピクセルデータはデコードしない）
fn read_dimensions(input: &[u8], format: ImageFormat) -> Result<(u32, u32), TransformError> {
    let mut header = ImageReader::with_format(Cursor::new(input), format);
    header.no_limits();
    header
        .into_dimensions()
        .map_err(|e| TransformError::Decode(e.to_string()))
}

/// ソース画像の総ピクセル数を検証し、メモリ枯渇を防ぐ
fn validate_source_dimensions(width: u32, height: u32) -> Result<(), TransformError> {
    let total_pixels = width as u64 * height as u64;
    if total_pixels > MAX_PIXELS {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::new_rgb8(width, height)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let img = decode_image(&png_bytes(30, 20)).unwrap();
        assert_eq!(img.width(), 30);
        assert_eq!(img.height(), 20);
    }

    #[test]
    fn test_decode_not_an_image() {
        let result = decode_image(b"this is plain text, not an image");
        assert!(matches!(result, Err(TransformError::Decode(_))));
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(30, 20);
        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(TransformError::Decode(_))));
    }

    #[test]
    fn test_decode_empty() {
        assert!(matches!(decode_image(&[]), Err(TransformError::Decode(_))));
    }

    /// PNG の CRC-32（IHDR 書き換え後の再計算用）
    fn crc32(data: &[u8]) -> u32 {
        let mut crc = 0xFFFF_FFFFu32;
        for &byte in data {
            crc ^= byte as u32;
            for _ in 0..8 {
                crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
            }
        }
        !crc
    }

    /// 1x1 の PNG を作り、IHDR の幅・高さだけを書き換える
    fn png_with_header_dimensions(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageLuma8(GrayImage::new(1, 1))
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        let mut bytes = buf.into_inner();

        // シグネチャ(8) + 長さ(4) + "IHDR"(4) の後に幅・高さが続く
        bytes[16..20].copy_from_slice(&width.to_be_bytes());
        bytes[20..24].copy_from_slice(&height.to_be_bytes());
        let crc = crc32(&bytes[12..29]);
        bytes[29..33].copy_from_slice(&crc.to_be_bytes());
        bytes
    }

    #[test]
    fn test_oversized_header_is_rejected_before_decode() {
        let result = decode_image(&png_with_header_dimensions(40_000, 30_000));
        assert!(matches!(
            result,
            Err(TransformError::ResolutionTooLarge {
                width: 40_000,
                height: 30_000
            })
        ));
    }

    #[test]
    fn test_header_crc_helper_keeps_png_valid() {
        let img = decode_image(&png_with_header_dimensions(1, 1)).unwrap();
        assert_eq!((img.width(), img.height()), (1, 1));
    }

    #[test]
    fn test_validate_source_dimensions() {
        assert!(validate_source_dimensions(4000, 3000).is_ok());
        assert!(matches!(
            validate_source_dimensions(100_000, 100_000),
            Err(TransformError::ResolutionTooLarge {
                width: 100_000,
                height: 100_000
            })
        ));
    }
}
