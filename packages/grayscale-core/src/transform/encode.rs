use crate::errors::TransformError;
use image::GrayImage;
use image::codecs::jpeg::JpegEncoder;
use std::io::Cursor;

/// グレースケール画像を JPEG にエンコードする
pub fn encode_jpeg(img: &GrayImage, quality: u8) -> Result<Vec<u8>, TransformError> {
    let mut buf = Cursor::new(Vec::new());

    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    img.write_with_encoder(encoder)
        .map_err(|e| TransformError::ProcessingFailed(format!("JPEG encode failed: {e}")))?;

    Ok(buf.into_inner())
}
