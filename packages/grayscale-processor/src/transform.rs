use bytes::Bytes;

use grayscale_core::{
    JPEG_QUALITY, TransformError, calculate_bounded_dimensions, decode_image, encode_jpeg,
    resize_image, to_grayscale,
};

/// 画像バイト列を縮小・グレースケール化し、JPEG として再エンコードする。
///
/// `max_dimension` が `None` の場合はリサイズしない。
/// 拡大は行わず、出力は常に1チャンネルの JPEG になる。
pub fn transform(input: &[u8], max_dimension: Option<u32>) -> Result<Bytes, TransformError> {
    let img = decode_image(input)?;

    let (src_w, src_h) = (img.width(), img.height());
    let (dst_w, dst_h) = calculate_bounded_dimensions(src_w, src_h, max_dimension);

    let resized = if dst_w != src_w || dst_h != src_h {
        tracing::debug!(src_w, src_h, dst_w, dst_h, "resizing image");
        resize_image(&img, dst_w, dst_h)?
    } else {
        img
    };

    let gray = to_grayscale(&resized);
    let output_bytes = encode_jpeg(&gray, JPEG_QUALITY)?;

    tracing::debug!(
        width = dst_w,
        height = dst_h,
        bytes = output_bytes.len(),
        "encoded grayscale JPEG"
    );

    Ok(Bytes::from(output_bytes))
}
