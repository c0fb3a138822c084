use crate::errors::TransformError;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{DynamicImage, GrayImage, RgbImage};

/// 画像をリサイズする
///
/// fast_image_resize を使用して高品質なリサイズを行う
/// Lanczos3 フィルタを使用
///
/// 1チャンネル画像はそのまま、それ以外は RGB8 に変換してからリサイズする
pub fn resize_image(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<DynamicImage, TransformError> {
    match img {
        DynamicImage::ImageLuma8(gray) => {
            let pixels = resize_raw(
                gray.width(),
                gray.height(),
                gray.as_raw().clone(),
                PixelType::U8,
                target_w,
                target_h,
            )?;
            let resized = GrayImage::from_raw(target_w, target_h, pixels).ok_or_else(|| {
                TransformError::ProcessingFailed("failed to convert resized image".to_string())
            })?;
            Ok(DynamicImage::ImageLuma8(resized))
        }
        _ => {
            let rgb_img = img.to_rgb8();
            let pixels = resize_raw(
                rgb_img.width(),
                rgb_img.height(),
                rgb_img.into_raw(),
                PixelType::U8x3,
                target_w,
                target_h,
            )?;
            let resized = RgbImage::from_raw(target_w, target_h, pixels).ok_or_else(|| {
                TransformError::ProcessingFailed("failed to convert resized image".to_string())
            })?;
            Ok(DynamicImage::ImageRgb8(resized))
        }
    }
}

fn resize_raw(
    width: u32,
    height: u32,
    buffer: Vec<u8>,
    pixel_type: PixelType,
    target_w: u32,
    target_h: u32,
) -> Result<Vec<u8>, TransformError> {
    let src_image = Image::from_vec_u8(width, height, buffer, pixel_type).map_err(|e| {
        TransformError::ProcessingFailed(format!("failed to create source image: {e}"))
    })?;

    let mut dst_image = Image::new(target_w, target_h, pixel_type);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        )
        .map_err(|e| TransformError::ProcessingFailed(format!("resize failed: {e}")))?;

    Ok(dst_image.into_vec())
}
