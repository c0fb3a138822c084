use image::{DynamicImage, GrayImage};

/// 輝度重み付きのグレースケール変換（image クレート標準の Rec. 709 係数）
///
/// アルファチャンネルは破棄される
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    #[test]
    fn test_luminance_weighted() {
        // 単純平均なら R/G/B どれも 85 になるが、輝度重みでは緑が最も明るい
        let red = to_grayscale(&DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([255, 0, 0]))));
        let green = to_grayscale(&DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([0, 255, 0]))));
        let blue = to_grayscale(&DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([0, 0, 255]))));

        let (Luma([r]), Luma([g]), Luma([b])) =
            (*red.get_pixel(0, 0), *green.get_pixel(0, 0), *blue.get_pixel(0, 0));
        assert!(g > r && r > b);
    }

    #[test]
    fn test_preserves_dimensions() {
        let gray = to_grayscale(&DynamicImage::new_rgba8(37, 11));
        assert_eq!(gray.dimensions(), (37, 11));
    }

    #[test]
    fn test_gray_input_is_unchanged() {
        let gray = GrayImage::from_fn(4, 3, |x, y| Luma([(x * 10 + y) as u8]));
        assert_eq!(to_grayscale(&DynamicImage::ImageLuma8(gray.clone())), gray);
    }

    #[test]
    fn test_white_stays_white() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([255, 255, 255])));
        assert_eq!(to_grayscale(&img).get_pixel(1, 1), &Luma([255]));
    }
}
