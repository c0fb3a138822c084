/// 長辺が `max_dimension` に収まる寸法を計算する（拡大しない）
///
/// 横長・正方形は幅基準、縦長は高さ基準で縮小する。
/// `max_dimension` が `None`、または両辺とも既に収まっている場合は元の寸法を返す
pub fn calculate_bounded_dimensions(
    src_w: u32,
    src_h: u32,
    max_dimension: Option<u32>,
) -> (u32, u32) {
    let Some(max) = max_dimension else {
        return (src_w, src_h);
    };

    if src_w <= max && src_h <= max {
        return (src_w, src_h);
    }

    if src_w >= src_h {
        (max, scale_side(src_h, max, src_w))
    } else {
        (scale_side(src_w, max, src_h), max)
    }
}

/// `side * max / reference` を四捨五入する（最小1px）
fn scale_side(side: u32, max: u32, reference: u32) -> u32 {
    let scaled = (side as f64 * max as f64 / reference as f64).round() as u32;
    scaled.max(1)
}
