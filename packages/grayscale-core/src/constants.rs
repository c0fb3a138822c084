/// 画像の最大ピクセル数（1GP = 実質無制限、極端な攻撃のみ防止）
pub const MAX_PIXELS: u64 = 1_000_000_000;

/// JPEG 出力品質（1-100）
pub const JPEG_QUALITY: u8 = 85;

/// size フィールド省略時に使うトークン
pub const DEFAULT_SIZE_TOKEN: &str = "1024";
