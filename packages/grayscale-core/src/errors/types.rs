use thiserror::Error;

/// メディア処理の統合エラー型
#[derive(Debug, Error)]
pub enum MediaError {
    #[error(transparent)]
    Size(#[from] SizeError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// サイズカタログの検索エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizeError {
    #[error("Invalid size option '{token}'. Valid options: {}", .valid.join(", "))]
    InvalidSizeToken { token: String, valid: Vec<String> },
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
