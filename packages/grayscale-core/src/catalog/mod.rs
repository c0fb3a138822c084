mod options;

pub use options::{DEFAULT_SIZE_OPTIONS, SizeOption};

use crate::constants::DEFAULT_SIZE_TOKEN;
use crate::errors::SizeError;

/// サイズトークンから最大寸法を引くための不変カタログ
///
/// 起動時に一度だけ作成し、ハンドラへ明示的に渡す
#[derive(Debug, Clone, Copy)]
pub struct SizeCatalog {
    options: &'static [SizeOption],
}

impl Default for SizeCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE_OPTIONS)
    }
}

impl SizeCatalog {
    pub const fn new(options: &'static [SizeOption]) -> Self {
        Self { options }
    }

    /// 全選択肢を定義順で返す
    pub fn options(&self) -> &'static [SizeOption] {
        self.options
    }

    /// 有効なトークン一覧（定義順）
    pub fn tokens(&self) -> Vec<String> {
        self.options.iter().map(|o| o.token.to_string()).collect()
    }

    /// デフォルト指定された選択肢
    pub fn default_option(&self) -> Option<&'static SizeOption> {
        self.options.iter().find(|o| o.is_default)
    }

    /// デフォルトトークン（デフォルト指定がなければ "1024"）
    pub fn default_token(&self) -> &'static str {
        self.default_option()
            .map(|o| o.token)
            .unwrap_or(DEFAULT_SIZE_TOKEN)
    }

    /// トークンを最大寸法に解決する
    ///
    /// 未知のトークンは有効なトークン一覧付きの `InvalidSizeToken` になる
    pub fn resolve(&self, token: &str) -> Result<Option<u32>, SizeError> {
        self.options
            .iter()
            .find(|o| o.token == token)
            .map(|o| o.pixel_bound)
            .ok_or_else(|| SizeError::InvalidSizeToken {
                token: token.to_string(),
                valid: self.tokens(),
            })
    }
}
