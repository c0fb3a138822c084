/// サイズ選択肢
///
/// `pixel_bound` が `None` の場合はリサイズしない（元のサイズを維持）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeOption {
    pub token: &'static str,
    pub pixel_bound: Option<u32>,
    pub is_default: bool,
}

impl SizeOption {
    const fn bounded(token: &'static str, pixel_bound: u32) -> Self {
        Self {
            token,
            pixel_bound: Some(pixel_bound),
            is_default: false,
        }
    }

    /// 表示用ラベル（"1024px" / "Original Size"）
    pub fn label(&self) -> String {
        match self.pixel_bound {
            Some(bound) => format!("{bound}px"),
            None => "Original Size".to_string(),
        }
    }
}

/// 組み込みのサイズ選択肢（表示順）
pub const DEFAULT_SIZE_OPTIONS: &[SizeOption] = &[
    SizeOption::bounded("512", 512),
    SizeOption::bounded("768", 768),
    SizeOption {
        token: "1024",
        pixel_bound: Some(1024),
        is_default: true,
    },
    SizeOption::bounded("1536", 1536),
    SizeOption::bounded("2048", 2048),
    SizeOption {
        token: "original",
        pixel_bound: None,
        is_default: false,
    },
];
