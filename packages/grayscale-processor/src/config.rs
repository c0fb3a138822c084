use clap::Parser;

/// アップロードサイズ上限のデフォルト（20 MiB）
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Grayscale image processing server
#[derive(Debug, Parser)]
#[command(name = "grayscale-processor")]
#[command(about = "Resize uploaded images and return them as grayscale JPEG")]
pub struct Config {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Maximum request body size for uploads, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
}
