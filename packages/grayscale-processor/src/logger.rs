use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// RUST_LOG（未設定時は info）でフィルタした fmt ロガーを登録する
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
