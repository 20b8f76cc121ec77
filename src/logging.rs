// src/logging.rs

use tracing_subscriber::EnvFilter;

/// 初始化日志输出到 stderr
///
/// 级别取自 `DIARY_LOG`，默认 `warn`；`--verbose` 时固定为 `debug`。
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("DIARY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
