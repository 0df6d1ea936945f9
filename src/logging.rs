// src/logging.rs

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// 解析日志级别字符串，无法识别时返回 None
pub fn parse_level(level: &str) -> Option<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// -v 次数优先于配置中的级别，默认 warn
pub fn select_level(verbose: u8, configured: Option<&str>) -> Level {
    match verbose {
        0 => configured.and_then(parse_level).unwrap_or(Level::WARN),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// 初始化 tracing，输出到 stderr；设置了 RUST_LOG 时以其为准
pub fn init(level: Level) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("hamlog={}", level)));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(parse_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_level("warn"), Some(Level::WARN));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn verbose_flag_overrides_config() {
        assert_eq!(select_level(0, None), Level::WARN);
        assert_eq!(select_level(0, Some("info")), Level::INFO);
        assert_eq!(select_level(0, Some("nonsense")), Level::WARN);
        assert_eq!(select_level(1, Some("error")), Level::DEBUG);
        assert_eq!(select_level(3, None), Level::TRACE);
    }
}
