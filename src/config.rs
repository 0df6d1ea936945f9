// src/config.rs

use crate::error::{HamlogError, Result};
use crate::models::{ContactEntry, Field};
use crate::record::QuoteStyle;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// ~/.config/hamlog
pub fn config_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(HamlogError::HomeDirNotFound)?;
    Ok(home_dir.join(".config/hamlog"))
}

/// 默认配置文件路径 (~/.config/hamlog/config.toml)
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// 新会话使用的波段/频率/模式初始值
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FieldDefaults {
    pub band: Option<String>,
    pub frequency: Option<String>,
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub escape_quotes: bool,
    pub log_level: Option<String>,
    #[serde(default)]
    pub defaults: FieldDefaults,
}

impl Config {
    /// 读取配置；文件不存在时使用默认值
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| HamlogError::Config {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| HamlogError::Config {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        Ok(config)
    }

    pub fn quote_style(&self) -> QuoteStyle {
        if self.escape_quotes {
            QuoteStyle::Escaped
        } else {
            QuoteStyle::Verbatim
        }
    }

    /// 命令行给出的路径优先，其次是配置中的 log_file，最后是 ~/.config/hamlog/contacts.csv
    pub fn resolve_log_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        match explicit.or_else(|| self.log_file.clone()) {
            Some(path) => Ok(path),
            None => Ok(config_dir()?.join("contacts.csv")),
        }
    }

    /// 交互会话的第一条记录的初始内容
    pub fn initial_entry(&self) -> ContactEntry {
        let mut entry = ContactEntry::default();
        let defaults = [
            (Field::Band, &self.defaults.band),
            (Field::Frequency, &self.defaults.frequency),
            (Field::Mode, &self.defaults.mode),
        ];
        for (field, value) in defaults {
            if let Some(v) = value {
                entry.set(field, v.as_str());
            }
        }
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.quote_style(), QuoteStyle::Verbatim);
    }

    #[test]
    fn parses_all_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
log_file = "/tmp/field-day.csv"
escape_quotes = true
log_level = "debug"

[defaults]
band = "20m"
mode = "SSB"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/field-day.csv")));
        assert_eq!(config.quote_style(), QuoteStyle::Escaped);
        assert_eq!(config.log_level.as_deref(), Some("debug"));

        let entry = config.initial_entry();
        assert_eq!(entry.band.as_deref(), Some("20m"));
        assert_eq!(entry.mode.as_deref(), Some("SSB"));
        assert_eq!(entry.frequency, None);
        assert_eq!(entry.callsign, None);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "escape_quotes = \"maybe\"").unwrap();
        assert!(matches!(
            Config::load(&path).unwrap_err(),
            HamlogError::Config { .. }
        ));
    }

    #[test]
    fn explicit_log_path_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("from-config.csv")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_log_path(Some(PathBuf::from("cli.csv"))).unwrap(),
            PathBuf::from("cli.csv")
        );
        assert_eq!(
            config.resolve_log_path(None).unwrap(),
            PathBuf::from("from-config.csv")
        );
    }
}
