//! 配置服务
//!
//! 配置目录为 `<config dir>/binip/`，其中可选的 `config.json` 覆盖默认值，
//! 命令行参数再覆盖文件中的值。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// 配置文件名
const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 是否写入调试日志
    pub debug: bool,
    /// 调试日志文件（每次启动时截断）
    pub debug_file: PathBuf,
    /// 数据库文件
    pub db_file: PathBuf,
}

impl AppConfig {
    /// 以 `dir` 为根目录的默认配置
    pub fn defaults_in(dir: &Path) -> Self {
        Self {
            debug: false,
            debug_file: dir.join("debug.log"),
            db_file: dir.join("binip.json"),
        }
    }

    /// 应用命令行覆盖项
    pub fn apply_overrides(
        &mut self,
        debug: bool,
        db_file: Option<PathBuf>,
        debug_file: Option<PathBuf>,
    ) {
        self.debug |= debug;
        if let Some(path) = db_file {
            self.db_file = path;
        }
        if let Some(path) = debug_file {
            self.debug_file = path;
        }
    }
}

/// `config.json` 的内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    debug: Option<bool>,
    debug_file: Option<PathBuf>,
    db_file: Option<PathBuf>,
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务
pub struct LocalConfigService {
    dir: PathBuf,
}

impl LocalConfigService {
    /// 使用平台配置目录
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("binip");
        Self::with_dir(dir)
    }

    /// 使用指定目录（测试用）
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = AppConfig::defaults_in(&self.dir);
        let path = self.dir.join(CONFIG_FILE);

        let file = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str::<ConfigFile>(&text)
                .with_context(|| format!("invalid config file {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ConfigFile::default(),
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read {}", path.display()));
            }
        };

        if let Some(debug) = file.debug {
            config.debug = debug;
        }
        if let Some(path) = file.debug_file {
            config.debug_file = path;
        }
        if let Some(path) = file.db_file {
            config.db_file = path;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = LocalConfigService::with_dir(tmp.path()).load().unwrap();
        assert_eq!(config, AppConfig::defaults_in(tmp.path()));
        assert!(!config.debug);
        assert_eq!(config.db_file, tmp.path().join("binip.json"));
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"{ "debug": true, "db_file": "/data/ip.json" }"#,
        )
        .unwrap();

        let config = LocalConfigService::with_dir(tmp.path()).load().unwrap();
        assert!(config.debug);
        assert_eq!(config.db_file, PathBuf::from("/data/ip.json"));
        assert_eq!(config.debug_file, tmp.path().join("debug.log"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "{ debug: yes").unwrap();
        assert!(LocalConfigService::with_dir(tmp.path()).load().is_err());
    }

    #[test]
    fn cli_flags_win() {
        let mut config = AppConfig::defaults_in(Path::new("/cfg"));
        config.apply_overrides(true, Some("/tmp/db.json".into()), None);
        assert!(config.debug);
        assert_eq!(config.db_file, PathBuf::from("/tmp/db.json"));
        assert_eq!(config.debug_file, PathBuf::from("/cfg/debug.log"));
    }
}
