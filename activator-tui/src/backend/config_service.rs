//! 配置服务
//!
//! 配置文件为 `<config_dir>/pppoe-activator/config.json`，同时充当语言偏好存储。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use activator_core::error::{CoreError, CoreResult};
use activator_core::PreferenceStore;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 配置目录名
pub const APP_DIR: &str = "pppoe-activator";
const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 激活门户地址
    pub server_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 身份下拉框选项
    pub roles: Vec<String>,
    /// 上次成功加载的语言
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1/".to_string(),
            request_timeout_secs: 120,
            roles: vec![
                "student".to_string(),
                "teacher".to_string(),
                "staff".to_string(),
            ],
            language: None,
        }
    }
}

impl AppConfig {
    /// 单次请求超时，配置为 0 时按 1 秒处理
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 默认配置文件路径
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载配置，文件缺失或损坏时使用默认值
    pub fn load_or_default(&self) -> AppConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("使用默认配置: {e:#}");
                AppConfig::default()
            }
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new(default_config_path())
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("配置文件不存在: {}", self.path.display());
            return Ok(AppConfig::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("读取配置文件失败: {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("解析配置文件失败: {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("创建配置目录失败: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)
            .with_context(|| format!("写入配置文件失败: {}", self.path.display()))
    }
}

impl PreferenceStore for LocalConfigService {
    fn get_language(&self) -> CoreResult<Option<String>> {
        self.load()
            .map(|config| config.language)
            .map_err(|e| CoreError::StorageError(format!("{e:#}")))
    }

    fn set_language(&self, code: &str) -> CoreResult<()> {
        // 配置文件损坏时不写回
        let mut config = self
            .load()
            .map_err(|e| CoreError::StorageError(format!("{e:#}")))?;
        if config.language.as_deref() == Some(code) {
            return Ok(());
        }
        config.language = Some(code.to_string());
        self.save(&config)
            .map_err(|e| CoreError::StorageError(format!("{e:#}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(dir: &tempfile::TempDir) -> LocalConfigService {
        LocalConfigService::new(dir.path().join(APP_DIR).join(CONFIG_FILE))
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = service(&dir).load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.request_timeout_secs, 120);
    }

    #[test]
    fn zero_timeout_in_file_is_raised_to_one_second() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        fs::create_dir_all(svc.path().parent().unwrap()).unwrap();
        fs::write(svc.path(), r#"{ "request_timeout_secs": 0 }"#).unwrap();
        let config = svc.load().unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
        assert_eq!(AppConfig::default().request_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let config = AppConfig {
            server_url: "http://10.0.0.1:8080/".to_string(),
            request_timeout_secs: 30,
            roles: vec!["student".to_string()],
            language: Some("en".to_string()),
        };
        svc.save(&config).unwrap();
        assert_eq!(svc.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        fs::create_dir_all(svc.path().parent().unwrap()).unwrap();
        fs::write(svc.path(), r#"{ "server_url": "http://portal/" }"#).unwrap();

        let config = svc.load().unwrap();
        assert_eq!(config.server_url, "http://portal/");
        assert_eq!(config.roles, AppConfig::default().roles);
    }

    #[test]
    fn malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        fs::create_dir_all(svc.path().parent().unwrap()).unwrap();
        fs::write(svc.path(), "not json").unwrap();

        assert!(svc.load().is_err());
        assert_eq!(svc.load_or_default(), AppConfig::default());
        assert!(svc.get_language().is_err());
    }

    #[test]
    fn malformed_file_is_not_overwritten_by_language_save() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        fs::create_dir_all(svc.path().parent().unwrap()).unwrap();
        let raw = r#"{ "server_url": "http://10.9.9.9:5000/", "roles": ["guest"], }"#;
        fs::write(svc.path(), raw).unwrap();

        assert!(matches!(
            svc.set_language("en"),
            Err(CoreError::StorageError(_))
        ));
        assert_eq!(fs::read_to_string(svc.path()).unwrap(), raw);
    }

    #[test]
    fn language_preference_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);

        assert_eq!(svc.get_language().unwrap(), None);
        svc.set_language("ja").unwrap();
        assert_eq!(svc.get_language().unwrap().as_deref(), Some("ja"));
    }

    #[test]
    fn set_language_keeps_other_fields() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(&dir);
        let config = AppConfig {
            server_url: "http://portal/".to_string(),
            ..AppConfig::default()
        };
        svc.save(&config).unwrap();

        svc.set_language("ko").unwrap();
        let reloaded = svc.load().unwrap();
        assert_eq!(reloaded.server_url, "http://portal/");
        assert_eq!(reloaded.language.as_deref(), Some("ko"));
    }
}
