//! 语言偏好持久化抽象 Trait

use std::sync::{Arc, RwLock};

use crate::error::{CoreError, CoreResult};

/// 语言偏好存储 Trait
///
/// 被动的键值存储，只在语言表加载成功后写入。
///
/// 平台实现:
/// - TUI: `LocalConfigService`（配置目录下的 `config.json`）
/// - 测试 / 无持久化场景: `InMemoryPreferenceStore`
pub trait PreferenceStore: Send + Sync {
    /// 读取已保存的语言代码
    ///
    /// # Returns
    /// * `Some(code)` - 之前保存过（不保证仍是受支持的语言）
    /// * `None` - 从未保存
    fn get_language(&self) -> CoreResult<Option<String>>;

    /// 保存语言代码
    fn set_language(&self, code: &str) -> CoreResult<()>;
}

/// In-memory preference store
///
/// Default implementation, nothing survives the process.
#[derive(Clone, Default)]
pub struct InMemoryPreferenceStore {
    language: Arc<RwLock<Option<String>>>,
}

impl InMemoryPreferenceStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a remembered language
    #[must_use]
    pub fn with_language(code: &str) -> Self {
        Self {
            language: Arc::new(RwLock::new(Some(code.to_string()))),
        }
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get_language(&self) -> CoreResult<Option<String>> {
        self.language
            .read()
            .map(|guard| guard.clone())
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }

    fn set_language(&self, code: &str) -> CoreResult<()> {
        let mut guard = self
            .language
            .write()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        *guard = Some(code.to_string());
        Ok(())
    }
}
