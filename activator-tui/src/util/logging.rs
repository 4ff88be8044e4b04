//! 日志初始化
//!
//! 级别取自 `RUST_LOG`，默认 `info`。

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// 把日志追加写入 `path`
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("创建日志目录失败: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("打开日志文件失败: {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("日志系统已初始化")?;
    Ok(())
}
