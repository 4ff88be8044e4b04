//! PPPoE Activator TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与后台任务 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()                    // 命令行参数
//!     init_logging()                  // 日志写入配置目录下的 activator.log
//!     load_or_default()               // 配置文件 + 命令行覆盖
//!     Runtime::new()                  // 网络请求所在的 tokio 运行时
//!     App::new()                      // 创建 APP 实例
//!     request_language()              // 发出首个翻译表加载
//!     init_terminal()                 // 原始模式 + 备用屏幕
//!     app::run()                      // 运行 app.rs 主循环
//!     restore_terminal()              // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 首个翻译表就绪前界面只显示加载页，之后才能操作表单（在 /app.rs 下细嗦）。

mod app;
mod backend;
mod cli;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use activator_client::{ClientConfig, HttpActivationClient};
use activator_core::traits::{ActivationApi, TranslationApi};
use activator_core::{FormController, Language, TranslationStore};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;

use backend::{LocalConfigService, TaskRunner};
use cli::Cli;
use util::{init_logging, init_terminal, restore_terminal};

const LOG_FILE: &str = "activator.log";
const DEFAULT_ROLE: &str = "student";

fn main() -> Result<()> {
    // 1. 命令行与配置
    let cli = Cli::parse();
    let config_service = Arc::new(
        cli.config
            .clone()
            .map_or_else(LocalConfigService::default, LocalConfigService::new),
    );

    // 终端被界面占用，日志写入文件
    let log_path = config_service
        .path()
        .parent()
        .map_or_else(|| PathBuf::from(LOG_FILE), |dir| dir.join(LOG_FILE));
    if let Err(e) = init_logging(&log_path) {
        eprintln!("日志初始化失败: {e:#}");
    }

    let mut config = config_service.load_or_default();
    cli.apply(&mut config);
    log::info!(
        "Starting with server {} (timeout {}s)",
        config.server_url,
        config.request_timeout_secs
    );

    // 2. 运行时与门户客户端
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("创建 tokio 运行时失败")?;

    let client = Arc::new(
        HttpActivationClient::new(
            ClientConfig::new(config.server_url.clone())
                .with_request_timeout(config.request_timeout()),
        )
        .context("门户地址无效")?,
    );
    let activation: Arc<dyn ActivationApi> = client.clone();
    let translations: Arc<dyn TranslationApi> = client;

    // 3. 创建应用实例
    let store = TranslationStore::new(Arc::clone(&translations), config_service);
    let role = config
        .roles
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_ROLE.to_string());
    let form = FormController::new(Arc::clone(&activation), role);

    let initial = cli.lang.clone().unwrap_or_else(|| {
        store
            .initial_language(sys_locale::get_locale().as_deref())
            .code()
            .to_string()
    });
    let language = Language::from_code(&initial).unwrap_or(Language::DEFAULT);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let runner = TaskRunner::new(runtime.handle().clone(), tx, activation, translations);
    let mut app = model::App::new(store, form, config.roles, language);

    // 4. 首个翻译表（不支持的代码回退到默认语言）
    runner.execute(update::request_language(&mut app, &initial));

    // 5. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &runner, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("Exiting");
    result
}
