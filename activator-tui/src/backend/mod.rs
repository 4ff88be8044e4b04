//!┌──────────────────────────────────────────────────────────────────────────┐
//!│                            主循环 (app.rs)                               │
//!│                                                                          │
//!│   Event ──▶ Message ──▶ Update ──▶ Model ──▶ View                        │
//!│                            │                                             │
//!│                            │ Command                                     │
//!│                            ▼                                             │
//!│                     ┌────────────┐   spawn    ┌──────────────────┐       │
//!│                     │ TaskRunner │ ─────────▶ │  tokio Runtime   │       │
//!│                     └────────────┘            └────────┬─────────┘       │
//!│                            ▲                           │ HTTP            │
//!│                            │ BackendMessage            ▼                 │
//!│                            │ (mpsc)            ┌──────────────────┐      │
//!│                            └────────────────── │ activator-client │      │
//!│                                                └──────────────────┘      │
//!└──────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：配置与后台任务
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（同时保存语言偏好）
//!         mod task_runner;        // 在 tokio 运行时上执行 Command
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：~/.config/pppoe-activator/config.json
//!
//!     字段：
//!         - server_url            激活门户地址
//!         - request_timeout_secs  单次请求超时
//!         - roles                 身份选项
//!         - language              上次成功加载的语言
//!
//!     文件缺失或损坏时使用默认值；实现 PreferenceStore，
//!     语言表加载成功后由 TranslationStore 写回 language。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、任务执行（TaskRunner）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     界面循环是同步的，网络请求在 main 创建的多线程运行时上执行：
//!
//!         Update 返回 Command
//!             ↓
//!         TaskRunner::execute 在运行时上 spawn 任务
//!             ↓
//!         任务完成后发送 AppMessage::Backend(...)
//!             ↓
//!         主循环每帧 try_recv，交给 Update 层
//!
//!     任务从不直接修改 Model，所有状态变化都经过 Update 层。
//!

mod config_service;
mod task_runner;

pub use config_service::{AppConfig, LocalConfigService};
pub use task_runner::TaskRunner;
