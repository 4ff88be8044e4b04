//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     terminal.rs     终端的初始化和恢复（原始模式 + 备用屏幕）
//!     logging.rs      日志输出到文件（终端被界面占用）
//!
//! 注意：无论 app::run 成功与否，main.rs 都必须先调用 restore_terminal，
//!       否则终端会保持在原始模式。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
