//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!     handler.rs      poll_event（受 app.rs 调用，最长等待 timeout）
//!                     handle_event（按键 → AppMessage）
//!     keymap.rs       快捷键映射
//!
//! 处理顺序：
//!     - Ctrl+C 任何时候退出
//!     - 有弹窗时只处理关闭
//!     - 首个翻译表就绪前只允许退出和重新加载
//!     - 全局快捷键
//!     - 按焦点字段解释（文本框输入字符，选择器响应 ←/→）
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
