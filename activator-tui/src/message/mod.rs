//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁：
//!     app.rs          AppMessage 主消息
//!     form.rs         FormMessage 表单内的操作（随焦点字段解释）
//!     backend.rs      BackendMessage 后台任务结果
//!
//! 按键由 event 层翻译成 AppMessage；后台任务完成后经 mpsc 通道送回
//! AppMessage::Backend，由主循环交给 update 层。
//!

mod app;
mod backend;
mod form;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use form::FormMessage;
