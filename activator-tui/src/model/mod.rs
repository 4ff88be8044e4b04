//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//!     app.rs          App 主状态（翻译表、表单控制器、焦点、弹窗）
//!     focus.rs        表单字段与 Tab 顺序
//!     document.rs     界面静态文本的翻译绑定
//!     modal.rs        弹窗
//!
//! 表单本身的状态由 activator-core 的 FormController 持有，
//! Model 层只保存界面相关的部分。
//!

mod app;
mod document;
mod focus;
mod modal;

pub use app::{App, ISP_OPTIONS};
pub use document::{element, form_document};
pub use focus::FormField;
pub use modal::Modal;
