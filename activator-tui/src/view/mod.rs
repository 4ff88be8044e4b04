//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改状态：
//!     layout.rs       主布局（标题栏 + 表单 | 结果/日志 + 状态栏）
//!     theme.rs        颜色与常用样式
//!     components/     表单、结果面板、状态栏、弹窗
//!
//! 所有界面文本都来自当前翻译表；首个翻译表就绪前只显示加载页。
//!

mod components;
mod layout;
mod theme;

pub use layout::render;
