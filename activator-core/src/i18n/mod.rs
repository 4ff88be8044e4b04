//! 多语言
//!
//! - `table`: 翻译表与点分键解析
//! - `document`: 宿主的可翻译元素
//! - `store`: 当前语言、加载与回退、就绪信号

mod document;
mod store;
mod table;

pub use document::{Binding, BoundDocument, Document};
pub use store::{LoadEvent, TranslationStore};
pub use table::{lookup, resolve, TranslationTable, ERROR_CODES_KEY};
