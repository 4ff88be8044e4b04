//! UI 组件

pub mod form;
pub mod modal;
pub mod result;
pub mod statusbar;
