//! 服务层
//!
//! 表单控制器与其视图状态、事件定义。

mod events;
mod form_controller;
mod view_state;

pub use events::{Effect, FormEvent};
pub use form_controller::FormController;
pub use view_state::{
    ErrorTip, FormView, LogContent, LogPanel, ResultContent, ResultLine, ResultPanel,
    SubmitButton, SubmitState, Tone,
};
