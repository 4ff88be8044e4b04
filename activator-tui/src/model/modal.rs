//! 弹窗状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 运营商修改密码说明
    Notice { message: String },
    /// 需要在浏览器打开的地址
    Link { url: String },
    /// 快捷键帮助
    Help,
}
