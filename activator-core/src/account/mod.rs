//! 账号推导
//!
//! 根据原始用户名、运营商与移动子选项，纯函数地推导：
//! - 最终提交的账号（前缀 + `@<运营商>` 后缀）
//! - 账号预览
//! - 密码预填与提示
//! - 用户名格式提示（仅提示，不阻止提交）
//!
//! 实时预览与提交共用同一套推导，保证两者一致。

mod derive;
mod password;
mod username;

pub use derive::{account_preview, change_password_action, derive_account};
pub use password::{password_policy, PasswordHint, PasswordPolicy};
pub use username::{check_username_format, UsernameFormatError};
