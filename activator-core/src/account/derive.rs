//! 账号标识推导

use crate::types::{ChangePasswordAction, CmccVariant, IspProfile};

/// 推导最终提交的账号
///
/// 1. 去除首尾空白
/// 2. 移动 + 校园套餐时加 `scxy` 前缀
/// 3. 非直连时追加 `@<运营商代码>`
///
/// 前缀总是在后缀之前应用，子选项对移动以外的运营商无效。
pub fn derive_account(username: &str, isp: IspProfile, variant: CmccVariant) -> String {
    let base = username.trim();

    let local_part = if isp.has_variants() && variant == CmccVariant::Scxy {
        format!("{}{base}", CmccVariant::CAMPUS_PREFIX)
    } else {
        base.to_string()
    };

    if isp.appends_suffix() {
        format!("{local_part}@{}", isp.code())
    } else {
        local_part
    }
}

/// 账号预览
///
/// 用户名为空、未选运营商或直连时不显示预览。
pub fn account_preview(
    username: &str,
    isp: Option<IspProfile>,
    variant: CmccVariant,
) -> Option<String> {
    let isp = isp?;
    if username.trim().is_empty() || isp == IspProfile::Direct {
        return None;
    }
    Some(derive_account(username, isp, variant))
}

/// 修改密码按钮的行为，未选运营商或直连时隐藏按钮
pub fn change_password_action(isp: Option<IspProfile>) -> Option<ChangePasswordAction> {
    isp.and_then(IspProfile::change_password_action)
}
