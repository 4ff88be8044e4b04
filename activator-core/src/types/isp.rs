//! 运营商（ISP）配置

use serde::{Deserialize, Serialize};

/// 校园统一身份认证的修改密码入口
pub const CAMPUS_PASSWORD_PORTAL: &str =
    "https://id.cdu.edu.cn/login?service=https:%2F%2Fmyapp.cdu.edu.cn%2F";

/// 运营商
///
/// 每个运营商决定用户名标签、是否显示移动子选项、修改密码行为以及账号后缀。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IspProfile {
    /// 中国移动（广西），需要选择子选项
    #[serde(rename = "cmccgx")]
    Cmcc,
    /// 校园网，学号登录
    #[serde(rename = "cdu")]
    Campus,
    /// 中国联通
    #[serde(rename = "10010")]
    Unicom,
    /// 中国电信
    #[serde(rename = "96301")]
    Telecom,
    /// 直连，不加后缀
    #[serde(rename = "direct")]
    Direct,
}

/// 修改密码按钮的行为
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangePasswordAction {
    /// 打开外部页面
    OpenUrl(&'static str),
    /// 显示翻译键对应的说明
    Notice(&'static str),
}

impl IspProfile {
    /// 获取所有运营商（下拉框顺序）
    pub fn all() -> &'static [IspProfile] {
        &[
            IspProfile::Cmcc,
            IspProfile::Campus,
            IspProfile::Unicom,
            IspProfile::Telecom,
            IspProfile::Direct,
        ]
    }

    /// 门户使用的运营商代码，同时是账号后缀
    pub fn code(self) -> &'static str {
        match self {
            IspProfile::Cmcc => "cmccgx",
            IspProfile::Campus => "cdu",
            IspProfile::Unicom => "10010",
            IspProfile::Telecom => "96301",
            IspProfile::Direct => "direct",
        }
    }

    /// 下拉框显示名称的翻译键
    pub fn name_key(self) -> &'static str {
        match self {
            IspProfile::Cmcc => "ispCMCC",
            IspProfile::Campus => "ispCDU",
            IspProfile::Unicom => "ispUnicom",
            IspProfile::Telecom => "ispTelecom",
            IspProfile::Direct => "ispDirect",
        }
    }

    /// 用户名标签的翻译键
    pub fn username_label_key(isp: Option<IspProfile>) -> &'static str {
        match isp {
            Some(IspProfile::Campus) => "usernameLabelStudent",
            Some(IspProfile::Direct) => "usernameLabelDirect",
            _ => "usernameLabelPhone",
        }
    }

    /// 用户名输入框占位符的翻译键
    pub fn username_placeholder_key(isp: Option<IspProfile>) -> &'static str {
        match isp {
            Some(IspProfile::Campus) => "usernamePlaceholderStudent",
            Some(IspProfile::Direct) => "usernamePlaceholderDirect",
            _ => "usernamePlaceholderPhone",
        }
    }

    /// 是否显示移动子选项
    pub fn has_variants(self) -> bool {
        self == IspProfile::Cmcc
    }

    /// 账号是否追加 `@<code>` 后缀
    pub fn appends_suffix(self) -> bool {
        self != IspProfile::Direct
    }

    /// 修改密码按钮的行为，`None` 表示不显示按钮
    pub fn change_password_action(self) -> Option<ChangePasswordAction> {
        match self {
            IspProfile::Campus => Some(ChangePasswordAction::OpenUrl(CAMPUS_PASSWORD_PORTAL)),
            IspProfile::Cmcc => Some(ChangePasswordAction::Notice("changePasswordCMCC")),
            IspProfile::Unicom => Some(ChangePasswordAction::Notice("changePasswordUnicom")),
            IspProfile::Telecom => Some(ChangePasswordAction::Notice("changePasswordTelecom")),
            IspProfile::Direct => None,
        }
    }
}

impl std::fmt::Display for IspProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// 中国移动子选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CmccVariant {
    /// 初始密码未修改（手机号后 6 位）
    #[default]
    Normal,
    /// 用户已自行修改密码
    Modified,
    /// 校园套餐，账号带 `scxy` 前缀
    Scxy,
}

impl CmccVariant {
    /// 校园套餐账号前缀
    pub const CAMPUS_PREFIX: &'static str = "scxy";

    /// 获取所有子选项
    pub fn all() -> &'static [CmccVariant] {
        &[CmccVariant::Normal, CmccVariant::Modified, CmccVariant::Scxy]
    }

    /// 表单取值
    pub fn code(self) -> &'static str {
        match self {
            CmccVariant::Normal => "normal",
            CmccVariant::Modified => "modified",
            CmccVariant::Scxy => "scxy",
        }
    }

    /// 选项文字的翻译键
    pub fn label_key(self) -> &'static str {
        match self {
            CmccVariant::Normal => "cmccNormal",
            CmccVariant::Modified => "cmccModified",
            CmccVariant::Scxy => "cmccScxy",
        }
    }

    /// 获取下一个子选项（用于循环切换）
    #[must_use]
    pub fn next(self) -> CmccVariant {
        match self {
            CmccVariant::Normal => CmccVariant::Modified,
            CmccVariant::Modified => CmccVariant::Scxy,
            CmccVariant::Scxy => CmccVariant::Normal,
        }
    }

    /// 获取上一个子选项（用于循环切换）
    #[must_use]
    pub fn prev(self) -> CmccVariant {
        match self {
            CmccVariant::Normal => CmccVariant::Scxy,
            CmccVariant::Modified => CmccVariant::Normal,
            CmccVariant::Scxy => CmccVariant::Modified,
        }
    }
}
