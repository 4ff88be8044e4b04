//! 密码预填与提示

use crate::types::{CmccVariant, IspProfile};

/// 移动初始密码取用户名后几位
const CMCC_PREFILL_LEN: usize = 6;
/// 电信初始密码取用户名后几位
const TELECOM_PREFILL_LEN: usize = 8;

/// 密码提示（对应翻译键）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordHint {
    Campus,
    CmccNormal,
    CmccModified,
    Telecom,
    Unicom,
    Direct,
}

impl PasswordHint {
    /// 翻译键
    pub fn key(self) -> &'static str {
        match self {
            PasswordHint::Campus => "passwordHintCDU",
            PasswordHint::CmccNormal => "passwordHintCMCCNormal",
            PasswordHint::CmccModified => "passwordHintCMCCModified",
            PasswordHint::Telecom => "passwordHintTelecom",
            PasswordHint::Unicom => "passwordHintUnicom",
            PasswordHint::Direct => "passwordHintDirect",
        }
    }
}

/// 密码策略结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// 预填的密码，`None` 表示留空
    pub prefill: Option<String>,
    /// 密码提示
    pub hint: Option<PasswordHint>,
}

/// 计算密码策略
///
/// 调用方在应用结果前总是先清空已输入的密码。长度按 Unicode 字符计算。
pub fn password_policy(
    username: &str,
    isp: Option<IspProfile>,
    variant: CmccVariant,
) -> PasswordPolicy {
    let base = username.trim();

    let Some(isp) = isp else {
        return PasswordPolicy::default();
    };

    match isp {
        IspProfile::Campus => hint_only(PasswordHint::Campus),
        IspProfile::Cmcc => match variant {
            CmccVariant::Normal => PasswordPolicy {
                prefill: last_chars(base, CMCC_PREFILL_LEN),
                hint: Some(PasswordHint::CmccNormal),
            },
            CmccVariant::Modified | CmccVariant::Scxy => hint_only(PasswordHint::CmccModified),
        },
        IspProfile::Telecom => PasswordPolicy {
            prefill: last_chars(base, TELECOM_PREFILL_LEN),
            hint: Some(PasswordHint::Telecom),
        },
        IspProfile::Unicom => hint_only(PasswordHint::Unicom),
        IspProfile::Direct => hint_only(PasswordHint::Direct),
    }
}

fn hint_only(hint: PasswordHint) -> PasswordPolicy {
    PasswordPolicy {
        prefill: None,
        hint: Some(hint),
    }
}

/// 用户名足够长时取最后 `n` 个字符
fn last_chars(s: &str, n: usize) -> Option<String> {
    let len = s.chars().count();
    if len < n {
        return None;
    }
    Some(s.chars().skip(len - n).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(username: &str, isp: IspProfile, variant: CmccVariant) -> PasswordPolicy {
        password_policy(username, Some(isp), variant)
    }

    #[test]
    fn cmcc_normal_prefills_last_six() {
        let p = policy("13812345678", IspProfile::Cmcc, CmccVariant::Normal);
        assert_eq!(p.prefill.as_deref(), Some("345678"));
        assert_eq!(p.hint, Some(PasswordHint::CmccNormal));
    }

    #[test]
    fn cmcc_normal_boundary() {
        let six = policy("abcdef", IspProfile::Cmcc, CmccVariant::Normal);
        assert_eq!(six.prefill.as_deref(), Some("abcdef"));

        let five = policy("abcde", IspProfile::Cmcc, CmccVariant::Normal);
        assert_eq!(five.prefill, None);
        assert_eq!(five.hint, Some(PasswordHint::CmccNormal));
    }

    #[test]
    fn cmcc_normal_counts_trimmed_username() {
        let p = policy("  abcde  ", IspProfile::Cmcc, CmccVariant::Normal);
        assert_eq!(p.prefill, None);
    }

    #[test]
    fn cmcc_modified_and_scxy_no_prefill() {
        for variant in [CmccVariant::Modified, CmccVariant::Scxy] {
            let p = policy("13812345678", IspProfile::Cmcc, variant);
            assert_eq!(p.prefill, None);
            assert_eq!(p.hint, Some(PasswordHint::CmccModified));
        }
    }

    #[test]
    fn telecom_boundary() {
        let eight = policy("12345678", IspProfile::Telecom, CmccVariant::Normal);
        assert_eq!(eight.prefill.as_deref(), Some("12345678"));

        let seven = policy("1234567", IspProfile::Telecom, CmccVariant::Normal);
        assert_eq!(seven.prefill, None);
        assert_eq!(seven.hint, Some(PasswordHint::Telecom));
    }

    #[test]
    fn telecom_prefills_last_eight() {
        let p = policy("18912345678", IspProfile::Telecom, CmccVariant::Normal);
        assert_eq!(p.prefill.as_deref(), Some("12345678"));
    }

    #[test]
    fn telecom_ignores_stale_variant() {
        let p = policy("18912345678", IspProfile::Telecom, CmccVariant::Modified);
        assert_eq!(p.prefill.as_deref(), Some("12345678"));
    }

    #[test]
    fn hint_only_profiles() {
        assert_eq!(
            policy("2021001", IspProfile::Campus, CmccVariant::Normal),
            hint_only(PasswordHint::Campus)
        );
        assert_eq!(
            policy("18600000000", IspProfile::Unicom, CmccVariant::Normal),
            hint_only(PasswordHint::Unicom)
        );
        assert_eq!(
            policy("alice", IspProfile::Direct, CmccVariant::Normal),
            hint_only(PasswordHint::Direct)
        );
    }

    #[test]
    fn no_isp_no_policy() {
        assert_eq!(
            password_policy("13812345678", None, CmccVariant::Normal),
            PasswordPolicy::default()
        );
    }

    #[test]
    fn multibyte_lengths_count_chars() {
        let p = policy("用户一二三四五六", IspProfile::Cmcc, CmccVariant::Normal);
        assert_eq!(p.prefill.as_deref(), Some("一二三四五六"));
    }
}
