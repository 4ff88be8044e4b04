//! 用户名格式提示
//!
//! 与门户服务端的格式校验一致：手机号为 `1` 开头的 11 位数字，学号为 6–12 位数字，
//! 直连不校验。这里只产生提示，是否提交由用户决定。

use regex::Regex;

use crate::types::IspProfile;

const MOBILE_PATTERN: &str = r"^1\d{10}$";
const STUDENT_ID_PATTERN: &str = r"^\d{6,12}$";

/// 用户名格式问题（错误码与门户一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameFormatError {
    InvalidCmccMobile,
    InvalidTelecomMobile,
    InvalidUnicomMobile,
    InvalidStudentId,
}

impl UsernameFormatError {
    /// 门户错误码，也是 `errorCodes` 下的翻译键
    pub fn code(self) -> &'static str {
        match self {
            UsernameFormatError::InvalidCmccMobile => "INVALID_CMCC_MOBILE",
            UsernameFormatError::InvalidTelecomMobile => "INVALID_TELECOM_MOBILE",
            UsernameFormatError::InvalidUnicomMobile => "INVALID_UNICOM_MOBILE",
            UsernameFormatError::InvalidStudentId => "INVALID_STUDENT_ID",
        }
    }
}

/// 检查用户名格式
///
/// 空用户名不提示。
pub fn check_username_format(isp: IspProfile, username: &str) -> Result<(), UsernameFormatError> {
    let username = username.trim();
    if username.is_empty() {
        return Ok(());
    }

    let (pattern, error) = match isp {
        IspProfile::Cmcc => (MOBILE_PATTERN, UsernameFormatError::InvalidCmccMobile),
        IspProfile::Telecom => (MOBILE_PATTERN, UsernameFormatError::InvalidTelecomMobile),
        IspProfile::Unicom => (MOBILE_PATTERN, UsernameFormatError::InvalidUnicomMobile),
        IspProfile::Campus => (STUDENT_ID_PATTERN, UsernameFormatError::InvalidStudentId),
        IspProfile::Direct => return Ok(()),
    };

    match Regex::new(pattern) {
        Ok(re) if !re.is_match(username) => Err(error),
        _ => Ok(()),
    }
}
