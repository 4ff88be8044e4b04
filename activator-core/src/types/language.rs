//! 界面语言

use serde::{Deserialize, Serialize};

/// 支持的界面语言
///
/// 门户为每种语言提供 `static/i18n/<code>.json`，`Zh` 是默认和回退语言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// 简体中文
    #[default]
    Zh,
    /// English
    En,
    /// Français
    Fr,
    /// Español
    Es,
    /// 한국어
    Ko,
    /// Tiếng Việt
    Vi,
    /// Bahasa Melayu
    Ms,
    /// ไทย
    Th,
    /// اردو
    Ur,
    /// हिन्दी
    Hi,
    /// 日本語
    Ja,
}

impl Language {
    /// 默认（回退）语言
    pub const DEFAULT: Language = Language::Zh;

    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[
            Language::Zh,
            Language::En,
            Language::Fr,
            Language::Es,
            Language::Ko,
            Language::Vi,
            Language::Ms,
            Language::Th,
            Language::Ur,
            Language::Hi,
            Language::Ja,
        ]
    }

    /// 语言代码（同时是翻译文件名）
    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
            Language::Fr => "fr",
            Language::Es => "es",
            Language::Ko => "ko",
            Language::Vi => "vi",
            Language::Ms => "ms",
            Language::Th => "th",
            Language::Ur => "ur",
            Language::Hi => "hi",
            Language::Ja => "ja",
        }
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Zh => "中文",
            Language::En => "English",
            Language::Fr => "Français",
            Language::Es => "Español",
            Language::Ko => "한국어",
            Language::Vi => "Tiếng Việt",
            Language::Ms => "Bahasa Melayu",
            Language::Th => "ไทย",
            Language::Ur => "اردو",
            Language::Hi => "हिन्दी",
            Language::Ja => "日本語",
        }
    }

    /// 文档语言标记，中文使用区域化的 `zh-CN`
    pub fn document_tag(self) -> &'static str {
        match self {
            Language::Zh => "zh-CN",
            other => other.code(),
        }
    }

    /// 从语言代码解析（精确匹配，大小写不敏感）
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Language::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// 从系统/浏览器区域设置推断语言
    ///
    /// 取第一段（`en-US` → `en`，`zh_CN.UTF-8` → `zh`），不支持时返回默认语言。
    pub fn detect(locale: &str) -> Language {
        let primary = locale
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Language::from_code(&primary).unwrap_or(Language::DEFAULT)
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        let all = Language::all();
        let index = all.iter().position(|l| *l == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// 获取上一个语言（用于循环切换）
    #[must_use]
    pub fn prev(self) -> Language {
        let all = Language::all();
        let index = all.iter().position(|l| *l == self).unwrap_or(0);
        all[(index + all.len() - 1) % all.len()]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_languages_with_zh_default() {
        assert_eq!(Language::all().len(), 11);
        assert_eq!(Language::default(), Language::Zh);
        assert_eq!(Language::DEFAULT, Language::Zh);
    }

    #[test]
    fn code_roundtrip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn from_code_rejects_unknown_and_regional() {
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code("en-US"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn detect_browser_locales() {
        assert_eq!(Language::detect("en-US"), Language::En);
        assert_eq!(Language::detect("ja"), Language::Ja);
        assert_eq!(Language::detect("zh_CN.UTF-8"), Language::Zh);
        assert_eq!(Language::detect("FR-ca"), Language::Fr);
    }

    #[test]
    fn detect_unsupported_falls_back_to_default() {
        assert_eq!(Language::detect("de-DE"), Language::Zh);
        assert_eq!(Language::detect(""), Language::Zh);
        assert_eq!(Language::detect("C"), Language::Zh);
    }

    #[test]
    fn document_tag_regionalizes_chinese_only() {
        assert_eq!(Language::Zh.document_tag(), "zh-CN");
        assert_eq!(Language::En.document_tag(), "en");
        assert_eq!(Language::Ur.document_tag(), "ur");
    }

    #[test]
    fn cycling_wraps_around() {
        assert_eq!(Language::Zh.next(), Language::En);
        assert_eq!(Language::Ja.next(), Language::Zh);
        assert_eq!(Language::Zh.prev(), Language::Ja);
        for lang in Language::all() {
            assert_eq!(lang.next().prev(), *lang);
        }
    }

    #[test]
    fn serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Ko).unwrap(), "\"ko\"");
        let lang: Language = serde_json::from_str("\"vi\"").unwrap();
        assert_eq!(lang, Language::Vi);
    }
}
