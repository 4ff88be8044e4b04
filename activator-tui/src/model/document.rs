//! 界面静态文本的翻译绑定

use activator_core::i18n::BoundDocument;

/// 元素 id
pub mod element {
    pub const TITLE: &str = "title";
    pub const LANGUAGE: &str = "language";
    pub const ISP: &str = "isp";
    pub const ISP_PLACEHOLDER: &str = "ispPlaceholder";
    pub const VARIANT: &str = "variant";
    pub const PASSWORD: &str = "password";
    pub const NAME: &str = "name";
    pub const ROLE: &str = "role";
    pub const RESULT: &str = "result";
    pub const LOG: &str = "log";
}

/// 创建界面文档并登记翻译键
pub fn form_document() -> BoundDocument {
    let mut doc = BoundDocument::new();
    doc.bind_text(element::TITLE, "pageTitle")
        .bind_text(element::LANGUAGE, "languageLabel")
        .bind_text(element::ISP, "ispLabel")
        .bind_text(element::ISP_PLACEHOLDER, "selectISPOption")
        .bind_text(element::VARIANT, "cmccTypeLabel")
        .bind_text(element::PASSWORD, "passwordLabel")
        .bind_text(element::NAME, "nameLabel")
        .bind_text(element::ROLE, "roleLabel")
        .bind_text(element::RESULT, "resultTitle")
        .bind_text(element::LOG, "viewLogButton")
        .bind_placeholder(element::PASSWORD, "passwordPlaceholder")
        .bind_placeholder(element::NAME, "namePlaceholder");
    doc
}
