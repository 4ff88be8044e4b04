//! 可翻译文档抽象
//!
//! 宿主（终端界面等）把需要翻译的元素以「元素 id → 翻译键」的形式登记，
//! 语言表加载后由 `TranslationStore::apply` 统一回填文本与占位符。

use std::collections::BTreeMap;

/// 元素与翻译键的绑定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub element: String,
    pub key: String,
}

/// 可翻译文档
pub trait Document {
    /// 需要替换文本的元素
    fn text_bindings(&self) -> Vec<Binding>;

    /// 需要替换占位符的元素
    fn placeholder_bindings(&self) -> Vec<Binding>;

    fn set_text(&mut self, element: &str, value: String);

    fn set_placeholder(&mut self, element: &str, value: String);

    /// 设置文档语言标签（如 `zh-CN`）
    fn set_lang(&mut self, tag: &str);
}

#[derive(Debug, Clone, Default)]
struct BoundElement {
    key: String,
    value: Option<String>,
}

/// 基于有序 Map 的文档实现
#[derive(Debug, Clone, Default)]
pub struct BoundDocument {
    texts: BTreeMap<String, BoundElement>,
    placeholders: BTreeMap<String, BoundElement>,
    lang: Option<String>,
}

impl BoundDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 绑定元素文本，重复绑定会覆盖旧的翻译键
    pub fn bind_text(&mut self, element: &str, key: &str) -> &mut Self {
        self.texts.insert(element.to_string(), bound(key));
        self
    }

    /// 绑定元素占位符
    pub fn bind_placeholder(&mut self, element: &str, key: &str) -> &mut Self {
        self.placeholders.insert(element.to_string(), bound(key));
        self
    }

    /// 当前文本；未翻译时为 `None`
    pub fn text(&self, element: &str) -> Option<&str> {
        self.texts.get(element).and_then(|e| e.value.as_deref())
    }

    /// 当前文本，未翻译时退回翻译键
    pub fn text_or_key<'a>(&'a self, element: &'a str) -> &'a str {
        match self.texts.get(element) {
            Some(e) => e.value.as_deref().unwrap_or(&e.key),
            None => element,
        }
    }

    pub fn placeholder(&self, element: &str) -> Option<&str> {
        self.placeholders.get(element).and_then(|e| e.value.as_deref())
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }
}

fn bound(key: &str) -> BoundElement {
    BoundElement {
        key: key.to_string(),
        value: None,
    }
}

fn collect(map: &BTreeMap<String, BoundElement>) -> Vec<Binding> {
    map.iter()
        .map(|(element, e)| Binding {
            element: element.clone(),
            key: e.key.clone(),
        })
        .collect()
}

impl Document for BoundDocument {
    fn text_bindings(&self) -> Vec<Binding> {
        collect(&self.texts)
    }

    fn placeholder_bindings(&self) -> Vec<Binding> {
        collect(&self.placeholders)
    }

    fn set_text(&mut self, element: &str, value: String) {
        if let Some(e) = self.texts.get_mut(element) {
            e.value = Some(value);
        }
    }

    fn set_placeholder(&mut self, element: &str, value: String) {
        if let Some(e) = self.placeholders.get_mut(element) {
            e.value = Some(value);
        }
    }

    fn set_lang(&mut self, tag: &str) {
        self.lang = Some(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_text_only_touches_bound_elements() {
        let mut doc = BoundDocument::new();
        doc.bind_text("title", "pageTitle");
        doc.set_text("title", "Activation".to_string());
        doc.set_text("unbound", "ignored".to_string());

        assert_eq!(doc.text("title"), Some("Activation"));
        assert_eq!(doc.text("unbound"), None);
        assert_eq!(doc.text_bindings().len(), 1);
    }

    #[test]
    fn text_or_key_before_translation() {
        let mut doc = BoundDocument::new();
        doc.bind_text("title", "pageTitle");
        assert_eq!(doc.text_or_key("title"), "pageTitle");
        assert_eq!(doc.text_or_key("other"), "other");
    }

    #[test]
    fn rebinding_resets_value() {
        let mut doc = BoundDocument::new();
        doc.bind_placeholder("username", "usernamePlaceholderPhone");
        doc.set_placeholder("username", "手机号".to_string());
        doc.bind_placeholder("username", "usernamePlaceholderStudent");

        assert_eq!(doc.placeholder("username"), None);
        assert_eq!(doc.placeholder_bindings()[0].key, "usernamePlaceholderStudent");
    }
}
