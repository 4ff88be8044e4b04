//! Translation store: active language, loaded table, readiness

use std::sync::Arc;

use tokio::sync::watch;

use super::document::Document;
use super::table::TranslationTable;
use crate::error::{CoreError, CoreResult};
use crate::traits::{PreferenceStore, TranslationApi};
use crate::types::Language;

/// Outcome of a committed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    /// First table of the session, the form may now become interactive
    Ready,
    /// A later language switch re-applied the document
    Reapplied,
}

/// Owns the active language and its table.
///
/// Loading is split into [`fetch_with_fallback`](Self::fetch_with_fallback)
/// (async, no access to the store) and [`commit`](Self::commit) (sync), so an
/// event loop can run the fetch as a task and commit the result when it
/// comes back. [`set_language`](Self::set_language) chains both.
pub struct TranslationStore {
    api: Arc<dyn TranslationApi>,
    preferences: Arc<dyn PreferenceStore>,
    language: Option<Language>,
    table: TranslationTable,
    ready_tx: watch::Sender<bool>,
}

impl TranslationStore {
    pub fn new(api: Arc<dyn TranslationApi>, preferences: Arc<dyn PreferenceStore>) -> Self {
        let (ready_tx, _) = watch::channel(false);
        Self {
            api,
            preferences,
            language: None,
            table: TranslationTable::empty(Language::DEFAULT),
            ready_tx,
        }
    }

    /// Language of the committed table, `None` before the first load
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Client used for fetching, for hosts that spawn the fetch themselves
    pub fn translation_api(&self) -> Arc<dyn TranslationApi> {
        Arc::clone(&self.api)
    }

    pub fn is_ready(&self) -> bool {
        *self.ready_tx.borrow()
    }

    /// Flips to `true` once, on the first successful load
    pub fn ready_signal(&self) -> watch::Receiver<bool> {
        self.ready_tx.subscribe()
    }

    /// Startup language: remembered preference, then the locale, then the default.
    pub fn initial_language(&self, locale: Option<&str>) -> Language {
        match self.preferences.get_language() {
            Ok(Some(code)) => {
                if let Some(language) = Language::from_code(&code) {
                    return language;
                }
                log::warn!("Ignoring unsupported stored language: {code}");
            }
            Ok(None) => {}
            Err(e) => log::warn!("Failed to read language preference: {e}"),
        }
        locale.map_or(Language::DEFAULT, Language::detect)
    }

    /// Fetch one table, no fallback. Unsupported codes fail without a request.
    pub async fn fetch(api: &dyn TranslationApi, code: &str) -> CoreResult<TranslationTable> {
        let language =
            Language::from_code(code).ok_or_else(|| CoreError::UnsupportedLanguage(code.to_string()))?;
        let root = api.fetch_translations(language.code()).await?;
        TranslationTable::new(language, root)
    }

    /// Fetch `code`, retrying once with the default language on failure.
    ///
    /// `None` means both attempts failed; the caller keeps its current table.
    pub async fn fetch_with_fallback(
        api: &dyn TranslationApi,
        code: &str,
    ) -> Option<TranslationTable> {
        match Self::fetch(api, code).await {
            Ok(table) => return Some(table),
            Err(e) => {
                log_load_failure(code, &e);
                if Language::from_code(code) == Some(Language::DEFAULT) {
                    log::error!("Default language table unavailable, keeping current table");
                    return None;
                }
            }
        }

        let fallback = Language::DEFAULT.code();
        log::info!("Falling back to language: {fallback}");
        match Self::fetch(api, fallback).await {
            Ok(table) => Some(table),
            Err(e) => {
                log::error!("Failed to load fallback language {fallback}: {e}");
                None
            }
        }
    }

    /// Install a fetched table and re-apply the document.
    pub fn commit(&mut self, table: TranslationTable, document: &mut dyn Document) -> LoadEvent {
        let language = table.language();
        self.table = table;
        self.language = Some(language);

        if let Err(e) = self.preferences.set_language(language.code()) {
            log::warn!("Failed to persist language preference: {e}");
        }

        self.apply(document);
        log::info!("Language loaded: {language}");

        if self.is_ready() {
            LoadEvent::Reapplied
        } else {
            self.ready_tx.send_replace(true);
            LoadEvent::Ready
        }
    }

    /// Fetch and commit in one step. Failures are logged, never returned.
    pub async fn set_language(
        &mut self,
        code: &str,
        document: &mut dyn Document,
    ) -> Option<LoadEvent> {
        let api = self.translation_api();
        let table = Self::fetch_with_fallback(api.as_ref(), code).await?;
        Some(self.commit(table, document))
    }

    /// Re-resolve every bound text and placeholder, then set the language tag.
    pub fn apply(&self, document: &mut dyn Document) {
        for binding in document.text_bindings() {
            let value = self.table.resolve(&binding.key);
            document.set_text(&binding.element, value);
        }
        for binding in document.placeholder_bindings() {
            let value = self.table.resolve(&binding.key);
            document.set_placeholder(&binding.element, value);
        }
        document.set_lang(self.table.language().document_tag());
    }

    pub fn resolve(&self, key: &str) -> String {
        self.table.resolve(key)
    }

    /// Localized text of a portal error code
    pub fn error_message(&self, code: &str) -> Option<String> {
        self.table.error_message(code)
    }
}

fn log_load_failure(code: &str, e: &CoreError) {
    if e.is_expected() {
        log::warn!("Failed to load language {code}: {e}");
    } else {
        log::error!("Failed to load language {code}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::BoundDocument;
    use crate::test_utils::{zh_table, FailingPreferenceStore, MockTranslationApi};
    use crate::traits::InMemoryPreferenceStore;
    use serde_json::json;

    fn store_with(api: MockTranslationApi, prefs: InMemoryPreferenceStore) -> TranslationStore {
        TranslationStore::new(Arc::new(api), Arc::new(prefs))
    }

    fn document() -> BoundDocument {
        let mut doc = BoundDocument::new();
        doc.bind_text("title", "pageTitle")
            .bind_text("missing", "notTranslated")
            .bind_placeholder("name", "namePlaceholder");
        doc
    }

    fn en_table() -> serde_json::Value {
        json!({ "pageTitle": "Activation", "namePlaceholder": "Your name" })
    }

    #[tokio::test]
    async fn first_load_signals_ready_once() {
        let api = MockTranslationApi::new()
            .with_table("zh", zh_table())
            .with_table("en", en_table());
        let mut store = store_with(api, InMemoryPreferenceStore::new());
        let mut ready = store.ready_signal();
        let mut doc = document();

        assert!(!store.is_ready());
        assert_eq!(store.set_language("zh", &mut doc).await, Some(LoadEvent::Ready));
        assert!(ready.has_changed().unwrap());
        assert!(*ready.borrow_and_update());

        assert_eq!(store.set_language("en", &mut doc).await, Some(LoadEvent::Reapplied));
        assert!(!ready.has_changed().unwrap());
    }

    #[tokio::test]
    async fn commit_applies_document_and_persists() {
        let api = MockTranslationApi::new().with_table("en", en_table());
        let prefs = InMemoryPreferenceStore::new();
        let mut store = store_with(api, prefs.clone());
        let mut doc = document();

        store.set_language("en", &mut doc).await;

        assert_eq!(doc.text("title"), Some("Activation"));
        assert_eq!(doc.text("missing"), Some("notTranslated"));
        assert_eq!(doc.placeholder("name"), Some("Your name"));
        assert_eq!(doc.lang(), Some("en"));
        assert_eq!(prefs.get_language().unwrap().as_deref(), Some("en"));
        assert_eq!(store.language(), Some(Language::En));
    }

    #[tokio::test]
    async fn unsupported_code_falls_back_without_request() {
        let api = Arc::new(MockTranslationApi::new().with_table("zh", zh_table()));
        let prefs = InMemoryPreferenceStore::new();
        let mut store = TranslationStore::new(api.clone(), Arc::new(prefs.clone()));
        let mut doc = document();

        assert_eq!(store.set_language("xx", &mut doc).await, Some(LoadEvent::Ready));
        assert_eq!(api.calls().await, vec!["zh".to_string()]);
        assert_eq!(store.language(), Some(Language::Zh));
        assert_eq!(doc.lang(), Some("zh-CN"));
        assert_eq!(prefs.get_language().unwrap().as_deref(), Some("zh"));
    }

    #[tokio::test]
    async fn missing_table_falls_back_to_default() {
        let api = Arc::new(MockTranslationApi::new().with_table("zh", zh_table()));
        let mut store = TranslationStore::new(api.clone(), Arc::new(InMemoryPreferenceStore::new()));
        let mut doc = document();

        store.set_language("fr", &mut doc).await;

        assert_eq!(api.calls().await, vec!["fr".to_string(), "zh".to_string()]);
        assert_eq!(store.language(), Some(Language::Zh));
    }

    #[tokio::test]
    async fn failed_default_load_keeps_previous_table() {
        let api = Arc::new(MockTranslationApi::new().with_table("en", en_table()));
        let mut store = TranslationStore::new(api.clone(), Arc::new(InMemoryPreferenceStore::new()));
        let mut doc = document();

        store.set_language("en", &mut doc).await;
        api.fail_all(true).await;

        assert_eq!(store.set_language("ja", &mut doc).await, None);
        assert_eq!(store.language(), Some(Language::En));
        assert_eq!(store.resolve("pageTitle"), "Activation");
        assert_eq!(doc.text("title"), Some("Activation"));
    }

    #[tokio::test]
    async fn default_failure_is_not_retried() {
        let api = Arc::new(MockTranslationApi::new());
        let mut store = TranslationStore::new(api.clone(), Arc::new(InMemoryPreferenceStore::new()));
        let mut doc = document();

        assert_eq!(store.set_language("zh", &mut doc).await, None);
        assert_eq!(api.calls().await.len(), 1);
        assert!(!store.is_ready());
    }

    #[tokio::test]
    async fn non_object_table_counts_as_failure() {
        let api = MockTranslationApi::new()
            .with_table("ko", json!("not a table"))
            .with_table("zh", zh_table());
        let mut store = store_with(api, InMemoryPreferenceStore::new());
        let mut doc = document();

        store.set_language("ko", &mut doc).await;
        assert_eq!(store.language(), Some(Language::Zh));
    }

    #[tokio::test]
    async fn persistence_failure_does_not_abort_load() {
        let api = Arc::new(MockTranslationApi::new().with_table("zh", zh_table()));
        let mut store = TranslationStore::new(api, Arc::new(FailingPreferenceStore));
        let mut doc = document();

        assert_eq!(store.set_language("zh", &mut doc).await, Some(LoadEvent::Ready));
    }

    #[test]
    fn initial_language_prefers_stored_code() {
        let store = store_with(MockTranslationApi::new(), InMemoryPreferenceStore::with_language("ja"));
        assert_eq!(store.initial_language(Some("en-US")), Language::Ja);
    }

    #[test]
    fn initial_language_ignores_bad_stored_code() {
        let store = store_with(MockTranslationApi::new(), InMemoryPreferenceStore::with_language("xx"));
        assert_eq!(store.initial_language(Some("vi_VN.UTF-8")), Language::Vi);
    }

    #[test]
    fn initial_language_detects_locale_then_defaults() {
        let store = store_with(MockTranslationApi::new(), InMemoryPreferenceStore::new());
        assert_eq!(store.initial_language(Some("fr-CA")), Language::Fr);
        assert_eq!(store.initial_language(Some("de-DE")), Language::Zh);
        assert_eq!(store.initial_language(None), Language::Zh);
    }

    #[test]
    fn unread_preferences_fall_through_to_locale() {
        let store = TranslationStore::new(
            Arc::new(MockTranslationApi::new()),
            Arc::new(FailingPreferenceStore),
        );
        assert_eq!(store.initial_language(Some("ko-KR")), Language::Ko);
    }

    #[tokio::test]
    async fn error_message_reads_error_codes() {
        let api = MockTranslationApi::new().with_table("zh", zh_table());
        let mut store = store_with(api, InMemoryPreferenceStore::new());
        let mut doc = BoundDocument::new();
        store.set_language("zh", &mut doc).await;

        assert_eq!(store.error_message("E01").as_deref(), Some("账号不存在"));
        assert_eq!(store.error_message("E404"), None);
    }
}
