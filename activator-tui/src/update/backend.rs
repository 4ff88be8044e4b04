//! 后台任务结果处理

use activator_core::i18n::LoadEvent;

use crate::message::BackendMessage;
use crate::model::App;

/// 处理后台任务结果
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::TranslationsLoaded(Some(table)) => {
            app.language_loading = false;
            app.load_failed = false;

            let event = app.store.commit(table, &mut app.document);
            app.form.refresh(app.store.table());

            if let Some(language) = app.store.language() {
                app.selected_language = language;
                match event {
                    LoadEvent::Ready => app.clear_status(),
                    LoadEvent::Reapplied => app.set_status(language.display_name()),
                }
            }
        }
        BackendMessage::TranslationsLoaded(None) => {
            app.language_loading = false;
            if let Some(language) = app.store.language() {
                app.selected_language = language;
            }
            if app.is_ready() {
                app.set_status("语言切换失败");
            } else {
                app.load_failed = true;
            }
        }
        BackendMessage::ActivationFinished(result) => {
            app.form.finish_submit(result, app.store.table());
        }
        BackendMessage::DialLogFetched(result) => {
            app.form.finish_log_fetch(result, app.store.table());
        }
    }
}
