//! 后台任务执行

use std::sync::Arc;

use activator_core::traits::{ActivationApi, TranslationApi};
use activator_core::TranslationStore;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, BackendMessage};
use crate::update::Command;

/// 在 tokio 运行时上执行 Command，结果通过通道送回主循环
pub struct TaskRunner {
    handle: Handle,
    tx: UnboundedSender<AppMessage>,
    activation: Arc<dyn ActivationApi>,
    translations: Arc<dyn TranslationApi>,
}

impl TaskRunner {
    pub fn new(
        handle: Handle,
        tx: UnboundedSender<AppMessage>,
        activation: Arc<dyn ActivationApi>,
        translations: Arc<dyn TranslationApi>,
    ) -> Self {
        Self {
            handle,
            tx,
            activation,
            translations,
        }
    }

    /// 执行命令（非阻塞）
    pub fn execute(&self, command: Command) {
        match command {
            Command::None => {}
            Command::LoadLanguage(code) => {
                let api = Arc::clone(&self.translations);
                self.spawn(async move {
                    let table = TranslationStore::fetch_with_fallback(api.as_ref(), &code).await;
                    BackendMessage::TranslationsLoaded(table)
                });
            }
            Command::Activate(request) => {
                let api = Arc::clone(&self.activation);
                self.spawn(async move {
                    BackendMessage::ActivationFinished(api.activate(&request).await)
                });
            }
            Command::FetchDialLog => {
                let api = Arc::clone(&self.activation);
                self.spawn(async move {
                    BackendMessage::DialLogFetched(api.fetch_dial_log().await)
                });
            }
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: std::future::Future<Output = BackendMessage> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let msg = task.await;
            // 接收端关闭说明界面已退出
            if tx.send(AppMessage::Backend(msg)).is_err() {
                log::debug!("UI closed, dropping backend result");
            }
        });
    }
}
