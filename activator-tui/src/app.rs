//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，App 初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,              // 决定应用是否应该退出
//!     focus: FormField::Isp,                  // 当前焦点字段
//!     store: TranslationStore,                // 尚未加载任何翻译表，is_ready() == false
//!     form: FormController,                   // 未选运营商的空表单
//!     selected_language,                      // 命令行 > 配置文件 > 系统语言
//!     language_loading = true,                // main 已经发出首个 LoadLanguage
//!     modal = None,
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Ok(msg) = rx.try_recv() {             // 取出已完成的后台任务结果
//!         let cmd = update::update(&mut app , msg);
//!         runner.execute(cmd);
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         let cmd = update::update(&mut app , msg);       // 更新状态
//!         runner.execute(cmd);                            // 需要网络的命令交给后台
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::TaskRunner;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    runner: &TaskRunner,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台任务结果
        while let Ok(msg) = rx.try_recv() {
            let cmd = update::update(app, msg);
            runner.execute(cmd);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            let cmd = update::update(app, msg);
            runner.execute(cmd);
        }
    }

    Ok(())
}
