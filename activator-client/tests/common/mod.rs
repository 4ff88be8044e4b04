//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::time::Duration;

use activator_client::{ClientConfig, HttpActivationClient};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_server {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文
pub struct TestContext {
    pub client: HttpActivationClient,
}

impl TestContext {
    /// 基于 `ACTIVATOR_TEST_SERVER` 创建客户端
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("ACTIVATOR_TEST_SERVER").ok()?;
        let config = ClientConfig::new(base_url).with_request_timeout(Duration::from_secs(180));
        let client = HttpActivationClient::new(config).ok()?;
        Some(Self { client })
    }
}
