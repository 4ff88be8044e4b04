//! 命令行参数

use std::path::PathBuf;

use clap::Parser;

use crate::backend::AppConfig;

#[derive(Parser, Debug, Default)]
#[command(name = "pppoe-activator", about = "PPPoE 宽带激活终端", version)]
pub struct Cli {
    /// 配置文件路径（默认: <config_dir>/pppoe-activator/config.json）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 激活门户地址，如 http://192.168.1.1/
    #[arg(short, long)]
    pub server: Option<String>,

    /// 界面语言代码（zh, en, fr, es, ko, vi, ms, th, ur, hi, ja）
    #[arg(short, long)]
    pub lang: Option<String>,

    /// 请求超时（秒，至少 1）
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Cli {
    /// 用命令行参数覆盖配置文件
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(v) = &self.server {
            config.server_url = v.clone();
        }
        if let Some(v) = self.timeout {
            config.request_timeout_secs = v;
        }
    }
}
