// ============================================================================
// Agent Loop - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 用户可见输出与诊断日志初始化
// 边界:
//   - ✅ 分级着色的控制台输出
//   - ✅ tracing 订阅器初始化
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志写入
//   - ❌ 不应包含日志内容生成
//
// ============================================================================

use tracing_subscriber::EnvFilter;

use super::colors::Colors;

/// 简单的输出工具
pub struct Logger;

impl Logger {
    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{}", Colors::info(msg.as_ref()));
    }

    pub fn detail<S: AsRef<str>>(msg: S) {
        println!("{}", Colors::muted(msg.as_ref()));
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        println!("{}", Colors::warn(msg.as_ref()));
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{}", Colors::error(msg.as_ref()));
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{}", Colors::success(msg.as_ref()));
    }
}

/// 初始化诊断日志，输出到 stderr
///
/// `RUST_LOG` 优先；否则 verbose 时为 debug，默认 warn。
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("agent_loop={}", default_level)));

    // 重复初始化（例如测试中）时忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
