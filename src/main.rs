// ============================================================================
// Agent Loop - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 运行 CLI 并把错误映射为退出码
// 边界:
//   - ✅ 错误输出到 stderr
//   - ✅ 失败时以退出码 1 结束
//   - ❌ 不应包含命令实现逻辑
//
// ============================================================================

use agent_loop::cli::{run_cli, Cli};
use agent_loop::i18n::MessageCatalog;
use agent_loop::models::error::InitError;
use agent_loop::models::language::Language;
use agent_loop::utils::colors::Colors;
use agent_loop::utils::logger::Logger;
use agent_loop::{t, tf};
use clap::Parser;

fn main() {
    // 用法错误统一以退出码 1 结束，--help / --version 为 0
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        std::process::exit(code);
    });

    if let Err(err) = run_cli(cli) {
        report_error(&err);
        std::process::exit(1);
    }
}

fn report_error(err: &anyhow::Error) {
    let msg = MessageCatalog::new(Language::En);

    match err.downcast_ref::<InitError>() {
        Some(InitError::InvalidLanguage(value)) => {
            Logger::error(format!("\n{}", tf!(msg, "init.invalid_lang", value)));
            eprintln!("{}\n", Colors::muted(&t!(msg, "init.use_lang")));
        }
        _ => Logger::error(format!("{}: {}", t!(msg, "error.prefix"), describe(err))),
    }
}

/// 最外层上下文加根因；中间层错误的文本往往已包含根因，不再重复
fn describe(err: &anyhow::Error) -> String {
    let root = err.root_cause();
    if err.chain().count() > 1 {
        format!("{}: {}", err, root)
    } else {
        err.to_string()
    }
}
