// ============================================================================
// Agent Loop - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 配置加载与运行时参数合并
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::models::config::{Config, RuntimeArgs};
use crate::utils::colors::Colors;
use crate::utils::constants::APP_NAME;
use crate::utils::logger::init_tracing;
use init::{handle_init, InitArgs, InitOutcome};

/// Agent Loop - Long-Running Agent Loop Framework CLI
#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(about = "Long-Running Agent Loop Framework CLI")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Enable debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Template root directory (contains zh/ and en/). Defaults to $AGENT_LOOP_TEMPLATES,
    /// then templates/ next to the binary, then the templates bundled at build time
    #[arg(long, global = true)]
    pub templates: Option<String>,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize Agent Loop scaffold
    Init(InitArgs),
}

pub fn run_cli(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    config.merge_runtime_args(build_runtime_args(&cli));

    Colors::set_enabled(config.output.colored);
    init_tracing(config.output.verbose);

    match cli.command {
        Commands::Init(args) => match handle_init(args, config)? {
            InitOutcome::Installed { target_dir } => {
                tracing::debug!(dir = %target_dir.display(), "init finished");
            }
            InitOutcome::Cancelled => tracing::debug!("init cancelled by user"),
        },
    }

    Ok(())
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        templates_dir: cli.templates.clone(),
    }
}
