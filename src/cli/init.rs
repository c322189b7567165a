// ============================================================================
// Agent Loop - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: init 命令参数与交互流程编排
// 边界:
//   - ✅ 初始化命令参数解析
//   - ✅ 目标目录解析
//   - ✅ 语言校验与交互式选择
//   - ✅ 安装前确认和结果提示
//   - ❌ 不应包含文件复制逻辑
//   - ❌ 不应包含翻译内容
//   - ❌ 不应包含终端控件实现
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Component, Path, PathBuf};

use crate::core::installer::install;
use crate::core::locale::{detect_default_language, system_locale};
use crate::i18n::MessageCatalog;
use crate::models::config::Config;
use crate::models::language::Language;
use crate::models::plan::{InstallOutcome, InstallPlan};
use crate::ui::prompt::{Prompter, TerminalPrompter};
use crate::ui::summary::{render_success, render_welcome};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 初始化命令参数
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Language: zh (Chinese) / en (English)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Target directory
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,
}

/// 运行环境（当前目录、区域设置、配置），便于测试注入
#[derive(Debug, Clone)]
pub struct InitEnv {
    pub cwd: PathBuf,
    pub locale: Option<String>,
    pub config: Config,
}

impl InitEnv {
    /// 从当前进程读取运行环境
    pub fn from_process(config: Config) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Ok(Self {
            cwd,
            locale: system_locale(),
            config,
        })
    }
}

/// 目录选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryChoice {
    Current,
    Custom,
}

/// 交互问答的最终结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub language: Language,
    pub directory: DirectoryChoice,
    pub custom_path: Option<String>,
    pub confirmed: bool,
}

/// init 命令的正常结束方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Installed { target_dir: PathBuf },
    Cancelled,
}

/// 处理初始化命令
pub fn handle_init(args: InitArgs, config: Config) -> Result<InitOutcome> {
    let env = InitEnv::from_process(config)?;
    let mut prompter = TerminalPrompter::new();
    run_init(&args, &env, &mut prompter)
}

/// 初始化流程
///
/// 传入 `--lang` 时不发出任何提示；否则依次询问语言、目录、（自定义路径）、确认。
pub fn run_init(args: &InitArgs, env: &InitEnv, prompter: &mut dyn Prompter) -> Result<InitOutcome> {
    let target_dir = resolve_target_dir(&args.dir, &env.cwd);
    tracing::debug!(dir = %target_dir.display(), lang = ?args.lang, "resolved init args");

    let language = match args.lang.as_deref() {
        Some(raw) => {
            let language = raw.parse::<Language>()?;
            render_welcome(&MessageCatalog::new(language));
            language
        }
        None => {
            let default = detect_default_language(env.locale.as_deref());
            render_welcome(&MessageCatalog::new(default));

            let answers = ask_questions(prompter, default)?;
            let msg = MessageCatalog::new(answers.language);

            if let Some(path) = &answers.custom_path {
                tracing::debug!(custom = %path, dir = %target_dir.display(), "custom directory not applied");
                Logger::warn(tf!(msg, "init.custom_dir_ignored", path, target_dir.display()));
            }

            if !answers.confirmed {
                Logger::warn(format!("\n{}\n", t!(msg, "init.cancelled")));
                return Ok(InitOutcome::Cancelled);
            }
            answers.language
        }
    };

    let templates_root = env.config.resolve_templates_root()?;
    let msg = MessageCatalog::new(language);
    let plan = InstallPlan::new(&target_dir, language, &templates_root);

    match install(&plan, &msg, prompter)? {
        InstallOutcome::Cancelled => Ok(InitOutcome::Cancelled),
        InstallOutcome::Installed => {
            render_success(&msg, &target_dir);
            Ok(InitOutcome::Installed { target_dir })
        }
    }
}

/// 依次执行提示步骤，结束后一次性生成结果
pub fn ask_questions(prompter: &mut dyn Prompter, default: Language) -> Result<Answers> {
    let language = ask_language(prompter, default)?;
    let msg = MessageCatalog::new(language);

    let directory = ask_directory(prompter, &msg)?;
    let custom_path = match directory {
        DirectoryChoice::Custom => Some(prompter.input(
            &t!(msg, "init.enter_path"),
            &t!(msg, "init.path_required"),
        )?),
        DirectoryChoice::Current => None,
    };

    let confirmed = prompter.confirm(&t!(msg, "init.confirm_install"), true)?;

    Ok(Answers {
        language,
        directory,
        custom_path,
        confirmed,
    })
}

fn ask_language(prompter: &mut dyn Prompter, default: Language) -> Result<Language> {
    let msg = MessageCatalog::new(default);
    let languages = Language::all();
    let items: Vec<String> = languages.iter().map(|l| l.native_name().to_string()).collect();
    let default_index = languages.iter().position(|l| *l == default).unwrap_or(0);

    let index = prompter.select(&t!(msg, "init.select_language"), &items, default_index)?;
    languages
        .get(index)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Language selection out of range: {}", index))
}

fn ask_directory(prompter: &mut dyn Prompter, msg: &MessageCatalog) -> Result<DirectoryChoice> {
    let items = vec![t!(msg, "init.current_dir"), t!(msg, "init.custom_dir")];
    let index = prompter.select(&t!(msg, "init.target_directory"), &items, 0)?;
    Ok(if index == 1 {
        DirectoryChoice::Custom
    } else {
        DirectoryChoice::Current
    })
}

/// 相对 `cwd` 解析目标目录，并按词法规整 `.` 与 `..`
pub fn resolve_target_dir(dir: &Path, cwd: &Path) -> PathBuf {
    let joined = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        cwd.join(dir)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}
